//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use refract::config::AppConfig;
use refract::scene::SceneBuilder;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("REFRACT_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("REFRACT_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_number() {
    std::env::set_var("REFRACT_PRISM__EDGE_LENGTH", "220.5");
    std::env::set_var("REFRACT_TRACE__MAX_BOUNCES", "4");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.prism.edge_length, 220.5);
    assert_eq!(config.trace.max_bounces, 4);
    std::env::remove_var("REFRACT_PRISM__EDGE_LENGTH");
    std::env::remove_var("REFRACT_TRACE__MAX_BOUNCES");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("REFRACT_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load_from(cwd.join("config")).unwrap();
    assert_eq!(config.light.spectrum.len(), 6);
    assert_eq!(config.light.spectrum[2].index, 1.55);
    assert_eq!(config.rendering.marker_size, 5.0);
}

#[test]
#[serial]
fn test_user_config_overrides_default() {
    let dir = std::env::temp_dir().join(format!("refract_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("default.toml"),
        "[window]\ntitle = \"Default\"\nwidth = 640\n",
    )
    .unwrap();
    std::fs::write(dir.join("user.toml"), "[window]\ntitle = \"User\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.window.title, "User");
    assert_eq!(config.window.width, 640);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.width, 500);
    assert_eq!(config.light.angle, std::f64::consts::FRAC_PI_8);
}

#[test]
#[serial]
fn test_invalid_value_is_an_error() {
    std::env::set_var("REFRACT_TRACE__MAX_BOUNCES", "many");
    let result = AppConfig::load_from("does/not/exist");
    std::env::remove_var("REFRACT_TRACE__MAX_BOUNCES");
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_shipped_config_builds_scene() {
    let config = AppConfig::load().unwrap();
    let scene = SceneBuilder::from_config(&config).build().unwrap();
    let paths = scene.trace_all();
    assert_eq!(paths.len(), 6);
    // The default origin reaches the prism
    assert!(paths.iter().all(|p| p.segments.len() == 2));
}
