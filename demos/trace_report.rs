//! Trace Report
//!
//! Headless run of the prism scene: builds the scene from `config/`, traces
//! every ray of the spectrum and prints where each one crossed the prism and
//! how it ended. Then drags the prism a little and prints the retrace.
//!
//! Run with: `cargo run --example trace_report`

use refract::config::AppConfig;
use refract::scene::SceneBuilder;
use refract_core::{RecordingSurface, Termination, TracePath};

fn print_paths(paths: &[TracePath]) {
    for path in paths {
        println!("  n = {:.2}  ({} segment(s))", path.index, path.segments.len());
        for (i, hit) in path.hit_points().enumerate() {
            println!("    hit {}: {}", i + 1, hit);
        }
        match path.termination {
            Termination::Escaped { tail, direction } => {
                println!(
                    "    escaped along ({:.4}, {:.4}), leaves view at {}",
                    direction.x, direction.y, tail.to
                );
            }
            Termination::Absorbed { at } => println!("    absorbed at {}", at),
            Termination::BounceLimit { at } => println!("    bounce limit at {}", at),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut scene = match SceneBuilder::from_config(&config).build() {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Failed to build scene: {}", e);
            std::process::exit(1);
        }
    };

    let mut surface = RecordingSurface::new();

    println!("Prism at {}", scene.prism().center());
    let paths = scene.redraw(&mut surface);
    print_paths(&paths);
    println!(
        "  drew {} line(s), {} marker(s)",
        surface.lines().count(),
        surface.fills().count()
    );

    // Same motion a 40px rightward, 20px downward drag produces
    surface.take();
    let paths = scene.apply_delta(40.0, 20.0, &mut surface);
    println!("\nPrism dragged to {}", scene.prism().center());
    print_paths(&paths);

    surface.take();
    let paths = scene.recenter(&mut surface);
    println!("\nPrism recentered at {}", scene.prism().center());
    print_paths(&paths);
}
