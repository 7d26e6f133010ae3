//! Ray tracing through the prism
//!
//! The tracer follows one [`Light`] across the prism boundary as an explicit
//! loop. Each iteration finds the next boundary hit, records the segment up to
//! it and refracts; the loop stops when:
//!
//! - no edge is hit ahead of the ray ([`Termination::Escaped`]), and the ray
//!   is drawn on to the edge of the viewport
//! - an exiting ray is beyond the critical angle ([`Termination::Absorbed`])
//! - `max_bounces` hits have been recorded ([`Termination::BounceLimit`])

use serde::{Serialize, Deserialize};

use refract_math::{GeometryError, Line, Point, Vector2, Viewport};
use refract_math::{INTERIOR_EPSILON, PARALLEL_EPSILON};

use crate::{Color, Light, Prism, Refraction};

/// Hits whose x differ by less than this count as a tie
const TIE_EPSILON: f64 = 1e-9;

/// Numeric tolerances and limits for a trace
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Absolute tolerance of the area-sum interior test
    pub interior_epsilon: f64,
    /// Slopes closer than this are parallel
    pub parallel_epsilon: f64,
    /// Hits closer than this to the ray origin are ignored
    pub min_travel: f64,
    /// Band around the critical angle treated as a grazing exit
    pub critical_tolerance: f64,
    /// Maximum number of boundary hits per path
    pub max_bounces: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            interior_epsilon: INTERIOR_EPSILON,
            parallel_epsilon: PARALLEL_EPSILON,
            min_travel: 1e-6,
            critical_tolerance: 1e-12,
            max_bounces: 16,
        }
    }
}

/// A straight drawn piece of a path, in World basis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Length of the segment
    pub fn length(&self) -> Result<f64, GeometryError> {
        self.from.distance(self.to)
    }
}

/// A boundary crossing found ahead of a ray
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Where the ray meets the edge
    pub point: Point,
    /// Index into [`Prism::edges`]
    pub edge_index: usize,
    /// The edge that was hit
    pub edge: Line,
}

/// How a traced path ended
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Termination {
    /// No further hit; `tail` runs from the last origin to the viewport edge
    Escaped { tail: Segment, direction: Vector2 },
    /// Total internal reflection at `at`
    Absorbed { at: Point },
    /// The bounce cap was reached; nothing is drawn past `at`
    BounceLimit { at: Point },
}

/// Everything drawn for one light
#[derive(Clone, Debug, PartialEq)]
pub struct TracePath {
    pub index: f64,
    pub color: Color,
    /// Hit-bounded segments, in travel order
    pub segments: Vec<Segment>,
    pub termination: Termination,
}

impl TracePath {
    /// Boundary hit points in travel order
    pub fn hit_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().map(|s| s.to)
    }

    /// Every segment that gets drawn, including the escape tail
    pub fn drawn_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let tail = match self.termination {
            Termination::Escaped { tail, .. } => Some(tail),
            _ => None,
        };
        self.segments.iter().copied().chain(tail)
    }

    #[inline]
    pub fn is_escaped(&self) -> bool {
        matches!(self.termination, Termination::Escaped { .. })
    }

    #[inline]
    pub fn is_absorbed(&self) -> bool {
        matches!(self.termination, Termination::Absorbed { .. })
    }
}

/// Traces lights through a prism
#[derive(Clone, Copy, Debug, Default)]
pub struct Tracer {
    config: TraceConfig,
}

impl Tracer {
    pub fn new(config: TraceConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Next boundary hit ahead of `light`
    ///
    /// A candidate must lie more than `min_travel` ahead of the origin along
    /// the direction and pass the interior test. Among candidates the one
    /// with the smallest x wins; ties keep the earlier edge.
    pub fn next_hit(&self, light: &Light, prism: &Prism) -> Result<Option<Hit>, GeometryError> {
        let triangle = prism.triangle()?;
        let mut best: Option<Hit> = None;

        for (edge_index, edge) in prism.edges().into_iter().enumerate() {
            let Some(point) = light.ray().intersect(&edge, self.config.parallel_epsilon)? else {
                continue;
            };
            if light.ray().travel_to(point)? <= self.config.min_travel {
                continue;
            }
            if !triangle.contains(point, self.config.interior_epsilon)? {
                continue;
            }
            if best.map_or(true, |b| point.x < b.point.x - TIE_EPSILON) {
                best = Some(Hit { point, edge_index, edge });
            }
        }

        Ok(best)
    }

    /// Trace one light to termination
    pub fn trace(&self, light: &Light, prism: &Prism, viewport: &Viewport) -> Result<TracePath, GeometryError> {
        let mut current = *light;
        let mut segments = Vec::new();

        let termination = loop {
            let Some(hit) = self.next_hit(&current, prism)? else {
                let end = viewport.exit_point(current.origin(), current.direction())?;
                break Termination::Escaped {
                    tail: Segment::new(current.origin(), end),
                    direction: current.direction(),
                };
            };

            if segments.len() >= self.config.max_bounces {
                log::warn!(
                    "Ray n={} hit the bounce limit ({}) at {}",
                    light.index(),
                    self.config.max_bounces,
                    current.origin()
                );
                break Termination::BounceLimit { at: current.origin() };
            }

            segments.push(Segment::new(current.origin(), hit.point));

            match current.refract_at(hit.edge.direction, self.config.critical_tolerance) {
                Refraction::Transmitted(direction) => {
                    current = current.spawn(hit.point, direction);
                }
                Refraction::TotalInternalReflection => {
                    break Termination::Absorbed { at: hit.point };
                }
            }
        };

        log::debug!(
            "Traced n={}: {} segment(s), {:?}",
            light.index(),
            segments.len(),
            termination
        );

        Ok(TracePath {
            index: light.index(),
            color: light.color(),
            segments,
            termination,
        })
    }
}
