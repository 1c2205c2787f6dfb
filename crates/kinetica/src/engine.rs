//! The simulation engine: a bounded surface and an ordered set of balls.

use crate::ball::{Ball, BallParams};

/// Extent of the drawing surface the simulation runs inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
}

impl Bounds {
    /// Creates bounds with the given width and height.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Owns the drawing surface extent and the ordered ball set, and advances
/// them one frame per [`Engine::step`] call.
///
/// Re-initialization is wholesale: constructing a new engine from a fresh
/// parameter list replaces every entity. There is no in-place update of
/// individual balls from outside the loop.
///
/// # Example
///
/// ```rust
/// use kinetica::{BallParams, Bounds, Engine};
///
/// let params = [BallParams::default()];
/// let mut engine = Engine::new(Bounds::new(640.0, 480.0), &params);
/// engine.step();
/// assert_eq!(engine.balls().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    bounds: Bounds,
    balls: Vec<Ball>,
}

impl Engine {
    /// Build an engine with one ball per parameter record, in order.
    pub fn new(bounds: Bounds, params: &[BallParams]) -> Self {
        Self {
            bounds,
            balls: params.iter().map(Ball::from).collect(),
        }
    }

    /// Advance every ball by one frame.
    pub fn step(&mut self) {
        for ball in &mut self.balls {
            ball.step(self.bounds);
        }
    }

    /// The surface extent this engine was constructed with.
    #[inline]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The balls, in construction order.
    #[inline]
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }
}
