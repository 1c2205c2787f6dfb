//! Ball entities and their per-frame update step.
//!
//! A [`Ball`] is a moving circle built from a plain [`BallParams`] record.
//! The update step is explicit Euler integration with wall reflection and
//! per-frame velocity damping; see [`Ball::step`] for the exact order of
//! operations.

use crate::engine::Bounds;
use crate::vec2::Vec2;

/// Named color for rendering a ball.
///
/// Parameter records name colors by their lowercase CSS-style name; anything
/// unrecognized falls back to [`Color::Blue`], the documented default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    /// Red.
    Red,
    /// Blue (default).
    #[default]
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
}

impl Color {
    /// Parse a color name, falling back to the default for unknown names.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "magenta" | "purple" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            _ => Self::Blue,
        }
    }
}

/// Plain parameter record a ball is constructed from.
///
/// Every field has the documented default, so a partial record (for example
/// a partial JSON object, with the `serde` feature) fills in the rest:
/// elasticity 0.9, friction 0.99, mass 1, radius 20, color blue, and zero
/// for all kinematic fields.
///
/// # Example
///
/// ```rust
/// use kinetica::BallParams;
///
/// let p = BallParams { x: 50.0, radius: 10.0, ..BallParams::default() };
/// assert_eq!(p.elasticity, 0.9);
/// assert_eq!(p.friction, 0.99);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BallParams {
    /// Initial x position.
    pub x: f64,
    /// Initial y position.
    pub y: f64,
    /// Initial x velocity.
    pub vx: f64,
    /// Initial y velocity.
    pub vy: f64,
    /// Constant x acceleration.
    pub ax: f64,
    /// Constant y acceleration.
    pub ay: f64,
    /// Velocity multiplier applied on each wall reflection.
    pub elasticity: f64,
    /// Per-frame velocity damping multiplier.
    pub friction: f64,
    /// Mass. Stored but unused by the integration (no force accumulation).
    pub mass: f64,
    /// Circle radius.
    pub radius: f64,
    /// Render color.
    pub color: Color,
}

impl Default for BallParams {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            ax: 0.0,
            ay: 0.0,
            elasticity: 0.9,
            friction: 0.99,
            mass: 1.0,
            radius: 20.0,
            color: Color::Blue,
        }
    }
}

/// A single simulated moving circle.
///
/// Constructed from a [`BallParams`] record and mutated in place every frame
/// by [`Ball::step`]. Malformed numeric parameters are not validated; they
/// propagate through the arithmetic (NaN in, NaN out).
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pos: Vec2,
    vel: Vec2,
    acc: Vec2,
    elasticity: f64,
    friction: f64,
    mass: f64,
    radius: f64,
    color: Color,
}

impl From<&BallParams> for Ball {
    fn from(p: &BallParams) -> Self {
        Self {
            pos: Vec2::new(p.x, p.y),
            vel: Vec2::new(p.vx, p.vy),
            acc: Vec2::new(p.ax, p.ay),
            elasticity: p.elasticity,
            friction: p.friction,
            mass: p.mass,
            radius: p.radius,
            color: p.color,
        }
    }
}

impl Ball {
    /// Advance the ball by one frame within the given bounds.
    ///
    /// Order of operations, matching the system this models exactly:
    ///
    /// 1. velocity += acceleration
    /// 2. position += velocity
    /// 3. horizontal wall reflection: if the circle extent crosses either
    ///    vertical boundary, `vx = -vx * elasticity`, then clamp `x` into
    ///    `[radius, width - radius]`
    /// 4. the symmetric rule for `y` / `vy` / height
    /// 5. friction: both velocity components are damped every frame,
    ///    collision or not
    pub fn step(&mut self, bounds: Bounds) {
        self.vel += self.acc;
        self.pos += self.vel;

        if self.pos.x + self.radius > bounds.width || self.pos.x - self.radius < 0.0 {
            self.vel.x = -self.vel.x * self.elasticity;
            self.pos.x = self.pos.x.min(bounds.width - self.radius).max(self.radius);
        }
        if self.pos.y + self.radius > bounds.height || self.pos.y - self.radius < 0.0 {
            self.vel.y = -self.vel.y * self.elasticity;
            self.pos.y = self.pos.y.min(bounds.height - self.radius).max(self.radius);
        }

        self.vel.x *= self.friction;
        self.vel.y *= self.friction;
    }

    /// Returns the current position.
    #[inline]
    pub const fn position(&self) -> Vec2 {
        self.pos
    }

    /// Returns the current velocity.
    #[inline]
    pub const fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// Returns the constant acceleration.
    #[inline]
    pub const fn acceleration(&self) -> Vec2 {
        self.acc
    }

    /// Returns the circle radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the render color.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the mass.
    #[inline]
    pub const fn mass(&self) -> f64 {
        self.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn wide_bounds() -> Bounds {
        Bounds::new(1000.0, 1000.0)
    }

    #[test]
    fn test_params_defaults() {
        let p = BallParams::default();
        assert!(approx_eq(p.elasticity, 0.9));
        assert!(approx_eq(p.friction, 0.99));
        assert!(approx_eq(p.mass, 1.0));
        assert!(approx_eq(p.radius, 20.0));
        assert_eq!(p.color, Color::Blue);
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.vy, 0.0));
    }

    #[test]
    fn test_free_step_advances_by_velocity() {
        // Friction 1, elasticity 1, zero acceleration, far from walls:
        // position advances by exactly the previous velocity and velocity
        // is unchanged.
        let mut ball = Ball::from(&BallParams {
            x: 500.0,
            y: 500.0,
            vx: 3.0,
            vy: -2.0,
            friction: 1.0,
            elasticity: 1.0,
            ..BallParams::default()
        });

        ball.step(wide_bounds());

        assert!(approx_eq(ball.position().x, 503.0));
        assert!(approx_eq(ball.position().y, 498.0));
        assert!(approx_eq(ball.velocity().x, 3.0));
        assert!(approx_eq(ball.velocity().y, -2.0));
    }

    #[test]
    fn test_acceleration_applies_before_position() {
        // v += a happens before x += v, so the very first step already
        // moves by the accelerated velocity.
        let mut ball = Ball::from(&BallParams {
            x: 500.0,
            y: 500.0,
            ay: 0.5,
            friction: 1.0,
            ..BallParams::default()
        });

        ball.step(wide_bounds());

        assert!(approx_eq(ball.position().y, 500.5));
        assert!(approx_eq(ball.velocity().y, 0.5));
    }

    #[test]
    fn test_right_wall_reflection_clamps_position() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut ball = Ball::from(&BallParams {
            x: 75.0,
            y: 50.0,
            vx: 10.0,
            radius: 20.0,
            elasticity: 0.9,
            friction: 1.0,
            ..BallParams::default()
        });

        // x becomes 85, extent 105 > 100: reflect and clamp.
        ball.step(bounds);

        assert!(approx_eq(ball.position().x, 80.0)); // width - radius
        assert!(approx_eq(ball.velocity().x, -9.0)); // -10 * 0.9
    }

    #[test]
    fn test_left_wall_reflection() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut ball = Ball::from(&BallParams {
            x: 25.0,
            y: 50.0,
            vx: -10.0,
            radius: 20.0,
            elasticity: 0.5,
            friction: 1.0,
            ..BallParams::default()
        });

        ball.step(bounds);

        assert!(approx_eq(ball.position().x, 20.0)); // clamped to radius
        assert!(approx_eq(ball.velocity().x, 5.0)); // -(-10) * 0.5
    }

    #[test]
    fn test_friction_applied_after_reflection() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut ball = Ball::from(&BallParams {
            x: 75.0,
            y: 50.0,
            vx: 10.0,
            radius: 20.0,
            elasticity: 0.9,
            friction: 0.5,
            ..BallParams::default()
        });

        ball.step(bounds);

        // Reflection first (-10 * 0.9 = -9), then friction (-9 * 0.5).
        assert!(approx_eq(ball.velocity().x, -4.5));
    }

    #[test]
    fn test_friction_damps_every_frame_without_collision() {
        let mut ball = Ball::from(&BallParams {
            x: 500.0,
            y: 500.0,
            vx: 4.0,
            vy: 3.0,
            friction: 0.99,
            ..BallParams::default()
        });

        let before = ball.velocity().magnitude();
        ball.step(wide_bounds());
        let after = ball.velocity().magnitude();

        assert!(after < before);
        assert!(approx_eq(after, before * 0.99));
    }

    #[test]
    fn test_reflection_clamps_only_overflowed_axis() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut ball = Ball::from(&BallParams {
            x: 75.0,
            y: 50.0,
            vx: 10.0,
            vy: 1.0,
            radius: 20.0,
            friction: 1.0,
            elasticity: 1.0,
            ..BallParams::default()
        });

        ball.step(bounds);

        // y just advances, no clamp on the vertical axis.
        assert!(approx_eq(ball.position().y, 51.0));
        assert!(approx_eq(ball.velocity().y, 1.0));
    }

    #[test]
    fn test_oversized_ball_clamps_deterministically() {
        // A ball wider than the surface violates both boundaries; the clamp
        // order (min with width - radius, then max with radius) pins it at
        // the radius, matching the original max(radius, min(...)) rule.
        let bounds = Bounds::new(30.0, 30.0);
        let mut ball = Ball::from(&BallParams {
            x: 15.0,
            y: 15.0,
            radius: 20.0,
            friction: 1.0,
            ..BallParams::default()
        });

        ball.step(bounds);

        assert!(approx_eq(ball.position().x, 20.0));
        assert!(approx_eq(ball.position().y, 20.0));
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("red"), Color::Red);
        assert_eq!(Color::parse(" Green "), Color::Green);
        assert_eq!(Color::parse("purple"), Color::Magenta);
        assert_eq!(Color::parse("chartreuse"), Color::Blue);
        assert_eq!(Color::parse(""), Color::Blue);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_params_partial_json_fills_defaults() {
        let p: BallParams = serde_json::from_str(r#"{"x": 100.0, "ay": 0.5}"#).unwrap();
        assert!(approx_eq(p.x, 100.0));
        assert!(approx_eq(p.ay, 0.5));
        assert!(approx_eq(p.elasticity, 0.9));
        assert!(approx_eq(p.friction, 0.99));
        assert!(approx_eq(p.radius, 20.0));
        assert_eq!(p.color, Color::Blue);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_params_json_color_name() {
        let p: BallParams = serde_json::from_str(r#"{"color": "red"}"#).unwrap();
        assert_eq!(p.color, Color::Red);
    }
}
