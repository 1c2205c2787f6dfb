#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]

//! # Kinetica
//!
//! Frame-stepped 2D kinematics for animated scenes.
//!
//! Kinetica provides:
//! - **Ball**: a moving circle with position, velocity, acceleration, and
//!   material coefficients (elasticity, friction)
//! - **Engine**: an ordered set of balls advanced one frame at a time inside
//!   a bounded drawing surface with wall reflection
//! - **Overlay**: a single-body state that exposes velocity and acceleration
//!   vectors as drawable line segments
//!
//! The integration is explicit Euler with an implicit per-frame timestep:
//! each call to [`Engine::step`] advances the scene by exactly one frame, so
//! the effective timestep is whatever cadence the caller drives the loop at.
//! This is a deliberate, documented limitation inherited from the system
//! this models; there is no delta-time normalization.
//!
//! ## Example
//!
//! ```rust
//! use kinetica::{BallParams, Bounds, Engine};
//!
//! let params = vec![
//!     BallParams { x: 100.0, y: 100.0, ay: 0.5, ..BallParams::default() },
//! ];
//! let mut engine = Engine::new(Bounds::new(800.0, 600.0), &params);
//!
//! for _ in 0..60 {
//!     engine.step();
//! }
//!
//! assert!(engine.balls()[0].position().y > 100.0);
//! ```

mod ball;
mod engine;
mod overlay;
mod vec2;

pub use ball::{Ball, BallParams, Color};
pub use engine::{Bounds, Engine};
pub use overlay::{OverlayState, Segment};
pub use vec2::Vec2;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ball::{Ball, BallParams, Color};
    pub use crate::engine::{Bounds, Engine};
    pub use crate::overlay::{OverlayState, Segment};
    pub use crate::vec2::Vec2;
}
