//! Vector-overlay visualization state.
//!
//! A simpler alternate rendering path: a single body drawn as a filled
//! circle plus its velocity and acceleration vectors as line segments from
//! the circle's origin, each scaled by a fixed factor of 10. The state is
//! fetched once and does not update between frames unless replaced.

use crate::vec2::Vec2;

/// Scale factor applied to both overlay vectors when producing segments.
pub const VECTOR_SCALE: f64 = 10.0;

/// A drawable line segment from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Segment start.
    pub from: Vec2,
    /// Segment end.
    pub to: Vec2,
}

/// Static single-body state for the vector-overlay view.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct OverlayState {
    /// Circle center x.
    pub x: f64,
    /// Circle center y.
    pub y: f64,
    /// Circle radius.
    pub radius: f64,
    /// Velocity x component.
    pub vx: f64,
    /// Velocity y component.
    pub vy: f64,
    /// Acceleration x component.
    pub ax: f64,
    /// Acceleration y component.
    pub ay: f64,
}

impl OverlayState {
    /// The circle's center.
    #[inline]
    pub const fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// The velocity vector as a segment from the center, scaled x10.
    pub fn velocity_segment(&self) -> Segment {
        Segment {
            from: self.center(),
            to: self.center() + Vec2::new(self.vx, self.vy) * VECTOR_SCALE,
        }
    }

    /// The acceleration vector as a segment from the center, scaled x10.
    pub fn acceleration_segment(&self) -> Segment {
        Segment {
            from: self.center(),
            to: self.center() + Vec2::new(self.ax, self.ay) * VECTOR_SCALE,
        }
    }
}

impl From<OverlayState> for crate::BallParams {
    /// Treat a single overlay record as a full ball parameter record, with
    /// the documented defaults for every material field it does not carry.
    fn from(s: OverlayState) -> Self {
        Self {
            x: s.x,
            y: s.y,
            vx: s.vx,
            vy: s.vy,
            ax: s.ax,
            ay: s.ay,
            radius: s.radius,
            ..Self::default()
        }
    }
}
