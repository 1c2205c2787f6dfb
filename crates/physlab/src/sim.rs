//! The frame-driven simulation view.
//!
//! Owns the engine, the canvas it draws into, and the self-rescheduling
//! frame chain. Every scene replacement bumps a generation counter; a frame
//! tick stamped with an older generation is stale and is dropped without
//! stepping or rescheduling, which is how a superseded chain dies.

use std::time::Duration;

use kinetica::{Ball, BallParams, Color, Engine, OverlayState};
use tracing::trace;

use crate::canvas::Canvas;
use crate::messages::FrameMsg;
use crate::runtime::{Cmd, Message, tick};

/// Simulation state plus its rendering surface.
#[derive(Debug)]
pub struct SimView {
    canvas: Canvas,
    engine: Engine,
    params: Vec<BallParams>,
    overlay: Option<OverlayState>,
    generation: u64,
    frame_duration: Duration,
}

/// The scene loaded at startup and restored by reset: a small red ball and
/// a larger blue one, both under downward acceleration.
pub fn default_scene() -> Vec<BallParams> {
    vec![
        BallParams {
            x: 100.0,
            y: 100.0,
            ay: 0.5,
            radius: 20.0,
            color: Color::Red,
            ..BallParams::default()
        },
        BallParams {
            x: 200.0,
            y: 200.0,
            ay: 0.5,
            radius: 30.0,
            color: Color::Blue,
            ..BallParams::default()
        },
    ]
}

impl SimView {
    /// Create the view with the default scene on a canvas of the given size.
    pub fn new(cols: u16, rows: u16, frame_duration: Duration) -> Self {
        let canvas = Canvas::new(cols, rows);
        let params = default_scene();
        let engine = Engine::new(canvas.bounds(), &params);
        Self {
            canvas,
            engine,
            params,
            overlay: None,
            generation: 0,
            frame_duration,
        }
    }

    /// The generation the current frame chain runs under.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The balls currently simulated.
    pub fn balls(&self) -> &[Ball] {
        self.engine.balls()
    }

    /// The overlay state, if one was fetched.
    pub const fn overlay(&self) -> Option<&OverlayState> {
        self.overlay.as_ref()
    }

    /// Schedule the next frame tick for the current generation.
    pub fn schedule(&self) -> Cmd {
        let generation = self.generation;
        tick(self.frame_duration, move |_| {
            Message::new(FrameMsg { generation })
        })
    }

    /// Replace the whole entity set and start a fresh frame chain.
    ///
    /// Returns the first tick of the new chain; the old chain's pending tick
    /// arrives stamped with the superseded generation and is dropped.
    pub fn replace(&mut self, params: Vec<BallParams>) -> Cmd {
        self.generation += 1;
        self.engine = Engine::new(self.canvas.bounds(), &params);
        self.params = params;
        trace!(generation = self.generation, balls = self.params.len(), "scene replaced");
        self.schedule()
    }

    /// Restore the default scene and clear any overlay.
    pub fn reset(&mut self) -> Cmd {
        self.overlay = None;
        self.replace(default_scene())
    }

    /// Resize the drawing surface; the scene restarts from its parameter
    /// records inside the new bounds.
    pub fn resize(&mut self, cols: u16, rows: u16) -> Cmd {
        self.canvas = Canvas::new(cols, rows);
        let params = std::mem::take(&mut self.params);
        self.replace(params)
    }

    /// Install an overlay state to draw on top of the scene.
    pub fn set_overlay(&mut self, state: OverlayState) {
        self.overlay = Some(state);
    }

    /// Handle a frame tick: step and reschedule if it belongs to the live
    /// chain, drop it otherwise.
    pub fn on_frame(&mut self, msg: FrameMsg) -> Option<Cmd> {
        if msg.generation != self.generation {
            trace!(
                stale = msg.generation,
                live = self.generation,
                "dropping stale frame tick"
            );
            return None;
        }
        self.engine.step();
        Some(self.schedule())
    }

    /// Render the current frame.
    pub fn view(&self, color: bool) -> String {
        self.canvas.render(self.engine.balls(), self.overlay.as_ref(), color)
    }
}
