//! Application-level messages produced by commands.

use std::path::PathBuf;

use kinetica::OverlayState;
use solver_client::SolverError;

/// One frame tick for the simulation chain.
///
/// Carries the generation the chain was started under; a tick from a
/// superseded chain is dropped without stepping or rescheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameMsg {
    /// Scene generation this tick belongs to.
    pub generation: u64,
}

/// Decoded visualization delivered with a solve result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualOutcome {
    /// The image as a `data:image/png;base64,...` URI.
    pub data_uri: String,
    /// Where the PNG bytes were written, if an output directory was set.
    pub saved_to: Option<PathBuf>,
}

/// Successful formula submission result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Physics topic the solver classified the formula under.
    pub topic: String,
    /// Rendered solution text.
    pub solution: String,
    /// Optional plot of the solution.
    pub visualization: Option<VisualOutcome>,
}

/// Outcome of a formula submission command.
#[derive(Debug)]
pub struct SolveCompleted(pub Result<SolveOutcome, SolverError>);

/// Outcome of an overlay-state fetch command.
#[derive(Debug)]
pub struct OverlayFetched(pub Result<OverlayState, SolverError>);
