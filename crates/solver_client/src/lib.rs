#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! # solver_client
//!
//! Blocking HTTP client for the remote physics formula solver.
//!
//! The solver is an opaque collaborator with two endpoints:
//!
//! - `POST /process-formula` — takes `{formula, variables}` and returns a
//!   topic label, a solution string, and an optional base64 PNG
//!   visualization (or an `error` field)
//! - `GET /solve` — returns a single body state
//!   `{x, y, radius, vx, vy, ax, ay}` for the vector-overlay view
//!
//! Every request is a single attempt: no retry, no partial results. Input
//! validation happens before any network traffic.
//!
//! ## Example
//!
//! ```rust,no_run
//! use solver_client::{ClientConfig, SolverClient, parse_variables};
//!
//! # fn main() -> Result<(), solver_client::SolverError> {
//! let client = SolverClient::new(ClientConfig::default())?;
//! let variables = parse_variables("v, a, t");
//! let solved = client.process_formula("v = a * t", &variables)?;
//! println!("{}: {}", solved.topic, solved.solution);
//! # Ok(())
//! # }
//! ```

mod client;
mod types;

pub use client::{ClientConfig, SolverClient, SolverError};
pub use types::{FormulaRequest, Solved, SolverResponse, Visualization};

/// Split a raw variable list on commas, trim whitespace, and drop empty
/// tokens.
///
/// # Example
///
/// ```rust
/// use solver_client::parse_variables;
///
/// assert_eq!(parse_variables(" v, a ,t "), vec!["v", "a", "t"]);
/// assert!(parse_variables(" , ,").is_empty());
/// ```
pub fn parse_variables(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
