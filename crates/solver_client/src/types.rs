//! Wire types for the solver endpoints.

use serde::{Deserialize, Serialize};

/// JSON body of `POST /process-formula`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormulaRequest {
    /// The formula text, as typed.
    pub formula: String,
    /// Ordered variable name tokens.
    pub variables: Vec<String>,
}

/// Raw JSON response of `POST /process-formula`.
///
/// The solver signals failure in-band via the `error` field; a response that
/// carries one is never treated as a success regardless of the other fields.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverResponse {
    /// Physics topic label.
    #[serde(default)]
    pub topic: String,
    /// Textual solution.
    #[serde(default)]
    pub solution: String,
    /// Optional base64-encoded PNG.
    #[serde(default)]
    pub visualization: Option<String>,
    /// Solver-reported error message.
    #[serde(default)]
    pub error: Option<String>,
}

/// A decoded solver visualization: the original base64 payload plus the
/// PNG bytes it encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visualization {
    base64: String,
    bytes: Vec<u8>,
}

impl Visualization {
    pub(crate) fn new(base64: String, bytes: Vec<u8>) -> Self {
        Self { base64, bytes }
    }

    /// The decoded PNG bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The image as a `data:image/png;base64,<...>` source string.
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.base64)
    }
}

/// Validated success value of a formula submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solved {
    /// Physics topic label.
    pub topic: String,
    /// Textual solution.
    pub solution: String,
    /// Decoded visualization, when the solver provided one.
    pub visualization: Option<Visualization>,
}
