//! The blocking solver client and its error taxonomy.

use std::time::Duration;

use kinetica::OverlayState;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::types::{FormulaRequest, Solved, SolverResponse, Visualization};

/// Error processing a formula or fetching overlay state.
///
/// Every variant is terminal for that single attempt; the client never
/// retries on its own.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The formula input was empty after trimming.
    #[error("please enter both a formula and variables")]
    EmptyFormula,
    /// The variable list was empty after splitting and trimming.
    #[error("please enter both a formula and variables")]
    NoVariables,
    /// The solver reported an error in its response body.
    #[error("{0}")]
    Server(String),
    /// The HTTP request failed (network unreachable, timeout, bad status).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl SolverError {
    /// Whether this error was raised before any network traffic.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyFormula | Self::NoVariables)
    }
}

/// Configuration for the solver client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the solver service.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Blocking client for the solver endpoints.
pub struct SolverClient {
    client: Client,
    base_url: String,
}

impl SolverClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, SolverError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Validate submission input the way the front-end does: both fields
    /// must be non-empty before any request goes out.
    pub fn validate(formula: &str, variables: &[String]) -> Result<(), SolverError> {
        if formula.trim().is_empty() {
            return Err(SolverError::EmptyFormula);
        }
        if variables.is_empty() {
            return Err(SolverError::NoVariables);
        }
        Ok(())
    }

    /// Submit a formula and variable list to `POST /process-formula`.
    ///
    /// Fails fast on empty input without touching the network. A response
    /// carrying an `error` field becomes [`SolverError::Server`]; otherwise
    /// the topic and solution are returned and the optional visualization is
    /// base64-decoded.
    pub fn process_formula(
        &self,
        formula: &str,
        variables: &[String],
    ) -> Result<Solved, SolverError> {
        Self::validate(formula, variables)?;

        let url = format!("{}/process-formula", self.base_url);
        let body = FormulaRequest {
            formula: formula.trim().to_string(),
            variables: variables.to_vec(),
        };

        debug!(url = %url, formula = %body.formula, "submitting formula");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()?;

        let parsed: SolverResponse = response.json()?;

        if let Some(message) = parsed.error {
            warn!(error = %message, "solver reported an error");
            return Err(SolverError::Server(message));
        }

        let visualization = parsed
            .visualization
            .map(|b64| {
                let cleaned: String = b64.chars().filter(|c| !c.is_whitespace()).collect();
                base64_decode(&cleaned)
                    .map(|bytes| Visualization::new(cleaned, bytes))
                    .map_err(|e| SolverError::Decode(format!("base64 decode failed: {e}")))
            })
            .transpose()?;

        Ok(Solved {
            topic: parsed.topic,
            solution: parsed.solution,
            visualization,
        })
    }

    /// Fetch the single-body overlay state from `GET /solve`.
    ///
    /// One shot: the state does not update afterwards unless re-fetched.
    pub fn fetch_overlay(&self) -> Result<OverlayState, SolverError> {
        let url = format!("{}/solve", self.base_url);
        debug!(url = %url, "fetching overlay state");

        let response = self.client.get(&url).send()?;
        let state: OverlayState = response.json()?;
        Ok(state)
    }
}

/// Minimal base64 decoder for the solver's PNG payloads.
fn base64_decode(input: &str) -> Result<Vec<u8>, String> {
    const DECODE_TABLE: [i8; 128] = [
        -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
        -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 62, -1, -1,
        -1, 63, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, -1, -1, -1, -1, -1, -1, -1, 0, 1, 2, 3, 4,
        5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, -1, -1, -1,
        -1, -1, -1, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45,
        46, 47, 48, 49, 50, 51, -1, -1, -1, -1, -1,
    ];

    let mut output = Vec::with_capacity(input.len() * 3 / 4);
    let mut buffer = 0u32;
    let mut bits = 0;

    for c in input.chars() {
        if c == '=' {
            break;
        }

        let byte = c as usize;
        if byte >= 128 {
            return Err(format!("invalid character: {c}"));
        }

        let value = DECODE_TABLE[byte];
        if value < 0 {
            return Err(format!("invalid character: {c}"));
        }

        buffer = (buffer << 6) | (value as u32);
        bits += 6;

        if bits >= 8 {
            bits -= 8;
            output.push(((buffer >> bits) & 0xFF) as u8);
        }
    }

    Ok(output)
}
