//! Application configuration derived from the CLI.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Resolved runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the solver service.
    pub solver_url: String,
    /// Target simulation frame rate, clamped to 1-120.
    pub fps: u32,
    /// Whether output is colored.
    pub color: bool,
    /// Directory visualization PNGs are saved into.
    pub out_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solver_url: "http://localhost:5000".to_string(),
            fps: 30,
            color: true,
            out_dir: None,
        }
    }
}

impl Config {
    /// Build from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            solver_url: cli.solver_url.clone(),
            fps: cli.fps.clamp(1, 120),
            color: !cli.no_color,
            out_dir: cli.out_dir.clone(),
        }
    }

    /// Duration of one frame at the configured rate.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.solver_url, "http://localhost:5000");
        assert_eq!(config.fps, 30);
        assert!(config.color);
    }

    #[test]
    fn test_from_cli_clamps_fps() {
        let cli = Cli::try_parse_from(["physlab", "--fps", "500"]).unwrap();
        let config = Config::from_cli(&cli);
        assert_eq!(config.fps, 120);

        let cli = Cli::try_parse_from(["physlab", "--fps", "0"]).unwrap();
        let config = Config::from_cli(&cli);
        assert_eq!(config.fps, 1);
    }

    #[test]
    fn test_from_cli_no_color() {
        let cli = Cli::try_parse_from(["physlab", "--no-color"]).unwrap();
        assert!(!Config::from_cli(&cli).color);
    }

    #[test]
    fn test_frame_duration() {
        let config = Config { fps: 30, ..Config::default() };
        let d = config.frame_duration();
        assert!(d > Duration::from_millis(32) && d < Duration::from_millis(35));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config {
            solver_url: "http://10.1.1.1:5000".to_string(),
            fps: 60,
            color: false,
            out_dir: Some(PathBuf::from("/tmp/plots")),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.solver_url, config.solver_url);
        assert_eq!(back.fps, 60);
        assert!(!back.color);
    }
}
