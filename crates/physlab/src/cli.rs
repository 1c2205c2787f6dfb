//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Interactive physics lab: formula solving and a live ball simulation.
#[derive(Parser, Debug)]
#[command(name = "physlab")]
#[command(author, version, about)]
#[command(
    long_about = "A terminal physics lab. Type a formula and its variables to send \
them to the solver service, watch a frame-stepped ball simulation, and pull a \
single-body vector overlay from the solver."
)]
pub struct Cli {
    /// Base URL of the solver service
    #[arg(long, env = "PHYSLAB_SOLVER_URL", default_value = "http://localhost:5000")]
    pub solver_url: String,

    /// Target simulation frame rate (1-120)
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Directory to save visualization PNGs into
    #[arg(long, env = "PHYSLAB_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands; without one, the interactive lab starts.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve a formula once and print the result, without the TUI
    Solve {
        /// The formula to solve, e.g. "v = u + a*t"
        formula: String,

        /// Comma-separated variable assignments, e.g. "u=0, a=9.8, t=2"
        variables: String,
    },
}

impl Cli {
    /// Parse from the process arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter for the chosen verbosity.
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["physlab"]).unwrap();
        assert_eq!(cli.solver_url, "http://localhost:5000");
        assert_eq!(cli.fps, 30);
        assert!(!cli.no_color);
        assert!(cli.out_dir.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "physlab",
            "--solver-url",
            "http://10.0.0.2:5000",
            "--fps",
            "60",
            "--no-color",
            "--out-dir",
            "/tmp/plots",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.solver_url, "http://10.0.0.2:5000");
        assert_eq!(cli.fps, 60);
        assert!(cli.no_color);
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(cli.out_dir.as_deref(), Some(Path::new("/tmp/plots")));
    }

    #[test]
    fn test_cli_solve_subcommand() {
        let cli = Cli::try_parse_from(["physlab", "solve", "v = a * t", "a=9.8, t=2"]).unwrap();
        match cli.command {
            Some(Commands::Solve { formula, variables }) => {
                assert_eq!(formula, "v = a * t");
                assert_eq!(variables, "a=9.8, t=2");
            }
            _ => panic!("expected solve subcommand"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_fps() {
        assert!(Cli::try_parse_from(["physlab", "--fps", "lots"]).is_err());
    }

    #[test]
    fn test_log_level_saturates() {
        let cli = Cli::try_parse_from(["physlab", "-vvvv"]).unwrap();
        assert_eq!(cli.log_level(), "trace");
    }
}
