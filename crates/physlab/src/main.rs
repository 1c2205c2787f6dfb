//! Binary entry point.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use physlab::app::{App, run_solve};
use physlab::cli::{Cli, Commands};
use physlab::config::Config;
use physlab::runtime::Program;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Logs go to stderr so they never corrupt the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli(&cli);

    match cli.command {
        Some(Commands::Solve { formula, variables }) => solve_once(&config, &formula, &variables),
        None => {
            let fps = config.fps;
            Program::new(App::new(config))
                .with_alt_screen()
                .with_fps(fps)
                .run()
                .context("program failed")?;
            Ok(())
        }
    }
}

/// One-shot solve without the TUI: print the result to stdout, save the
/// visualization when an output directory is configured.
fn solve_once(config: &Config, formula: &str, variables: &str) -> anyhow::Result<()> {
    let variables = solver_client::parse_variables(variables);
    let outcome = run_solve(&config.solver_url, formula, &variables, config.out_dir.as_deref())
        .context("solve failed")?;

    println!("Physics Topic: {}", outcome.topic);
    println!("Solution: {}", outcome.solution);

    if let Some(vis) = outcome.visualization {
        match vis.saved_to {
            Some(path) => println!("Visualization saved to {}", path.display()),
            None => println!("Visualization available; pass --out-dir to save the PNG"),
        }
    }

    Ok(())
}
