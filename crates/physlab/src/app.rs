//! The interactive application model.
//!
//! Two text fields feed the solver, a frame-driven ball scene runs
//! underneath, and Ctrl+O swaps the scene for the solver's single-body
//! vector overlay. All state lives here; side effects run as commands.

use std::fs;
use std::path::{Path, PathBuf};

use crossterm::style::Stylize;
use kinetica::BallParams;
use solver_client::{ClientConfig, SolverClient, SolverError, parse_variables};
use tracing::warn;

use crate::config::Config;
use crate::input::TextField;
use crate::messages::{FrameMsg, OverlayFetched, SolveCompleted, SolveOutcome, VisualOutcome};
use crate::runtime::{Cmd, Key, KeyMsg, Message, Model, WindowSizeMsg, quit};
use crate::sim::SimView;

/// Fixed lines of UI around the simulation canvas.
const CHROME_ROWS: u16 = 11;

/// Which text field receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Formula,
    Variables,
}

/// Top-level application state.
pub struct App {
    config: Config,
    focus: Focus,
    formula: TextField,
    variables: TextField,
    topic: Option<String>,
    solution: Option<String>,
    visualization: Option<VisualOutcome>,
    alert: Option<String>,
    busy: bool,
    sim: SimView,
}

impl App {
    /// Create the app with an 80x24 surface until the first size message.
    pub fn new(config: Config) -> Self {
        let frame_duration = config.frame_duration();
        Self {
            config,
            focus: Focus::Formula,
            formula: TextField::new("Formula", "e.g. v = u + a*t"),
            variables: TextField::new("Variables", "e.g. u=0, a=9.8, t=2"),
            topic: None,
            solution: None,
            visualization: None,
            alert: None,
            busy: false,
            sim: SimView::new(80, 24 - CHROME_ROWS, frame_duration),
        }
    }

    fn on_key(&mut self, key: Key) -> Option<Cmd> {
        match key {
            Key::Esc => Some(quit()),
            Key::Tab => {
                self.focus = match self.focus {
                    Focus::Formula => Focus::Variables,
                    Focus::Variables => Focus::Formula,
                };
                None
            }
            Key::Enter => self.submit(),
            Key::CtrlO => self.fetch_overlay(),
            Key::CtrlR => {
                self.alert = None;
                Some(self.sim.reset())
            }
            other => {
                let field = match self.focus {
                    Focus::Formula => &mut self.formula,
                    Focus::Variables => &mut self.variables,
                };
                field.handle_key(other);
                None
            }
        }
    }

    /// Submit the formula. Validation failures set the alert and produce no
    /// command, so nothing touches the network.
    fn submit(&mut self) -> Option<Cmd> {
        if self.busy {
            return None;
        }

        let formula = self.formula.value();
        let variables = parse_variables(&self.variables.value());

        if let Err(e) = SolverClient::validate(&formula, &variables) {
            self.alert = Some(e.to_string());
            return None;
        }

        self.alert = None;
        self.busy = true;

        let solver_url = self.config.solver_url.clone();
        let out_dir = self.config.out_dir.clone();
        Some(Cmd::new(move || {
            let result = run_solve(&solver_url, &formula, &variables, out_dir.as_deref());
            Message::new(SolveCompleted(result))
        }))
    }

    fn fetch_overlay(&mut self) -> Option<Cmd> {
        if self.busy {
            return None;
        }
        self.busy = true;

        let solver_url = self.config.solver_url.clone();
        Some(Cmd::new(move || {
            let result = client_for(&solver_url).and_then(|c| c.fetch_overlay());
            Message::new(OverlayFetched(result))
        }))
    }

    fn on_solve_completed(&mut self, result: Result<SolveOutcome, SolverError>) {
        self.busy = false;
        match result {
            Ok(outcome) => {
                self.topic = Some(outcome.topic);
                self.solution = Some(outcome.solution);
                self.visualization = outcome.visualization;
                self.alert = None;
            }
            Err(e) => {
                self.alert = Some(format!("Error processing formula: {e}"));
            }
        }
    }

    /// The overlay record doubles as the whole new scene: the single body
    /// replaces every ball, wrapped as a one-element parameter list.
    fn on_overlay_fetched(&mut self, result: Result<kinetica::OverlayState, SolverError>) -> Option<Cmd> {
        self.busy = false;
        match result {
            Ok(state) => {
                self.sim.set_overlay(state);
                Some(self.sim.replace(vec![BallParams::from(state)]))
            }
            Err(e) => {
                self.alert = Some(format!("Error fetching overlay: {e}"));
                None
            }
        }
    }

    fn on_resize(&mut self, size: WindowSizeMsg) -> Option<Cmd> {
        let rows = size.height.saturating_sub(CHROME_ROWS).max(4);
        Some(self.sim.resize(size.width.max(20), rows))
    }

    fn status_line(&self) -> String {
        if let Some(alert) = &self.alert {
            if self.config.color {
                return alert.as_str().red().to_string();
            }
            return alert.clone();
        }
        if self.busy {
            return "Working...".to_string();
        }
        String::new()
    }

    fn results_region(&self) -> String {
        let topic = self
            .topic
            .as_ref()
            .map_or_else(String::new, |t| format!("Physics Topic: {t}"));
        let solution = self
            .solution
            .as_ref()
            .map_or_else(String::new, |s| format!("Solution: {s}"));
        let visualization = self.visualization.as_ref().map_or_else(String::new, |v| {
            match &v.saved_to {
                Some(path) => {
                    format!("Visualization: {} (saved to {})", truncate(&v.data_uri, 40), path.display())
                }
                None => format!("Visualization: {}", truncate(&v.data_uri, 60)),
            }
        });
        format!("{topic}\n{solution}\n{visualization}")
    }
}

impl Model for App {
    fn init(&self) -> Option<Cmd> {
        Some(self.sim.schedule())
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            return self.on_resize(*size);
        }
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.on_key(key.key);
        }
        if let Some(frame) = msg.downcast_ref::<FrameMsg>() {
            return self.sim.on_frame(*frame);
        }
        if msg.is::<SolveCompleted>() {
            if let Some(SolveCompleted(result)) = msg.downcast() {
                self.on_solve_completed(result);
            }
            return None;
        }
        if msg.is::<OverlayFetched>() {
            if let Some(OverlayFetched(result)) = msg.downcast() {
                return self.on_overlay_fetched(result);
            }
        }
        None
    }

    fn view(&self) -> String {
        let title = if self.config.color {
            "Physics Lab".bold().cyan().to_string()
        } else {
            "Physics Lab".to_string()
        };
        let footer =
            "tab: switch field  enter: solve  ctrl+o: overlay  ctrl+r: reset  esc: quit";

        format!(
            "{title}\n\n{formula}\n{variables}\n\n{status}\n{results}\n\n{canvas}{footer}",
            formula = self.formula.view(self.focus == Focus::Formula),
            variables = self.variables.view(self.focus == Focus::Variables),
            status = self.status_line(),
            results = self.results_region(),
            canvas = self.sim.view(self.config.color),
        )
    }
}

fn client_for(base_url: &str) -> Result<SolverClient, SolverError> {
    SolverClient::new(ClientConfig {
        base_url: base_url.to_string(),
        ..ClientConfig::default()
    })
}

/// Run one solve round trip and post-process the visualization.
pub fn run_solve(
    base_url: &str,
    formula: &str,
    variables: &[String],
    out_dir: Option<&Path>,
) -> Result<SolveOutcome, SolverError> {
    let client = client_for(base_url)?;
    let solved = client.process_formula(formula, variables)?;

    let visualization = solved.visualization.map(|vis| {
        let saved_to = out_dir.and_then(|dir| save_png(dir, vis.bytes()));
        VisualOutcome {
            data_uri: vis.data_uri(),
            saved_to,
        }
    });

    Ok(SolveOutcome {
        topic: solved.topic,
        solution: solved.solution,
        visualization,
    })
}

/// Write the plot bytes to `<dir>/visualization.png`. Failure to save is
/// logged but does not fail the solve.
fn save_png(dir: &Path, bytes: &[u8]) -> Option<PathBuf> {
    let path = dir.join("visualization.png");
    if let Err(e) = fs::create_dir_all(dir).and_then(|()| fs::write(&path, bytes)) {
        warn!(path = %path.display(), error = %e, "could not save visualization");
        return None;
    }
    Some(path)
}

/// Cut to at most `max` characters, on a character boundary.
fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
