//! Program lifecycle and event loop.
//!
//! [`Program`] owns terminal setup, event polling, command execution, and
//! frame-rate limited rendering for a [`Model`].

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use tracing::trace;

use crate::runtime::command::Cmd;
use crate::runtime::message::{InterruptMsg, Key, KeyMsg, Message, QuitMsg, WindowSizeMsg};

/// Errors that can occur when running a program.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    #[error("failed to {action} raw mode: {source}")]
    RawModeFailure {
        /// Whether we were trying to enable or disable raw mode.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to poll for terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(io::Error),

    /// Failed to render the view to the terminal.
    #[error("failed to render view: {0}")]
    Render(io::Error),
}

/// A specialized [`Result`] type for program operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The Model trait for the application.
///
/// # Example
///
/// ```rust
/// use physlab::runtime::{Cmd, Message, Model};
///
/// struct Counter { count: i32 }
///
/// impl Model for Counter {
///     fn init(&self) -> Option<Cmd> { None }
///
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if let Some(n) = msg.downcast::<i32>() {
///             self.count += n;
///         }
///         None
///     }
///
///     fn view(&self) -> String {
///         format!("Count: {}", self.count)
///     }
/// }
/// ```
pub trait Model: Send + 'static {
    /// Initialize the model and return an optional startup command.
    fn init(&self) -> Option<Cmd>;

    /// Process a message and return a new command.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the model as a string for display.
    fn view(&self) -> String;
}

/// Program options.
#[derive(Debug, Clone)]
struct ProgramOptions {
    /// Use alternate screen buffer.
    alt_screen: bool,
    /// Target frames per second for event polling and rendering.
    fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: false,
            fps: 30,
        }
    }
}

/// The main program runner.
///
/// # Example
///
/// ```rust,ignore
/// let final_model = Program::new(App::new(config))
///     .with_alt_screen()
///     .with_fps(30)
///     .run()?;
/// ```
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
}

impl<M: Model> Program<M> {
    /// Create a new program with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ProgramOptions::default(),
        }
    }

    /// Use alternate screen buffer (full-screen mode).
    pub fn with_alt_screen(mut self) -> Self {
        self.options.alt_screen = true;
        self
    }

    /// Set the target frames per second. Valid range is 1-120.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = fps.clamp(1, 120);
        self
    }

    /// Run the program and return the final model state.
    pub fn run(self) -> Result<M> {
        let options = self.options.clone();
        let mut writer = io::stdout();

        enable_raw_mode().map_err(|source| Error::RawModeFailure {
            action: "enable",
            source,
        })?;

        if options.alt_screen {
            execute!(writer, EnterAlternateScreen)?;
        }
        execute!(writer, Hide)?;

        let result = self.event_loop(&mut writer);

        let _ = execute!(writer, Show);
        if options.alt_screen {
            let _ = execute!(writer, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();

        result
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<M> {
        let (tx, rx): (Sender<Message>, Receiver<Message>) = mpsc::channel();

        // Seed the model with the current window size before init runs.
        if let Ok((width, height)) = terminal::size() {
            let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
        }

        if let Some(cmd) = self.model.init() {
            Self::handle_command(cmd, tx.clone());
        }

        let mut last_view = String::new();
        self.render(writer, &mut last_view)?;

        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(self.options.fps));

        loop {
            // Poll for events with frame-rate limiting.
            if event::poll(frame_duration).map_err(Error::EventPoll)? {
                match event::read().map_err(Error::EventPoll)? {
                    Event::Key(key_event) => {
                        // Key press only, not release or repeat-release.
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }

                        match decode_key(key_event.code, key_event.modifiers) {
                            DecodedKey::Interrupt => {
                                let _ = tx.send(Message::new(InterruptMsg));
                            }
                            DecodedKey::Key(key) => {
                                let _ = tx.send(Message::new(KeyMsg { key }));
                            }
                            DecodedKey::Ignored => {}
                        }
                    }
                    Event::Resize(width, height) => {
                        let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
                    }
                    _ => {}
                }
            }

            // Process all pending messages.
            let mut needs_render = false;
            while let Ok(msg) = rx.try_recv() {
                if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
                    return Ok(self.model);
                }

                if let Some(cmd) = self.model.update(msg) {
                    Self::handle_command(cmd, tx.clone());
                }
                needs_render = true;
            }

            if needs_render {
                self.render(writer, &mut last_view)?;
            }
        }
    }

    fn handle_command(cmd: Cmd, tx: Sender<Message>) {
        thread::spawn(move || {
            if let Some(msg) = cmd.execute() {
                trace!("command produced a message");
                let _ = tx.send(msg);
            }
        });
    }

    fn render<W: Write>(&self, writer: &mut W, last_view: &mut String) -> Result<()> {
        let view = self.model.view();

        // Skip if the view hasn't changed.
        if view == *last_view {
            return Ok(());
        }

        execute!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(Error::Render)?;
        write!(writer, "{view}").map_err(Error::Render)?;
        writer.flush().map_err(Error::Render)?;

        *last_view = view;
        Ok(())
    }
}

enum DecodedKey {
    Key(Key),
    Interrupt,
    Ignored,
}

fn decode_key(code: KeyCode, modifiers: KeyModifiers) -> DecodedKey {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => DecodedKey::Interrupt,
            KeyCode::Char('o') => DecodedKey::Key(Key::CtrlO),
            KeyCode::Char('r') => DecodedKey::Key(Key::CtrlR),
            _ => DecodedKey::Ignored,
        };
    }

    match code {
        KeyCode::Char(c) => DecodedKey::Key(Key::Char(c)),
        KeyCode::Enter => DecodedKey::Key(Key::Enter),
        KeyCode::Tab => DecodedKey::Key(Key::Tab),
        KeyCode::Backspace => DecodedKey::Key(Key::Backspace),
        KeyCode::Esc => DecodedKey::Key(Key::Esc),
        KeyCode::Left => DecodedKey::Key(Key::Left),
        KeyCode::Right => DecodedKey::Key(Key::Right),
        _ => DecodedKey::Ignored,
    }
}
