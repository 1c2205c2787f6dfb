//! Commands for side effects.
//!
//! Commands represent IO operations that produce messages. They are lazy:
//! nothing runs until the program executes them on a worker thread, so
//! update functions stay pure and return commands instead of doing IO.

use std::time::{Duration, Instant};

use crate::runtime::message::{Message, QuitMsg};

/// A command that produces a message when executed.
///
/// # Example
///
/// ```rust,ignore
/// use physlab::runtime::{Cmd, Message};
///
/// fn fetch() -> Cmd {
///     Cmd::new(|| Message::new(FetchDone(load_something())))
/// }
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may not produce a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Create an empty command that does nothing.
    pub fn none() -> Option<Self> {
        None
    }

    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

/// Command that signals the program to quit.
pub fn quit() -> Cmd {
    Cmd::new(|| Message::new(QuitMsg))
}

/// Command that ticks after a duration.
///
/// The tick runs for the full duration from when it's invoked. To create a
/// periodic callback chain, return another tick command from your update
/// function when handling the tick message; dropping that reschedule is how
/// a chain is cancelled.
pub fn tick<F>(duration: Duration, f: F) -> Cmd
where
    F: FnOnce(Instant) -> Message + Send + 'static,
{
    Cmd::new(move || {
        std::thread::sleep(duration);
        f(Instant::now())
    })
}
