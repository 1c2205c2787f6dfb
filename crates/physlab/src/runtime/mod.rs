//! Minimal Elm-architecture runtime for the terminal front-end.
//!
//! A [`Model`] holds all state; [`Message`]s are the only way it changes;
//! [`Cmd`]s are the only way side effects run. The [`Program`] drives the
//! loop: poll input at the frame rate, apply messages, re-render when the
//! view changes.

mod command;
mod message;
mod program;

pub use command::{Cmd, quit, tick};
pub use message::{InterruptMsg, Key, KeyMsg, Message, QuitMsg, WindowSizeMsg};
pub use program::{Error, Model, Program, Result};
