#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

//! # physlab
//!
//! A terminal physics lab: submit formulas to a solver service, watch a
//! frame-stepped 2D ball simulation, and pull a single-body vector overlay.
//!
//! The crate is organized as:
//!
//! - [`runtime`] — a small Elm-architecture event loop (model, messages,
//!   commands, terminal program)
//! - [`app`] — the application model wiring the text fields, solver calls,
//!   and the simulation together
//! - [`sim`] — the frame chain driving the [`kinetica`] engine
//! - [`canvas`] — half-block rasterization of the scene
//! - [`cli`] / [`config`] — argument parsing and resolved settings

pub mod app;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod input;
pub mod messages;
pub mod runtime;
pub mod sim;
