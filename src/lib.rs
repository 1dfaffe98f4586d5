//! Solace is a terminal companion chat for talking to a remotely hosted,
//! therapist-style language model.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the conversation, the completion bridge that turns a
//!   prompt into an HTTP request and a displayable reply, configuration, and
//!   the navigation/screen state driven by the terminal UI.
//! - [`ui`] renders the terminal interface and runs the interactive event loop.
//! - [`api`] defines the request payloads sent to the proxy or hosted endpoint.
//! - [`cli`] parses arguments and dispatches to the chat loop or one-shot
//!   commands.
//! - [`logging`] installs the `tracing` subscriber; [`utils`] holds URL and
//!   browser helpers.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod logging;
pub mod ui;
pub mod utils;
