//! Terminal UI layer.
//!
//! - [`chat_loop`]: terminal lifecycle and the event loop that feeds key
//!   presses to [`crate::core::app::App`] and completion replies back in.
//! - [`renderer`] and [`screens`]: frame composition for the header, drawer
//!   and each screen.
//! - [`theme`] and [`wrap`]: colors and cell-accurate text wrapping.
//!
//! This layer only presents and captures interaction; state transitions live
//! in [`crate::core`].

pub mod chat_loop;
pub mod renderer;
pub mod screens;
pub mod theme;
pub mod wrap;
