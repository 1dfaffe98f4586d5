pub mod app;
pub mod backend;
pub mod completion;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod message;
