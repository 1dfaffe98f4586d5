//! Shared constants used across the application

/// Model the default deployment serves, as shown on the about screen.
pub const MODEL_NAME: &str = "Qwen2.5-Coder-32B-Instruct-Serverless";

/// Public page for the hosted model.
pub const MODEL_URL: &str = "https://huggingface.co/spaces/Nymbo/Qwen2.5-Coder-32B-Instruct-Serverless";

/// Terminal width (columns) at which the navigation drawer stays pinned open.
pub const LARGE_SCREEN_COLUMNS: u16 = 100;

/// Interval between animation ticks in the chat loop.
pub const TICK_MILLIS: u64 = 100;

/// Package version plus the `git describe` of the build, e.g. `0.3.0 (v0.3.0-4-gabc1234)`.
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ")"
);
