//! Worker thread that performs network I/O on behalf of the UI.

pub mod commands;
pub mod runtime;
