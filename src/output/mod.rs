//! Output rendering for profiles and match results

pub mod formatter;

pub use formatter::{ConsoleFormatter, JsonFormatter};
