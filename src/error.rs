//! Error types for the sheetcalc command line

use thiserror::Error;

/// Errors that can occur while reading a command script
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, ScriptError>;
