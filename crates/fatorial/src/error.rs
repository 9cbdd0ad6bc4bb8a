//! Error types and diagnostics for fatorial
//!
//! Every failure surfaced by the library is a [`FatError`]. The variants carry
//! `miette` diagnostic codes so the binary can render them with help text.

use miette::Diagnostic;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use thiserror::Error;

/// Alias for Result type with fatorial errors
pub type FatResult<T> = std::result::Result<T, FatError>;

#[derive(Error, Diagnostic, Debug)]
pub enum FatError {
    // ========================================================================
    // Evaluation errors (E0101-E0199)
    // ========================================================================
    /// Factorial is only defined for non-negative integers
    #[error("factorial of negative number {n}")]
    #[diagnostic(
        code(fat_eval_E0101),
        help("Factorial is defined for n >= 0 only")
    )]
    NegativeInput { n: i32 },

    /// The result does not fit in a 32-bit signed integer
    #[error("factorial of {n} overflows a 32-bit integer")]
    #[diagnostic(
        code(fat_eval_E0102),
        help("12! = 479001600 is the largest that fits; wrapping mode mimics C int")
    )]
    Overflow { n: i32 },

    // ========================================================================
    // Console errors (E0201-E0299)
    // ========================================================================
    #[error(transparent)]
    #[diagnostic(code(fat_io_E0201))]
    Io(#[from] std::io::Error),

    #[error("line editor failed: {0}")]
    #[diagnostic(code(fat_io_E0202))]
    Readline(#[from] ReadlineError),

    // ========================================================================
    // Config errors (E0301-E0399)
    // ========================================================================
    #[error("cannot read config file {}", path.display())]
    #[diagnostic(code(fat_config_E0301))]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    #[diagnostic(
        code(fat_config_E0302),
        help("Expected a JSON object with optional keys: value, banner, label, prompt, overflow")
    )]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Generic error message
    #[error("{0}")]
    Msg(String),
}

impl From<String> for FatError {
    fn from(msg: String) -> Self {
        FatError::Msg(msg)
    }
}

impl<'a> From<&'a str> for FatError {
    fn from(msg: &'a str) -> Self {
        FatError::Msg(msg.to_string())
    }
}
