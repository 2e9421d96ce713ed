//! Errors raised while converting VCF records.

use std::io;
use thiserror::Error;

/// Errors that can occur during VCF to BED conversion.
///
/// Every record-level variant carries the 1-based input line number.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Line {line}: not valid UTF-8")]
    InvalidUtf8 { line: usize },

    #[error("Line {line}: expected at least 8 tab-separated fields, got {found}")]
    TooFewFields { line: usize, found: usize },

    #[error("Line {line}: invalid {field} value '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: required INFO key '{key}' is missing")]
    MissingInfo { line: usize, key: &'static str },

    #[error("Line {line}: INFO key '{key}' is a flag but a value is required")]
    FlagInfo { line: usize, key: &'static str },

    #[error("Line {line}: ALT '{alt}' is not in breakend bracket notation")]
    InvalidBreakend { line: usize, alt: String },
}

impl ConvertError {
    /// True when the downstream consumer closed the output stream.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ConvertError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
