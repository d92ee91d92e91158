// File: crates/chart-core/src/error.rs
// Summary: Error type for the fallible parts of the core (parsing, config, I/O).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("path syntax error at byte {offset}: {message}")]
    PathSyntax { offset: usize, message: String },

    #[error("unknown easing '{0}'")]
    UnknownEasing(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ChartError {
    pub(crate) fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::PathSyntax { offset, message: message.into() }
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
