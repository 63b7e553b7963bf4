//! Error types for the command-line adapter

use consensus_core::GraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockdagError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlockdagError>;
