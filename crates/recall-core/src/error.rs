use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for transcript recovery.
#[derive(Error, Debug)]
pub enum RecallError {
    // ── Store errors ───────────────────────────────────────────
    #[error("transcript not found: {0}")]
    TranscriptNotFound(String),

    #[error("no transcripts found in {}", .0.display())]
    NoTranscripts(PathBuf),

    #[error("transcript store unavailable: {}: {reason}", path.display())]
    StoreUnavailable { path: PathBuf, reason: String },

    #[error("invalid transcript name: {0}")]
    InvalidName(String),

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RecallError>;
