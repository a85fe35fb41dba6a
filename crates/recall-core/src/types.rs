use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metadata about one transcript file in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptInfo {
    /// File name, which doubles as the transcript identifier.
    pub name: String,
    /// Size on disk in bytes.
    pub size: u64,
    /// Last modification time.
    pub modified: DateTime<Utc>,
    pub path: PathBuf,
}

impl TranscriptInfo {
    pub fn size_kb(&self) -> f64 {
        self.size as f64 / 1024.0
    }
}

/// A line that matched a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// 1-based line number within the decoded transcript.
    pub line: usize,
    pub text: String,
}

/// All matches found in a single transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub file: String,
    pub matches: Vec<SearchMatch>,
}
