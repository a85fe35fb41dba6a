use chrono::{DateTime, Utc};
use recall_core::{RecallError, Result, SearchResult, TranscriptInfo};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use crate::decode::decode_unicode_escapes;
use crate::search::{Matcher, SearchOptions, match_lines};

/// A read-only view over a directory of transcript files.
///
/// Transcripts are identified by file name. Listing is always sorted by name,
/// and the last name in that order is the "current" transcript.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    dir: PathBuf,
    extension: String,
    exclude: Vec<String>,
}

impl TranscriptStore {
    /// Create a store over `dir` with the default `.txt` extension and
    /// `journal.txt` excluded.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: "txt".into(),
            exclude: vec!["journal.txt".into()],
        }
    }

    /// Only files with this extension are transcripts. A leading dot is ignored.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// File names to skip when listing.
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List all transcripts, sorted by name.
    ///
    /// A missing directory is an empty store, not an error.
    pub fn list(&self) -> Result<Vec<TranscriptInfo>> {
        if !self.dir.is_dir() {
            warn!(dir = ?self.dir, "transcript directory does not exist");
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.dir).map_err(|e| RecallError::StoreUnavailable {
            path: self.dir.clone(),
            reason: e.to_string(),
        })?;

        let mut transcripts = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir = ?self.dir, error = %e, "failed to read directory entry");
                    continue;
                }
            };
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()).map(String::from) else {
                debug!(?path, "skipping non-UTF-8 file name");
                continue;
            };
            if !self.is_transcript_name(&name) {
                continue;
            }

            let metadata = match std::fs::metadata(&path) {
                Ok(m) if m.is_file() => m,
                Ok(_) => continue,
                Err(e) => {
                    warn!(?path, error = %e, "failed to stat transcript, skipping");
                    continue;
                }
            };
            let modified = metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| DateTime::<Utc>::from(std::time::UNIX_EPOCH));

            transcripts.push(TranscriptInfo {
                name,
                size: metadata.len(),
                modified,
                path,
            });
        }

        transcripts.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(dir = ?self.dir, count = transcripts.len(), "listed transcripts");
        Ok(transcripts)
    }

    /// The most recent transcript (last by name), if any.
    pub fn current(&self) -> Result<Option<TranscriptInfo>> {
        Ok(self.list()?.pop())
    }

    /// Read and decode a transcript by file name.
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.resolve(name)?;
        if !path.is_file() {
            return Err(RecallError::TranscriptNotFound(name.to_string()));
        }
        read_decoded(&path)
    }

    /// Read and decode a listed transcript.
    pub fn read_info(&self, info: &TranscriptInfo) -> Result<String> {
        read_decoded(&info.path)
    }

    /// Every transcript in name order, each preceded by a
    /// `=== FILE: <name> ===` banner framed by `banner_width` `=` characters.
    pub fn combine_all(&self, banner_width: usize) -> Result<String> {
        let rule = "=".repeat(banner_width);
        let mut parts = Vec::new();
        for info in self.list()? {
            parts.push(format!("\n{rule}"));
            parts.push(format!("=== FILE: {} ===", info.name));
            parts.push(format!("{rule}\n"));
            parts.push(self.read_info(&info)?);
        }
        Ok(parts.join("\n"))
    }

    /// Search every transcript for lines containing `query`.
    ///
    /// Results are in transcript name order; transcripts without a matching
    /// line are omitted. An empty query matches nothing.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<SearchResult>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let matcher = Matcher::new(query, options.case_sensitive);

        let mut results = Vec::new();
        for info in self.list()? {
            let content = self.read_info(&info)?;
            if let Some(matches) = match_lines(&content, &matcher, options) {
                results.push(SearchResult {
                    file: info.name,
                    matches,
                });
            }
        }

        info!(query, hits = results.len(), "search complete");
        Ok(results)
    }

    fn is_transcript_name(&self, name: &str) -> bool {
        if name.starts_with('.') || self.exclude.iter().any(|e| e == name) {
            return false;
        }
        Path::new(name)
            .extension()
            .is_some_and(|ext| ext == self.extension.as_str())
    }

    /// Map a transcript name to a path inside the store, rejecting anything
    /// that is not a single plain file name.
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.dir.join(name)),
            _ => Err(RecallError::InvalidName(name.to_string())),
        }
    }
}

/// Keep the last `n` lines of `content`. `n == 0` keeps everything.
///
/// Lines are split on `\n` only, so `\r\n` endings survive. A single trailing
/// newline does not count as an extra empty line.
pub fn tail_lines(content: &str, n: usize) -> String {
    if n == 0 {
        return content.to_string();
    }
    let body = content.strip_suffix('\n').unwrap_or(content);
    let lines: Vec<&str> = body.split('\n').collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}

fn read_decoded(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(?path, "transcript is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(decode_unicode_escapes(&text))
}
