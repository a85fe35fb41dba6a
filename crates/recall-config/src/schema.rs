use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration — maps to `recall.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    pub transcripts: TranscriptsConfig,
    pub search: SearchConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

// ── Transcripts ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptsConfig {
    /// Directory the host platform writes transcripts into.
    pub dir: PathBuf,
    /// File extension of transcript files, without the leading dot.
    pub extension: String,
    /// File names that live in the directory but are not transcripts.
    pub exclude: Vec<String>,
}

impl Default for TranscriptsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("/mnt/transcripts"),
            extension: "txt".into(),
            exclude: vec!["journal.txt".into()],
        }
    }
}

// ── Search ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum matching lines reported per transcript.
    pub max_matches_per_file: usize,
    /// Characters of each matching line kept in the result.
    pub snippet_chars: usize,
    /// Characters of each match shown in the text listing.
    pub preview_chars: usize,
    /// Match case exactly instead of ignoring it.
    pub case_sensitive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_matches_per_file: 10,
            snippet_chars: 200,
            preview_chars: 80,
            case_sensitive: false,
        }
    }
}

// ── Output ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Width of the `=` banner written between combined transcripts.
    pub banner_width: usize,
    /// Default per-message character limit for `--messages` output.
    pub truncate: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            banner_width: 80,
            truncate: None,
        }
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Error => "error",
            WarningSeverity::Warning => "warning",
            WarningSeverity::Info => "note",
        };
        write!(f, "{}: {}: {}", icon, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

impl RecallConfig {
    /// Validate the config and return a list of warnings.
    /// Returns `Err` with all error messages joined if any severity is Error.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Transcripts ───
        if self.transcripts.dir.as_os_str().is_empty() {
            warnings.push(ConfigWarning {
                field: "transcripts.dir".into(),
                message: "transcript directory is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. '/mnt/transcripts'".into()),
            });
        }

        let ext = &self.transcripts.extension;
        if ext.is_empty() {
            warnings.push(ConfigWarning {
                field: "transcripts.extension".into(),
                message: "extension is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 'txt'".into()),
            });
        } else if ext.starts_with('.') {
            warnings.push(ConfigWarning {
                field: "transcripts.extension".into(),
                message: format!("extension '{}' has a leading dot", ext),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Use '{}'", ext.trim_start_matches('.'))),
            });
        }

        // ── Search ───
        if self.search.snippet_chars == 0 {
            warnings.push(ConfigWarning {
                field: "search.snippet_chars".into(),
                message: "snippet_chars is 0 — matches would be empty".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 200".into()),
            });
        }
        if self.search.max_matches_per_file == 0 {
            warnings.push(ConfigWarning {
                field: "search.max_matches_per_file".into(),
                message: "max_matches_per_file is 0 — only file names will be reported".into(),
                severity: WarningSeverity::Warning,
                hint: None,
            });
        }
        if self.search.preview_chars > self.search.snippet_chars {
            warnings.push(ConfigWarning {
                field: "search.preview_chars".into(),
                message: format!(
                    "preview_chars ({}) exceeds snippet_chars ({})",
                    self.search.preview_chars, self.search.snippet_chars
                ),
                severity: WarningSeverity::Info,
                hint: Some("Previews never show more than snippet_chars".into()),
            });
        }

        // ── Output ───
        if self.output.banner_width == 0 {
            warnings.push(ConfigWarning {
                field: "output.banner_width".into(),
                message: "banner_width is 0 — combined transcripts get empty separators".into(),
                severity: WarningSeverity::Warning,
                hint: Some("Set to e.g. 80".into()),
            });
        }
        if self.output.truncate == Some(0) {
            warnings.push(ConfigWarning {
                field: "output.truncate".into(),
                message: "truncate is 0 — every message is cut to '...'".into(),
                severity: WarningSeverity::Warning,
                hint: Some("Remove the key to disable truncation".into()),
            });
        }

        // ── Logging ───
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_levels.join(", "))),
            });
        }
        let valid_formats = ["pretty", "json", "compact"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_formats.join(", "))),
            });
        }

        // Check for hard errors
        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| format!("{}: {}", w.field, w.message))
            .collect();

        if !errors.is_empty() {
            return Err(format!("configuration errors:\n  • {}", errors.join("\n  • ")));
        }

        Ok(warnings)
    }
}
