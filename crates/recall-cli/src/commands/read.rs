use recall_core::{Message, RecallError};
use recall_store::{TranscriptStore, extract_messages, format_messages, tail_lines};
use tracing::debug;

/// Which transcripts a read covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadSource {
    /// Every transcript, combined in name order.
    All,
    /// One transcript by file name.
    File(String),
    /// The most recent transcript.
    Current,
}

#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Keep only the last N lines (file/current reads).
    pub tail: Option<usize>,
    /// Reduce the text to extracted human/assistant messages.
    pub messages: bool,
    /// Per-message character limit when `messages` is set.
    pub truncate: Option<usize>,
    /// Emit extracted messages as JSON.
    pub json: bool,
    pub banner_width: usize,
}

/// Read the requested transcripts and shape them per `options`.
pub fn read_transcripts(
    store: &TranscriptStore,
    source: &ReadSource,
    options: &ReadOptions,
) -> recall_core::Result<String> {
    let content = match source {
        ReadSource::All => store.combine_all(options.banner_width)?,
        ReadSource::File(name) => store.read(name)?,
        ReadSource::Current => {
            let current = store
                .current()?
                .ok_or_else(|| RecallError::NoTranscripts(store.dir().to_path_buf()))?;
            eprintln!("Current: {}\n", current.name);
            store.read_info(&current)?
        }
    };

    let content = match options.tail {
        Some(n) if !matches!(source, ReadSource::All) => tail_lines(&content, n),
        _ => content,
    };

    if !options.messages {
        return Ok(content);
    }

    let messages = extract_messages(&content);
    debug!(count = messages.len(), "extracted messages");

    if options.json {
        let cut: Vec<Message> = messages
            .iter()
            .map(|m| Message::new(m.role, m.truncated_text(options.truncate)))
            .collect();
        return Ok(serde_json::to_string_pretty(&cut)?);
    }
    Ok(format_messages(&messages, options.truncate))
}
