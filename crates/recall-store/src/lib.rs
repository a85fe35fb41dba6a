//! # recall-store
//!
//! Read-only access to the transcript files the host platform records for each
//! conversation. A store is a flat directory of transcript files (by default
//! `/mnt/transcripts/*.txt`, excluding `journal.txt`).
//!
//! ## Transcript format
//!
//! ```text
//! Human:
//! Content:
//! [
//!   {"type": "text", "text": "How do I rotate the logs?"}
//! ]
//!
//! Assistant:
//! Content:
//! [
//!   {"type": "text", "text": "Use logrotate with..."},
//!   {"type": "tool_use", "name": "bash", "input": {}}
//! ]
//! ```
//!
//! Files may carry literal `\uXXXX` escapes; they are decoded on read.
//!
//! ## Operations
//!
//! - [`TranscriptStore::list`] — enumerate transcripts sorted by name
//! - [`TranscriptStore::combine_all`] — every transcript behind a file banner
//! - [`TranscriptStore::search`] — case-insensitive keyword search by line
//! - [`extract_messages`] — reduce raw text to human/assistant text messages

pub mod decode;
pub mod extract;
pub mod search;
pub mod store;

pub use decode::decode_unicode_escapes;
pub use extract::{extract_messages, format_messages};
pub use search::SearchOptions;
pub use store::{TranscriptStore, tail_lines};
