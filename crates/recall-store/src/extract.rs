use recall_core::{Message, Role};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

/// `Human:` / `Assistant:` header followed by a `Content:` line.
static MESSAGE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n(Human|Assistant):\nContent:\n").expect("message header pattern")
});

/// The content block array: first `[` up to the first line consisting of `]`.
static CONTENT_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*?\n\]").expect("content array pattern"));

/// Extract human/assistant text messages from raw transcript text.
///
/// Each `Human:`/`Assistant:` section contributes one message per non-blank
/// `text` block in its content array. Tool calls, tool results and sections
/// whose JSON does not parse are skipped.
pub fn extract_messages(content: &str) -> Vec<Message> {
    let headers: Vec<_> = MESSAGE_HEADER.captures_iter(content).collect();
    let mut messages = Vec::new();

    for (i, caps) in headers.iter().enumerate() {
        let Some(role) = Role::from_header(&caps[1]) else {
            continue;
        };
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let next_start = headers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(content.len(), |m| m.start());
        let section = &content[whole.end()..next_start];

        let Some(array) = CONTENT_ARRAY.find(section) else {
            continue;
        };
        let blocks: Vec<Value> = match serde_json::from_str(array.as_str()) {
            Ok(blocks) => blocks,
            Err(e) => {
                debug!(error = %e, offset = whole.start(), "skipping unparseable content block");
                continue;
            }
        };

        for block in &blocks {
            if block.get("type").and_then(Value::as_str) != Some("text") {
                continue;
            }
            let text = block
                .get("text")
                .and_then(Value::as_str)
                .map(str::trim)
                .unwrap_or_default();
            if !text.is_empty() {
                messages.push(Message::new(role, text));
            }
        }
    }

    messages
}

/// Render messages as `[HUMAN]:` / `[CLAUDE]:` blocks, optionally cutting each
/// message to `max_chars` characters.
pub fn format_messages(messages: &[Message], max_chars: Option<usize>) -> String {
    messages
        .iter()
        .map(|m| m.render(max_chars))
        .collect::<Vec<_>>()
        .join("\n")
}
