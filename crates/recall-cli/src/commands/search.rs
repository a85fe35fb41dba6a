use recall_core::{SearchResult, truncate_chars};

/// Render search results as text or pretty JSON.
///
/// Text output lists each transcript with its matching lines, previews cut to
/// `preview_chars` characters.
pub fn render_search(
    query: &str,
    results: &[SearchResult],
    preview_chars: usize,
    json: bool,
) -> recall_core::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(results)?);
    }
    if results.is_empty() {
        return Ok(format!("No matches for: {query}"));
    }

    let mut lines = Vec::new();
    for r in results {
        lines.push(format!("=== {} ===", r.file));
        for m in &r.matches {
            lines.push(format!("  L{}: {}", m.line, truncate_chars(&m.text, preview_chars)));
        }
    }
    Ok(lines.join("\n"))
}
