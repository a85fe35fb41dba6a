use recall_core::TranscriptInfo;

/// Render the transcript listing as text or pretty JSON.
pub fn render_list(transcripts: &[TranscriptInfo], json: bool) -> recall_core::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(transcripts)?);
    }

    let mut lines = vec![format!("Found {} transcripts:", transcripts.len()), String::new()];
    for t in transcripts {
        lines.push(format!(
            "  {} ({:.1} KB, modified {})",
            t.name,
            t.size_kb(),
            t.modified.format("%Y-%m-%d %H:%M UTC")
        ));
    }
    Ok(lines.join("\n"))
}
