// Output formatting: terminal bar chart and JSON.

pub mod terminal;

use anyhow::Result;

use crate::topics::summary::TopicSummary;

/// Render summaries as a pretty-printed JSON array.
pub fn summaries_to_json(summaries: &[TopicSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Counts characters, not bytes, so multi-byte terms never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
