//! Context summarization: mood → coarse emotion category, and a bounded
//! digest of recent prior entries so the prompt stays small no matter how
//! much history the client sends.

use crate::dto::PriorEntry;

pub const NO_HISTORY: &str = "No previous diary entries";

const POSITIVE_MOODS: [&str; 4] = ["😊", "😍", "🥳", "😌"];
const NEUTRAL_MOODS: [&str; 2] = ["🤔", "😴"];
const NEGATIVE_MOODS: [&str; 4] = ["😢", "😡", "🤒", "🥺"];

/// Entries kept in the digest, newest first.
const DIGEST_ENTRIES: usize = 5;
/// Entry content longer than this is truncated (97 chars + "...").
const MAX_CONTENT_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Positive,
    Neutral,
    Negative,
    Mixed,
}

impl Emotion {
    /// Exact-match lookup against the fixed mood vocabulary. Anything the
    /// sets don't cover (including an empty mood) maps to Mixed.
    pub fn from_mood(mood: &str) -> Self {
        if POSITIVE_MOODS.contains(&mood) {
            Emotion::Positive
        } else if NEUTRAL_MOODS.contains(&mood) {
            Emotion::Neutral
        } else if NEGATIVE_MOODS.contains(&mood) {
            Emotion::Negative
        } else {
            Emotion::Mixed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Positive => "positive",
            Emotion::Neutral => "neutral",
            Emotion::Negative => "negative",
            Emotion::Mixed => "mixed",
        }
    }
}

/// Reduce prior entries to at most five "Date, Mood, Content" lines, newest
/// first. Dates sort by plain string comparison: ISO-style dates order
/// correctly, anything else orders however it orders. Not calendar-aware.
pub fn summarize_previous(entries: &[PriorEntry]) -> String {
    if entries.is_empty() {
        return NO_HISTORY.to_string();
    }

    let mut sorted: Vec<&PriorEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    sorted
        .iter()
        .take(DIGEST_ENTRIES)
        .map(|entry| {
            let content = truncate_content(entry.content.trim());
            format!(
                "Date: {}, Mood: {}, Content: {}",
                entry.date, entry.mood, content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate_content(content: &str) -> String {
    if content.chars().count() > MAX_CONTENT_CHARS {
        let head: String = content.chars().take(MAX_CONTENT_CHARS - 3).collect();
        format!("{head}...")
    } else {
        content.to_string()
    }
}
