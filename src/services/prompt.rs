//! Prompt construction. Pure string templating — inputs are validated
//! upstream. The system persona stays a separate message channel and is never
//! folded into the user prompt.

use crate::services::summary::Emotion;

/// Fixed persona sent as the system message on every completion call.
pub const SYSTEM_PERSONA: &str = "You are the user's diary companion, named \"Diary Sprite\". \
Reply in a friendly, positive way, like a good friend would. Your replies should: \
1) show understanding and empathy, \
2) offer encouragement and support, \
3) naturally weave in one or two recommendations for books, movies, music or activities \
that relate to the themes of the diary and the user's mood, \
4) use a relaxed, familiar tone, like a conversation between friends. \
Address the user directly and informally as \"you\".";

pub const NO_TAGS: &str = "no tags";

/// Comma-joined "#tag" tokens, or the no-tags sentinel for an empty list.
pub fn render_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        NO_TAGS.to_string()
    } else {
        tags.iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn build_prompt(diary: &str, digest: &str, emotion: Emotion, tags: &[String]) -> String {
    let tags_text = render_tags(tags);

    format!(
        "The user's diary entry for today: {diary}\n\
         \n\
         The user's mood today: {emotion}\n\
         \n\
         Tags the user added: {tags_text}\n\
         \n\
         Summary of the user's previous diaries:\n\
         {digest}\n\
         \n\
         Based on the information above, write a friendly, warm reply, like a \
         conversation between close friends.\n\
         Take the user's mood and diary content into account, and express \
         understanding and empathy.\n\
         You may naturally weave in recommendations for books, movies, music or \
         activities that fit the user's interests and current mood.\n\
         Make sure the reply is positive, supportive and personal.",
        emotion = emotion.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tags_hash_prefixed_and_comma_joined() {
        let tags = vec!["work".to_string(), "family".to_string()];
        assert_eq!(render_tags(&tags), "#work, #family");
    }

    #[test]
    fn test_render_tags_empty_uses_sentinel() {
        assert_eq!(render_tags(&[]), NO_TAGS);
    }

    #[test]
    fn test_prompt_contains_all_sections() {
        let prompt = build_prompt(
            "Had a rough day",
            "Date: 2024-03-01, Mood: 😢, Content: tired",
            Emotion::Negative,
            &["work".to_string()],
        );

        assert!(prompt.contains("Had a rough day"));
        assert!(prompt.contains("negative"));
        assert!(prompt.contains("#work"));
        assert!(prompt.contains("Date: 2024-03-01"));
    }

    #[test]
    fn test_prompt_does_not_embed_persona() {
        let prompt = build_prompt("entry", "digest", Emotion::Mixed, &[]);
        assert!(!prompt.contains("Diary Sprite"));
    }
}
