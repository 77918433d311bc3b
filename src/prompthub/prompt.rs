//! Prompt segmentation.
//!
//! A prompt is a comma-delimited list of fragments ("neon lights, rain, 8k"). Each
//! fragment is shown as its own copyable chip, so the prompt is split, trimmed and
//! numbered here. Segments are never stored: they are re-derived from the prompt text on
//! every read, which means a segment id is only stable while the prompt text is.

use crate::model::PromptKind;
use serde::Serialize;

const DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptSegment {
    /// `"{kind}-{ordinal}"`, ordinal counted after empty fragments are dropped.
    pub id: String,
    pub text: String,
    pub kind: PromptKind,
}

/// Trimmed, non-empty comma-separated fragments in source order.
pub fn split_fragments(text: &str) -> impl Iterator<Item = &str> {
    text.split(DELIMITER)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
}

pub fn segment(prompt: &str, kind: PromptKind) -> Vec<PromptSegment> {
    split_fragments(prompt)
        .enumerate()
        .map(|(ordinal, text)| PromptSegment {
            id: format!("{}-{}", kind, ordinal),
            text: text.to_string(),
            kind,
        })
        .collect()
}

/// Parses the free-text tag field of a submission into individual tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    split_fragments(raw).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(segments: &[PromptSegment]) -> Vec<&str> {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn splits_trims_and_numbers() {
        let segments = segment("a, b,c", PromptKind::Positive);
        assert_eq!(
            segments,
            vec![
                PromptSegment {
                    id: "positive-0".into(),
                    text: "a".into(),
                    kind: PromptKind::Positive,
                },
                PromptSegment {
                    id: "positive-1".into(),
                    text: "b".into(),
                    kind: PromptKind::Positive,
                },
                PromptSegment {
                    id: "positive-2".into(),
                    text: "c".into(),
                    kind: PromptKind::Positive,
                },
            ]
        );
    }

    #[test]
    fn degenerate_input_yields_nothing() {
        assert!(segment(" , , ", PromptKind::Positive).is_empty());
        assert!(segment("", PromptKind::Negative).is_empty());
    }

    #[test]
    fn ordinals_skip_empty_fragments() {
        let segments = segment("blurry,, ,low quality,", PromptKind::Negative);
        assert_eq!(texts(&segments), vec!["blurry", "low quality"]);
        assert_eq!(segments[1].id, "negative-1");
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let segments = segment("  cinematic lighting  ,8k", PromptKind::Positive);
        assert_eq!(texts(&segments), vec!["cinematic lighting", "8k"]);
    }

    #[test]
    fn parse_tags_drops_blanks() {
        assert_eq!(parse_tags("city, night,, sci-fi "), vec!["city", "night", "sci-fi"]);
        assert!(parse_tags("   ").is_empty());
    }
}
