//! Splitting text into ideographic and non-ideographic runs.

use serde::{Deserialize, Serialize};

/// A maximal run of characters that are either all ideographic or all not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub is_ideographic: bool,
}

impl Segment {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Returns true if `ch` is a CJK ideograph.
///
/// Covers CJK Unified Ideographs and Extensions A through D. Every other
/// code point, including kana, Hangul and CJK punctuation, is treated as
/// non-ideographic.
pub fn is_ideographic(ch: char) -> bool {
    matches!(
        ch,
        '\u{4E00}'..='\u{9FFF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{20000}'..='\u{2A6DF}'
            | '\u{2A700}'..='\u{2B73F}'
            | '\u{2B740}'..='\u{2B81F}'
    )
}

/// Split `text` wherever the ideographic classification changes between
/// two consecutive characters.
///
/// Concatenating the returned segments in order gives back `text` exactly.
/// Empty input yields no segments.
pub fn segment(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut start = 0usize;
    let mut current: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let ideographic = is_ideographic(ch);
        match current {
            Some(prev) if prev != ideographic => {
                segments.push(Segment {
                    text: text[start..idx].to_string(),
                    is_ideographic: prev,
                });
                start = idx;
            }
            _ => {}
        }
        current = Some(ideographic);
    }

    if let Some(ideographic) = current {
        segments.push(Segment {
            text: text[start..].to_string(),
            is_ideographic: ideographic,
        });
    }

    segments
}
