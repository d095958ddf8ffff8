//! Keyword-based tone classifier for reply text.

use serde::{Deserialize, Serialize};

const POSITIVE_KEYWORDS: &[&str] = &["happy", "great", "awesome", "love"];
const NEGATIVE_KEYWORDS: &[&str] = &["sad", "angry", "bad", "upset"];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Emotion {
    Happy,
    Sad,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "HAPPY",
            Emotion::Sad => "SAD",
            Emotion::Neutral => "NEUTRAL",
        }
    }
}

/// Maps text to an emotion by substring containment. Positive keywords are
/// checked first, so mixed text is `Happy`.
pub fn classify(text: &str) -> Emotion {
    let text = text.to_lowercase();

    if POSITIVE_KEYWORDS.iter().any(|word| text.contains(word)) {
        Emotion::Happy
    } else if NEGATIVE_KEYWORDS.iter().any(|word| text.contains(word)) {
        Emotion::Sad
    } else {
        Emotion::Neutral
    }
}
