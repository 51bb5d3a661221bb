//! Output labels
//!
//! [SentimentLabel] is the only thing the pipeline ever returns. [Mood] is the narrower
//! two-valued type carried by the emoji and short-utterance tables, which can only ever
//! point at `happy` or `sad`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment assigned to a sentence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Happy,
    Sad,
    #[default]
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Happy,
        SentimentLabel::Sad,
        SentimentLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Happy => "happy",
            SentimentLabel::Sad => "sad",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polar mood attached to emoji glyphs and short utterances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
}

impl From<Mood> for SentimentLabel {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Happy => SentimentLabel::Happy,
            Mood::Sad => SentimentLabel::Sad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_serialize_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::ALL).unwrap();
        assert_eq!(json, r#"["happy","sad","neutral"]"#);
    }

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(SentimentLabel::default(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_mood_maps_to_polar_labels() {
        assert_eq!(SentimentLabel::from(Mood::Happy), SentimentLabel::Happy);
        assert_eq!(SentimentLabel::from(Mood::Sad), SentimentLabel::Sad);
    }

    #[test]
    fn test_display_matches_wire_name() {
        for label in SentimentLabel::ALL {
            let wire = serde_json::to_string(&label).unwrap();
            assert_eq!(wire, format!("\"{}\"", label));
        }
    }
}
