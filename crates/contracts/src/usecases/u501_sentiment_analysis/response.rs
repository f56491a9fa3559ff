use crate::shared::serde_utils::f64_lenient;
use serde::{Deserialize, Serialize};

/// Label produced by the sentiment model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Unknown(String),
}

impl From<String> for SentimentLabel {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => SentimentLabel::Positive,
            "NEGATIVE" => SentimentLabel::Negative,
            "NEUTRAL" => SentimentLabel::Neutral,
            _ => SentimentLabel::Unknown(raw),
        }
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        label.as_str().to_string()
    }
}

impl SentimentLabel {
    pub fn as_str(&self) -> &str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Unknown(raw) => raw.as_str(),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "😊",
            SentimentLabel::Negative => "😞",
            SentimentLabel::Neutral => "😐",
            SentimentLabel::Unknown(_) => "🤔",
        }
    }
}

/// One analysed text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub confidence: f64,
    /// Position of the analysed text in the batch, when the service echoes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl SentimentResult {
    pub fn confidence_display(&self) -> String {
        format!("{:.2}", self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_decode_case_insensitively() {
        let res: SentimentResult =
            serde_json::from_str(r#"{"sentiment": "positive", "confidence": 0.987}"#).unwrap();
        assert_eq!(res.sentiment, SentimentLabel::Positive);
        assert_eq!(res.confidence_display(), "0.99");
        assert_eq!(res.index, None);
    }

    #[test]
    fn test_unknown_label_is_kept() {
        let res: SentimentResult =
            serde_json::from_str(r#"{"sentiment": "MIXED", "confidence": "0.5"}"#).unwrap();
        assert_eq!(res.sentiment, SentimentLabel::Unknown("MIXED".into()));
        assert_eq!(res.sentiment.emoji(), "🤔");
        assert_eq!(res.sentiment.as_str(), "MIXED");
    }
}
