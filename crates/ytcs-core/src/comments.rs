//! Comment records as they move from the source, through classification,
//! into the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A comment as supplied by a [`CommentSource`](crate::CommentSource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawComment {
    pub author: String,
    pub text: String,
}

impl RawComment {
    #[must_use]
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

/// Three-way sentiment outcome. Persisted as `"Positive"`, `"Neutral"`
/// or `"Negative"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sentiment label: {0:?}")]
pub struct UnknownSentimentLabel(pub String);

impl FromStr for SentimentLabel {
    type Err = UnknownSentimentLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(Self::Positive),
            "Neutral" => Ok(Self::Neutral),
            "Negative" => Ok(Self::Negative),
            other => Err(UnknownSentimentLabel(other.to_string())),
        }
    }
}

/// A comment with its sentiment label attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedComment {
    pub author: String,
    pub sentiment: SentimentLabel,
    pub text: String,
}

impl ClassifiedComment {
    #[must_use]
    pub fn from_raw(raw: RawComment, sentiment: SentimentLabel) -> Self {
        Self {
            author: raw.author,
            sentiment,
            text: raw.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_parses_its_own_display() {
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Negative,
        ] {
            assert_eq!(label.to_string().parse::<SentimentLabel>(), Ok(label));
        }
    }

    #[test]
    fn label_parse_is_case_sensitive() {
        let err = "positive".parse::<SentimentLabel>().unwrap_err();
        assert_eq!(err, UnknownSentimentLabel("positive".to_string()));
    }

    #[test]
    fn classified_comment_serializes_label_as_plain_string() {
        let comment = ClassifiedComment::from_raw(
            RawComment::new("alice", "loved it"),
            SentimentLabel::Positive,
        );
        let json = serde_json::to_value(&comment).expect("serialize");
        assert_eq!(json["author"], "alice");
        assert_eq!(json["sentiment"], "Positive");
        assert_eq!(json["text"], "loved it");
    }
}
