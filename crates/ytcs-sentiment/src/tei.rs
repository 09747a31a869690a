//! Client for a Text Embeddings Inference server hosting a three-class
//! sentiment model (cardiffnlp twitter-roberta style).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use ytcs_core::SentimentLabel;

use crate::error::SentimentError;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// TEI `/predict` client.
#[derive(Debug, Clone)]
pub struct TeiClassifier {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    label: String,
    score: f64,
}

impl TeiClassifier {
    /// Create a client for the TEI server at `tei_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(tei_url: &str) -> Result<Self, SentimentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            url: format!("{}/predict", tei_url.trim_end_matches('/')),
        })
    }

    /// Classify one text and return the highest-scoring label.
    ///
    /// # Errors
    ///
    /// - [`SentimentError::Tei`] on transport failure, non-2xx status, or an
    ///   unparseable body.
    /// - [`SentimentError::EmptyPrediction`] if the server returns no scores.
    /// - [`SentimentError::UnknownLabel`] if the top label is not one of the
    ///   three sentiment classes.
    pub async fn predict(&self, text: &str) -> Result<SentimentLabel, SentimentError> {
        let request = PredictRequest { inputs: text };
        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| SentimentError::Tei(format!("TEI request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SentimentError::Tei(format!(
                "TEI returned status {}",
                response.status()
            )));
        }

        let predictions: Vec<Prediction> = response
            .json()
            .await
            .map_err(|e| SentimentError::Tei(format!("TEI response parse error: {e}")))?;

        let top = predictions
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or(SentimentError::EmptyPrediction)?;

        map_label(&top.label)
    }
}

/// Map a model label onto [`SentimentLabel`].
///
/// Accepts the raw `LABEL_n` ids of the three-class model (0 negative,
/// 1 neutral, 2 positive) and the named forms in any case.
fn map_label(label: &str) -> Result<SentimentLabel, SentimentError> {
    match label.to_ascii_lowercase().as_str() {
        "label_0" | "negative" | "neg" => Ok(SentimentLabel::Negative),
        "label_1" | "neutral" | "neu" => Ok(SentimentLabel::Neutral),
        "label_2" | "positive" | "pos" => Ok(SentimentLabel::Positive),
        _ => Err(SentimentError::UnknownLabel(label.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn maps_raw_label_ids() {
        assert_eq!(map_label("LABEL_0").unwrap(), SentimentLabel::Negative);
        assert_eq!(map_label("LABEL_1").unwrap(), SentimentLabel::Neutral);
        assert_eq!(map_label("LABEL_2").unwrap(), SentimentLabel::Positive);
    }

    #[test]
    fn maps_named_labels_case_insensitively() {
        assert_eq!(map_label("positive").unwrap(), SentimentLabel::Positive);
        assert_eq!(map_label("NEGATIVE").unwrap(), SentimentLabel::Negative);
        assert_eq!(map_label("Neutral").unwrap(), SentimentLabel::Neutral);
    }

    #[test]
    fn rejects_unknown_label() {
        assert!(matches!(
            map_label("LABEL_3"),
            Err(SentimentError::UnknownLabel(ref l)) if l == "LABEL_3"
        ));
    }

    #[tokio::test]
    async fn predict_picks_highest_score() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .and(body_json(serde_json::json!({
                "inputs": "I loved it"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "label": "LABEL_0", "score": 0.01 },
                { "label": "LABEL_2", "score": 0.97 },
                { "label": "LABEL_1", "score": 0.02 }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tei = TeiClassifier::new(&format!("{}/", server.uri())).unwrap();
        assert_eq!(tei.predict("I loved it").await.unwrap(), SentimentLabel::Positive);
    }

    #[tokio::test]
    async fn predict_empty_response_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let tei = TeiClassifier::new(&server.uri()).unwrap();
        assert!(matches!(
            tei.predict("x").await,
            Err(SentimentError::EmptyPrediction)
        ));
    }

    #[tokio::test]
    async fn predict_non_success_status_is_tei_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let tei = TeiClassifier::new(&server.uri()).unwrap();
        let err = tei.predict("x").await.unwrap_err();
        assert!(matches!(err, SentimentError::Tei(ref m) if m.contains("503")), "{err}");
    }
}
