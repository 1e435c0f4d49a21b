// Static content bank of canned responses

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::{read_json, LoadError};

/// Bucket used for the crisis short-circuit
pub const CRISIS_BUCKET: &str = "Crisis";

/// Returned on the crisis path when the bank has no crisis responses
pub const CRISIS_FALLBACK: &str =
    "I’m concerned about your safety. Please call emergency services.";

/// Candidate responses for one bucket
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BucketContent {
    #[serde(default)]
    pub responses: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ContentBank {
    buckets: BTreeMap<String, BucketContent>,
}

impl ContentBank {
    pub fn new<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let buckets = entries
            .into_iter()
            .map(|(bucket, responses)| {
                let content = BucketContent {
                    responses: responses.into_iter().map(Into::into).collect(),
                };
                (bucket.into(), content)
            })
            .collect();

        Self { buckets }
    }

    /// Load a JSON object of `{ "bucket": { "responses": [...] } }`
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let bank: ContentBank = read_json(path, "content bank")?;
        tracing::debug!(buckets = bank.len(), path = %path.display(), "Loaded content bank");

        if bank.responses(CRISIS_BUCKET).is_empty() {
            tracing::warn!("Content bank has no crisis responses; the built-in safety message will be used");
        }

        Ok(bank)
    }

    /// Responses for a bucket; empty when the bucket is unknown
    pub fn responses(&self, bucket: &str) -> &[String] {
        self.buckets
            .get(bucket)
            .map(|content| content.responses.as_slice())
            .unwrap_or(&[])
    }

    /// First crisis response, never randomized
    pub fn crisis_response(&self) -> &str {
        self.responses(CRISIS_BUCKET)
            .first()
            .map(String::as_str)
            .unwrap_or(CRISIS_FALLBACK)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responses_lookup() {
        let bank = ContentBank::new([("Anxiety/Stress", vec!["r1", "r2"])]);
        assert_eq!(bank.responses("Anxiety/Stress"), ["r1", "r2"]);
        assert!(bank.responses("Unknown").is_empty());
    }

    #[test]
    fn test_crisis_response_is_first_entry() {
        let bank = ContentBank::new([(CRISIS_BUCKET, vec!["call now", "second"])]);
        for _ in 0..10 {
            assert_eq!(bank.crisis_response(), "call now");
        }
    }

    #[test]
    fn test_crisis_response_fallbacks() {
        assert_eq!(ContentBank::default().crisis_response(), CRISIS_FALLBACK);

        let empty: Vec<String> = vec![];
        let bank = ContentBank::new([(CRISIS_BUCKET, empty)]);
        assert_eq!(bank.crisis_response(), CRISIS_FALLBACK);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content_bank.json");
        std::fs::write(
            &path,
            r#"{
                "Crisis": {"responses": ["Please reach out to a crisis line."]},
                "Anxiety/Stress": {"responses": ["Let's breathe together."]},
                "Other": {}
            }"#,
        )
        .unwrap();

        let bank = ContentBank::load_from_file(&path).unwrap();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.crisis_response(), "Please reach out to a crisis line.");
        assert!(bank.responses("Other").is_empty());
    }

    #[test]
    fn test_load_rejects_malformed_bank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content_bank.json");
        std::fs::write(&path, r#"{"Crisis": ["not", "a", "record"]}"#).unwrap();

        assert!(matches!(
            ContentBank::load_from_file(&path),
            Err(LoadError::Parse { .. })
        ));
    }
}
