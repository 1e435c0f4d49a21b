// Keyword scoring over configured support buckets

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::errors::{read_json, LoadError};

/// Keywords shorter than this are ignored when scoring
pub const MIN_KEYWORD_LEN: usize = 3;

/// Bucket name -> lowercase keyword set
pub type KeywordBucketMap = BTreeMap<String, BTreeSet<String>>;

/// Per-bucket keyword hit counts
pub type BucketScores = BTreeMap<String, usize>;

#[derive(Debug, Clone, Default)]
pub struct KeywordScorer {
    buckets: KeywordBucketMap,
}

impl KeywordScorer {
    /// Scorer with no buckets; every message scores as an empty map
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from raw bucket -> keywords pairs, lowercasing and de-duplicating
    pub fn new<I, K, V, S>(buckets: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let buckets = buckets
            .into_iter()
            .map(|(bucket, keywords)| {
                let keywords = keywords
                    .into_iter()
                    .map(|kw| kw.as_ref().to_lowercase())
                    .collect();
                (bucket.into(), keywords)
            })
            .collect();

        Self { buckets }
    }

    /// Load a JSON object of `{ "bucket": ["keyword", ...] }`
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let raw: BTreeMap<String, Vec<String>> = read_json(path, "keyword bucket")?;
        tracing::debug!(buckets = raw.len(), path = %path.display(), "Loaded keyword buckets");
        Ok(Self::new(raw))
    }

    /// Count, per bucket, the distinct keywords found in `text`
    ///
    /// `text` is expected to be preprocessed already.
    pub fn score(&self, text: &str) -> BucketScores {
        self.buckets
            .iter()
            .map(|(bucket, keywords)| {
                let hits = keywords
                    .iter()
                    .filter(|kw| kw.chars().count() >= MIN_KEYWORD_LEN)
                    .filter(|kw| text.contains(kw.as_str()))
                    .count();
                (bucket.clone(), hits)
            })
            .collect()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn buckets(&self) -> &KeywordBucketMap {
        &self.buckets
    }
}
