// Per-message classification pipeline

use std::sync::Arc;

use super::types::{ChatRequest, ChatResponse, NO_BUCKET_LABEL};
use crate::buckets::{select_bucket, KeywordScorer};
use crate::config::DataConfig;
use crate::content::{ContentBank, ResponseChooser, CRISIS_BUCKET};
use crate::crisis::CrisisDetector;
use crate::errors::LoadError;
use crate::random::{RandomSource, ThreadRandom};
use crate::text::preprocess;

/// Read-only tables loaded once at startup
#[derive(Debug, Default)]
pub struct Knowledge {
    pub crisis: CrisisDetector,
    pub keywords: KeywordScorer,
    pub content: Arc<ContentBank>,
}

impl Knowledge {
    pub fn new(crisis: CrisisDetector, keywords: KeywordScorer, content: ContentBank) -> Self {
        Self {
            crisis,
            keywords,
            content: Arc::new(content),
        }
    }

    /// Load every table named in the data configuration
    pub fn load(data: &DataConfig) -> Result<Self, LoadError> {
        let crisis = CrisisDetector::load_from_file(&data.crisis_phrases_path)?;
        let content = ContentBank::load_from_file(&data.content_bank_path)?;

        let keywords = match &data.keywords_path {
            Some(path) => KeywordScorer::load_from_file(path)?,
            None => KeywordScorer::empty(),
        };

        if keywords.bucket_count() == 0 {
            tracing::warn!(
                "No keyword buckets configured; non-crisis messages will always get the fallback response"
            );
        }

        tracing::info!(
            crisis_phrases = crisis.phrases().len(),
            keyword_buckets = keywords.bucket_count(),
            content_buckets = content.len(),
            "Knowledge tables loaded"
        );

        Ok(Self::new(crisis, keywords, content))
    }
}

/// Stateless request handler; cheap to clone and share across tasks
#[derive(Clone)]
pub struct Responder {
    knowledge: Arc<Knowledge>,
    chooser: ResponseChooser,
    rng: Arc<dyn RandomSource>,
}

impl Responder {
    pub fn new(knowledge: Knowledge) -> Self {
        Self::with_random(knowledge, Arc::new(ThreadRandom))
    }

    /// Build a responder with an explicit random source
    pub fn with_random(knowledge: Knowledge, rng: Arc<dyn RandomSource>) -> Self {
        let chooser = ResponseChooser::new(Arc::clone(&knowledge.content));
        Self {
            knowledge: Arc::new(knowledge),
            chooser,
            rng,
        }
    }

    /// Classify one message and pick the reply
    pub fn respond(&self, request: &ChatRequest) -> ChatResponse {
        let text = preprocess(&request.message);

        // Crisis phrases short-circuit everything else
        if let Some(phrase) = self.knowledge.crisis.detect(&text) {
            return ChatResponse {
                bucket: CRISIS_BUCKET.to_string(),
                response: self.knowledge.content.crisis_response().to_string(),
                matched: Some(phrase.to_string()),
                scores: None,
            };
        }

        let scores = self.knowledge.keywords.score(&text);
        let bucket = select_bucket(&scores, self.rng.as_ref());
        let response = self.chooser.choose(bucket.as_deref(), self.rng.as_ref());

        tracing::debug!(
            bucket = bucket.as_deref().unwrap_or(NO_BUCKET_LABEL),
            scores = ?scores,
            "Message classified"
        );

        ChatResponse {
            bucket: bucket.unwrap_or_else(|| NO_BUCKET_LABEL.to_string()),
            response,
            matched: None,
            scores: Some(scores),
        }
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }
}
