// Response selection for a classified bucket

use std::sync::Arc;

use super::bank::ContentBank;
use crate::random::{choose, RandomSource};

/// Returned when no bucket matched
pub const NO_BUCKET_FALLBACK: &str = "I’m not sure I fully understand. Would you like to try a short breathing exercise or talk to a counsellor?";

/// Returned when the bucket has no responses in the bank
pub const GENERIC_FALLBACK: &str = "I’m here to help — would you like to talk to a counsellor?";

#[derive(Clone)]
pub struct ResponseChooser {
    bank: Arc<ContentBank>,
}

impl ResponseChooser {
    pub fn new(bank: Arc<ContentBank>) -> Self {
        Self { bank }
    }

    /// Pick a response for `bucket` uniformly at random
    pub fn choose(&self, bucket: Option<&str>, rng: &dyn RandomSource) -> String {
        let Some(bucket) = bucket else {
            return NO_BUCKET_FALLBACK.to_string();
        };

        match choose(rng, self.bank.responses(bucket)) {
            Some(response) => response.clone(),
            None => {
                tracing::debug!(bucket = %bucket, "No responses for bucket, using fallback");
                GENERIC_FALLBACK.to_string()
            }
        }
    }
}
