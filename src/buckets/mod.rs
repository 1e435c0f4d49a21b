// Support bucket classification
// Keyword scoring and max-score bucket selection

mod keywords;
mod selector;

pub use keywords::{BucketScores, KeywordBucketMap, KeywordScorer, MIN_KEYWORD_LEN};
pub use selector::select_bucket;
