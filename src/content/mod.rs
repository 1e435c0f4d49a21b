// Content bank and response selection

mod bank;
mod chooser;

pub use bank::{BucketContent, ContentBank, CRISIS_BUCKET, CRISIS_FALLBACK};
pub use chooser::{ResponseChooser, GENERIC_FALLBACK, NO_BUCKET_FALLBACK};
