// Crisis detection module

mod detector;

pub use detector::{CrisisDetector, CrisisPhraseList, PhraseIssue};
