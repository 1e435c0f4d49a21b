// Crisis phrase detector

use std::path::Path;

use crate::errors::{read_json, LoadError};

/// Ordered list of lowercase crisis phrases
#[derive(Debug, Clone, Default)]
pub struct CrisisPhraseList {
    phrases: Vec<String>,
}

impl CrisisPhraseList {
    /// Build a list, lowercasing every phrase and keeping the given order
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CrisisDetector {
    phrases: CrisisPhraseList,
}

/// Crisis phrases that will misfire against normalized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseIssue {
    /// `""` is contained in every string
    Empty,
    /// Whitespace only
    Blank,
    /// Contains characters or double spaces that normalized text never has
    Unreachable,
}

impl PhraseIssue {
    /// Check a lowercased phrase against the preprocessor's output alphabet
    pub fn check(phrase: &str) -> Option<Self> {
        if phrase.is_empty() {
            Some(PhraseIssue::Empty)
        } else if phrase.trim().is_empty() {
            Some(PhraseIssue::Blank)
        } else if phrase.contains("  ")
            || !phrase
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ')
        {
            Some(PhraseIssue::Unreachable)
        } else {
            None
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PhraseIssue::Empty => "Empty crisis phrase matches every message",
            PhraseIssue::Blank => "Blank crisis phrase matches on whitespace alone",
            PhraseIssue::Unreachable => {
                "Crisis phrase is not in normalized form and can never match"
            }
        }
    }
}

impl CrisisDetector {
    pub fn new(phrases: CrisisPhraseList) -> Self {
        for phrase in phrases.iter() {
            if let Some(issue) = PhraseIssue::check(phrase) {
                tracing::warn!(phrase = ?phrase, "{}", issue.message());
            }
        }

        Self { phrases }
    }

    /// Load crisis phrases from a JSON array of strings
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let phrases: Vec<String> = read_json(path, "crisis phrase")?;
        tracing::debug!(count = phrases.len(), path = %path.display(), "Loaded crisis phrases");
        Ok(Self::new(CrisisPhraseList::new(phrases)))
    }

    /// Return the first phrase, in list order, contained in `text`
    ///
    /// `text` is expected to be preprocessed already.
    pub fn detect(&self, text: &str) -> Option<&str> {
        let matched = self.phrases.iter().find(|phrase| text.contains(phrase));

        if let Some(phrase) = matched {
            tracing::warn!(matched = %phrase, "Crisis detected");
        }

        matched
    }

    pub fn phrases(&self) -> &CrisisPhraseList {
        &self.phrases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::preprocess;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn create_test_detector() -> CrisisDetector {
        CrisisDetector::new(CrisisPhraseList::new([
            "suicide",
            "kill myself",
            "end my life",
            "want to die",
        ]))
    }

    #[test]
    fn test_crisis_detection() {
        let detector = create_test_detector();

        assert_eq!(
            detector.detect(&preprocess("I want to kill myself")),
            Some("kill myself")
        );
        assert_eq!(
            detector.detect(&preprocess("I'm thinking about suicide")),
            Some("suicide")
        );
        assert_eq!(detector.detect(&preprocess("What is the meaning of life?")), None);
        assert_eq!(detector.detect(""), None);
    }

    #[test]
    fn test_first_phrase_in_list_order_wins() {
        let detector = create_test_detector();

        // Contains both "kill myself" and "suicide"; "suicide" is listed first
        let text = preprocess("I want to kill myself, thinking of suicide");
        assert_eq!(detector.detect(&text), Some("suicide"));

        let reordered = CrisisDetector::new(CrisisPhraseList::new(["kill myself", "suicide"]));
        assert_eq!(reordered.detect(&text), Some("kill myself"));
    }

    #[test]
    fn test_phrases_are_lowercased() {
        let detector = CrisisDetector::new(CrisisPhraseList::new(["End My Life"]));
        assert_eq!(
            detector.detect(&preprocess("I want to END my life")),
            Some("end my life")
        );
    }

    #[test]
    fn test_substring_containment() {
        let detector = create_test_detector();
        // Plain substring check, not word boundaries
        assert_eq!(detector.detect("suicidebomber"), Some("suicide"));
    }

    #[test]
    fn test_empty_list_never_matches() {
        let detector = CrisisDetector::default();
        assert!(detector.phrases().is_empty());
        assert_eq!(detector.detect("i want to kill myself"), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crisis_keywords.json");
        std::fs::write(&path, r#"["Kill Myself", "suicide"]"#).unwrap();

        let detector = CrisisDetector::load_from_file(&path).unwrap();
        assert_eq!(detector.phrases().len(), 2);
        assert_eq!(detector.detect("i will kill myself"), Some("kill myself"));
    }

    #[test]
    fn test_load_rejects_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crisis_keywords.json");
        std::fs::write(&path, r#"{"self_harm": ["suicide"]}"#).unwrap();

        assert!(matches!(
            CrisisDetector::load_from_file(&path),
            Err(LoadError::Parse { .. })
        ));
    }

    #[test]
    fn test_phrase_issue_check() {
        assert_eq!(PhraseIssue::check(""), Some(PhraseIssue::Empty));
        assert_eq!(PhraseIssue::check("   "), Some(PhraseIssue::Blank));
        assert_eq!(PhraseIssue::check("kill myself!"), Some(PhraseIssue::Unreachable));
        assert_eq!(PhraseIssue::check("kill  myself"), Some(PhraseIssue::Unreachable));
        assert_eq!(PhraseIssue::check("can't go on"), Some(PhraseIssue::Unreachable));
        assert_eq!(PhraseIssue::check("kill myself"), None);
        // Edge spaces still match inside normalized text
        assert_eq!(PhraseIssue::check(" die"), None);
        assert!(preprocess("i just want to die").contains(" die"));
    }

    /// Shared buffer used as a tracing writer
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn build_with_logs(phrases: &[&str]) -> (CrisisDetector, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let detector = tracing::subscriber::with_default(subscriber, || {
            CrisisDetector::new(CrisisPhraseList::new(phrases.iter().copied()))
        });

        let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        (detector, logs)
    }

    #[test]
    fn test_empty_phrase_is_warned() {
        let (detector, logs) = build_with_logs(&["", "kill myself"]);

        assert!(logs.contains("Empty crisis phrase matches every message"), "logs: {}", logs);
        // Kept in place so list order is preserved
        assert_eq!(detector.phrases().len(), 2);
        assert_eq!(detector.detect("i had a nice day"), Some(""));
    }

    #[test]
    fn test_unreachable_and_blank_phrases_are_warned() {
        let (_, logs) = build_with_logs(&["   ", "kill myself!"]);

        assert!(logs.contains("Blank crisis phrase"), "logs: {}", logs);
        assert!(logs.contains("can never match"), "logs: {}", logs);
    }

    #[test]
    fn test_normalized_phrases_log_nothing() {
        let (_, logs) = build_with_logs(&["kill myself", " die", "end my life"]);
        assert!(logs.is_empty(), "unexpected logs: {}", logs);
    }
}
