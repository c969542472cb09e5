use std::collections::BTreeSet;

/// Labels treated as negative when they are the dominant emotion.
pub const DEFAULT_NEGATIVE_EMOTIONS: &[&str] = &["angry", "sad", "fear", "disgust"];

/// Set of emotion labels that trigger an escalation. Matching ignores case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegativeEmotionPolicy {
    labels: BTreeSet<String>,
}

impl NegativeEmotionPolicy {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            labels: labels
                .into_iter()
                .map(|l| l.as_ref().trim().to_lowercase())
                .filter(|l| !l.is_empty())
                .collect(),
        }
    }

    pub fn is_negative(&self, emotion: &str) -> bool {
        self.labels.contains(&emotion.trim().to_lowercase())
    }
}

impl Default for NegativeEmotionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_NEGATIVE_EMOTIONS)
    }
}
