use std::fmt;

use crate::emotion::domain::face_analysis::FaceAnalysis;

/// The two recipients of an escalation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscalationTargets {
    pub primary: String,
    pub secondary: String,
}

impl EscalationTargets {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    pub fn as_pair(&self) -> (&str, &str) {
        (&self.primary, &self.secondary)
    }
}

impl Default for EscalationTargets {
    fn default() -> Self {
        Self::new("Psychologist", "Commander")
    }
}

impl fmt::Display for EscalationTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {}", self.primary, self.secondary)
    }
}

/// A negative dominant emotion, addressed to the escalation targets.
#[derive(Clone, Debug, PartialEq)]
pub struct EscalationNotice {
    pub targets: EscalationTargets,
    pub emotion: String,
    pub analysis: FaceAnalysis,
}

impl EscalationNotice {
    pub fn headline(&self) -> String {
        format!(
            "Notification for {}: negative emotion detected ({}).",
            self.targets, self.emotion
        )
    }

    pub fn details(&self) -> String {
        format!("Supporting data: {}", self.analysis)
    }
}

/// Delivers escalation notices.
pub trait Notifier: Send {
    fn notify(&mut self, notice: &EscalationNotice);
}
