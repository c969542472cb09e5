use crate::reporting::domain::notifier::{EscalationNotice, Notifier};

/// Delivers escalations as warning-level log records.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: &EscalationNotice) {
        log::warn!(
            "Escalation to {} and {}: dominant emotion {} (confidence {:.2}); {}",
            notice.targets.primary,
            notice.targets.secondary,
            notice.emotion,
            notice.analysis.face_confidence,
            notice.analysis
        );
    }
}
