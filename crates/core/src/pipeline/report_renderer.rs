use crate::emotion::domain::face_analysis::FaceAnalysis;
use crate::explanation::domain::explainer::ExplainError;
use crate::reporting::domain::notifier::EscalationNotice;
use crate::reporting::domain::report_sink::ReportSink;

pub const NO_FACE_MESSAGE: &str = "No face detected in the image.";

pub fn render_no_face(sink: &mut dyn ReportSink) {
    sink.text(NO_FACE_MESSAGE);
}

pub fn render_failure(sink: &mut dyn ReportSink, error: &dyn std::error::Error) {
    sink.text(&format!("An error occurred: {error}"));
}

/// Display text for the explanation slot; failures become readable text.
pub fn explanation_text(explanation: &Result<String, ExplainError>) -> String {
    match explanation {
        Ok(text) => text.clone(),
        Err(e) if e.is_retryable() => {
            format!("Explanation unavailable: {e} (temporary failure, try again later)")
        }
        Err(e) => format!("Explanation unavailable: {e}"),
    }
}

/// Render a completed analysis.
///
/// Order: dominant emotion, escalation warning (if any), explanation,
/// per-emotion breakdown, face region, face confidence.
pub fn render_analysis(
    sink: &mut dyn ReportSink,
    analysis: &FaceAnalysis,
    notice: Option<&EscalationNotice>,
    explanation: &Result<String, ExplainError>,
) {
    sink.heading(&format!("Dominant emotion: {}", analysis.dominant_emotion));

    if let Some(notice) = notice {
        sink.warning(&notice.headline());
        sink.text(&notice.details());
    }

    sink.heading("Gemini response:");
    sink.text(&explanation_text(explanation));

    sink.heading("All emotions (probabilities):");
    for line in analysis.emotions.breakdown_lines() {
        sink.item(&line);
    }

    sink.heading("Face region:");
    sink.item(&format!("Coordinates: {}", analysis.region));
    sink.item(&format!("Face confidence: {:.2}", analysis.face_confidence));
}
