use thiserror::Error;

use crate::emotion::domain::emotion_classifier::{ClassifyError, EmotionClassifier};
use crate::emotion::domain::face_analysis::FaceAnalysis;
use crate::emotion::domain::negative_emotion_policy::NegativeEmotionPolicy;
use crate::explanation::domain::explainer::{ExplainError, Explainer};
use crate::explanation::domain::prompt::build_prompt;
use crate::pipeline::report_renderer::{render_analysis, render_failure, render_no_face};
use crate::pipeline::upload_store::{Upload, UploadStore};
use crate::reporting::domain::notifier::{EscalationNotice, EscalationTargets, Notifier};
use crate::reporting::domain::report_sink::ReportSink;

/// Stages of one analysis request, in the order they can be entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisStage {
    Idle,
    ImageReceived,
    Classified,
    Notified,
    Explained,
    Rendered,
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("unsupported image format for {0} (expected jpg, jpeg or png)")]
    UnsupportedFormat(String),
    #[error("failed to store uploaded image: {0}")]
    Upload(#[source] std::io::Error),
    #[error(transparent)]
    Classification(#[from] ClassifyError),
}

#[derive(Debug)]
pub struct CompletedAnalysis {
    pub analysis: FaceAnalysis,
    pub notified: bool,
    pub explanation: Result<String, ExplainError>,
}

#[derive(Debug)]
pub enum AnalysisOutcome {
    NoFace,
    Failed(AnalysisError),
    Completed(CompletedAnalysis),
}

/// Result of one request: the stages entered and how it ended.
#[derive(Debug)]
pub struct AnalysisRun {
    pub stages: Vec<AnalysisStage>,
    pub outcome: AnalysisOutcome,
}

/// Upload analysis pipeline: store → classify → escalate → explain → render.
///
/// Every failure is rendered to the sink; nothing propagates to the caller.
/// Only the first face the classifier reports is analyzed.
pub struct AnalyzeUploadUseCase {
    classifier: Box<dyn EmotionClassifier>,
    explainer: Box<dyn Explainer>,
    notifier: Box<dyn Notifier>,
    policy: NegativeEmotionPolicy,
    targets: EscalationTargets,
    upload_store: UploadStore,
}

impl AnalyzeUploadUseCase {
    pub fn new(
        classifier: Box<dyn EmotionClassifier>,
        explainer: Box<dyn Explainer>,
        notifier: Box<dyn Notifier>,
        policy: NegativeEmotionPolicy,
        targets: EscalationTargets,
        upload_store: UploadStore,
    ) -> Self {
        Self {
            classifier,
            explainer,
            notifier,
            policy,
            targets,
            upload_store,
        }
    }

    pub fn execute(&mut self, upload: &Upload, sink: &mut dyn ReportSink) -> AnalysisRun {
        let mut stages = vec![AnalysisStage::Idle];
        let outcome = self.run(upload, sink, &mut stages);
        enter(&mut stages, AnalysisStage::Rendered);
        AnalysisRun { stages, outcome }
    }

    fn run(
        &mut self,
        upload: &Upload,
        sink: &mut dyn ReportSink,
        stages: &mut Vec<AnalysisStage>,
    ) -> AnalysisOutcome {
        let Some(extension) = upload.image_extension() else {
            return fail(
                sink,
                AnalysisError::UnsupportedFormat(upload.file_name.clone()),
            );
        };
        let stored = match self.upload_store.persist(upload, &extension) {
            Ok(file) => file,
            Err(e) => return fail(sink, AnalysisError::Upload(e)),
        };
        enter(stages, AnalysisStage::ImageReceived);
        log::info!(
            "Received {} ({} bytes)",
            upload.file_name,
            upload.bytes.len()
        );

        let faces = match self.classifier.analyze(stored.path()) {
            Ok(faces) => faces,
            Err(e) => return fail(sink, e.into()),
        };
        drop(stored);

        let Some(analysis) = faces.into_iter().next() else {
            log::info!("No face detected in {}", upload.file_name);
            render_no_face(sink);
            return AnalysisOutcome::NoFace;
        };
        enter(stages, AnalysisStage::Classified);
        log::info!(
            "Dominant emotion: {} (face confidence {:.2})",
            analysis.dominant_emotion,
            analysis.face_confidence
        );

        let notice = if self.policy.is_negative(&analysis.dominant_emotion) {
            let notice = EscalationNotice {
                targets: self.targets.clone(),
                emotion: analysis.dominant_emotion.clone(),
                analysis: analysis.clone(),
            };
            self.notifier.notify(&notice);
            enter(stages, AnalysisStage::Notified);
            Some(notice)
        } else {
            None
        };

        let explanation = self.explainer.explain(&build_prompt(&analysis));
        if let Err(e) = &explanation {
            log::warn!("Explanation request failed (retryable: {}): {e}", e.is_retryable());
        }
        enter(stages, AnalysisStage::Explained);

        render_analysis(sink, &analysis, notice.as_ref(), &explanation);

        AnalysisOutcome::Completed(CompletedAnalysis {
            analysis,
            notified: notice.is_some(),
            explanation,
        })
    }
}

fn enter(stages: &mut Vec<AnalysisStage>, stage: AnalysisStage) {
    log::debug!("Analysis stage: {stage:?}");
    stages.push(stage);
}

fn fail(sink: &mut dyn ReportSink, error: AnalysisError) -> AnalysisOutcome {
    log::error!("Analysis failed: {error}");
    render_failure(sink, &error);
    AnalysisOutcome::Failed(error)
}
