use std::fmt;

use crate::emotion::domain::emotion_scores::EmotionScores;
use crate::shared::face_region::FaceRegion;

/// Emotion analysis of one detected face.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceAnalysis {
    pub dominant_emotion: String,
    pub emotions: EmotionScores,
    pub region: FaceRegion,
    pub face_confidence: f64,
}

impl FaceAnalysis {
    /// Builds an analysis whose dominant emotion is derived from `emotions`.
    ///
    /// Returns `None` when `emotions` is empty.
    pub fn from_scores(
        emotions: EmotionScores,
        region: FaceRegion,
        face_confidence: f64,
    ) -> Option<Self> {
        let dominant_emotion = emotions.dominant()?.0.to_string();
        Some(Self {
            dominant_emotion,
            emotions,
            region,
            face_confidence,
        })
    }
}

impl fmt::Display for FaceAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dominant_emotion: {}, emotion: {}, region: {{{}}}, face_confidence: {:.2}",
            self.dominant_emotion, self.emotions, self.region, self.face_confidence
        )
    }
}
