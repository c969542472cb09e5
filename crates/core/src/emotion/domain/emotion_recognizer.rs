use crate::emotion::domain::emotion_scores::EmotionScores;

/// Domain interface for classifying the emotion of a cropped face.
pub trait EmotionRecognizer: Send {
    fn recognize(
        &mut self,
        face: &image::RgbImage,
    ) -> Result<EmotionScores, Box<dyn std::error::Error>>;
}
