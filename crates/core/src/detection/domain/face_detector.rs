use crate::shared::face_region::FaceRegion;
use crate::shared::frame::Frame;

/// A face found in a still image, with the detector's confidence (0–1).
#[derive(Clone, Debug, PartialEq)]
pub struct DetectedFace {
    pub region: FaceRegion,
    pub confidence: f64,
}

/// Domain interface for face detection.
///
/// Implementations return faces ordered by descending confidence.
/// Model sessions need exclusive access during inference, hence `&mut self`.
pub trait FaceDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<DetectedFace>, Box<dyn std::error::Error>>;
}
