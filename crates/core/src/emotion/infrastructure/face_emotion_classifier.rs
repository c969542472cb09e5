use std::path::Path;

use crate::detection::domain::face_detector::FaceDetector;
use crate::emotion::domain::emotion_classifier::{ClassifyError, EmotionClassifier};
use crate::emotion::domain::emotion_recognizer::EmotionRecognizer;
use crate::emotion::domain::face_analysis::FaceAnalysis;
use crate::shared::frame::Frame;

/// Image-file emotion classifier: decode → detect faces → recognize each crop.
///
/// Faces are analyzed in the order the detector returns them.
pub struct FaceEmotionClassifier {
    detector: Box<dyn FaceDetector>,
    recognizer: Box<dyn EmotionRecognizer>,
}

impl FaceEmotionClassifier {
    pub fn new(detector: Box<dyn FaceDetector>, recognizer: Box<dyn EmotionRecognizer>) -> Self {
        Self {
            detector,
            recognizer,
        }
    }
}

impl EmotionClassifier for FaceEmotionClassifier {
    fn analyze(&mut self, image_path: &Path) -> Result<Vec<FaceAnalysis>, ClassifyError> {
        let frame = load_frame(image_path)?;

        let faces = self
            .detector
            .detect(&frame)
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;
        log::debug!(
            "Detected {} face(s) in {}",
            faces.len(),
            image_path.display()
        );

        let mut analyses = Vec::with_capacity(faces.len());
        for face in faces {
            let crop = frame
                .crop(&face.region)
                .ok_or_else(|| ClassifyError::EmptyCrop(face.region.to_string()))?;
            let scores = self
                .recognizer
                .recognize(&crop)
                .map_err(|e| ClassifyError::Inference(e.to_string()))?;
            let analysis = FaceAnalysis::from_scores(scores, face.region, face.confidence)
                .ok_or_else(|| ClassifyError::Inference("model returned no scores".into()))?;
            analyses.push(analysis);
        }

        Ok(analyses)
    }
}

/// Decode an image file into an RGB frame.
pub fn load_frame(path: &Path) -> Result<Frame, ClassifyError> {
    let image = image::open(path).map_err(|source| ClassifyError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Frame::from_rgb_image(image.to_rgb8()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::face_detector::DetectedFace;
    use crate::emotion::domain::emotion_scores::EmotionScores;
    use crate::shared::face_region::FaceRegion;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    // --- Stubs ---

    struct StubDetector {
        faces: Vec<DetectedFace>,
    }

    impl FaceDetector for StubDetector {
        fn detect(
            &mut self,
            _frame: &Frame,
        ) -> Result<Vec<DetectedFace>, Box<dyn std::error::Error>> {
            Ok(self.faces.clone())
        }
    }

    struct FailingDetector;

    impl FaceDetector for FailingDetector {
        fn detect(
            &mut self,
            _frame: &Frame,
        ) -> Result<Vec<DetectedFace>, Box<dyn std::error::Error>> {
            Err("session crashed".into())
        }
    }

    struct StubRecognizer {
        scores: EmotionScores,
        crop_sizes: Arc<Mutex<Vec<(u32, u32)>>>,
    }

    impl StubRecognizer {
        fn new(scores: EmotionScores) -> Self {
            Self {
                scores,
                crop_sizes: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl EmotionRecognizer for StubRecognizer {
        fn recognize(
            &mut self,
            face: &image::RgbImage,
        ) -> Result<EmotionScores, Box<dyn std::error::Error>> {
            self.crop_sizes.lock().unwrap().push(face.dimensions());
            Ok(self.scores.clone())
        }
    }

    // --- Helpers ---

    fn write_test_image(dir: &Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("face.png");
        image::RgbImage::from_pixel(width, height, image::Rgb([50, 100, 200]))
            .save(&path)
            .unwrap();
        path
    }

    fn face(x: i32, y: i32, w: i32, h: i32, confidence: f64) -> DetectedFace {
        DetectedFace {
            region: FaceRegion::new(x, y, w, h),
            confidence,
        }
    }

    fn angry_scores() -> EmotionScores {
        EmotionScores::from_pairs([("angry", 80.0), ("neutral", 20.0)])
    }

    // --- Tests ---

    #[test]
    fn test_analyzes_each_detected_face_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), 200, 100);
        let recognizer = StubRecognizer::new(angry_scores());
        let crops = recognizer.crop_sizes.clone();

        let mut classifier = FaceEmotionClassifier::new(
            Box::new(StubDetector {
                faces: vec![face(10, 10, 40, 50, 0.9), face(100, 20, 30, 30, 0.6)],
            }),
            Box::new(recognizer),
        );

        let analyses = classifier.analyze(&path).unwrap();
        assert_eq!(analyses.len(), 2);
        assert_eq!(analyses[0].dominant_emotion, "angry");
        assert_eq!(analyses[0].region, FaceRegion::new(10, 10, 40, 50));
        assert!((analyses[0].face_confidence - 0.9).abs() < 1e-9);
        assert_eq!(*crops.lock().unwrap(), vec![(40, 50), (30, 30)]);
    }

    #[test]
    fn test_no_faces_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), 64, 64);
        let mut classifier = FaceEmotionClassifier::new(
            Box::new(StubDetector { faces: vec![] }),
            Box::new(StubRecognizer::new(angry_scores())),
        );

        assert!(classifier.analyze(&path).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_image_bytes_are_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let mut classifier = FaceEmotionClassifier::new(
            Box::new(StubDetector { faces: vec![] }),
            Box::new(StubRecognizer::new(angry_scores())),
        );

        assert!(matches!(
            classifier.analyze(&path),
            Err(ClassifyError::Decode { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let mut classifier = FaceEmotionClassifier::new(
            Box::new(StubDetector { faces: vec![] }),
            Box::new(StubRecognizer::new(angry_scores())),
        );
        assert!(matches!(
            classifier.analyze(Path::new("/nonexistent/face.jpg")),
            Err(ClassifyError::Decode { .. })
        ));
    }

    #[test]
    fn test_detector_failure_is_inference_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), 64, 64);
        let mut classifier = FaceEmotionClassifier::new(
            Box::new(FailingDetector),
            Box::new(StubRecognizer::new(angry_scores())),
        );

        let err = classifier.analyze(&path).unwrap_err();
        assert!(err.to_string().contains("session crashed"));
    }

    #[test]
    fn test_region_outside_image_is_empty_crop() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), 64, 64);
        let mut classifier = FaceEmotionClassifier::new(
            Box::new(StubDetector {
                faces: vec![face(500, 500, 10, 10, 0.9)],
            }),
            Box::new(StubRecognizer::new(angry_scores())),
        );

        assert!(matches!(
            classifier.analyze(&path),
            Err(ClassifyError::EmptyCrop(_))
        ));
    }

    #[test]
    fn test_load_frame_decodes_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), 8, 4);
        let frame = load_frame(&path).unwrap();
        assert_eq!((frame.width(), frame.height()), (8, 4));
        let pixels = frame.as_ndarray();
        assert_eq!(
            (pixels[[0, 0, 0]], pixels[[0, 0, 1]], pixels[[0, 0, 2]]),
            (50, 100, 200)
        );
    }
}
