use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::emotion::domain::face_analysis::FaceAnalysis;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("could not decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("emotion model failed: {0}")]
    Inference(String),
    #[error("detected face region {0} contains no pixels")]
    EmptyCrop(String),
}

/// Domain interface for the end-to-end facial emotion classifier.
///
/// Returns one analysis per detected face; an empty vector means no face
/// was found. Callers that only need one face take the first element.
pub trait EmotionClassifier: Send {
    fn analyze(&mut self, image_path: &Path) -> Result<Vec<FaceAnalysis>, ClassifyError>;
}
