/// FER+ emotion recognizer using ONNX Runtime via `ort`.
///
/// Feeds a 64×64 grayscale face crop (raw 0–255 intensities) to the
/// `emotion-ferplus-8` model and converts its eight logits to percentages.
use std::path::Path;

use crate::detection::infrastructure::execution_provider::build_session;
use crate::emotion::domain::emotion_recognizer::EmotionRecognizer;
use crate::emotion::domain::emotion_scores::EmotionScores;

const INPUT_SIZE: u32 = 64;

/// Model output order, mapped onto the label vocabulary used for reporting.
const MODEL_LABELS: [&str; 8] = [
    "neutral", "happy", "surprise", "sad", "angry", "disgust", "fear", "contempt",
];

/// Order in which scores are reported.
const REPORT_ORDER: [&str; 8] = [
    "angry", "disgust", "fear", "happy", "sad", "surprise", "neutral", "contempt",
];

pub struct OnnxFerPlusRecognizer {
    session: ort::session::Session,
}

impl OnnxFerPlusRecognizer {
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            session: build_session(model_path)?,
        })
    }
}

impl EmotionRecognizer for OnnxFerPlusRecognizer {
    fn recognize(
        &mut self,
        face: &image::RgbImage,
    ) -> Result<EmotionScores, Box<dyn std::error::Error>> {
        let tensor = preprocess(face);
        let input_value = ort::value::Tensor::from_array(tensor)?;
        let outputs = self.session.run(ort::inputs![input_value])?;
        if outputs.len() == 0 {
            return Err("FER+ model produced no outputs".into());
        }
        let logits = outputs[0].try_extract_array::<f32>()?;
        let logits = logits.as_slice().ok_or("Cannot get logits slice")?;
        if logits.len() < MODEL_LABELS.len() {
            return Err(format!(
                "FER+ model expected {} logits, got {}",
                MODEL_LABELS.len(),
                logits.len()
            )
            .into());
        }

        Ok(to_scores(&softmax(&logits[..MODEL_LABELS.len()])))
    }
}

/// Grayscale, resize to 64×64, NCHW float32 with raw intensities.
fn preprocess(face: &image::RgbImage) -> ndarray::Array4<f32> {
    let gray = image::imageops::grayscale(face);
    let resized = image::imageops::resize(
        &gray,
        INPUT_SIZE,
        INPUT_SIZE,
        image::imageops::FilterType::Triangle,
    );

    let s = INPUT_SIZE as usize;
    let mut tensor = ndarray::Array4::<f32>::zeros((1, 1, s, s));
    for (x, y, pixel) in resized.enumerate_pixels() {
        tensor[[0, 0, y as usize, x as usize]] = pixel.0[0] as f32;
    }
    tensor
}

fn softmax(logits: &[f32]) -> Vec<f64> {
    let max = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max) as f64;
    let exps: Vec<f64> = logits.iter().map(|&l| (l as f64 - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}

/// Map model-ordered probabilities to percentages in report order.
fn to_scores(probabilities: &[f64]) -> EmotionScores {
    EmotionScores::from_pairs(REPORT_ORDER.iter().filter_map(|&label| {
        MODEL_LABELS
            .iter()
            .position(|&l| l == label)
            .and_then(|i| probabilities.get(i))
            .map(|p| (label, p * 100.0))
    }))
}
