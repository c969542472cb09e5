pub const YOLO_MODEL_NAME: &str = "yolo11n-pose_widerface.onnx";
pub const YOLO_MODEL_URL: &str =
    "https://github.com/neutrinographics/faceguard/releases/download/v0.1.0/yolo11n-pose_widerface.onnx";

pub const FERPLUS_MODEL_NAME: &str = "emotion-ferplus-8.onnx";
pub const FERPLUS_MODEL_URL: &str =
    "https://github.com/onnx/models/raw/main/validated/vision/body_analysis/emotion_ferplus/model/emotion-ferplus-8.onnx";

/// Upload formats accepted at the UI boundary.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_MODEL_ID: &str = "gemini-1.5-flash-latest";

/// Returned by the explainer when the API answers 200 with no candidates.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response from Gemini";

/// Application directory name used for caches and settings.
pub const APP_DIR_NAME: &str = "Moodwatch";
