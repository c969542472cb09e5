pub mod face_emotion_classifier;
pub mod onnx_ferplus_recognizer;
