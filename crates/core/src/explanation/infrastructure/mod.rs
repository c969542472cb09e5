pub mod gemini_explainer;
pub mod http_transport;
