use serde::{Deserialize, Serialize};

use crate::explanation::domain::explainer::{ExplainError, Explainer};
use crate::shared::constants::{GEMINI_API_BASE, GEMINI_MODEL_ID, NO_RESPONSE_PLACEHOLDER};

use super::http_transport::{HttpReply, HttpTransport, ReqwestTransport};

/// Endpoint and credentials for the `generateContent` API.
///
/// The API key has no default; it must be supplied by configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_base: String,
    pub model_id: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: GEMINI_API_BASE.to_string(),
            model_id: GEMINI_MODEL_ID.to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}?key={}", self.endpoint_without_key(), self.api_key)
    }

    /// Endpoint suitable for logs.
    pub fn endpoint_without_key(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model_id
        )
    }
}

#[derive(Serialize, Deserialize, Debug)]
struct Part {
    text: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Debug)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    /// Absent and `null` both mean no candidates.
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

/// Explainer backed by a single synchronous `generateContent` call.
///
/// No retries and no caching: every call issues exactly one POST.
pub struct GeminiExplainer {
    config: GeminiConfig,
    transport: Box<dyn HttpTransport>,
}

impl GeminiExplainer {
    pub fn new(
        config: GeminiConfig,
        transport: Box<dyn HttpTransport>,
    ) -> Result<Self, ExplainError> {
        if config.api_key.trim().is_empty() {
            return Err(ExplainError::MissingApiKey);
        }
        Ok(Self { config, transport })
    }

    pub fn with_reqwest(config: GeminiConfig) -> Result<Self, ExplainError> {
        Self::new(config, Box::new(ReqwestTransport::new()))
    }
}

impl Explainer for GeminiExplainer {
    fn explain(&self, prompt: &str) -> Result<String, ExplainError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };
        let body =
            serde_json::to_vec(&request).map_err(|e| ExplainError::Malformed(e.to_string()))?;

        log::debug!("POST {}", self.config.endpoint_without_key());
        let reply = self
            .transport
            .post_json(&self.config.endpoint(), body)
            .map_err(|e| ExplainError::Transport(e.to_string()))?;

        interpret(reply)
    }
}

/// Extract `candidates[0].content.parts[0].text` from a reply.
fn interpret(reply: HttpReply) -> Result<String, ExplainError> {
    if reply.status != 200 {
        return Err(ExplainError::Status {
            status: reply.status,
            body: reply.body,
        });
    }

    let response: GenerateContentResponse = serde_json::from_str(&reply.body)
        .map_err(|e| ExplainError::Malformed(e.to_string()))?;

    let Some(candidate) = response.candidates.unwrap_or_default().into_iter().next() else {
        return Ok(NO_RESPONSE_PLACEHOLDER.to_string());
    };

    candidate
        .content
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| ExplainError::Malformed("first candidate has no text part".into()))
}
