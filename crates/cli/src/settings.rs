use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use moodwatch_core::detection::infrastructure::onnx_yolo_detector::DEFAULT_CONFIDENCE;
use moodwatch_core::emotion::domain::negative_emotion_policy::{
    NegativeEmotionPolicy, DEFAULT_NEGATIVE_EMOTIONS,
};
use moodwatch_core::explanation::infrastructure::gemini_explainer::GeminiConfig;
use moodwatch_core::reporting::domain::notifier::EscalationTargets;
use moodwatch_core::shared::constants::{APP_DIR_NAME, GEMINI_API_BASE, GEMINI_MODEL_ID};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no API key configured; pass --api-key or set \"api_key\" in {0}")]
    MissingApiKey(String),
    #[error("confidence must be between 0.0 and 1.0, got {0}")]
    InvalidConfidence(f64),
    #[error("escalation targets must be two names, got {0}")]
    InvalidTargets(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model_id: String,
    pub confidence: f64,
    pub negative_emotions: Vec<String>,
    pub escalation_targets: (String, String),
    /// Directory checked for model files before downloading.
    pub models_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let targets = EscalationTargets::default();
        Self {
            api_key: None,
            api_base: GEMINI_API_BASE.to_string(),
            model_id: GEMINI_MODEL_ID.to_string(),
            confidence: DEFAULT_CONFIDENCE,
            negative_emotions: DEFAULT_NEGATIVE_EMOTIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            escalation_targets: (targets.primary, targets.secondary),
            models_dir: None,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join("settings.json"))
    }

    /// Load from the platform config directory, or defaults if absent.
    pub fn load() -> Result<Self, SettingsError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn set_escalation_targets(&mut self, names: &[String]) -> Result<(), SettingsError> {
        match names {
            [primary, secondary] => {
                self.escalation_targets = (primary.trim().to_string(), secondary.trim().to_string());
                Ok(())
            }
            _ => Err(SettingsError::InvalidTargets(names.len())),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(SettingsError::InvalidConfidence(self.confidence));
        }
        self.api_key()?;
        Ok(())
    }

    fn api_key(&self) -> Result<&str, SettingsError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                let location = Self::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "settings.json".to_string());
                SettingsError::MissingApiKey(location)
            })
    }

    pub fn gemini_config(&self) -> Result<GeminiConfig, SettingsError> {
        let mut config = GeminiConfig::new(self.api_key()?);
        config.api_base = self.api_base.clone();
        config.model_id = self.model_id.clone();
        Ok(config)
    }

    pub fn policy(&self) -> NegativeEmotionPolicy {
        NegativeEmotionPolicy::new(&self.negative_emotions)
    }

    pub fn targets(&self) -> EscalationTargets {
        EscalationTargets::new(
            self.escalation_targets.0.clone(),
            self.escalation_targets.1.clone(),
        )
    }
}
