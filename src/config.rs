use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::theme::Theme;

/// Id of the `<script type="application/json">` block in index.html.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no browser document available")]
    NoDocument,
    #[error("malformed site config: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// What the simulated verification step resolves to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMode {
    #[default]
    Succeed,
    Fail,
}

/// How a failed verification is reported once the form unlocks again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureNotice {
    #[default]
    Silent,
    Visible,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubmissionConfig {
    pub verification_latency_ms: u32,
    pub success_hold_ms: u32,
    pub verification: VerificationMode,
    pub failure_notice: FailureNotice,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            verification_latency_ms: 1_500,
            success_hold_ms: 800,
            verification: VerificationMode::default(),
            failure_notice: FailureNotice::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub theme: Theme,
    pub submission: SubmissionConfig,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the inline config block, falling back to defaults when it is
    /// absent or unusable.
    pub fn load() -> Self {
        match read_inline_config() {
            Ok(Some(config)) => {
                info!("Loaded site config: theme={:?}", config.theme);
                config
            }
            Ok(None) => {
                info!("No inline site config, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}

fn read_inline_config() -> Result<Option<SiteConfig>, ConfigError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ConfigError::NoDocument)?;

    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };

    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(None);
    }

    SiteConfig::from_json(&raw).map(Some)
}
