//! Branding configuration.
//!
//! An optional YAML file supplies brand values at runtime; everything has a
//! hardcoded fallback so the system works with no config at all.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

use crate::error::Result;

/// Fallback messaging endpoint used when no `waLink` is configured.
pub const FALLBACK_ENDPOINT: &str = "https://wa.me/971561234567";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandConfig {
    /// Display name of the brand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Messaging link; any query portion is stripped before use
    #[serde(rename = "waLink", skip_serializing_if = "Option::is_none")]
    pub wa_link: Option<String>,
}

impl BrandConfig {
    /// Load configuration from a YAML file. A missing file is the default
    /// configuration, not an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(BrandConfig::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml_ng::from_str(&content)?)
    }

    /// The base URL for outbound messages: the configured `waLink` with its
    /// query stripped, else the fixed fallback.
    pub fn message_endpoint(&self) -> Result<Url> {
        let base = self
            .wa_link
            .as_deref()
            .map(|link| link.split('?').next().unwrap_or(link))
            .filter(|base| !base.trim().is_empty())
            .unwrap_or(FALLBACK_ENDPOINT);
        Ok(Url::parse(base)?)
    }
}
