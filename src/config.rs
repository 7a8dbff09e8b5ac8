use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TaggerError};
use crate::glossary::GlossarySource;
use crate::panel::{PanelSize, MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH};
use crate::util::is_http_location;

pub const CONFIG_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggerConfig {
    pub version: u32,
    /// `"bundled"`, an http(s) URL or a file path. Unset means bundled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossary_location: Option<String>,
    #[serde(default = "default_true")]
    pub cache_glossary: bool,
    #[serde(default)]
    pub panel: PanelSize,
}

fn default_true() -> bool {
    true
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            glossary_location: None,
            cache_glossary: true,
            panel: PanelSize::default(),
        }
    }
}

impl TaggerConfig {
    pub fn glossary_source(&self) -> GlossarySource {
        self.glossary_location
            .as_deref()
            .map(GlossarySource::from_location)
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(TaggerError::InvalidConfig(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        if let Some(location) = &self.glossary_location {
            validate_glossary_location(location)?;
        }
        validate_panel(&self.panel)
    }
}

pub fn validate_glossary_location(location: &str) -> Result<()> {
    let location = location.trim();
    if location.is_empty() {
        return Err(TaggerError::InvalidConfig(
            "glossary location is empty".into(),
        ));
    }
    if is_http_location(location) {
        let host = location
            .split_once("://")
            .map(|(_, rest)| rest.split(['/', '?', '#']).next().unwrap_or(""))
            .unwrap_or("");
        if host.is_empty() {
            return Err(TaggerError::InvalidConfig(format!(
                "glossary URL has no host: {location}"
            )));
        }
    }
    Ok(())
}

pub fn validate_panel(panel: &PanelSize) -> Result<()> {
    if panel.width < MIN_PANEL_WIDTH || panel.height < MIN_PANEL_HEIGHT {
        return Err(TaggerError::InvalidConfig(format!(
            "panel {}x{} is smaller than the minimum {}x{}",
            panel.width, panel.height, MIN_PANEL_WIDTH, MIN_PANEL_HEIGHT
        )));
    }
    Ok(())
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".shot-tagger").join("config.json"))
}

pub fn load_config() -> Option<TaggerConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_or_default() -> TaggerConfig {
    load_config().unwrap_or_default()
}

pub fn save_config(config: &TaggerConfig) -> Result<()> {
    let path = config_path()
        .ok_or_else(|| TaggerError::Custom("Cannot find home directory".into()))?;
    save_config_to(&path, config)
}

pub fn load_config_from(path: &Path) -> Option<TaggerConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
            None
        }
    }
}

pub fn save_config_to(path: &Path, config: &TaggerConfig) -> Result<()> {
    config.validate()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    Ok(())
}
