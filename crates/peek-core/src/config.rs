use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Backend used to render hosted documents. Stored for the settings command;
/// the scanner always builds the Google viewer URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocViewer {
    #[default]
    Google,
}

/// Popup appearance shared by every preview (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    /// Theme name passed to the popup renderer for media previews.
    pub theme: String,
    /// Delay before the popup appears, in milliseconds.
    pub show_delay_ms: u64,
    /// Delay before the popup hides, in milliseconds.
    pub hide_delay_ms: u64,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            theme: "peek".to_string(),
            show_delay_ms: 500,
            hide_delay_ms: 500,
        }
    }
}

/// Global configuration loaded from `~/.config/peek/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeekConfig {
    /// Preferred document viewer (`docViewer` in the extension settings).
    #[serde(default)]
    pub doc_viewer: DocViewer,
    #[serde(default)]
    pub popup: PopupConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("peek")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PeekConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PeekConfig::default();
        save_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<PeekConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: PeekConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Write `cfg` to the default config path.
pub fn save(cfg: &PeekConfig) -> Result<()> {
    save_to(&config_path()?, cfg)
}

pub fn save_to(path: &Path, cfg: &PeekConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
    Ok(())
}
