use crate::pipeline::DEFAULT_PREVIEW_CHARS;
use crate::sanitize::{DEFAULT_EXTENSION, DEFAULT_PREFIX};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub default_prefix: String,
    pub output_extension: String,
    pub preview_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_prefix: DEFAULT_PREFIX.to_string(),
            output_extension: DEFAULT_EXTENSION.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub config_path: PathBuf,
}

pub fn app_paths() -> Result<AppPaths> {
    let proj = ProjectDirs::from("com", "textdate", "textdate-renamer")
        .context("could not determine the OS config directory")?;
    let config_dir = proj.config_dir().to_path_buf();
    Ok(AppPaths {
        config_path: config_dir.join("config.toml"),
        config_dir,
    })
}

pub fn load_config() -> Result<AppConfig> {
    let paths = app_paths()?;
    load_config_from(&paths.config_path)
}

/// A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read config file: {}", path.display()))?;

    let config = toml::from_str::<AppConfig>(&raw)
        .with_context(|| format!("could not parse config file: {}", path.display()))?;
    Ok(config)
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    let paths = app_paths()?;
    save_config_to(config, &paths.config_path)
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("could not create config directory: {}", dir.display()))?;
    }
    let body = toml::to_string_pretty(config).context("could not serialize config")?;
    fs::write(path, body)
        .with_context(|| format!("could not write config file: {}", path.display()))?;
    Ok(())
}
