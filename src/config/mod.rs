use crate::core::registry::DEFAULT_MANUAL_CODE;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// A shift code as written in the configuration file (or a plan file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeEntry {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default)]
    pub break_minutes: u32,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_manual_code")]
    pub manual_hours_code: String,
    #[serde(default = "default_full_day_wrap")]
    pub full_day_wrap: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default)]
    pub codes: Vec<CodeEntry>,
}

fn default_manual_code() -> String {
    DEFAULT_MANUAL_CODE.to_string()
}
fn default_full_day_wrap() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manual_hours_code: default_manual_code(),
            full_day_wrap: default_full_day_wrap(),
            export_dir: None,
            separator_char: default_separator_char(),
            codes: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftcal")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".shiftcal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftcal.conf")
    }

    /// Load configuration from `path` (or the standard location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), codes = cfg.codes.len(), "configuration loaded");
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(format!("{}: {e}", path.display())))?;
        Ok(())
    }

    /// Add or replace a code entry (matched on the normalized code).
    pub fn upsert_code(&mut self, entry: CodeEntry) {
        let key = entry.code.trim().to_lowercase();
        match self
            .codes
            .iter_mut()
            .find(|c| c.code.trim().to_lowercase() == key)
        {
            Some(existing) => *existing = entry,
            None => self.codes.push(entry),
        }
    }

    /// Directory for exports: `export_dir` when set, otherwise the current one.
    pub fn export_dir(&self) -> PathBuf {
        match &self.export_dir {
            Some(dir) if !dir.trim().is_empty() => expand_tilde(dir.trim()),
            _ => PathBuf::from("."),
        }
    }
}
