use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::ClientError;
use crate::submit::SubmitOptions;

const CONFIG_DIR: &str = "split_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Client-side preferences shared by every screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub locale: String,
    pub currency_symbol: String,
    /// Seconds a transient notification stays visible.
    pub notification_secs: u64,
    /// Advisory submit timeout; `None` relies on transport-level timeouts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency_symbol: "€".into(),
            notification_secs: 5,
            submit_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn submit_options(&self) -> SubmitOptions {
        SubmitOptions {
            timeout: self.submit_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Loads and persists [`ClientConfig`] as pretty JSON, defaulting when the
/// file does not exist yet.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ClientError> {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::from_base(base.join(CONFIG_DIR))
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ClientError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, ClientError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<ClientConfig, ClientError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(ClientConfig::default())
        }
    }

    pub fn save(&self, config: &ClientConfig) -> Result<(), ClientError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn ensure_dir(path: &Path) -> Result<(), ClientError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ClientError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
