use crate::config::PathOverrides;
use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub paths: Option<PathsConfig>,
    pub extract: Option<ExtractConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    pub html: Option<String>,
    pub json: Option<String>,
    pub csv: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExtractConfig {
    /// 頁面中存放座標陣列的 JavaScript 變數名稱
    pub variable: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn overrides(&self) -> PathOverrides {
        let paths = self.paths.clone().unwrap_or_default();
        PathOverrides {
            html: paths.html,
            json: paths.json,
            csv: paths.csv,
            variable: self.extract.as_ref().and_then(|e| e.variable.clone()),
        }
    }
}
