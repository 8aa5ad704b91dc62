use crate::config::CatalogSource;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_path, validate_range, validate_socket_address, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub address: Option<String>,
    pub shutdown_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSection {
    pub file: Option<String>,
    pub sizes: Option<Vec<u64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PACKS_FILE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Catalog configured in the file, if any.
    pub fn catalog_source(&self) -> Option<CatalogSource> {
        if let Some(file) = &self.catalog.file {
            return Some(CatalogSource::File(PathBuf::from(file)));
        }
        self.catalog.sizes.clone().map(CatalogSource::Sizes)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(address) = &self.server.address {
            validate_socket_address("server.address", address)?;
        }

        if let Some(timeout) = self.server.shutdown_timeout_seconds {
            validate_range("server.shutdown_timeout_seconds", timeout, 1, 60)?;
        }

        if let Some(file) = &self.catalog.file {
            validate_path("catalog.file", file)?;
        }

        if self.catalog.file.is_some() && self.catalog.sizes.is_some() {
            return Err(AppError::ConfigError {
                message: "catalog.file and catalog.sizes are mutually exclusive".to_string(),
            });
        }

        Ok(())
    }
}
