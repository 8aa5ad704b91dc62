use crate::domain::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            AppError::CatalogError(CatalogError::Read(_)) => ErrorSeverity::Medium,
            AppError::CatalogError(_) => ErrorSeverity::High,
            AppError::IoError(_) | AppError::ServerError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Short message for the terminal, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::ConfigError { message } => format!("配置錯誤: {}", message),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("配置值無效 ({}): {}", field, reason)
            }
            AppError::CatalogError(CatalogError::Read(_)) => "無法讀取包裝目錄檔案".to_string(),
            AppError::CatalogError(_) => "無法載入包裝目錄".to_string(),
            AppError::IoError(_) => "檔案或網路 I/O 失敗".to_string(),
            AppError::ServerError { .. } => "伺服器無法啟動或意外停止".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                "Check the command line flags and the TOML configuration file"
            }
            AppError::CatalogError(CatalogError::Read(_)) => {
                "Check that --packs-file points to a readable file"
            }
            AppError::CatalogError(_) => {
                "Make sure the packs file is a JSON array like [{\"size\": 250}] with positive sizes"
            }
            AppError::IoError(_) => "Check file permissions and that the address is not already in use",
            AppError::ServerError { .. } => "Check the logs above for the failing component",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
