pub mod lambda;
pub mod toml_config;

use crate::adapters::StaticPackRepository;
use crate::domain::CatalogError;
use crate::utils::error::Result;
use crate::utils::validation::{validate_socket_address, Validate};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 1;

/// Where the pack catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    #[default]
    Embedded,
    File(PathBuf),
    Sizes(Vec<u64>),
}

impl CatalogSource {
    pub fn load(&self) -> std::result::Result<StaticPackRepository, CatalogError> {
        let repository = match self {
            CatalogSource::Embedded => StaticPackRepository::new()?,
            CatalogSource::File(path) => StaticPackRepository::from_file(path)?,
            CatalogSource::Sizes(sizes) => StaticPackRepository::from_sizes(sizes)?,
        };

        tracing::info!("📦 Loaded {} pack sizes from {:?}", repository.len(), self);
        Ok(repository)
    }
}

/// Fully resolved settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub address: SocketAddr,
    pub shutdown_timeout: Duration,
    pub catalog: CatalogSource,
    pub json_logs: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            shutdown_timeout: Duration::from_secs(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
            catalog: CatalogSource::Embedded,
            json_logs: false,
        }
    }
}

impl ServerSettings {
    /// Applies values present in a TOML file on top of the current settings.
    pub fn merge_file(mut self, file: &TomlConfig) -> Result<Self> {
        file.validate()?;

        if let Some(address) = &file.server.address {
            self.address = validate_socket_address("server.address", address)?;
        }
        if let Some(secs) = file.server.shutdown_timeout_seconds {
            self.shutdown_timeout = Duration::from_secs(secs);
        }
        if let Some(catalog) = file.catalog_source() {
            self.catalog = catalog;
        }
        if let Some(json) = file.logging.json {
            self.json_logs = json;
        }

        Ok(self)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pack-order")]
#[command(about = "HTTP service that splits order quantities into shippable packs")]
pub struct CliConfig {
    #[arg(long, help = "Listen address [default: 0.0.0.0:3000]")]
    pub address: Option<String>,

    #[arg(long, help = "JSON file with the pack catalog, e.g. [{\"size\": 250}]")]
    pub packs_file: Option<PathBuf>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Graceful shutdown timeout in seconds [default: 1]")]
    pub shutdown_timeout_secs: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Defaults, then the TOML file, then explicit flags.
    pub fn resolve(&self) -> Result<ServerSettings> {
        self.validate()?;

        let mut settings = ServerSettings::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            settings = settings.merge_file(&file)?;
        }

        if let Some(address) = &self.address {
            settings.address = validate_socket_address("address", address)?;
        }
        if let Some(secs) = self.shutdown_timeout_secs {
            settings.shutdown_timeout = Duration::from_secs(secs);
        }
        if let Some(path) = &self.packs_file {
            settings.catalog = CatalogSource::File(path.clone());
        }
        if self.json_logs {
            settings.json_logs = true;
        }

        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::{validate_path, validate_range};

        if let Some(address) = &self.address {
            validate_socket_address("address", address)?;
        }
        if let Some(secs) = self.shutdown_timeout_secs {
            validate_range("shutdown_timeout_secs", secs, 1, 60)?;
        }
        if let Some(path) = &self.packs_file {
            validate_path("packs_file", &path.to_string_lossy())?;
        }

        Ok(())
    }
}
