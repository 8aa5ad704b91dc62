use crate::config::CatalogSource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct LambdaConfig {
    pub packs_file: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self {
            packs_file: env::var("PACKS_FILE").ok().filter(|v| !v.is_empty()),
        }
    }

    pub fn catalog_source(&self) -> CatalogSource {
        match &self.packs_file {
            Some(path) => CatalogSource::File(PathBuf::from(path)),
            None => CatalogSource::Embedded,
        }
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.packs_file {
            validate_path("PACKS_FILE", path)?;
        }

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
