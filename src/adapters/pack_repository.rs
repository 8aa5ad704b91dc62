use crate::domain::{CatalogError, Pack, PackRepository};
use async_trait::async_trait;
use std::path::Path;

/// Catalog shipped inside the binary.
pub const DEFAULT_CATALOG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/packs.json"));

/// A fixed catalog, parsed once at startup.
#[derive(Debug, Clone)]
pub struct StaticPackRepository {
    packs: Vec<Pack>,
}

impl StaticPackRepository {
    /// Loads the embedded default catalog.
    pub fn new() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_CATALOG)
    }

    /// 從 JSON 字串解析目錄，格式為 `[{"size": 250}, ...]`
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let packs: Vec<Pack> = serde_json::from_str(content)?;
        Ok(Self { packs })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::debug!("Loading pack catalog from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_sizes(sizes: &[u64]) -> Result<Self, CatalogError> {
        let packs = sizes
            .iter()
            .map(|&size| {
                u32::try_from(size)
                    .ok()
                    .and_then(Pack::new)
                    .ok_or(CatalogError::InvalidSize(size))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { packs })
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

#[async_trait]
impl PackRepository for StaticPackRepository {
    async fn list_packs(&self) -> Result<Vec<Pack>, CatalogError> {
        Ok(self.packs.clone())
    }
}
