use thiserror::Error;

/// Failure of the catalog provider to supply packs.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog source could not be read: {0}")]
    Read(#[from] std::io::Error),

    #[error("catalog source could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains an invalid pack size: {0}")]
    InvalidSize(u64),

    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("quantity must be greater than zero; got {quantity}: invalid argument")]
    InvalidArgument { quantity: i64 },

    #[error("list packs: {0}")]
    CatalogUnavailable(#[from] CatalogError),
}

impl OrderError {
    /// True when the caller sent bad input, as opposed to a server-side failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, OrderError::InvalidArgument { .. })
    }
}
