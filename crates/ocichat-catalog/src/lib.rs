//! Model catalog resolution for the proxy client.
//!
//! A catalog is the ordered list of model identifiers a run can choose
//! from. It comes from one of two interchangeable sources: the proxy's
//! live `/v1/models` listing, or the proxy's own YAML config file. Both
//! failure modes are recoverable; the caller substitutes the configured
//! default model and continues.

use async_trait::async_trait;
use thiserror::Error;

pub mod local;
pub mod remote;

pub use local::LocalCatalog;
pub use remote::RemoteCatalog;

/// Ordered list of selectable model identifiers. Insertion order defines
/// the 1-based display numbering.
pub type ModelCatalog = Vec<String>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The underlying source could not produce data at all (network
    /// failure, missing file, unparseable document).
    #[error("failed to load model catalog: {0}")]
    Unavailable(String),

    /// The source responded but yielded zero usable entries.
    #[error("catalog source returned no models")]
    Empty,
}

/// A source of selectable model identifiers.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn resolve(&self) -> Result<ModelCatalog, CatalogError>;
}
