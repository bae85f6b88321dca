//! Catalog service errors.

use thiserror::Error;

use crate::api::ApiError;

/// Errors from reading the remote catalog.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// The backend request failed.
    #[error("catalog request failed")]
    Api(#[from] ApiError),
}
