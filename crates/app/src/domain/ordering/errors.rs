//! Ordering service errors.

use comanda::draft::DraftError;
use thiserror::Error;

use crate::api::ApiError;

/// Errors from submitting an order draft.
#[derive(Debug, Error)]
pub enum OrderingError {
    /// The cart has no lines. Refused locally; no network call was made.
    #[error("cannot submit an empty order")]
    EmptyDraft(#[from] DraftError),

    /// Another submission is still pending on this service.
    #[error("an order submission is already in flight")]
    SubmitInFlight,

    /// The backend rejected the order. The cart is left intact.
    #[error("order rejected: {message}")]
    Rejected {
        /// The server's message, or a generic fallback when it sent none.
        message: String,
    },

    /// The backend could not be reached. The cart is left intact.
    #[error("order submission failed")]
    Api(#[source] ApiError),
}
