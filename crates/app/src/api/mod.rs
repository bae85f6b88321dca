//! POS backend HTTP API.

use async_trait::async_trait;
use mockall::automock;

mod client;
mod errors;
pub mod models;

pub use client::{PosClient, PosConfig};
pub use errors::ApiError;

use crate::api::models::{CreateOrderRequest, Order};

/// Order-creation surface of the backend.
///
/// Implementations make exactly one network call per invocation and never
/// retry; the only retry path is the caller invoking again.
#[automock]
#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// Create an order from an assembled request.
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order, ApiError>;
}
