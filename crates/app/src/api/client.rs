//! HTTP client for the POS backend.

use async_trait::async_trait;
use comanda::catalog::MenuItem;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::api::{
    ApiError, OrdersApi,
    models::{CreateOrderRequest, DiningTable, Menu, MenuId, Order},
};

/// Configuration for connecting to the POS backend.
#[derive(Debug, Clone)]
pub struct PosConfig {
    /// Backend base URL, e.g. `"http://localhost:8080/api"`.
    pub base_url: String,

    /// Bearer token, when the backend requires one.
    pub token: Option<String>,
}

/// HTTP client for the POS backend's catalog and order endpoints.
#[derive(Debug, Clone)]
pub struct PosClient {
    config: PosConfig,
    http: Client,
}

/// Success envelope wrapping every backend response body.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error envelope. Only the human-readable message is interpreted.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl PosClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: PosConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// List the backend's menus.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response.
    pub async fn list_menus(&self) -> Result<Vec<Menu>, ApiError> {
        self.get(&self.url("menus")).await
    }

    /// List the items of one menu.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response.
    pub async fn menu_items(&self, menu: MenuId) -> Result<Vec<MenuItem>, ApiError> {
        self.get(&self.url(&format!("menus/{menu}/items"))).await
    }

    /// List the dining tables.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response.
    pub async fn list_tables(&self) -> Result<Vec<DiningTable>, ApiError> {
        self.get(&self.url("tables")).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url, "GET");

        let response = self.authorize(self.http.get(url)).send().await?;

        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message);

            return Err(ApiError::Backend { status, message });
        }

        let parsed: Envelope<T> = response.json().await?;

        Ok(parsed.data)
    }
}

#[async_trait]
impl OrdersApi for PosClient {
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order, ApiError> {
        let url = self.url("orders");

        debug!(url, lines = request.order_items.len(), "POST");

        let response = self
            .authorize(self.http.post(&url))
            .json(request)
            .send()
            .await?;

        Self::parse(response).await
    }
}
