//! Catalog service.
//!
//! Pure read-through to the backend's catalog endpoints; nothing is cached
//! or re-synced locally.

use async_trait::async_trait;
use comanda::catalog::MenuItem;
use mockall::automock;
use tracing::debug;

use crate::{
    api::{
        PosClient,
        models::{DiningTable, Menu, MenuId},
    },
    domain::catalog::errors::CatalogServiceError,
};

/// Catalog reader backed by the POS backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    client: PosClient,
}

impl HttpCatalogService {
    #[must_use]
    pub fn new(client: PosClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn list_menus(&self) -> Result<Vec<Menu>, CatalogServiceError> {
        let menus = self.client.list_menus().await?;

        debug!(count = menus.len(), "fetched menus");

        Ok(menus)
    }

    async fn menu_items(&self, menu: MenuId) -> Result<Vec<MenuItem>, CatalogServiceError> {
        let items = self.client.menu_items(menu).await?;

        debug!(%menu, count = items.len(), "fetched menu items");

        Ok(items)
    }

    async fn list_tables(&self) -> Result<Vec<DiningTable>, CatalogServiceError> {
        let tables = self.client.list_tables().await?;

        debug!(count = tables.len(), "fetched tables");

        Ok(tables)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List the backend's menus.
    async fn list_menus(&self) -> Result<Vec<Menu>, CatalogServiceError>;

    /// List the items of one menu, with their in-menu prices.
    async fn menu_items(&self, menu: MenuId) -> Result<Vec<MenuItem>, CatalogServiceError>;

    /// List the dining tables.
    async fn list_tables(&self) -> Result<Vec<DiningTable>, CatalogServiceError>;
}
