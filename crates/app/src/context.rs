//! App Context

use std::sync::Arc;

use crate::{
    api::{PosClient, PosConfig},
    domain::{
        catalog::{CatalogService, HttpCatalogService},
        ordering::{HttpOrderingService, OrderingService},
    },
    notify::Notifier,
};

/// Shared service handles for the ordering surfaces.
#[derive(Clone)]
pub struct AppContext {
    /// Remote catalog reader.
    pub catalog: Arc<dyn CatalogService>,

    /// Order draft submitter.
    pub ordering: Arc<dyn OrderingService>,
}

impl AppContext {
    /// Build application context for the given backend connection.
    #[must_use]
    pub fn from_config(config: PosConfig, notifier: Arc<dyn Notifier>) -> Self {
        let client = PosClient::new(config);

        Self {
            catalog: Arc::new(HttpCatalogService::new(client.clone())),
            ordering: Arc::new(HttpOrderingService::new(Arc::new(client), notifier)),
        }
    }
}
