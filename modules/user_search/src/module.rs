use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info};

use crate::config::UserSearchConfig;
use crate::contract::client::UserSearchApi;
use crate::contract::model::OrderField;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::UserSearchLocalClient;
use crate::infra::dataset::Dataset;

/// Module wiring: config + dataset -> service -> local client.
/// The service is installed once, atomically, and then only read.
#[derive(Default)]
pub struct UserSearch {
    // Keep the domain service behind ArcSwap for cheap read-mostly access.
    service: arc_swap::ArcSwapOption<Service>,
}

impl UserSearch {
    /// Wire the module over an already loaded dataset.
    pub fn init(&self, cfg: &UserSearchConfig, dataset: Dataset) -> anyhow::Result<()> {
        info!("Initializing user_search module");

        if self.service.load().is_some() {
            anyhow::bail!("user_search module already initialized");
        }

        let default_order_field: OrderField = cfg
            .default_order_field
            .parse()
            .map_err(|raw| anyhow::anyhow!("Invalid default_order_field '{}'", raw))?;
        debug!(
            "Loaded user_search config: default_order_field={}, records={}",
            default_order_field,
            dataset.len()
        );

        let service = Service::new(
            Arc::new(dataset),
            ServiceConfig {
                default_order_field,
            },
        );
        let previous = self
            .service
            .compare_and_swap(&None::<Arc<Service>>, Some(Arc::new(service)));
        if previous.is_some() {
            anyhow::bail!("user_search module already initialized");
        }
        info!("user_search module ready");
        Ok(())
    }

    /// Load the dataset named by `cfg.dataset`, then [`Self::init`].
    pub fn init_from_config(&self, cfg: &UserSearchConfig) -> anyhow::Result<()> {
        let path = cfg
            .dataset
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("user_search.dataset is not configured"))?;
        let dataset = Dataset::load_json(path)
            .with_context(|| format!("Failed to load user_search dataset '{path}'"))?;
        self.init(cfg, dataset)
    }

    pub fn is_initialized(&self) -> bool {
        self.service.load().is_some()
    }

    /// Number of records the installed service searches over.
    pub fn record_count(&self) -> anyhow::Result<usize> {
        Ok(self.service()?.record_count())
    }

    /// In-process client for other modules.
    pub fn client(&self) -> anyhow::Result<Arc<dyn UserSearchApi>> {
        let api: Arc<dyn UserSearchApi> = Arc::new(UserSearchLocalClient::new(self.service()?));
        Ok(api)
    }

    fn service(&self) -> anyhow::Result<Arc<Service>> {
        self.service
            .load_full()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }
}
