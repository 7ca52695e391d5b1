use std::sync::Arc;

use query_core::Page;
use tracing::{debug, instrument};

use crate::contract::model::{OrderField, QueryParameters, ResultUser, SearchRequest};
use crate::domain::error::DomainError;
use crate::domain::evaluator;
use crate::domain::params::parse_request;
use crate::domain::repo::UserRecords;

/// Domain service running searches over an immutable record set.
/// Depends only on the records port, not on infra types.
#[derive(Clone)]
pub struct Service {
    records: Arc<dyn UserRecords>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Used when a request carries no `order_field`.
    pub default_order_field: OrderField,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(records: Arc<dyn UserRecords>, config: ServiceConfig) -> Self {
        Self { records, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn record_count(&self) -> usize {
        self.records.records().len()
    }

    #[instrument(name = "user_search.service.search", skip(self, request))]
    pub fn search(&self, request: &SearchRequest) -> Result<Vec<ResultUser>, DomainError> {
        self.search_page(request).map(|page| page.items)
    }

    #[instrument(name = "user_search.service.search_page", skip(self, request))]
    pub fn search_page(&self, request: &SearchRequest) -> Result<Page<ResultUser>, DomainError> {
        let params = parse_request(request, self.config.default_order_field).map_err(|e| {
            debug!("Rejected search request: {}", e);
            e
        })?;
        Ok(self.evaluate_page(&params))
    }

    #[instrument(
        name = "user_search.service.evaluate",
        skip(self, params),
        fields(order_field = %params.order_field, limit = params.limit, offset = params.offset)
    )]
    pub fn evaluate(&self, params: &QueryParameters) -> Vec<ResultUser> {
        evaluator::evaluate(self.records.records(), params)
    }

    #[instrument(
        name = "user_search.service.evaluate_page",
        skip(self, params),
        fields(order_field = %params.order_field, limit = params.limit, offset = params.offset)
    )]
    pub fn evaluate_page(&self, params: &QueryParameters) -> Page<ResultUser> {
        let page = evaluator::evaluate_page(self.records.records(), params);
        debug!("Search returned {} of {} users", page.items.len(), page.page_info.total);
        page
    }
}
