use std::sync::Arc;

use query_core::Page;

use crate::contract::{
    client::UserSearchApi,
    error::UserSearchError,
    model::{QueryParameters, ResultUser, SearchRequest},
};
use crate::domain::service::Service;

/// Local implementation of the UserSearchApi trait that delegates to the domain service
pub struct UserSearchLocalClient {
    service: Arc<Service>,
}

impl UserSearchLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl UserSearchApi for UserSearchLocalClient {
    fn search(&self, request: &SearchRequest) -> Result<Vec<ResultUser>, UserSearchError> {
        self.service.search(request).map_err(Into::into)
    }

    fn search_page(&self, request: &SearchRequest) -> Result<Page<ResultUser>, UserSearchError> {
        self.service.search_page(request).map_err(Into::into)
    }

    fn evaluate(&self, params: &QueryParameters) -> Vec<ResultUser> {
        self.service.evaluate(params)
    }
}
