use query_core::Page;

use crate::contract::{
    error::UserSearchError,
    model::{QueryParameters, ResultUser, SearchRequest},
};

/// Public API trait for the user_search module that other modules can use
pub trait UserSearchApi: Send + Sync {
    /// Validate a raw request and return the matching window of users
    fn search(&self, request: &SearchRequest) -> Result<Vec<ResultUser>, UserSearchError>;

    /// Like `search`, wrapped in a page envelope with total count and next-page flag
    fn search_page(&self, request: &SearchRequest) -> Result<Page<ResultUser>, UserSearchError>;

    /// Evaluate already validated parameters
    fn evaluate(&self, params: &QueryParameters) -> Vec<ResultUser>;
}
