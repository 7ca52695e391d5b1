use query_core::Page;
use serde::{Deserialize, Serialize};

use crate::contract::model::{ResultUser, SearchRequest};

/// Wire DTO for a search hit. Keys follow the `Id`/`Name`/... convention
/// existing consumers of the endpoint expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultUserDto {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub about: String,
    pub gender: String,
}

/// Wire DTO for a page of search hits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchPageDto {
    pub users: Vec<ResultUserDto>,
    pub next_page: bool,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

/// Request parameters as strings, exactly as a query string carries them
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub order_field: Option<String>,
    pub order_by: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl From<ResultUser> for ResultUserDto {
    fn from(user: ResultUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
            about: user.about,
            gender: user.gender,
        }
    }
}

impl From<Page<ResultUser>> for SearchPageDto {
    fn from(page: Page<ResultUser>) -> Self {
        let page = page.map_items(ResultUserDto::from);
        Self {
            users: page.items,
            next_page: page.page_info.has_next,
            total: page.page_info.total,
            limit: page.page_info.limit,
            offset: page.page_info.offset,
        }
    }
}

impl From<SearchQuery> for SearchRequest {
    fn from(q: SearchQuery) -> Self {
        Self {
            query: q.query,
            order_field: q.order_field,
            order_by: q.order_by,
            limit: q.limit,
            offset: q.offset,
        }
    }
}
