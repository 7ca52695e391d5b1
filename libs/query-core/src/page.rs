use serde::{Deserialize, Serialize};

use crate::Window;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Number of items matching the query before the window was applied.
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_next: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Build a page from the items a `window` selected out of `total` matches.
    pub fn from_window(items: Vec<T>, total: usize, window: Window) -> Self {
        let has_next = window.offset.saturating_add(items.len()) < total;
        Self {
            items,
            page_info: PageInfo {
                total,
                limit: window.limit,
                offset: window.offset,
                has_next,
            },
        }
    }

    /// Map items while preserving page_info (Domain->DTO mapping convenience)
    pub fn map_items<U>(self, mut f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(&mut f).collect(),
            page_info: self.page_info,
        }
    }
}
