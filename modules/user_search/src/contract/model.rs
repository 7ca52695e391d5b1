use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use query_core::{SortDir, Window};

/// A user as loaded from the dataset. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub about: String,
    pub gender: String,
}

impl UserRecord {
    /// First and last name joined by a single space, trimmed.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A search hit: the record projected with first/last name merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultUser {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub about: String,
    pub gender: String,
}

impl From<&UserRecord> for ResultUser {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.display_name(),
            age: record.age,
            about: record.about.clone(),
            gender: record.gender.clone(),
        }
    }
}

/// Attribute a search result is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderField {
    Id,
    Age,
    #[default]
    Name,
}

impl OrderField {
    pub const ALL: [OrderField; 3] = [OrderField::Id, OrderField::Age, OrderField::Name];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderField::Id => "Id",
            OrderField::Age => "Age",
            OrderField::Name => "Name",
        }
    }

    /// Ascending comparison of two records on this field. `a_name`/`b_name`
    /// are the precomputed display names.
    pub fn compare(self, a: &UserRecord, a_name: &str, b: &UserRecord, b_name: &str) -> Ordering {
        match self {
            OrderField::Id => a.id.cmp(&b.id),
            OrderField::Age => a.age.cmp(&b.age),
            OrderField::Name => a_name.cmp(b_name),
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderField {
    type Err = String;

    /// Case-sensitive: exactly `Id`, `Age` or `Name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Validated per-request search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters {
    /// Free-text term; empty matches every record.
    pub query: String,
    pub order_field: OrderField,
    pub order_by: SortDir,
    pub limit: usize,
    pub offset: usize,
}

impl QueryParameters {
    pub fn new(
        query: impl Into<String>,
        order_field: OrderField,
        order_by: SortDir,
        limit: usize,
        offset: usize,
    ) -> Self {
        Self {
            query: query.into(),
            order_field,
            order_by,
            limit,
            offset,
        }
    }

    pub fn window(&self) -> Window {
        Window::new(self.limit, self.offset)
    }
}

/// Raw, unvalidated request parameters as they arrive from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub order_field: Option<String>,
    pub order_by: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}
