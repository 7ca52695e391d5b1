use std::cmp::Ordering;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod page;
pub use page::{Page, PageInfo};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid sort direction: '{0}'")]
    InvalidDirection(String),

    #[error("not an integer: '{0}'")]
    InvalidInteger(String),

    #[error("negative value: {0}")]
    NegativeValue(i64),
}

/// Sort direction. On the wire it is a signed token: `1` ascending, `-1` descending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    /// Orient an ascending comparison result to this direction.
    #[inline]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    }

    pub fn from_signed(n: i64) -> Result<Self, Error> {
        match n {
            1 => Ok(SortDir::Asc),
            -1 => Ok(SortDir::Desc),
            other => Err(Error::InvalidDirection(other.to_string())),
        }
    }
}

impl FromStr for SortDir {
    type Err = Error;

    /// Accepts the signed tokens `1` / `-1` and the names `asc` / `desc` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<i64>() {
            return Self::from_signed(n).map_err(|_| Error::InvalidDirection(s.to_string()));
        }
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDir::Asc),
            "desc" => Ok(SortDir::Desc),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// Parse a base-10 integer that must not be negative.
pub fn parse_non_negative(raw: &str) -> Result<usize, Error> {
    let n: i64 = raw
        .parse()
        .map_err(|_| Error::InvalidInteger(raw.to_string()))?;
    if n < 0 {
        return Err(Error::NegativeValue(n));
    }
    usize::try_from(n).map_err(|_| Error::InvalidInteger(raw.to_string()))
}

/// Zero-based offset/limit window over an ordered collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub limit: usize,
    pub offset: usize,
}

impl Window {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Index range selected from a collection of `total` items.
    /// Empty when `offset >= total`; never overflows.
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let start = self.offset.min(total);
        let end = self.offset.saturating_add(self.limit).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(self.bounds(items.len())).unwrap_or_default()
    }
}

/// Stable sort by `cmp`, oriented by `dir`. Equal elements keep their input order
/// in both directions.
pub fn sort_stable_by<T, F>(items: &mut [T], dir: SortDir, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    items.sort_by(|a, b| dir.apply(cmp(a, b)));
}
