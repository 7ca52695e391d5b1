//! Filter -> stable sort -> window over an in-memory record slice.

use std::cmp::Ordering;

use query_core::{sort_stable_by, Page};
use tracing::{debug, trace};

use crate::contract::model::{OrderField, QueryParameters, ResultUser, UserRecord};

/// A record that survived filtering, with its display name computed once.
struct Candidate<'a> {
    record: &'a UserRecord,
    name: String,
}

impl<'a> Candidate<'a> {
    fn new(record: &'a UserRecord) -> Self {
        Self {
            name: record.display_name(),
            record,
        }
    }

    /// `needle` is already folded with [`fold_case`].
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || fold_case(&self.name).contains(needle)
            || fold_case(&self.record.about).contains(needle)
    }

    fn compare(&self, other: &Self, field: OrderField) -> Ordering {
        field.compare(self.record, &self.name, other.record, &other.name)
    }

    fn to_result(&self) -> ResultUser {
        ResultUser::from(self.record)
    }
}

/// Lowercase each char on its own, ignoring word context, so a term folds
/// the same way wherever it appears in a longer text.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Matching users for `params`, ordered and windowed.
pub fn evaluate(records: &[UserRecord], params: &QueryParameters) -> Vec<ResultUser> {
    evaluate_page(records, params).items
}

/// Same as [`evaluate`], keeping the total match count and next-page flag.
pub fn evaluate_page(records: &[UserRecord], params: &QueryParameters) -> Page<ResultUser> {
    let needle = fold_case(&params.query);

    let mut matched: Vec<Candidate<'_>> = records
        .iter()
        .map(Candidate::new)
        .filter(|c| c.matches(&needle))
        .collect();
    trace!(scanned = records.len(), matched = matched.len(), "filtered");

    sort_stable_by(&mut matched, params.order_by, |a, b| {
        a.compare(b, params.order_field)
    });

    let window = params.window();
    let total = matched.len();
    let items: Vec<ResultUser> = window
        .slice(&matched)
        .iter()
        .map(Candidate::to_result)
        .collect();

    debug!(
        total,
        returned = items.len(),
        limit = window.limit,
        offset = window.offset,
        "evaluated user search"
    );
    Page::from_window(items, total, window)
}
