//! Catalog preparation.
//!
//! The calculator treats catalog order as significant and never re-sorts, so
//! callers run [`prepare_catalog`] on the raw rows first.

use std::collections::HashSet;

use crate::entities::Question;

/// Keep active questions, drop repeated ids, and stable-sort by `order_index`.
///
/// The first active row for an id wins. Questions sharing an `order_index`
/// keep their relative input order.
#[must_use]
pub fn prepare_catalog(questions: impl IntoIterator<Item = Question>) -> Vec<Question> {
    let mut seen = HashSet::new();
    let mut catalog: Vec<Question> = questions
        .into_iter()
        .filter(|question| question.is_active)
        .filter(|question| seen.insert(question.id.clone()))
        .collect();
    catalog.sort_by_key(|question| question.order_index);
    catalog
}
