//! Display-time grouping of items into columns.

use crate::model::{Column, TrackedItem};

use super::transition::column_index;

/// Buckets `items` by column, in column order.
///
/// An item whose status names no existing column is shown in the first
/// column. The item itself is not changed.
#[must_use]
pub fn group_by_column<'a>(
    items: &'a [TrackedItem],
    columns: &[Column],
) -> Vec<Vec<&'a TrackedItem>> {
    let mut groups = vec![Vec::new(); columns.len()];
    if groups.is_empty() {
        return groups;
    }
    for item in items {
        groups[column_index(columns, &item.status)].push(item);
    }
    groups
}
