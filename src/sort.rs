//! Sorting over record collections.
//!
//! A [`SortSpec`] names at most one field and a direction. The sort is
//! stable, so ties keep their incoming relative order and re-sorting by
//! the same key is idempotent. `desc` reverses the comparator, not the
//! final sequence, which is what keeps ties stable in both directions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::TableRecord;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    fn flip(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

// ---------------------------------------------------------------------------
// SortSpec
// ---------------------------------------------------------------------------

/// The sort state for one table view.
///
/// A `None` field means the collection stays in its original insertion
/// order (the identity sort).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: Option<String>,
    pub direction: Direction,
}

impl SortSpec {
    /// Ascending sort on `field`.
    pub fn by(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            direction: Direction::Asc,
        }
    }

    /// Apply a header-click toggle: a repeated request on the current
    /// field flips the direction, a new field resets to ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.flip();
        } else {
            self.field = Some(field.to_string());
            self.direction = Direction::Asc;
        }
    }
}

// ---------------------------------------------------------------------------
// apply
// ---------------------------------------------------------------------------

/// Produce the collection ordered per `spec`.
///
/// With no sort field the input order is returned unchanged. A field the
/// record type does not recognize compares every pair equal, which under
/// a stable sort is also the identity ordering, so unknown fields are a
/// no-op rather than an error. Records missing the field order after
/// those carrying it.
pub fn apply<R: TableRecord + Clone>(records: &[R], spec: &SortSpec) -> Vec<R> {
    let mut sorted = records.to_vec();
    let Some(field) = spec.field.as_deref() else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let ordering = match (a.field(field), b.field(field)) {
            (Some(left), Some(right)) => left.compare(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        match spec.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });

    sorted
}
