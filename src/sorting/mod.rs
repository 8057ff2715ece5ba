//! Listing sort and filter utilities.
//!
//! Every listing view sorts by a user-selected column: clicking the same
//! column again flips the direction, clicking a new column starts
//! ascending. Sorting is stable in both directions.
//!
//! # Usage
//!
//! ```
//! use fleet_maintenance::sorting::{sort_by, SortDirection, SortKey, Sortable};
//!
//! #[derive(Clone)]
//! struct Row { id: u32, val: f64 }
//!
//! impl Sortable for Row {
//!     type Field = ();
//!     fn sort_key(&self, _: ()) -> SortKey {
//!         SortKey::Number(Some(self.val))
//!     }
//! }
//!
//! let rows = vec![Row { id: 1, val: 5.0 }, Row { id: 2, val: 5.0 }, Row { id: 3, val: 3.0 }];
//! let sorted = sort_by(&rows, (), SortDirection::Ascending);
//! let ids: Vec<u32> = sorted.iter().map(|r| r.id).collect();
//! assert_eq!(ids, vec![3, 1, 2]);
//! ```

mod key;
mod vehicle;

pub use key::{compare_text, fold_text, SortKey};
pub use vehicle::VehicleField;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A row that can be sorted by named fields.
pub trait Sortable {
    /// Column identifier.
    type Field: Copy;

    /// Extracts the comparable value of `field`.
    fn sort_key(&self, field: Self::Field) -> SortKey;
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Returns `items` sorted by `field`.
///
/// Stable: items with equal keys keep their input order in both directions.
pub fn sort_by<T: Sortable + Clone>(
    items: &[T],
    field: T::Field,
    direction: SortDirection,
) -> Vec<T> {
    let mut keyed: Vec<(SortKey, &T)> = items.iter().map(|i| (i.sort_key(field), i)).collect();
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.compare(b)));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Keeps items whose `field` contains `needle`, ignoring accents and case.
///
/// Non-text keys never match; an empty needle keeps everything.
pub fn filter_text<T: Sortable + Clone>(items: &[T], field: T::Field, needle: &str) -> Vec<T> {
    let needle = fold_text(needle.trim());
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| match item.sort_key(field) {
            SortKey::Text(text) => fold_text(&text).contains(&needle),
            _ => false,
        })
        .cloned()
        .collect()
}

/// Column-header sort state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState<F> {
    /// Currently sorted column.
    pub field: F,
    /// Current direction.
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> SortState<F> {
    /// Ascending on `field`.
    pub fn new(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Selecting the current field flips direction; a new field resets to ascending.
    pub fn select(self, field: F) -> Self {
        if field == self.field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self::new(field)
        }
    }

    /// Sorts `items` according to this state.
    pub fn apply<T: Sortable<Field = F> + Clone>(&self, items: &[T]) -> Vec<T> {
        sort_by(items, self.field, self.direction)
    }
}
