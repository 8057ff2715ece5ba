//! Sort keys and their comparison rules.

use chrono::NaiveDate;
use deunicode::deunicode;
use std::cmp::Ordering;

use crate::models::UrgencyTier;

/// A comparable value extracted from a listing row.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Compared accent- and case-insensitively, raw text as tie-break.
    Text(String),
    /// `None` compares as `0`.
    Number(Option<f64>),
    /// `None` compares as the Unix epoch.
    Date(Option<NaiveDate>),
    /// Compared by tier rank, not label.
    Tier(UrgencyTier),
}

impl SortKey {
    fn variant_index(&self) -> u8 {
        match self {
            SortKey::Text(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Date(_) => 2,
            SortKey::Tier(_) => 3,
        }
    }

    /// Total order between two keys.
    ///
    /// Keys of different variants order by variant; a field is expected to
    /// produce a single variant.
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => compare_text(a, b),
            (SortKey::Number(a), SortKey::Number(b)) => {
                a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0))
            }
            (SortKey::Date(a), SortKey::Date(b)) => {
                a.unwrap_or_else(epoch).cmp(&b.unwrap_or_else(epoch))
            }
            (SortKey::Tier(a), SortKey::Tier(b)) => a.rank().cmp(&b.rank()),
            _ => self.variant_index().cmp(&other.variant_index()),
        }
    }
}

/// 1970-01-01, the stand-in for a missing date.
fn epoch() -> NaiveDate {
    NaiveDate::default()
}

/// Folds text for locale-aware comparison and matching.
pub fn fold_text(s: &str) -> String {
    deunicode(s).to_lowercase()
}

/// Locale-aware text comparison: "Álvarez" sorts with "alvarez".
pub fn compare_text(a: &str, b: &str) -> Ordering {
    fold_text(a).cmp(&fold_text(b)).then_with(|| a.cmp(b))
}
