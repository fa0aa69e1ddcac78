//! Declarative filtering over record collections.
//!
//! A [`FilterSpec`] is a serializable set of per-dimension constraints
//! plus an optional free-text search. Dimensions combine with logical
//! AND; a multi-select dimension matches with logical OR within its
//! value set. The empty spec is the identity filter. Builder methods
//! consume and return `Self` for chaining.
//!
//! Malformed input never errors: unparseable range bounds and
//! unrecognized dimension keys are treated as unconstrained and reported
//! through `tracing`.
//!
//! # Example
//!
//! ```rust
//! use finops_view::FilterSpec;
//!
//! let spec = FilterSpec::new()
//!     .select("status", "Approved")
//!     .any_of("buyer", ["Acme Corp", "Globex"])
//!     .between("dueDate", Some("2024-01-01"), None)
//!     .search("INV-10");
//! assert!(!spec.is_identity());
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::record::{FieldValue, TableRecord};

/// Dropdown sentinel meaning "no constraint" for a single-select dimension.
pub const ALL: &str = "All";

// ---------------------------------------------------------------------------
// DimensionFilter
// ---------------------------------------------------------------------------

/// One dimension's constraint inside a [`FilterSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum DimensionFilter {
    /// Single selected value; the record's field must display equal.
    Equals { value: String },
    /// Multi-select; the record's field must be a member (OR within the set).
    AnyOf { values: BTreeSet<String> },
    /// Inclusive range with optional bounds, kept as raw strings and
    /// resolved (date first, then number) at apply time.
    Range {
        from: Option<String>,
        to: Option<String>,
    },
    /// Inclusive bucket over the absolute value of a numeric field.
    /// Credit memos carry signed amounts, so "Under $1000" means |amount|.
    AmountRange { min: Option<f64>, max: Option<f64> },
}

impl DimensionFilter {
    /// Whether this constraint restricts anything at all.
    ///
    /// An empty multi-select and a fully unbounded range are identity.
    fn is_identity(&self) -> bool {
        match self {
            DimensionFilter::Equals { value } => value.as_str() == ALL,
            DimensionFilter::AnyOf { values } => values.is_empty(),
            DimensionFilter::Range { from, to } => from.is_none() && to.is_none(),
            DimensionFilter::AmountRange { min, max } => min.is_none() && max.is_none(),
        }
    }

    fn display_value(&self) -> String {
        match self {
            DimensionFilter::Equals { value } => value.clone(),
            DimensionFilter::AnyOf { values } => {
                values.iter().cloned().collect::<Vec<_>>().join(", ")
            }
            DimensionFilter::Range { from, to } => format!(
                "{}..{}",
                from.as_deref().unwrap_or(""),
                to.as_deref().unwrap_or("")
            ),
            DimensionFilter::AmountRange { min, max } => format!(
                "{}..{}",
                min.map(|v| v.to_string()).unwrap_or_default(),
                max.map(|v| v.to_string()).unwrap_or_default()
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterBadge
// ---------------------------------------------------------------------------

/// A removable filter-chip descriptor for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterBadge {
    pub dimension: String,
    pub display_value: String,
}

// ---------------------------------------------------------------------------
// FilterSpec
// ---------------------------------------------------------------------------

/// The full declarative filter state for one table view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    dimensions: BTreeMap<String, DimensionFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search: Option<String>,
}

impl FilterSpec {
    /// The identity filter: retains every record, in order.
    pub fn new() -> Self {
        Self::default()
    }

    // -- Builder methods ---------------------------------------------------

    /// Constrain a single-select dimension. The literal `"All"` clears it.
    pub fn select(mut self, dimension: &str, value: impl Into<String>) -> Self {
        self.set(
            dimension,
            DimensionFilter::Equals {
                value: value.into(),
            },
        );
        self
    }

    /// Constrain a multi-select dimension. An empty iterator clears it.
    pub fn any_of<I, S>(mut self, dimension: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(
            dimension,
            DimensionFilter::AnyOf {
                values: values.into_iter().map(Into::into).collect(),
            },
        );
        self
    }

    /// Constrain a range dimension with inclusive, optional bounds.
    pub fn between(mut self, dimension: &str, from: Option<&str>, to: Option<&str>) -> Self {
        self.set(
            dimension,
            DimensionFilter::Range {
                from: from.map(str::to_string),
                to: to.map(str::to_string),
            },
        );
        self
    }

    /// Constrain an amount bucket over `|field|`, inclusive on both ends.
    pub fn amount_between(mut self, dimension: &str, min: Option<f64>, max: Option<f64>) -> Self {
        self.set(dimension, DimensionFilter::AmountRange { min, max });
        self
    }

    /// Set the free-text search. An empty string clears it.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.set_search(text);
        self
    }

    /// Drop any constraint on `dimension`.
    pub fn clear(mut self, dimension: &str) -> Self {
        self.dimensions.remove(dimension);
        self
    }

    // -- In-place mutation (used by the view model transitions) ------------

    /// Store or clear a dimension constraint. Identity-valued constraints
    /// (the `"All"` sentinel, empty sets, unbounded ranges) are removed so
    /// the empty spec stays the canonical identity.
    pub fn set(&mut self, dimension: &str, filter: DimensionFilter) {
        if filter.is_identity() {
            self.dimensions.remove(dimension);
        } else {
            self.dimensions.insert(dimension.to_string(), filter);
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.search = if text.is_empty() { None } else { Some(text) };
    }

    pub fn remove(&mut self, dimension: &str) {
        self.dimensions.remove(dimension);
    }

    // -- Inspection --------------------------------------------------------

    /// Whether this spec constrains nothing (the identity filter).
    pub fn is_identity(&self) -> bool {
        self.dimensions.is_empty() && self.search.is_none()
    }

    /// Active-filter descriptors for the rendering layer's chip row,
    /// in stable dimension order, search last.
    pub fn badges(&self) -> Vec<FilterBadge> {
        let mut badges: Vec<FilterBadge> = self
            .dimensions
            .iter()
            .map(|(dimension, filter)| FilterBadge {
                dimension: dimension.clone(),
                display_value: filter.display_value(),
            })
            .collect();

        if let Some(ref text) = self.search {
            badges.push(FilterBadge {
                dimension: "search".to_string(),
                display_value: text.clone(),
            });
        }

        badges
    }

    /// Whether `record` satisfies every constrained dimension (AND) and
    /// the free-text search, per the fail-open rules of this module.
    pub fn matches<R: TableRecord>(&self, record: &R) -> bool {
        for (dimension, filter) in &self.dimensions {
            if !R::fields().contains(&dimension.as_str()) {
                // Unrecognized dimension key: unconstrained, never an error.
                debug!(dimension = %dimension, "ignoring unrecognized filter dimension");
                continue;
            }
            if !dimension_matches(record, dimension, filter) {
                return false;
            }
        }

        if let Some(ref text) = self.search {
            return search_matches(record, text);
        }

        true
    }
}

// ---------------------------------------------------------------------------
// apply
// ---------------------------------------------------------------------------

/// Retain the records matching `spec`, preserving input order.
///
/// The identity spec returns the full collection unchanged.
pub fn apply<R: TableRecord + Clone>(records: &[R], spec: &FilterSpec) -> Vec<R> {
    records
        .iter()
        .filter(|record| spec.matches(*record))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Dimension evaluation
// ---------------------------------------------------------------------------

fn dimension_matches<R: TableRecord>(record: &R, dimension: &str, filter: &DimensionFilter) -> bool {
    match filter {
        DimensionFilter::Equals { value } => record
            .field(dimension)
            .map(|v| v.display() == *value)
            .unwrap_or(false),

        DimensionFilter::AnyOf { values } => record
            .field(dimension)
            .map(|v| values.contains(&v.display()))
            .unwrap_or(false),

        DimensionFilter::Range { from, to } => {
            range_matches(record, dimension, from.as_deref(), to.as_deref())
        }

        DimensionFilter::AmountRange { min, max } => {
            let Some(FieldValue::Number(n)) = record.field(dimension) else {
                return false;
            };
            let magnitude = n.abs();
            min.map(|lo| magnitude >= lo).unwrap_or(true)
                && max.map(|hi| magnitude <= hi).unwrap_or(true)
        }
    }
}

fn range_matches<R: TableRecord>(
    record: &R,
    dimension: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> bool {
    let from = from.and_then(|raw| parse_bound(dimension, raw));
    let to = to.and_then(|raw| parse_bound(dimension, raw));

    // Both bounds unparseable or unset: the dimension is unconstrained.
    if from.is_none() && to.is_none() {
        return true;
    }

    let Some(value) = record.field(dimension) else {
        return false;
    };

    let within_lower = match from {
        Some(ref bound) => matches!(
            bound_cmp(&value, bound),
            Some(Ordering::Greater) | Some(Ordering::Equal)
        ),
        None => true,
    };
    let within_upper = match to {
        Some(ref bound) => matches!(
            bound_cmp(&value, bound),
            Some(Ordering::Less) | Some(Ordering::Equal)
        ),
        None => true,
    };

    within_lower && within_upper
}

/// A range bound resolved from its raw string form.
#[derive(Debug, Clone, PartialEq)]
enum Bound {
    Date(NaiveDate),
    Number(f64),
}

/// Resolve a raw bound: ISO date first, then number. Unresolvable bounds
/// are fail-open (the bound is dropped), reported as a no-op.
fn parse_bound(dimension: &str, raw: &str) -> Option<Bound> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Bound::Date(date));
    }
    if let Ok(number) = raw.parse::<f64>() {
        return Some(Bound::Number(number));
    }
    warn!(dimension = %dimension, value = %raw, "ignoring unparseable filter bound");
    None
}

/// Compare a record value against a resolved bound, or `None` when the
/// types cannot be compared (the record then fails the constraint).
fn bound_cmp(value: &FieldValue, bound: &Bound) -> Option<Ordering> {
    match (value, bound) {
        (FieldValue::Date(d), Bound::Date(b)) => Some(d.cmp(b)),
        (FieldValue::Number(n), Bound::Number(b)) => n.partial_cmp(b),
        _ => {
            debug!("range bound type does not match record field type");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Free-text search
// ---------------------------------------------------------------------------

/// Case-insensitive substring match across the record type's searchable
/// fields; the record passes if any of them contains the query.
fn search_matches<R: TableRecord>(record: &R, text: &str) -> bool {
    let needle = text.to_lowercase();
    R::searchable_fields().iter().any(|field| {
        record
            .field(field)
            .map(|v| v.display().to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}
