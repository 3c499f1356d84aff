//! The runtime-log exercise: aggregate a JSON list of operation timings.
//!
//! Each entry names a `software`, an `operation` it performed, and the
//! `length` of time that took. The questions asked of the data: which
//! operation ran longest summed across all softwares, and how the softwares
//! rank by total runtime. A strict pass rejects entries whose lengths make
//! no sense as durations.
//!
//! All aggregation is deterministic. Totals accumulate in input order per
//! key, and rankings break ties on the alphabetically first name.
//!
//! # Examples
//!
//! ```
//! use exercises::runtime::{longest_operation, parse_entries};
//!
//! let entries = parse_entries(
//!     r#"[
//!         {"software": "editor", "operation": "save", "length": 2.5},
//!         {"software": "editor", "operation": "open", "length": 4.0},
//!         {"software": "compiler", "operation": "save", "length": 3.0}
//!     ]"#,
//! )?;
//!
//! assert_eq!(longest_operation(&entries), Some(("save", 5.5)));
//! # Ok::<(), exercises::runtime::EntryError>(())
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

/// One timing record: `software` ran `operation` for `length` units of time.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Entry {
    /// The program the entry was recorded for.
    pub software: String,
    /// The operation the program performed.
    pub operation: String,
    /// How long the operation ran.
    pub length: f64,
}

/// Failures when reading or vetting timing entries.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    /// The input was not a JSON list of complete entries.
    #[error("invalid entries: {0}")]
    Parse(#[from] serde_json::Error),

    /// The input parsed but held no entries.
    #[error("no entries in input")]
    Empty,

    /// An entry's length cannot be a duration.
    #[error("invalid length {length} for {software}/{operation}")]
    InvalidLength {
        /// The software of the offending entry.
        software: String,
        /// The operation of the offending entry.
        operation: String,
        /// The length that failed the check.
        length: f64,
    },
}

/// Reads entries from a JSON list.
///
/// Every entry must carry all three fields with the right types; one
/// incomplete or mistyped record fails the whole parse. An empty list is
/// rejected as [`EntryError::Empty`], there being nothing to aggregate.
///
/// # Examples
///
/// ```
/// use exercises::runtime::parse_entries;
///
/// let missing_length = r#"[{"software": "editor", "operation": "save"}]"#;
/// assert!(parse_entries(missing_length).is_err());
/// ```
pub fn parse_entries(json: &str) -> Result<Vec<Entry>, EntryError> {
    let entries: Vec<Entry> = serde_json::from_str(json)?;
    if entries.is_empty() {
        return Err(EntryError::Empty);
    }
    Ok(entries)
}

/// Vets entries strictly: every length must be a finite, non-negative
/// number.
///
/// JSON cannot spell NaN or infinity, so parsed input only ever trips the
/// negative case; slices assembled in memory can trip both.
pub fn check_entries(entries: &[Entry]) -> Result<(), EntryError> {
    match entries
        .iter()
        .find(|e| !e.length.is_finite() || e.length < 0.0)
    {
        Some(entry) => Err(EntryError::InvalidLength {
            software: entry.software.clone(),
            operation: entry.operation.clone(),
            length: entry.length,
        }),
        None => Ok(()),
    }
}

/// The operation with the greatest total length, summed across softwares.
///
/// Returns the operation name with its total, or `None` for an empty slice.
pub fn longest_operation(entries: &[Entry]) -> Option<(&str, f64)> {
    let sums = totals(entries.iter().map(|e| (e.operation.as_str(), e.length)));
    ranked(sums).into_iter().next()
}

/// Every software with its total length, longest-running first.
///
/// # Examples
///
/// ```
/// use exercises::runtime::{parse_entries, software_totals};
///
/// let entries = parse_entries(
///     r#"[
///         {"software": "editor", "operation": "save", "length": 2.5},
///         {"software": "compiler", "operation": "build", "length": 4.0}
///     ]"#,
/// )?;
///
/// let ranking = software_totals(&entries);
/// assert_eq!(ranking, vec![("compiler", 4.0), ("editor", 2.5)]);
/// # Ok::<(), exercises::runtime::EntryError>(())
/// ```
pub fn software_totals(entries: &[Entry]) -> Vec<(&str, f64)> {
    ranked(totals(entries.iter().map(|e| (e.software.as_str(), e.length))))
}

/// Total length per software and operation pair, longest first.
pub fn operation_totals_by_software(entries: &[Entry]) -> Vec<(&str, &str, f64)> {
    let mut sums = BTreeMap::new();
    for e in entries {
        *sums
            .entry((e.software.as_str(), e.operation.as_str()))
            .or_insert(0.0) += e.length;
    }
    ranked(sums)
        .into_iter()
        .map(|((software, operation), total)| (software, operation, total))
        .collect()
}

/// Sums lengths per key. The `BTreeMap` keeps keys in a deterministic order
/// for the tie handling in [`ranked`].
fn totals<'a>(pairs: impl Iterator<Item = (&'a str, f64)>) -> BTreeMap<&'a str, f64> {
    let mut sums = BTreeMap::new();
    for (key, length) in pairs {
        *sums.entry(key).or_insert(0.0) += length;
    }
    sums
}

/// Sorts totals longest first. The sort is stable, so equal totals stay in
/// key order: alphabetical for names, lexicographic for pairs.
fn ranked<K>(sums: BTreeMap<K, f64>) -> Vec<(K, f64)> {
    let mut rows: Vec<_> = sums.into_iter().collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));
    rows
}
