//! Header-keyed records built from a table's data rows.

use crate::constants::{CATEGORY_KEY, DATE_KEY};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One data row keyed by column header.
///
/// Every header is present as a key; `None` marks a cell missing because the
/// row was shorter than the header row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Option<String>>,
}

impl Record {
    /// Zip headers with cells positionally. Duplicate headers keep their first
    /// position and take the later cell.
    pub fn from_cells(headers: &[String], cells: &[&str]) -> Self {
        let mut fields = IndexMap::with_capacity(headers.len());
        for (index, header) in headers.iter().enumerate() {
            fields.insert(header.clone(), cells.get(index).map(|c| c.to_string()));
        }
        Self { fields }
    }

    /// Raw cell text, `None` when the key is unknown or the cell is missing
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// The category label; an absent category reads as empty
    pub fn category(&self) -> &str {
        self.get(CATEGORY_KEY).unwrap_or_default()
    }

    /// Numeric coercion of a cell: trimmed and parsed as `f64`.
    /// Absent, empty or non-numeric cells have no value.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered records plus the header row they were keyed by.
///
/// Record order is the input row order and defines axis and slice order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordArray {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

/// Which reserved columns a chart kind keeps out of its series
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesFilter {
    /// Exclude `Category`
    Standard,
    /// Exclude `Category` and `Date`
    IgnoreDate,
}

impl SeriesFilter {
    fn excludes(&self, key: &str) -> bool {
        match self {
            SeriesFilter::Standard => key == CATEGORY_KEY,
            SeriesFilter::IgnoreDate => key == CATEGORY_KEY || key == DATE_KEY,
        }
    }
}

impl RecordArray {
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        Self { headers, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Category labels in record order
    pub fn categories(&self) -> Vec<String> {
        self.records.iter().map(|r| r.category().to_string()).collect()
    }

    /// Headers in first-seen order with repeats removed; the key order of
    /// every record
    pub fn distinct_headers(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::with_capacity(self.headers.len());
        for header in &self.headers {
            if !keys.contains(header) {
                keys.push(header.clone());
            }
        }
        keys
    }

    /// Distinct non-reserved headers, in header order. Each becomes one series.
    pub fn series_keys(&self, filter: SeriesFilter) -> Vec<String> {
        self.distinct_headers()
            .into_iter()
            .filter(|header| !filter.excludes(header))
            .collect()
    }
}

impl<'a> IntoIterator for &'a RecordArray {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
