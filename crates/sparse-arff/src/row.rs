//! Sparse Data Rows

use crate::error::ArffError;
use std::collections::BTreeMap;

/// One data instance: observed attribute values plus the class label.
///
/// The label attribute never appears in `values`. Attributes missing from
/// `values` were not observed; they are not implicitly zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseRow {
    values: BTreeMap<i64, i64>,
    label: i64,
}

impl SparseRow {
    /// Build a row from already separated values and label
    pub fn new(values: BTreeMap<i64, i64>, label: i64) -> Self {
        Self { values, label }
    }

    /// Build a row from `(index, value)` pairs; later pairs override earlier ones
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i64, i64)>, label: i64) -> Self {
        Self::new(pairs.into_iter().collect(), label)
    }

    /// Attribute values keyed by attribute index
    #[cfg(test)]
    pub(crate) fn values(&self) -> &BTreeMap<i64, i64> {
        &self.values
    }

    /// Class label
    pub fn label(&self) -> i64 {
        self.label
    }

    /// `(index, value)` pairs in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.values.iter().map(|(&i, &v)| (i, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse one trimmed data line into a row.
///
/// `{`/`}` wrappers are optional, empty pairs are skipped, and the entry at
/// `label_index` is taken out as the label (0 when absent).
pub fn parse_row(
    line: &str,
    line_no: usize,
    label_index: Option<usize>,
) -> Result<SparseRow, ArffError> {
    let payload = line.trim_matches(|c: char| c == '{' || c == '}');
    let mut values = BTreeMap::new();

    for pair in payload.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }

        let mut tokens = pair.split_whitespace();
        let (index, value) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(index), Some(value), None) => (index, value),
            _ => {
                return Err(ArffError::MalformedPair {
                    line: line_no,
                    pair: pair.to_string(),
                })
            }
        };

        let index = index.parse::<i64>().map_err(|_| ArffError::InvalidInteger {
            line: line_no,
            token: index.to_string(),
        })?;
        let value = value.parse::<i64>().map_err(|_| ArffError::InvalidInteger {
            line: line_no,
            token: value.to_string(),
        })?;

        values.insert(index, value);
    }

    let label = label_index
        .and_then(|idx| i64::try_from(idx).ok())
        .and_then(|idx| values.remove(&idx))
        .unwrap_or(0);

    Ok(SparseRow::new(values, label))
}
