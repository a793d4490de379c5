//! Feature Value Patterns

use crate::error::StatsError;
use sparse_arff::{Header, SparseRow};
use std::collections::BTreeSet;
use tracing::debug;

/// Sorted `(attribute index, value)` pairs identifying a value combination
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Vec<(i64, i64)>);

impl Pattern {
    /// All observed attributes of a row
    pub fn entire(row: &SparseRow) -> Self {
        Self(row.iter().collect())
    }

    /// Observed attributes of a row restricted to the selection
    pub fn selected(row: &SparseRow, selection: &Selection) -> Self {
        Self(row.iter().filter(|(i, _)| selection.contains(*i)).collect())
    }

    pub fn pairs(&self) -> &[(i64, i64)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Set of selected attribute indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: BTreeSet<usize>,
}

impl Selection {
    /// Resolve feature names against the header. Repeated names collapse.
    pub fn resolve<S: AsRef<str>>(header: &Header, names: &[S]) -> Result<Self, StatsError> {
        let indices = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                header
                    .index_of(name)
                    .ok_or_else(|| StatsError::UnknownFeature(name.to_string()))
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        debug!("Selected attribute indices: {:?}", indices);
        Ok(Self { indices })
    }

    /// Selection over explicit attribute indices
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// Whether a row attribute index is selected; negative indices never are
    pub fn contains(&self, index: i64) -> bool {
        usize::try_from(index).is_ok_and(|i| self.indices.contains(&i))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparse_arff::ArffOptions;

    fn header() -> Header {
        Header::new(
            vec!["a0".into(), "a1".into(), "a2".into(), "class".into()],
            &ArffOptions::default(),
        )
    }

    #[test]
    fn test_entire_pattern_is_sorted() {
        let row = SparseRow::from_pairs([(2, 4), (0, 1)], 0);
        assert_eq!(Pattern::entire(&row).pairs(), &[(0, 1), (2, 4)]);
    }

    #[test]
    fn test_row_order_does_not_matter() {
        let a = SparseRow::from_pairs([(1, 3), (0, 2)], 0);
        let b = SparseRow::from_pairs([(0, 2), (1, 3)], 1);
        assert_eq!(Pattern::entire(&a), Pattern::entire(&b));
    }

    #[test]
    fn test_selected_pattern_filters() {
        let row = SparseRow::from_pairs([(0, 1), (1, 5), (2, 4)], 0);
        let sel = Selection::from_indices([0, 2]);
        assert_eq!(Pattern::selected(&row, &sel).pairs(), &[(0, 1), (2, 4)]);
    }

    #[test]
    fn test_negative_index_is_never_selected() {
        let row = SparseRow::from_pairs([(-1, 4), (0, 1)], 0);
        let sel = Selection::from_indices([0, 1]);
        assert_eq!(Pattern::entire(&row).pairs(), &[(-1, 4), (0, 1)]);
        assert_eq!(Pattern::selected(&row, &sel).pairs(), &[(0, 1)]);
    }

    #[test]
    fn test_absent_is_not_zero() {
        let absent = SparseRow::from_pairs([(0, 1)], 0);
        let zero = SparseRow::from_pairs([(0, 1), (1, 0)], 0);
        assert_ne!(Pattern::entire(&absent), Pattern::entire(&zero));
    }

    #[test]
    fn test_resolve_names() {
        let sel = Selection::resolve(&header(), &["a2", "a0", "a2"]).unwrap();
        assert_eq!(sel.len(), 2);
        assert!(sel.contains(0));
        assert!(sel.contains(2));
        assert!(!sel.contains(1));
        assert!(!sel.contains(-1));
    }

    #[test]
    fn test_resolve_unknown_name() {
        let err = Selection::resolve(&header(), &["a0", "missing"]).unwrap_err();
        assert!(matches!(err, StatsError::UnknownFeature(ref n) if n == "missing"));
    }

    #[test]
    fn test_empty_selection() {
        let sel = Selection::resolve::<&str>(&header(), &[]).unwrap();
        assert!(sel.is_empty());
        let row = SparseRow::from_pairs([(0, 1)], 0);
        assert!(Pattern::selected(&row, &sel).is_empty());
    }
}
