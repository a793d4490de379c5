//! Single-Pass Pattern Accumulation

use crate::error::StatsError;
use crate::frequency::FrequencyTable;
use crate::pattern::{Pattern, Selection};
use crate::statistics::{MeasuredEntropies, Statistics};
use sparse_arff::SparseRow;
use tracing::{debug, info};

/// Accumulates label and pattern frequencies, one row at a time
#[derive(Debug, Clone)]
pub struct StatisticsEngine {
    feature_count: usize,
    selection: Selection,
    labels: FrequencyTable<i64>,
    entire: FrequencyTable<Pattern>,
    entire_label: FrequencyTable<(Pattern, i64)>,
    selected: FrequencyTable<Pattern>,
    selected_label: FrequencyTable<(Pattern, i64)>,
}

impl StatisticsEngine {
    /// Create an engine for a dataset with `feature_count` declared attributes
    pub fn new(feature_count: usize, selection: Selection) -> Self {
        Self {
            feature_count,
            selection,
            labels: FrequencyTable::new(),
            entire: FrequencyTable::new(),
            entire_label: FrequencyTable::new(),
            selected: FrequencyTable::new(),
            selected_label: FrequencyTable::new(),
        }
    }

    /// Count one row in every table
    pub fn observe(&mut self, row: &SparseRow) {
        let label = row.label();
        let entire = Pattern::entire(row);
        let selected = Pattern::selected(row, &self.selection);

        self.labels.increment(label);
        self.entire_label.increment((entire.clone(), label));
        self.entire.increment(entire);
        self.selected_label.increment((selected.clone(), label));
        self.selected.increment(selected);
    }

    /// Consume a row stream, stopping at the first failed row.
    /// Returns the number of rows observed by this call.
    pub fn accumulate<I, E>(&mut self, rows: I) -> Result<u64, StatsError>
    where
        I: IntoIterator<Item = Result<SparseRow, E>>,
        StatsError: From<E>,
    {
        let mut observed = 0;
        for row in rows {
            self.observe(&row?);
            observed += 1;
        }
        debug!("Accumulated {} rows", observed);
        Ok(observed)
    }

    /// Label counts
    pub fn labels(&self) -> &FrequencyTable<i64> {
        &self.labels
    }

    /// Entire-pattern counts
    pub fn entire(&self) -> &FrequencyTable<Pattern> {
        &self.entire
    }

    /// Entire-pattern and label counts
    pub fn entire_label(&self) -> &FrequencyTable<(Pattern, i64)> {
        &self.entire_label
    }

    /// Selected-pattern counts
    pub fn selected(&self) -> &FrequencyTable<Pattern> {
        &self.selected
    }

    /// Selected-pattern and label counts
    pub fn selected_label(&self) -> &FrequencyTable<(Pattern, i64)> {
        &self.selected_label
    }

    /// Derive the statistics from the accumulated counts
    pub fn finish(self) -> Statistics {
        let n = self.labels.total();
        let entropies = MeasuredEntropies {
            h_c: self.labels.entropy(n),
            h_entire: self.entire.entropy(n),
            h_entire_c: self.entire_label.entropy(n),
            h_selected: self.selected.entropy(n),
            h_selected_c: self.selected_label.entropy(n),
        };

        info!(
            "Derived statistics over {} instances: {} labels, {} entire patterns, {} selected patterns",
            n,
            self.labels.distinct(),
            self.entire.distinct(),
            self.selected.distinct()
        );

        Statistics::compute(n, self.feature_count, entropies)
    }
}
