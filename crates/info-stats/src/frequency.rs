//! Frequency Tables

use std::collections::BTreeMap;

/// Occurrence counts keyed by observed outcome.
///
/// Keys are kept ordered so entropy sums run in the same order every time.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: BTreeMap<K, u64>,
}

impl<K: Ord> FrequencyTable<K> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Count one occurrence of `key`
    pub fn increment(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Count of `key`, 0 if never seen
    #[cfg(test)]
    pub(crate) fn get(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct keys
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Shannon entropy in bits of the counts taken over `total`.
    ///
    /// H = -Σ (c/T) log2(c/T), skipping zero counts.
    pub fn entropy(&self, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }

        let total = total as f64;
        self.counts
            .values()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let p = c as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

impl<K: Ord> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}
