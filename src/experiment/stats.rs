use serde::{Deserialize, Serialize};
use std::cmp::{max, min};

/// Running min, max and average of the comparison counts of one kind of operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpStats {
    count: usize,
    sum: usize,
    min: Option<usize>,
    max: Option<usize>,
}

impl OpStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, comparisons: usize) {
        self.count += 1;
        self.sum += comparisons;
        self.min = Some(self.min.map_or(comparisons, |m| min(m, comparisons)));
        self.max = Some(self.max.map_or(comparisons, |m| max(m, comparisons)));
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> usize {
        self.sum
    }

    pub fn min(&self) -> Option<usize> {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }

        Some(self.sum as f64 / self.count as f64)
    }

    /// the average rounded down, as an integer count
    pub fn floor_average(&self) -> Option<usize> {
        self.sum.checked_div(self.count)
    }
}

impl Extend<usize> for OpStats {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        for comparisons in iter {
            self.record(comparisons);
        }
    }
}
