//! Accumulated extraction results
//!
//! A [`Dataset`] only grows: values are appended in traversal order and are
//! never removed, reordered or modified. Once the pipeline returns it, the
//! dataset is only read.

use crate::error::Result;
use crate::types::ExtractedValue;

/// Ordered, append-only collection of extracted values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    values: Vec<ExtractedValue>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one value at the end
    pub fn append(&mut self, value: ExtractedValue) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values with their provenance, in traversal order
    pub fn values(&self) -> &[ExtractedValue] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtractedValue> {
        self.values.iter()
    }

    /// Plain numbers for the rendering stage.
    ///
    /// Fails on the first value with no numeric interpretation, naming the
    /// file it came from.
    pub fn numeric_values(&self) -> Result<Vec<f64>> {
        self.values.iter().map(ExtractedValue::numeric).collect()
    }

    /// Summary statistics over the numeric values
    pub fn stats(&self) -> Result<DatasetStats> {
        Ok(DatasetStats::from_values(&self.numeric_values()?))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a ExtractedValue;
    type IntoIter = std::slice::Iter<'a, ExtractedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Count, range and mean of a numeric series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStats {
    /// Number of values
    pub count: usize,
    /// Sum of all values
    pub sum: f64,
    /// Smallest value (`f64::MAX` when empty)
    pub min: f64,
    /// Largest value (`f64::MIN` when empty)
    pub max: f64,
}

impl Default for DatasetStats {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::MAX,
            max: f64::MIN,
        }
    }
}

impl DatasetStats {
    pub fn from_values(values: &[f64]) -> Self {
        let mut stats = Self::default();
        for &v in values {
            stats.push(v);
        }
        stats
    }

    #[inline]
    fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Arithmetic mean, or 0 for an empty series
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// `(min, max)`, or `None` for an empty series
    pub fn range(&self) -> Option<(f64, f64)> {
        (self.count > 0).then_some((self.min, self.max))
    }
}
