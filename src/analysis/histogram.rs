//! Histogram binning
//!
//! Splits a numeric series into equal-width bins the same way matplotlib's
//! `hist` does, so plots match what users are used to:
//! - the range is `[min, max]` of the data
//! - every bin is half-open `[lo, hi)` except the last, which is closed
//! - a constant series is widened to `[v - 0.5, v + 0.5]`
//! - an empty series uses `[0, 1]` with all counts zero

/// Binned distribution of a numeric series
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges, `bins + 1` long and strictly increasing
    pub edges: Vec<f64>,
    /// Number of values per bin
    pub counts: Vec<u64>,
    /// Number of values binned
    pub total: usize,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins.
    ///
    /// A bin count of 0 is treated as 1.
    pub fn compute(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let (lo, hi) = Self::range(values);
        let width = (hi - lo) / bins as f64;

        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + i as f64 * width })
            .collect();

        let mut counts = vec![0u64; bins];
        for &v in values {
            let idx = (((v - lo) / (hi - lo)) * bins as f64) as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        Self {
            edges,
            counts,
            total: values.len(),
        }
    }

    fn range(values: &[f64]) -> (f64, f64) {
        let mut iter = values.iter().copied();
        let Some(first) = iter.next() else {
            return (0.0, 1.0);
        };
        let (lo, hi) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if lo == hi {
            (lo - 0.5, hi + 0.5)
        } else {
            (lo, hi)
        }
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Width shared by every bin
    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if !self.counts.is_empty() => (hi - lo) / self.counts.len() as f64,
            _ => 0.0,
        }
    }

    /// Midpoint of each bin
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

    /// `(lower edge, upper edge, count)` for each bin
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(w, &c)| (w[0], w[1], c))
    }

    /// The fullest bin as `(center, count)`; the first one on ties
    pub fn peak(&self) -> Option<(f64, u64)> {
        let mut best: Option<(usize, u64)> = None;
        for (i, &c) in self.counts.iter().enumerate() {
            if best.map_or(true, |(_, b)| c > b) {
                best = Some((i, c));
            }
        }
        let (idx, count) = best?;
        let center = (self.edges[idx] + self.edges[idx + 1]) / 2.0;
        Some((center, count))
    }

    /// Largest count in any bin
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_simple_binning() {
        let h = Histogram::compute(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        assert_eq!(h.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        // Last bin is closed, so 4.0 lands with 3.0
        assert_eq!(h.counts, vec![1, 1, 1, 2]);
        assert_eq!(h.total, 5);
        assert_eq!(h.bin_width(), 1.0);
    }

    #[test]
    fn test_constant_series() {
        let h = Histogram::compute(&[3.5, 3.5, 3.5], 30);
        assert_eq!(h.bin_count(), 30);
        assert_eq!(h.edges[0], 3.0);
        assert_eq!(*h.edges.last().unwrap(), 4.0);
        assert_eq!(h.counts.iter().sum::<u64>(), 3);
        // 3.5 is the lower edge of bin 15
        assert_eq!(h.counts[15], 3);
    }

    #[test]
    fn test_empty_series() {
        let h = Histogram::compute(&[], 30);
        assert_eq!(h.bin_count(), 30);
        assert_eq!(h.edges[0], 0.0);
        assert_eq!(*h.edges.last().unwrap(), 1.0);
        assert_eq!(h.max_count(), 0);
        assert_eq!(h.total, 0);
        assert_eq!(h.peak(), Some((1.0 / 60.0, 0)));
    }

    #[test]
    fn test_zero_bins_is_one() {
        let h = Histogram::compute(&[1.0, 2.0], 0);
        assert_eq!(h.counts, vec![2]);
    }

    #[test]
    fn test_peak_and_centers() {
        let h = Histogram::compute(&[0.0, 0.1, 0.2, 5.0, 10.0], 2);
        assert_eq!(h.centers(), vec![2.5, 7.5]);
        assert_eq!(h.peak(), Some((2.5, 3)));
        let bins: Vec<_> = h.bins().collect();
        assert_eq!(bins, vec![(0.0, 5.0, 3), (5.0, 10.0, 2)]);
    }

    #[test]
    fn test_negative_values() {
        let h = Histogram::compute(&[-10.0, -5.0, 0.0], 2);
        assert_eq!(h.edges, vec![-10.0, -5.0, 0.0]);
        assert_eq!(h.counts, vec![1, 2]);
    }

    proptest! {
        #[test]
        fn prop_counts_sum_to_len(
            values in prop::collection::vec(-1.0e6f64..1.0e6, 0..200),
            bins in 1usize..64,
        ) {
            let h = Histogram::compute(&values, bins);
            prop_assert_eq!(h.counts.iter().sum::<u64>() as usize, values.len());
            prop_assert_eq!(h.edges.len(), bins + 1);
            prop_assert!(h.edges.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
