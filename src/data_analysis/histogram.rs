// src/data_analysis/histogram.rs

use ndarray::ArrayView1;
use ndarray_stats::QuantileExt;
use tracing::debug;

use crate::constants::DEGENERATE_RANGE_HALF_WIDTH;
use crate::error::{HistogramError, Result};

/// One bin of a histogram. Covers `[range_start, range_end)`, except the last
/// bin of a histogram which also includes `range_end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub range_start: f64,
    pub range_end: f64,
    pub count: u64,
}

impl HistogramBin {
    pub fn width(&self) -> f64 {
        self.range_end - self.range_start
    }
}

/// Equal-width histogram over the observed min..max range of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bins `values` into exactly `bin_count` equal-width bins.
    ///
    /// The range is the observed minimum to maximum. When every value is the
    /// same the range is widened by half a unit on each side, so all values
    /// land in one bin and the bin count is unchanged.
    pub fn compute(values: &[f64], bin_count: usize) -> Result<Self> {
        if bin_count == 0 {
            return Err(HistogramError::InvalidBinCount(bin_count));
        }

        let view = ArrayView1::from(values);
        let mut first = *view
            .min()
            .map_err(|e| HistogramError::Range(e.to_string()))?;
        let mut last = *view
            .max()
            .map_err(|e| HistogramError::Range(e.to_string()))?;
        if !first.is_finite() || !last.is_finite() {
            return Err(HistogramError::Range(format!(
                "range [{first}, {last}] is not finite"
            )));
        }
        if first == last {
            debug!("All {} values equal {}; widening range", values.len(), first);
            first -= DEGENERATE_RANGE_HALF_WIDTH;
            last += DEGENERATE_RANGE_HALF_WIDTH;
        }

        if !(last - first).is_finite() {
            return Err(HistogramError::Range(format!(
                "span of [{first}, {last}] overflows"
            )));
        }

        let edges = bin_edges(first, last, bin_count);
        let mut counts = vec![0u64; bin_count];
        let norm = bin_count as f64 / (last - first);
        for &v in values {
            counts[bin_index(v, first, norm, &edges)] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                range_start: edges[i],
                range_end: edges[i + 1],
                count,
            })
            .collect();

        Ok(Self { bins })
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// (first edge, last edge) of the histogram.
    pub fn range(&self) -> (f64, f64) {
        match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => (first.range_start, last.range_end),
            _ => (0.0, 0.0),
        }
    }
}

/// `bin_count + 1` edges from `first` to `last`; the final edge is `last`
/// exactly rather than an accumulated sum.
fn bin_edges(first: f64, last: f64, bin_count: usize) -> Vec<f64> {
    let step = (last - first) / bin_count as f64;
    let mut edges: Vec<f64> = (0..bin_count).map(|i| first + i as f64 * step).collect();
    edges.push(last);
    edges
}

/// Index of the bin holding `v`. The arithmetic estimate can be off by one
/// near an edge, so it is checked against the stored edges.
fn bin_index(v: f64, first: f64, norm: f64, edges: &[f64]) -> usize {
    let bin_count = edges.len() - 1;
    let mut idx = (((v - first) * norm) as usize).min(bin_count - 1);
    if v < edges[idx] && idx > 0 {
        idx -= 1;
    } else if idx + 1 < bin_count && v >= edges[idx + 1] {
        idx += 1;
    }
    idx
}
