//! Row-wise aggregation over optional values.
//!
//! Missing values are dropped before aggregating. An aggregate over zero
//! present values is itself missing, never zero.

use crate::definition::ScoringMethod;

pub fn mean<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    let (total, n) = present(values);
    (n > 0).then(|| total / n as f64)
}

pub fn sum<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    let (total, n) = present(values);
    (n > 0).then_some(total)
}

/// Sample standard deviation (N - 1 denominator). Needs two values.
pub fn sample_std_dev<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    let values: Vec<f64> = values.into_iter().flatten().collect();
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}

fn present<I: IntoIterator<Item = Option<f64>>>(values: I) -> (f64, usize) {
    values
        .into_iter()
        .flatten()
        .fold((0.0, 0), |(total, n), v| (total + v, n + 1))
}

impl ScoringMethod {
    pub fn aggregate<I: IntoIterator<Item = Option<f64>>>(self, values: I) -> Option<f64> {
        match self {
            ScoringMethod::Mean => mean(values),
            ScoringMethod::Sum => sum(values),
        }
    }
}

/// Reverse a response on a `[scale_min, scale_max]` scale. With the
/// default `scale_min` of 1 this is `scale_max + 1 - value`.
pub fn reverse(value: f64, scale_min: f64, scale_max: f64) -> f64 {
    scale_min + scale_max - value
}
