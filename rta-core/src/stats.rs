//! Shared statistics primitives.

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

/// Unbiased sample standard deviation (n-1 denominator); NaN below two values.
pub fn stddev_sample(xs: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    let var = xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / ((n as f64) - 1.0);
    var.sqrt()
}
