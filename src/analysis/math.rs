//! Shared numeric helpers for price samples

/// Arithmetic mean
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample median: even-length inputs average the two middle values
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Sample standard deviation with Bessel's correction (n-1 denominator).
/// A single observation has no spread, so n=1 yields 0.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(0.0);
    }

    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    Some((sum_sq / (n - 1) as f64).sqrt())
}
