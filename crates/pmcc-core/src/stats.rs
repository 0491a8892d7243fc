//! Pearson correlation kernel.

/// Pearson product-moment correlation coefficient of two equal-length
/// sequences.
///
/// Uses population (1/n) moments; the 1/n factors cancel between the
/// covariance and the product of standard deviations, so the result is
/// identical to the sample-moment formulation.
///
/// Returns NaN when either sequence is empty or has zero variance — the
/// statistic is undefined there, and callers classify NaN explicitly
/// rather than handling an error.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return f64::NAN;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    // Rounding can push a perfectly collinear pair a hair past ±1.
    (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfectly_correlated() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn perfectly_anticorrelated() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &y) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn known_value() {
        // Hand-computed: cov = 7.0, var_x = 10.0, var_y = 5.2,
        // r = 7 / sqrt(52) = 0.9707253433941511
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 2.0, 2.0, 3.0, 4.0];
        assert!((pearson(&x, &y) - 0.9707253433941511).abs() < 1e-12);
    }

    #[test]
    fn zero_variance_is_nan() {
        let flat = [3.0, 3.0, 3.0];
        let varying = [1.0, 2.0, 3.0];
        assert!(pearson(&flat, &varying).is_nan());
        assert!(pearson(&varying, &flat).is_nan());
        assert!(pearson(&flat, &flat).is_nan());
    }

    #[test]
    fn single_point_is_nan() {
        assert!(pearson(&[1.0], &[2.0]).is_nan());
        assert!(pearson(&[], &[]).is_nan());
    }

    #[test]
    fn result_stays_in_unit_interval() {
        let x = [0.1, 0.4, 0.35, 0.8, 0.95, 0.2];
        let y = [0.9, 0.2, 0.45, 0.1, 0.3, 0.85];
        let r = pearson(&x, &y);
        assert!((-1.0..=1.0).contains(&r), "r = {r}");
    }
}
