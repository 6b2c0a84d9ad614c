/// Pearson product-moment correlation of two equally long samples.
///
/// Returns `None` when the lengths differ, fewer than two pairs are given, or either
/// sample has zero variance.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (covariance, variance_x, variance_y) = xs.iter().zip(ys).fold(
        (0.0, 0.0, 0.0),
        |(cov, var_x, var_y), (&x, &y)| {
            let dx = x - mean_x;
            let dy = y - mean_y;
            (cov + dx * dy, var_x + dx * dx, var_y + dy * dy)
        },
    );

    if variance_x == 0.0 || variance_y == 0.0 {
        return None;
    }

    Some(covariance / (variance_x.sqrt() * variance_y.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn perfectly_linear_data() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];

        assert!((pearson(&xs, &up).unwrap() - 1.0).abs() < TOLERANCE);
        assert!((pearson(&xs, &down).unwrap() + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn known_value() {
        // r = 0.8 for this textbook sample
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.0, 1.0, 4.0, 3.0, 5.0];

        assert!((pearson(&xs, &ys).unwrap() - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
        assert_eq!(pearson(&[1.0], &[1.0]), None);
        assert_eq!(pearson(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]), None);
    }
}
