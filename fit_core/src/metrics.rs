use crate::params::Parameters;
use crate::point::Point;
use crate::round::round2;

/// Mean squared error of the observed values against the user's line.
///
/// # Args
/// * `points` - Current point set.
/// * `params` - The slope/intercept being evaluated (the noise level is
///   not consulted).
///
/// # Returns
/// Mean squared residual rounded to 2 decimals; 0 for an empty point set.
pub fn mse(points: &[Point], params: &Parameters) -> f64 {
    if points.is_empty() {
        return 0.0;
    }

    let sum: f64 = points
        .iter()
        .map(|p| {
            let residual = p.y - params.predict(p.x);
            residual * residual
        })
        .sum();

    round2(sum / points.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_zero_error() {
        assert_eq!(mse(&[], &Parameters::default()), 0.0);
    }

    #[test]
    fn exact_parameters_have_zero_error() {
        let params = Parameters::new(2.0, 10.0, 0.0);
        let points = vec![
            Point::new(0, 0.0, 10.0, 10.0),
            Point::new(1, 10.0, 30.0, 30.0),
        ];
        assert_eq!(mse(&points, &params), 0.0);
    }

    #[test]
    fn constant_offset_squares_into_the_mean() {
        // Both observations sit 3 above the line: MSE = 9.
        let params = Parameters::new(1.0, 0.0, 0.0);
        let points = vec![Point::new(0, 1.0, 4.0, 4.0), Point::new(1, 2.0, 5.0, 5.0)];
        assert_eq!(mse(&points, &params), 9.0);
    }
}
