use std::fmt;

use crate::point::Point;
use crate::round::round3;

/// Errors produced by the strict fit API when no line is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// Fewer than two points; a line through the data is underdetermined.
    TooFewPoints { n: usize },

    /// All x values coincide, so the normal-equation denominator is zero.
    ZeroVariance,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::TooFewPoints { n } => {
                write!(f, "need at least 2 points to fit a line, got {n}")
            }
            FitError::ZeroVariance => write!(f, "all x values are equal, fit is undefined"),
        }
    }
}

impl std::error::Error for FitError {}

/// Unrounded ordinary-least-squares solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawFit {
    pub slope: f64,
    pub intercept: f64,
    pub r2: f64,
}

/// Best-fit line as reported to the UI: slope/intercept/R² rounded to
/// 3 decimals. A pure function of the point set only — the user's own
/// parameters never influence it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
    pub r2: f64,
}

/// Computes the closed-form ordinary-least-squares fit.
///
/// # Args
/// * `points` - Observations; only `x` and `y` are used.
///
/// # Returns
/// The unrounded slope, intercept, and R² (clamped below at 0; defined
/// as 0 when the observed y values have no variance).
///
/// # Errors
/// `FitError::TooFewPoints` for n < 2, `FitError::ZeroVariance` when all
/// x coincide. The degenerate denominator is guarded here so a non-finite
/// value can never leak out.
pub fn try_least_squares(points: &[Point]) -> Result<RawFit, FitError> {
    let n = points.len();
    if n < 2 {
        return Err(FitError::TooFewPoints { n });
    }
    let n_f = n as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for p in points {
        sum_x += p.x;
        sum_y += p.y;
        sum_xy += p.x * p.y;
        sum_x2 += p.x * p.x;
    }

    // Mean-centered Σ(x−x̄)² has no catastrophic cancellation, so the only
    // floating noise left when every x coincides is the mean's own rounding,
    // bounded by ε²·n·Σx². n·Σ(x−x̄)² equals the normal-equation denominator
    // n·Σx² − (Σx)² but stays accurate far from the origin.
    let mean_x = sum_x / n_f;
    let mut ss_x = 0.0;
    for p in points {
        let dx = p.x - mean_x;
        ss_x += dx * dx;
    }
    if ss_x <= f64::EPSILON * f64::EPSILON * n_f * sum_x2.max(1.0) {
        return Err(FitError::ZeroVariance);
    }

    let slope = (n_f * sum_xy - sum_x * sum_y) / (n_f * ss_x);
    let intercept = (sum_y - slope * sum_x) / n_f;

    let mean_y = sum_y / n_f;
    let mut ss_tot = 0.0;
    let mut ss_res = 0.0;
    for p in points {
        let centered = p.y - mean_y;
        ss_tot += centered * centered;
        let residual = p.y - (slope * p.x + intercept);
        ss_res += residual * residual;
    }

    let r2 = if ss_tot == 0.0 {
        0.0
    } else {
        (1.0 - ss_res / ss_tot).max(0.0)
    };

    Ok(RawFit { slope, intercept, r2 })
}

/// Total wrapper over [`try_least_squares`] used by the display path.
///
/// Degenerate inputs (n < 2, or zero x-variance) collapse to the zero
/// result instead of erroring; everything else is rounded to 3 decimals.
pub fn least_squares(points: &[Point]) -> FitResult {
    match try_least_squares(points) {
        Ok(raw) => FitResult {
            slope: round3(raw.slope),
            intercept: round3(raw.intercept),
            r2: round3(raw.r2),
        },
        Err(_) => FitResult::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points_from(pairs: &[(f64, f64)]) -> Vec<Point> {
        pairs
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Point::new(id, x, y, y))
            .collect()
    }

    #[test]
    fn exact_line_recovers_slope_and_intercept() {
        let points = points_from(&[(0.0, 10.0), (10.0, 30.0)]);
        let fit = least_squares(&points);

        assert_eq!(fit.slope, 2.0);
        assert_eq!(fit.intercept, 10.0);
        assert_eq!(fit.r2, 1.0);
    }

    #[test]
    fn too_few_points_collapse_to_zero() {
        assert_eq!(least_squares(&[]), FitResult::default());
        assert_eq!(
            least_squares(&points_from(&[(1.0, 2.0)])),
            FitResult::default()
        );

        assert_eq!(
            try_least_squares(&points_from(&[(1.0, 2.0)])),
            Err(FitError::TooFewPoints { n: 1 })
        );
    }

    #[test]
    fn equal_x_is_reported_as_zero_variance() {
        let points = points_from(&[(3.0, 1.0), (3.0, 2.0), (3.0, 9.0)]);
        assert_eq!(try_least_squares(&points), Err(FitError::ZeroVariance));
        assert_eq!(least_squares(&points), FitResult::default());
    }

    #[test]
    fn constant_y_defines_r2_as_zero() {
        let points = points_from(&[(0.0, 4.0), (1.0, 4.0), (2.0, 4.0)]);
        let raw = try_least_squares(&points).unwrap();

        assert_eq!(raw.slope, 0.0);
        assert_eq!(raw.intercept, 4.0);
        assert_eq!(raw.r2, 0.0);
    }

    #[test]
    fn far_from_origin_variance_is_not_mistaken_for_zero() {
        // x ≈ 1e8 with unit spacing: tiny relative variance, but genuine.
        let points: Vec<Point> = (0..10)
            .map(|i| Point::new(i, 1.0e8 + i as f64, i as f64, 0.0))
            .collect();

        let raw = try_least_squares(&points).unwrap();
        assert!((raw.slope - 1.0).abs() < 1e-3);
        assert!((raw.intercept + 1.0e8).abs() < 1e3 * f64::EPSILON * 1.0e8);
    }

    #[test]
    fn r2_is_clamped_into_unit_interval() {
        // Noisy data with almost no linear trend drives raw R² toward 0.
        let points = points_from(&[(0.0, 5.0), (1.0, -5.0), (2.0, 5.0), (3.0, -5.0)]);
        let raw = try_least_squares(&points).unwrap();

        assert!(raw.r2 >= 0.0);
        assert!(raw.r2 <= 1.0);
    }
}
