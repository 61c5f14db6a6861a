use rand::Rng;

use crate::params::Parameters;
use crate::point::Point;
use crate::round::round2;

/// Number of points produced when the caller has no preference.
pub const DEFAULT_POINT_COUNT: usize = 50;

/// Samples are drawn uniformly from `[0, X_MAX)`.
pub const X_MAX: f64 = 20.0;

/// Generates a fresh synthetic point set around the user's line.
///
/// Each sample draws x uniformly from [0, 20), puts the noise-free value on
/// the line, then perturbs it by a uniform offset in ±noise. Coordinates are
/// rounded to 2 decimals and the result is sorted ascending by x. Ids are
/// assigned in draw order, before sorting.
///
/// # Args
/// * `count` - Number of points to produce.
/// * `params` - Current slope/intercept/noise.
/// * `rng` - Random source; tests pass a seeded `StdRng`.
///
/// # Returns
/// `count` points sorted ascending by x. Never fails.
pub fn generate(count: usize, params: &Parameters, rng: &mut impl Rng) -> Vec<Point> {
    let mut points: Vec<Point> = (0..count)
        .map(|id| {
            let x = rng.random_range(0.0..X_MAX);
            let true_y = params.predict(x);
            let y = true_y + rng.random_range(-params.noise()..=params.noise());
            Point::new(id, round2(x), round2(y), round2(true_y))
        })
        .collect();

    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    points
}
