mod fit;
mod generator;
mod metrics;
mod params;
mod point;
mod round;

pub use fit::{least_squares, try_least_squares, FitError, FitResult, RawFit};
pub use generator::{generate, DEFAULT_POINT_COUNT, X_MAX};
pub use metrics::mse;
pub use params::Parameters;
pub use point::Point;
