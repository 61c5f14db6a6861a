/// User-tunable line parameters plus the noise level used when generating
/// new data.
///
/// Fields are private so every mutation goes through the clamping setters:
/// no matter what a slider, an animation nudge, or a snap-to-fit writes,
/// the stored values stay inside the control ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    slope: f64,
    intercept: f64,
    noise: f64,
}

impl Parameters {
    pub const SLOPE_MIN: f64 = -5.0;
    pub const SLOPE_MAX: f64 = 5.0;
    pub const SLOPE_STEP: f64 = 0.1;

    pub const INTERCEPT_MIN: f64 = 0.0;
    pub const INTERCEPT_MAX: f64 = 50.0;
    pub const INTERCEPT_STEP: f64 = 0.5;

    pub const NOISE_MIN: f64 = 0.0;
    pub const NOISE_MAX: f64 = 15.0;
    pub const NOISE_STEP: f64 = 0.5;

    /// Creates parameters, clamping each value to its control range.
    ///
    /// # Args
    /// * `slope` - Line slope, clamped to [-5, 5].
    /// * `intercept` - Line intercept, clamped to [0, 50].
    /// * `noise` - Noise half-width, clamped to [0, 15].
    pub fn new(slope: f64, intercept: f64, noise: f64) -> Self {
        let mut p = Self {
            slope: 0.0,
            intercept: 0.0,
            noise: 0.0,
        };
        p.set_slope(slope);
        p.set_intercept(intercept);
        p.set_noise(noise);
        p
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn noise(&self) -> f64 {
        self.noise
    }

    /// Sets the slope, clamped to [`SLOPE_MIN`](Self::SLOPE_MIN)..=[`SLOPE_MAX`](Self::SLOPE_MAX).
    pub fn set_slope(&mut self, slope: f64) {
        self.slope = slope.clamp(Self::SLOPE_MIN, Self::SLOPE_MAX);
    }

    /// Sets the intercept, clamped to its control range.
    pub fn set_intercept(&mut self, intercept: f64) {
        self.intercept = intercept.clamp(Self::INTERCEPT_MIN, Self::INTERCEPT_MAX);
    }

    /// Sets the noise level, clamped to its control range.
    pub fn set_noise(&mut self, noise: f64) {
        self.noise = noise.clamp(Self::NOISE_MIN, Self::NOISE_MAX);
    }

    /// Adds `delta` to the slope, clamping the result.
    pub fn nudge_slope(&mut self, delta: f64) {
        self.set_slope(self.slope + delta);
    }

    /// Adds `delta` to the intercept, clamping the result.
    pub fn nudge_intercept(&mut self, delta: f64) {
        self.set_intercept(self.intercept + delta);
    }

    /// Adds `delta` to the noise level, clamping the result.
    pub fn nudge_noise(&mut self, delta: f64) {
        self.set_noise(self.noise + delta);
    }

    /// Evaluates the user's line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl Default for Parameters {
    /// Initial demo state: y = 2x + 10 with noise half-width 5.
    fn default() -> Self {
        Self::new(2.0, 10.0, 5.0)
    }
}
