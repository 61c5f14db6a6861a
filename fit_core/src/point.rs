/// A single synthetic observation.
///
/// `y` is the noisy observed value; `true_y` is the noise-free value on the
/// generating line, kept around so the UI can show how far the noise pushed
/// each sample. Points are immutable once generated: a "new data" action
/// replaces the whole sequence instead of mutating it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub true_y: f64,
    pub id: usize,
}

impl Point {
    /// Creates a new `Point`.
    ///
    /// # Args
    /// * `id` - Stable identifier assigned at generation time.
    /// * `x` - Sample position.
    /// * `y` - Observed (noisy) value.
    /// * `true_y` - Noise-free value on the generating line.
    pub fn new(id: usize, x: f64, y: f64, true_y: f64) -> Self {
        Self { x, y, true_y, id }
    }
}
