/// Rounds to 2 decimal places (points, MSE).
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Rounds to 3 decimal places (fit outputs).
pub(crate) fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(1.238), 1.24);
        assert_eq!(round2(-3.14159), -3.14);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn rounds_to_three_decimals() {
        assert_eq!(round3(2.71828), 2.718);
        assert_eq!(round3(-0.0019), -0.002);
    }
}
