/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to 4 decimal places.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2.0]), 2.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(30.0 / 31.0), 0.9677);
        assert_eq!(round4(1.0 / 3.0), 0.3333);
        assert_eq!(round4(2.0), 2.0);
        // Idempotent on already-rounded values.
        assert_eq!(round4(round4(1.23456789)), round4(1.23456789));
    }
}
