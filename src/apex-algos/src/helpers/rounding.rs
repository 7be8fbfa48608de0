/// Rounds to the nearest integer, halves away from zero.
pub fn round_kcal(v: f64) -> i64 {
    v.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_kcal_halves_away_from_zero() {
        assert_eq!(round_kcal(2749.3125), 2749);
        assert_eq!(round_kcal(1452.5), 1453);
        assert_eq!(round_kcal(-2.5), -3);
    }
}
