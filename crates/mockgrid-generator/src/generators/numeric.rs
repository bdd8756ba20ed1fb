//! Numeric value generators.

use rand::Rng;

/// Generate a random monetary amount in `[min, max)`, rendered with exactly
/// two fractional digits.
///
/// The amount is kept as text so consumers never see float display drift.
pub fn amount_in_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> String {
    let value = rng.gen_range(min..max);
    format!("{value:.2}")
}

/// Generate a progress value, a uniform integer in `[0, 100]`.
pub fn progress<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(0..=100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_amount_has_two_fractional_digits() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let amount = amount_in_range(&mut rng, 0.0, 10_000.0);
            let (whole, frac) = amount.split_once('.').expect("amount has a decimal point");
            assert!(!whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(frac.len(), 2);
            assert!(frac.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_amount_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let amount = amount_in_range(&mut rng, 10.0, 20.0);
            let parsed: f64 = amount.parse().unwrap();
            assert!((10.0..=20.0).contains(&parsed));
        }
    }

    #[test]
    fn test_progress_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen_above_ninety = false;

        for _ in 0..1000 {
            let value = progress(&mut rng);
            assert!(value <= 100);
            if value > 90 {
                seen_above_ninety = true;
            }
        }

        // The upper end of the range is reachable.
        assert!(seen_above_ninety);
    }
}
