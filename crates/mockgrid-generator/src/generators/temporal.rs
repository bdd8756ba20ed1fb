//! Calendar date generation.

use chrono::NaiveDate;
use rand::Rng;

/// Generate a random date in `start..=end`, uniform over whole days.
///
/// Degenerate ranges (`start >= end`) return `start`.
pub fn date_between<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span_days = (end - start).num_days();
    if span_days <= 0 {
        return start;
    }

    start + chrono::Duration::days(rng.gen_range(0..=span_days))
}
