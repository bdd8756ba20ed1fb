//! Record factory producing fully-populated flat records.

use crate::generators::{choice, identity, numeric, person, temporal};
use chrono::{NaiveDate, Utc};
use mockgrid_core::{Catalogs, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Start of the date range records are drawn from (2020-01-01).
pub fn date_range_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid constant date")
}

/// Exclusive upper bound for generated amounts.
pub const AMOUNT_MAX: f64 = 10_000.0;

/// Minimum and maximum tag count per record.
pub const TAG_COUNT_RANGE: (usize, usize) = (1, 3);

/// Factory producing one fully-populated [`Record`] per call.
///
/// Deterministic in shape, non-deterministic in values: each payload field
/// is an independent uniform draw from the injected catalogs or a fixed
/// range, except `email`, which is derived from the same call's `name`.
/// `parent_id` is always `None`; hierarchy is a separate concern.
pub struct RecordFactory {
    /// Reference tables values are sampled from
    catalogs: Catalogs,
    /// Seeded random number generator
    rng: StdRng,
}

impl RecordFactory {
    /// Create a factory with the given catalogs and seed.
    ///
    /// The same catalogs and seed always produce the same records.
    pub fn new(catalogs: Catalogs, seed: u64) -> Self {
        Self {
            catalogs,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a factory seeded from OS entropy (non-reproducible).
    pub fn from_entropy(catalogs: Catalogs) -> Self {
        Self {
            catalogs,
            rng: StdRng::from_entropy(),
        }
    }

    /// Get a reference to the catalogs.
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Generate one record with a fresh id and `parent_id` unset.
    pub fn create_record(&mut self) -> Record {
        create_record_with(&mut self.rng, &self.catalogs)
    }
}

/// Generate one record using an externally-owned RNG.
///
/// This is the primitive [`RecordFactory::create_record`] wraps; it exists
/// so other components (hierarchy strategies, tests) can share a single RNG
/// stream with record creation.
pub fn create_record_with<R: Rng>(rng: &mut R, catalogs: &Catalogs) -> Record {
    let name = person::full_name(rng, &catalogs.first_names, &catalogs.last_names);
    let email = person::email_for_name(rng, &name, &catalogs.email_domains);
    let (min_tags, max_tags) = TAG_COUNT_RANGE;

    Record {
        id: identity::uuid_v4(rng),
        name,
        email,
        date: temporal::date_between(rng, date_range_start(), Utc::now().date_naive()),
        amount: numeric::amount_in_range(rng, 0.0, AMOUNT_MAX),
        status: choice::one_of(rng, &catalogs.statuses).to_string(),
        is_active: rng.gen_bool(0.5),
        progress: numeric::progress(rng),
        tags: choice::unique_sample(rng, &catalogs.tags, min_tags, max_tags),
        country: choice::one_of(rng, &catalogs.countries).to_string(),
        department: choice::one_of(rng, &catalogs.departments).to_string(),
        parent_id: None,
    }
}
