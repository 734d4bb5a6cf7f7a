use chrono::{DateTime, Local, TimeDelta};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Largest shift, in days, applied to `column2` in either direction.
pub const MAX_DAY_OFFSET: i64 = 365;

/// One synthetic row sent as the `value` of a write.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Record {
    pub column1: u32,
    pub column2: String,
    pub column3: String,
    pub column4: String,
    pub column5: u32,
}

impl Record {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng(), Local::now())
    }

    pub fn generate_with<R: Rng>(rng: &mut R, now: DateTime<Local>) -> Self {
        let offset = TimeDelta::days(rng.random_range(-MAX_DAY_OFFSET..=MAX_DAY_OFFSET));
        let tstamp = now.naive_local() + offset;

        Self {
            column1: rng.random_range(1..=100),
            column2: tstamp.format(TIMESTAMP_FORMAT).to_string(),
            column3: Uuid::new_v4().to_string(),
            column4: rng.random_range(1..=10u8).to_string(),
            column5: rng.random_range(100..=1000),
        }
    }
}
