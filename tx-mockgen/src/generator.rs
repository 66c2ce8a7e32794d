use std::ops::RangeInclusive;

use chrono::{Duration, Local, NaiveDate};
use log::debug;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};
use rust_decimal::Decimal;

use crate::record::{TransactionRecord, NUM_DECIMAL_PLACES};

pub const DEFAULT_NUM_RECORDS: u32 = 100;

const CLIENT_ID_RANGE: RangeInclusive<u16> = 1..=50;
/// Amounts are sampled in cents so the 2-digit scale is exact.
const AMOUNT_CENTS_RANGE: RangeInclusive<i64> = 1_000..=100_000;
const MAX_DAYS_BACK: i64 = 365;

/// Samples batches of [`TransactionRecord`]s with sequential ids and every
/// other field drawn independently from its domain.
pub struct Generator<R: Rng> {
    rng: R,
    today: NaiveDate,
}

impl Generator<ThreadRng> {
    #[must_use]
    pub fn new() -> Self {
        Generator::with_rng(thread_rng())
    }
}

impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Generator::new()
    }
}

impl<R: Rng> Generator<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Generator {
            rng,
            today: Local::now().date_naive(),
        }
    }

    pub fn batch(&mut self, count: u32) -> Vec<TransactionRecord> {
        debug!("Generating a batch of {} records", count);
        (1..=count).map(|id| self.sample_record(id)).collect()
    }

    fn sample_record(&mut self, id: u32) -> TransactionRecord {
        TransactionRecord {
            id,
            client_id: self.rng.gen_range(CLIENT_ID_RANGE),
            transaction_type: self.rng.gen(),
            amount: Decimal::new(self.rng.gen_range(AMOUNT_CENTS_RANGE), NUM_DECIMAL_PLACES),
            date: self.today - Duration::days(self.rng.gen_range(0..=MAX_DAYS_BACK)),
            status: self.rng.gen(),
        }
    }
}
