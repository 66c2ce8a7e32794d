use chrono::NaiveDate;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const NUM_DECIMAL_PLACES: u32 = 2;

/// Column names of the output file, in column order.
pub const COLUMNS: [&str; 6] = ["Id", "Client ID", "Transaction", "Amount", "Date", "Status"];

#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    #[serde(rename = "D")]
    Deposit,
    #[serde(rename = "W")]
    Withdrawal,
}

#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

/// One synthetic transaction row. Field order matches the column order of
/// the output file; the serde renames are the literal column names.
#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    #[serde(rename = "Id")]
    pub id: u32,
    #[serde(rename = "Client ID")]
    pub client_id: u16,
    #[serde(rename = "Transaction")]
    pub transaction_type: TransactionType,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Status")]
    pub status: TransactionStatus,
}

impl Distribution<TransactionType> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TransactionType {
        if rng.gen() {
            TransactionType::Deposit
        } else {
            TransactionType::Withdrawal
        }
    }
}

impl Distribution<TransactionStatus> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TransactionStatus {
        match rng.gen_range(0..3) {
            0 => TransactionStatus::Completed,
            1 => TransactionStatus::Pending,
            _ => TransactionStatus::Failed,
        }
    }
}
