//! Day-granular contract expiry arithmetic.
//!
//! Every comparison in the list screen goes through [`days_left`], so the
//! expiry filters and the status badge always agree on where a record sits.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Contracts ending within this many days are flagged as expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 30;

/// Whole days until `end` (midnight UTC), rounded up.
///
/// `0` means the contract ends today and is not yet expired; negative values
/// mean it has expired.
pub fn days_left(end: NaiveDate, now: DateTime<Utc>) -> i64 {
    let end = end.and_time(NaiveTime::MIN).and_utc();
    let millis = (end - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Coarse contract state used to colour cards in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Active,
    ExpiringSoon,
    Expired,
    /// No usable end date.
    Unknown,
}

impl ContractStatus {
    pub fn from_days_left(days: Option<i64>) -> Self {
        match days {
            None => ContractStatus::Unknown,
            Some(days) if days < 0 => ContractStatus::Expired,
            Some(days) if days <= EXPIRING_SOON_DAYS => ContractStatus::ExpiringSoon,
            Some(_) => ContractStatus::Active,
        }
    }
}

/// Human readable "time left" label shown on a customer card.
pub fn time_left_label(days: Option<i64>) -> String {
    match days {
        None => "Unknown".to_string(),
        Some(days) if days < 0 => "Expired".to_string(),
        Some(1) => "1 day".to_string(),
        Some(days) => format!("{days} days"),
    }
}
