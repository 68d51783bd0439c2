//! DTOs shaped for the customer cards and the edit template.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::customer::CustomerRecord;
use crate::domain::expiry::{ContractStatus, days_left, time_left_label};
use crate::domain::types::CustomerId;
use crate::forms::customer::CustomerForm;

fn display_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// One card in the customer list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerCard {
    pub id: CustomerId,
    pub name: String,
    pub contact: String,
    pub amc_start: String,
    pub amc_end: String,
    pub days_left: Option<i64>,
    pub time_left: String,
    pub status: ContractStatus,
}

impl CustomerCard {
    pub fn new(record: CustomerRecord, now: DateTime<Utc>) -> Self {
        let days = record.amc_end_date.map(|end| days_left(end, now));

        Self {
            amc_start: display_date(record.amc_start_date),
            amc_end: display_date(record.amc_end_date),
            days_left: days,
            time_left: time_left_label(days),
            status: ContractStatus::from_days_left(days),
            id: record.id,
            name: record.name.unwrap_or_default(),
            contact: record.contact.unwrap_or_default(),
        }
    }
}

/// Data required to render the edit screen.
#[derive(Debug)]
pub struct CustomerPageData {
    pub id: CustomerId,
    pub form: CustomerForm,
}
