use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::types::{ContactInfo, CustomerId, CustomerName};

/// One maintenance contract as held in the working set.
///
/// Optional fields mirror what the Records Source may hand back; the pipeline
/// must cope with any of them missing.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: Option<String>,
    pub contact: Option<String>,
    pub amc_start_date: Option<NaiveDate>,
    pub amc_end_date: Option<NaiveDate>,
}

impl CustomerRecord {
    /// Name used for searching and sorting; absent names compare as `""`.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// Payload for creating a customer. The Records Source assigns the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: CustomerName,
    pub contact: ContactInfo,
    pub amc_start_date: NaiveDate,
    pub amc_end_date: NaiveDate,
}

impl NewCustomer {
    #[must_use]
    pub fn new(
        name: CustomerName,
        contact: ContactInfo,
        amc_start_date: NaiveDate,
        amc_end_date: NaiveDate,
    ) -> Self {
        Self {
            name,
            contact,
            amc_start_date,
            amc_end_date,
        }
    }
}

/// Partial update: only `Some` fields are sent to the Records Source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateCustomer {
    pub name: Option<CustomerName>,
    pub contact: Option<ContactInfo>,
    pub amc_start_date: Option<NaiveDate>,
    pub amc_end_date: Option<NaiveDate>,
}

impl UpdateCustomer {
    /// Collects the fields of `edited` that differ from `current`.
    #[must_use]
    pub fn between(current: &CustomerRecord, edited: NewCustomer) -> Self {
        let NewCustomer {
            name,
            contact,
            amc_start_date,
            amc_end_date,
        } = edited;

        Self {
            name: (current.name.as_deref() != Some(name.as_str())).then_some(name),
            contact: (current.contact.as_deref() != Some(contact.as_str())).then_some(contact),
            amc_start_date: (current.amc_start_date != Some(amc_start_date))
                .then_some(amc_start_date),
            amc_end_date: (current.amc_end_date != Some(amc_end_date)).then_some(amc_end_date),
        }
    }

    /// Returns `true` when there is nothing to send.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.contact.is_none()
            && self.amc_start_date.is_none()
            && self.amc_end_date.is_none()
    }
}
