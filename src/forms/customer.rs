use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::customer::{CustomerRecord, NewCustomer};
use crate::domain::types::{ContactInfo, CustomerName, require_contract_date};
use crate::forms::FormError;

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
/// Form data shared by the add and edit customer screens.
pub struct CustomerForm {
    /// Display name of the customer.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Phone number or other contact details.
    #[validate(length(min = 1, max = 200))]
    pub contact: String,
    /// `YYYY-MM-DD` from a date input.
    #[serde(rename = "amcStartDate")]
    pub amc_start_date: String,
    /// `YYYY-MM-DD` from a date input.
    #[serde(rename = "amcEndDate")]
    pub amc_end_date: String,
}

impl TryFrom<CustomerForm> for NewCustomer {
    type Error = FormError;

    fn try_from(form: CustomerForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = CustomerName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let contact = ContactInfo::new(form.contact).map_err(|_| FormError::InvalidContact)?;
        let start = require_contract_date(&form.amc_start_date)
            .map_err(|_| FormError::InvalidStartDate)?;
        let end =
            require_contract_date(&form.amc_end_date).map_err(|_| FormError::InvalidEndDate)?;

        if end < start {
            return Err(FormError::EndBeforeStart);
        }

        Ok(NewCustomer::new(name, contact, start, end))
    }
}

impl From<&CustomerRecord> for CustomerForm {
    /// Prefills the edit screen; absent values become empty inputs.
    fn from(record: &CustomerRecord) -> Self {
        let format_date = |date: Option<chrono::NaiveDate>| {
            date.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };

        Self {
            name: record.name.clone().unwrap_or_default(),
            contact: record.contact.clone().unwrap_or_default(),
            amc_start_date: format_date(record.amc_start_date),
            amc_end_date: format_date(record.amc_end_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::types::CustomerId;

    fn form() -> CustomerForm {
        CustomerForm {
            name: " Sri Durga ".to_string(),
            contact: "9845012345".to_string(),
            amc_start_date: "2024-04-01".to_string(),
            amc_end_date: "2025-03-31".to_string(),
        }
    }

    #[test]
    fn valid_form_becomes_new_customer() {
        let customer = NewCustomer::try_from(form()).unwrap();

        assert_eq!(customer.name.as_str(), "Sri Durga");
        assert_eq!(customer.contact.as_str(), "9845012345");
        assert_eq!(
            customer.amc_start_date,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
        assert_eq!(
            customer.amc_end_date,
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
        );
    }

    #[test]
    fn empty_name_fails_validation() {
        let mut bad = form();
        bad.name = String::new();
        assert!(matches!(
            NewCustomer::try_from(bad),
            Err(FormError::Validation(_))
        ));

        let mut blank = form();
        blank.name = "   ".to_string();
        assert!(matches!(
            NewCustomer::try_from(blank),
            Err(FormError::InvalidName)
        ));
    }

    #[test]
    fn dates_must_parse_and_be_ordered() {
        let mut missing = form();
        missing.amc_end_date = String::new();
        assert!(matches!(
            NewCustomer::try_from(missing),
            Err(FormError::InvalidEndDate)
        ));

        let mut swapped = form();
        swapped.amc_start_date = "2025-04-01".to_string();
        assert!(matches!(
            NewCustomer::try_from(swapped),
            Err(FormError::EndBeforeStart)
        ));
    }

    #[test]
    fn prefill_from_record() {
        let record = CustomerRecord {
            id: CustomerId::new("c1").unwrap(),
            name: Some("Lakshmi Towers".to_string()),
            contact: None,
            amc_start_date: None,
            amc_end_date: NaiveDate::from_ymd_opt(2024, 12, 31),
        };

        let form = CustomerForm::from(&record);

        assert_eq!(form.name, "Lakshmi Towers");
        assert_eq!(form.contact, "");
        assert_eq!(form.amc_start_date, "");
        assert_eq!(form.amc_end_date, "2024-12-31");
    }
}
