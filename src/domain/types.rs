//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-blank identifiers, trimmed
//! names) so that once a value reaches the domain layer it can be treated as
//! trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided date could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

non_empty_string_newtype!(
    CustomerId,
    "Opaque identifier assigned to a customer by the Records Source."
);

non_empty_string_newtype!(
    CustomerName,
    "Customer name wrapper enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    ContactInfo,
    "Phone number or other contact details, trimmed and non-empty."
);

/// Parses a contract date as sent by the Records Source or a date input.
///
/// Accepts plain `YYYY-MM-DD` values and full RFC 3339 timestamps (only the
/// calendar date of the latter is kept). Anything else yields `None`.
pub fn parse_contract_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// Strict variant of [`parse_contract_date`] used for user input.
pub fn require_contract_date(value: &str) -> Result<NaiveDate, TypeConstraintError> {
    if value.trim().is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    parse_contract_date(value).ok_or_else(|| TypeConstraintError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_name_is_trimmed() {
        let name = CustomerName::new("  Sri Durga Lifts ").unwrap();
        assert_eq!(name.as_str(), "Sri Durga Lifts");
    }

    #[test]
    fn blank_identifiers_are_rejected() {
        assert_eq!(CustomerId::new("   "), Err(TypeConstraintError::EmptyString));
        assert!(CustomerId::new("65f1c0de").is_ok());
    }

    #[test]
    fn parses_plain_and_timestamp_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert_eq!(parse_contract_date("2024-01-20"), Some(expected));
        assert_eq!(
            parse_contract_date("2024-01-20T00:00:00.000Z"),
            Some(expected)
        );
        assert_eq!(parse_contract_date("20/01/2024"), None);
        assert_eq!(parse_contract_date(""), None);
    }

    #[test]
    fn require_contract_date_reports_bad_input() {
        assert_eq!(
            require_contract_date(""),
            Err(TypeConstraintError::EmptyString)
        );
        assert!(matches!(
            require_contract_date("not a date"),
            Err(TypeConstraintError::InvalidDate(_))
        ));
    }
}
