use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::customer::{
    CustomerRecord as DomainCustomerRecord, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};
use crate::domain::types::{CustomerId, TypeConstraintError, parse_contract_date};

/// Accepts any JSON value and keeps it only when it is a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Reads an identifier the way different sources send one: a string, a
/// number, or an extended-JSON `{"$oid": "..."}` object.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(mut object) => match object.remove("$oid") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        },
        _ => None,
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Customer document as returned by the Records Source.
pub struct ApiCustomer {
    #[serde(rename = "_id", default, deserialize_with = "lenient_id")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub amc_start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub amc_end_date: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /customers` and `PUT /customers/{id}`.
pub struct CustomerPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amc_start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amc_end_date: Option<NaiveDate>,
}

impl TryFrom<ApiCustomer> for DomainCustomerRecord {
    type Error = TypeConstraintError;

    fn try_from(customer: ApiCustomer) -> Result<Self, Self::Error> {
        let id = CustomerId::new(customer.object_id.or(customer.id).unwrap_or_default())?;
        Ok(Self {
            id,
            name: customer.name,
            contact: customer.contact,
            amc_start_date: customer.amc_start_date.as_deref().and_then(parse_contract_date),
            amc_end_date: customer.amc_end_date.as_deref().and_then(parse_contract_date),
        })
    }
}

impl<'a> From<&'a DomainNewCustomer> for CustomerPayload<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        Self {
            name: Some(customer.name.as_str()),
            contact: Some(customer.contact.as_str()),
            amc_start_date: Some(customer.amc_start_date),
            amc_end_date: Some(customer.amc_end_date),
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for CustomerPayload<'a> {
    fn from(customer: &'a DomainUpdateCustomer) -> Self {
        Self {
            name: customer.name.as_ref().map(|name| name.as_str()),
            contact: customer.contact.as_ref().map(|contact| contact.as_str()),
            amc_start_date: customer.amc_start_date,
            amc_end_date: customer.amc_end_date,
        }
    }
}
