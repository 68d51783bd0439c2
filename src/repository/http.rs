use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use crate::domain::customer::{CustomerRecord, NewCustomer, UpdateCustomer};
use crate::domain::types::CustomerId;
use crate::models::customer::{ApiCustomer, CustomerPayload};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerReader, CustomerWriter};

/// Records Source client speaking JSON over HTTP.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    client: Client,
    base_url: Url,
}

impl HttpRepository {
    /// `base_url` is the API root; `/customers` is appended to it.
    pub fn new(base_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RepositoryError::Unexpected(format!("Invalid API base url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(RepositoryError::Unexpected(format!(
                "API base url cannot be a base: {base_url}"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Unexpected(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// `{base}/customers` or `{base}/customers/{id}` with the id percent-encoded.
    pub fn customers_url(&self, id: Option<&CustomerId>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("customers");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        url
    }
}

/// Converts the raw list body one document at a time so a single bad
/// document never hides the rest.
fn into_records(documents: Vec<Value>) -> Vec<CustomerRecord> {
    documents
        .into_iter()
        .filter_map(|document| {
            let document: ApiCustomer = match serde_json::from_value(document) {
                Ok(document) => document,
                Err(err) => {
                    log::warn!("Skipping unreadable customer document: {err}");
                    return None;
                }
            };
            match CustomerRecord::try_from(document) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("Skipping customer document without usable id: {err}");
                    None
                }
            }
        })
        .collect()
}

async fn read_record(
    response: reqwest::Response,
    on_error: fn(String) -> RepositoryError,
) -> RepositoryResult<CustomerRecord> {
    let document: ApiCustomer = response.json().await.map_err(|e| on_error(e.to_string()))?;
    CustomerRecord::try_from(document).map_err(|e| on_error(e.to_string()))
}

#[async_trait]
impl CustomerReader for HttpRepository {
    async fn list_customers(&self) -> RepositoryResult<Vec<CustomerRecord>> {
        let response = self
            .client
            .get(self.customers_url(None))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| RepositoryError::FetchFailed(e.to_string()))?;

        let documents: Vec<Value> = response
            .json()
            .await
            .map_err(|e| RepositoryError::FetchFailed(e.to_string()))?;

        Ok(into_records(documents))
    }

    async fn get_customer(&self, id: &CustomerId) -> RepositoryResult<Option<CustomerRecord>> {
        let response = self
            .client
            .get(self.customers_url(Some(id)))
            .send()
            .await
            .map_err(|e| RepositoryError::FetchFailed(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response
            .error_for_status()
            .map_err(|e| RepositoryError::FetchFailed(e.to_string()))?;

        read_record(response, RepositoryError::FetchFailed)
            .await
            .map(Some)
    }
}

#[async_trait]
impl CustomerWriter for HttpRepository {
    async fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<CustomerRecord> {
        let payload = CustomerPayload::from(new_customer);

        let response = self
            .client
            .post(self.customers_url(None))
            .json(&payload)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| RepositoryError::CreateFailed(e.to_string()))?;

        read_record(response, RepositoryError::CreateFailed).await
    }

    async fn update_customer(
        &self,
        id: &CustomerId,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<CustomerRecord> {
        let payload = CustomerPayload::from(updates);

        let response = self
            .client
            .put(self.customers_url(Some(id)))
            .json(&payload)
            .send()
            .await
            .map_err(|e| RepositoryError::UpdateFailed(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RepositoryError::NotFound);
        }
        let response = response
            .error_for_status()
            .map_err(|e| RepositoryError::UpdateFailed(e.to_string()))?;

        read_record(response, RepositoryError::UpdateFailed).await
    }

    async fn delete_customer(&self, id: &CustomerId) -> RepositoryResult<()> {
        let response = self
            .client
            .delete(self.customers_url(Some(id)))
            .send()
            .await
            .map_err(|e| RepositoryError::DeleteFailed(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RepositoryError::NotFound);
        }
        response
            .error_for_status()
            .map_err(|e| RepositoryError::DeleteFailed(e.to_string()))?;

        Ok(())
    }
}
