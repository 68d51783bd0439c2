//! Seam to the external Records Source that owns every customer record.
//!
//! The client never persists anything itself; reads and writes go through
//! these traits, implemented over HTTP by [`HttpRepository`].

use async_trait::async_trait;

use crate::domain::customer::{CustomerRecord, NewCustomer, UpdateCustomer};
use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::HttpRepository;

#[async_trait]
pub trait CustomerReader {
    /// Fetches the full working set in source order.
    async fn list_customers(&self) -> RepositoryResult<Vec<CustomerRecord>>;
    async fn get_customer(&self, id: &CustomerId) -> RepositoryResult<Option<CustomerRecord>>;
}

#[async_trait]
pub trait CustomerWriter {
    async fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<CustomerRecord>;
    async fn update_customer(
        &self,
        id: &CustomerId,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<CustomerRecord>;
    async fn delete_customer(&self, id: &CustomerId) -> RepositoryResult<()>;
}
