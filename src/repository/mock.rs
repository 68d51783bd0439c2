//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::customer::{CustomerRecord, NewCustomer, UpdateCustomer};
use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, CustomerWriter};

mock! {
    pub Repository {}

    #[async_trait]
    impl CustomerReader for Repository {
        async fn list_customers(&self) -> RepositoryResult<Vec<CustomerRecord>>;
        async fn get_customer(&self, id: &CustomerId) -> RepositoryResult<Option<CustomerRecord>>;
    }

    #[async_trait]
    impl CustomerWriter for Repository {
        async fn create_customer(
            &self,
            new_customer: &NewCustomer,
        ) -> RepositoryResult<CustomerRecord>;
        async fn update_customer(
            &self,
            id: &CustomerId,
            updates: &UpdateCustomer,
        ) -> RepositoryResult<CustomerRecord>;
        async fn delete_customer(&self, id: &CustomerId) -> RepositoryResult<()>;
    }
}
