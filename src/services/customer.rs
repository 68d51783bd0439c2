use crate::domain::customer::{CustomerRecord, NewCustomer, UpdateCustomer};
use crate::domain::types::CustomerId;
use crate::dto::customer::CustomerPageData;
use crate::forms::customer::CustomerForm;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates the add-customer form and creates the record at the source.
pub async fn add_customer<R>(repo: &R, form: CustomerForm) -> ServiceResult<CustomerRecord>
where
    R: CustomerWriter + ?Sized,
{
    let new_customer = NewCustomer::try_from(form).map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(format!("Please check the form: {err}"))
    })?;

    repo.create_customer(&new_customer).await.map_err(|err| {
        log::error!("Failed to add a customer: {err}");
        ServiceError::from(err)
    })
}

/// Loads a single customer for the edit screen.
pub async fn load_customer<R>(repo: &R, id: &str) -> ServiceResult<CustomerPageData>
where
    R: CustomerReader + ?Sized,
{
    let id = CustomerId::new(id)?;

    let customer = repo
        .get_customer(&id)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch customer {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)?;

    Ok(CustomerPageData {
        form: CustomerForm::from(&customer),
        id: customer.id,
    })
}

/// Validates the edit form and sends only the changed fields.
///
/// Returns the stored record unchanged when nothing was edited.
pub async fn update_customer<R>(
    repo: &R,
    id: &str,
    form: CustomerForm,
) -> ServiceResult<CustomerRecord>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let id = CustomerId::new(id)?;

    let edited = NewCustomer::try_from(form).map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(format!("Please check the form: {err}"))
    })?;

    let current = repo
        .get_customer(&id)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch customer {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)?;

    let updates = UpdateCustomer::between(&current, edited);
    if updates.is_empty() {
        log::info!("No changes submitted for customer {id}");
        return Ok(current);
    }

    repo.update_customer(&id, &updates).await.map_err(|err| {
        log::error!("Failed to update customer {id}: {err}");
        ServiceError::from(err)
    })
}
