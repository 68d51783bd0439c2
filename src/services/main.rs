use chrono::{DateTime, Utc};

use crate::domain::types::CustomerId;
use crate::dto::customer::CustomerCard;
use crate::dto::main::{IndexPageData, IndexQuery};
use crate::pagination::Paginated;
use crate::pipeline;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads the customer list for the main index page.
///
/// The whole working set is fetched and run through the pipeline on every
/// request; nothing is cached between calls.
pub async fn load_index_page<R>(
    repo: &R,
    query: IndexQuery,
    page_size: usize,
    now: DateTime<Utc>,
) -> ServiceResult<IndexPageData>
where
    R: CustomerReader + ?Sized,
{
    let state = query.to_query_state(page_size);

    let records = repo.list_customers().await.map_err(|err| {
        log::error!("Failed to fetch customers: {err}");
        ServiceError::from(err)
    })?;

    let page = pipeline::run(&records, &state, now);
    log::debug!(
        "Customer list: {} of {} records matched, page {}/{}",
        page.total_matched(),
        records.len(),
        page.page(),
        page.total_pages()
    );

    let current_page = page.page();
    let total_pages = page.total_pages();
    let total_matched = page.total_matched();
    let cards = page
        .into_items()
        .into_iter()
        .map(|record| CustomerCard::new(record, now))
        .collect();

    let search_query = Some(state.search_text).filter(|s| !s.is_empty());

    Ok(IndexPageData {
        customers: Paginated::new(cards, current_page, total_pages, total_matched),
        search_query,
        filter: state.expiry_filter,
        sort: state.sort_key,
    })
}

/// Deletes a customer after the user confirmed it in the browser.
pub async fn delete_customer<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    let id = CustomerId::new(id)?;

    repo.delete_customer(&id).await.map_err(|err| {
        log::error!("Failed to delete customer {id}: {err}");
        ServiceError::from(err)
    })
}
