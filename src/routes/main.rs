use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Utc;
use tera::Tera;

use crate::domain::query::{ExpiryFilter, SortKey};
use crate::dto::main::IndexQuery;
use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::routes::{base_context, index_location, redirect, render_template};
use crate::services::{ServiceError, main as main_service};

/// Query string for the list screen without the page number, used to build
/// pager links and to return to the same view after a delete.
fn list_params(query: &IndexQuery) -> String {
    let params = IndexQuery {
        page: None,
        ..query.clone()
    };
    serde_html_form::to_string(&params).unwrap_or_default()
}

#[get("/")]
/// Render the customer list for the current search, filter, sort and page.
pub async fn show_index(
    params: web::Query<IndexQuery>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.into_inner();
    let query_text = query.q.clone().unwrap_or_default();
    let mut context = base_context(&flash_messages, "index");
    context.insert("list_params", &list_params(&query));
    context.insert(
        "filters",
        &ExpiryFilter::ALL
            .iter()
            .map(|f| (f.as_token(), f.label()))
            .collect::<Vec<_>>(),
    );
    context.insert(
        "sort_keys",
        &SortKey::ALL
            .iter()
            .map(|k| (k.as_token(), k.label()))
            .collect::<Vec<_>>(),
    );

    match main_service::load_index_page(repo.get_ref(), query, server_config.page_size, Utc::now())
        .await
    {
        Ok(data) => {
            context.insert("customers", &data.customers);
            context.insert("search_query", data.search_query.as_deref().unwrap_or_default());
            context.insert("filter", data.filter.as_token());
            context.insert("sort", data.sort.as_token());
        }
        Err(err) => {
            log::error!("Failed to load customers: {err}");
            context.insert("load_error", "Could not load customers. Please try again.");
            context.insert("search_query", query_text.as_str());
            context.insert("filter", ExpiryFilter::default().as_token());
            context.insert("sort", SortKey::default().as_token());
        }
    }

    render_template(&tera, "main/index.html", &context)
}

#[post("/customer/{id}/delete")]
/// Delete a customer and go back to the same list view.
pub async fn delete_customer(
    id: web::Path<String>,
    params: web::Query<IndexQuery>,
    repo: web::Data<HttpRepository>,
) -> impl Responder {
    match main_service::delete_customer(repo.get_ref(), &id).await {
        Ok(()) => {
            FlashMessage::success("Customer deleted.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::warning("Customer was already removed.").send();
        }
        Err(err) => {
            log::error!("Failed to delete customer: {err}");
            FlashMessage::error("Failed to delete customer.").send();
        }
    }

    redirect(&index_location(&params))
}
