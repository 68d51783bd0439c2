//! Actix-web handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::dto::main::IndexQuery;

pub mod customer;
pub mod main;

/// Maps a flash level onto the CSS alert class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

fn flash_alerts(flash_messages: &IncomingFlashMessages) -> Vec<(String, &'static str)> {
    flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect()
}

/// Context every page starts from: pending alerts and the active nav item.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("alerts", &flash_alerts(flash_messages));
    context.insert("current_page", current_page);
    context
}

/// Like [`base_context`], with an extra error alert shown on this render only.
pub fn error_context(
    flash_messages: &IncomingFlashMessages,
    current_page: &str,
    message: &str,
) -> Context {
    let mut alerts = flash_alerts(flash_messages);
    alerts.push((message.to_string(), alert_level_to_str(&Level::Error)));

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// URL of the list screen carrying the given search, filter, sort and page.
pub fn index_location(query: &IndexQuery) -> String {
    match serde_html_form::to_string(query) {
        Ok(params) if !params.is_empty() => format!("/?{params}"),
        Ok(_) => "/".to_string(),
        Err(err) => {
            log::warn!("Failed to encode list query: {err}");
            "/".to_string()
        }
    }
}
