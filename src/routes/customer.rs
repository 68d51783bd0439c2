use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::customer::CustomerForm;
use crate::repository::HttpRepository;
use crate::routes::{base_context, error_context, redirect, render_template};
use crate::services::{ServiceError, customer as customer_service};

#[get("/customer/add")]
pub async fn show_add_customer(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "add_customer");
    context.insert("form", &CustomerForm::default());

    render_template(&tera, "customer/add.html", &context)
}

#[post("/customer/add")]
pub async fn add_customer(
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<CustomerForm>,
) -> impl Responder {
    match customer_service::add_customer(repo.get_ref(), form.clone()).await {
        Ok(customer) => {
            log::info!("Added customer {}", customer.id);
            FlashMessage::success("Customer added.").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            let mut context = error_context(&flash_messages, "add_customer", &message);
            context.insert("form", &form);
            render_template(&tera, "customer/add.html", &context)
        }
        Err(err) => {
            log::error!("Failed to add customer: {err}");
            FlashMessage::error("Failed to add customer.").send();
            redirect("/customer/add")
        }
    }
}

#[get("/customer/{id}/edit")]
pub async fn show_edit_customer(
    id: web::Path<String>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match customer_service::load_customer(repo.get_ref(), &id).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "edit_customer");
            context.insert("customer_id", &data.id);
            context.insert("form", &data.form);

            render_template(&tera, "customer/edit.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Customer not found.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load customer: {err}");
            FlashMessage::error("Failed to load customer.").send();
            redirect("/")
        }
    }
}

#[post("/customer/{id}/edit")]
pub async fn save_customer(
    id: web::Path<String>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<CustomerForm>,
) -> impl Responder {
    let edit_url = format!("/customer/{}/edit", id.as_str());

    match customer_service::update_customer(repo.get_ref(), &id, form.clone()).await {
        Ok(_) => {
            FlashMessage::success("Customer updated successfully!").send();
            redirect("/")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Customer not found.").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            let mut context = error_context(&flash_messages, "edit_customer", &message);
            context.insert("customer_id", id.as_str());
            context.insert("form", &form);
            render_template(&tera, "customer/edit.html", &context)
        }
        Err(err) => {
            log::error!("Failed to update customer: {err}");
            FlashMessage::error("Failed to update customer.").send();
            redirect(&edit_url)
        }
    }
}
