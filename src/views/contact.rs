use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use validator::ValidationErrors;

use crate::error::AppError;
use crate::models::ContactForm;
use crate::state::SharedState;

const FLASH_COOKIE: &str = "flash";
const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
const ERROR_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again later.";

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    form: ContactForm,
    errors: FieldErrors,
    success: Option<&'static str>,
    error: Option<&'static str>,
}

#[derive(Default)]
struct FieldErrors {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

impl FieldErrors {
    fn from_validation(errors: &ValidationErrors) -> Self {
        Self {
            name: first_message(errors, "name"),
            email: first_message(errors, "email"),
            message: first_message(errors, "message"),
        }
    }
}

/// The `required` message wins over format and length messages for the same field.
fn first_message(errors: &ValidationErrors, field: &str) -> Option<String> {
    let field_errors = errors.field_errors();
    let list = field_errors.get(field)?;
    list.iter()
        .find(|e| e.code == "required")
        .or_else(|| list.first())
        .map(|e| {
            e.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"))
        })
}

pub async fn form_page(jar: CookieJar) -> Result<Response, AppError> {
    tracing::debug!("Rendering contact form");
    let (success, error) = match jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) {
        Some(ref v) if v == "success" => (Some(SUCCESS_MESSAGE), None),
        Some(ref v) if v == "error" => (None, Some(ERROR_MESSAGE)),
        _ => (None, None),
    };

    let template = ContactTemplate {
        form: ContactForm::default(),
        errors: FieldErrors::default(),
        success,
        error,
    };
    let html = Html(template.render()?);

    if jar.get(FLASH_COOKIE).is_some() {
        let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
        return Ok((jar, html).into_response());
    }
    Ok(html.into_response())
}

pub async fn submit(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    tracing::debug!("Processing contact form submission from: {}", form.email);

    let message = match form.clone().validated() {
        Ok(message) => message,
        Err(errors) => {
            tracing::warn!("Contact form has validation errors");
            let template = ContactTemplate {
                form,
                errors: FieldErrors::from_validation(&errors),
                success: None,
                error: None,
            };
            return Ok(Html(template.render()?).into_response());
        }
    };

    let flash = match state.contact.save_message(message).await {
        Ok(saved) => {
            tracing::info!("Contact message {} saved successfully from: {}", saved.id, saved.email);
            "success"
        }
        Err(e) => {
            tracing::error!("Error saving contact message: {e}");
            "error"
        }
    };

    let jar = jar.add(
        Cookie::build((FLASH_COOKIE, flash))
            .path("/")
            .http_only(true),
    );
    Ok((jar, Redirect::to("/contact")).into_response())
}
