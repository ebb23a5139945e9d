use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::require_present;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Raw contact-form input, as posted by a visitor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(
        custom(function = "name_present"),
        length(max = 255, message = "Name must be less than 255 characters")
    )]
    #[serde(default)]
    pub name: String,

    #[validate(
        custom(function = "email_present"),
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be less than 255 characters")
    )]
    #[serde(default)]
    pub email: String,

    #[validate(
        custom(function = "message_present"),
        length(min = 10, message = "Message must be at least 10 characters")
    )]
    #[serde(default)]
    pub message: String,
}

/// A contact message that passed validation and may be persisted.
///
/// Only [`ContactForm::validated`] constructs one.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    pub fn validated(self) -> Result<NewContactMessage, ValidationErrors> {
        self.validate()?;
        Ok(NewContactMessage {
            name: self.name,
            email: self.email,
            message: self.message,
        })
    }
}

impl NewContactMessage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn name_present(value: &str) -> Result<(), ValidationError> {
    require_present(value, "Name is required")
}

fn email_present(value: &str) -> Result<(), ValidationError> {
    require_present(value, "Email is required")
}

fn message_present(value: &str) -> Result<(), ValidationError> {
    require_present(value, "Message is required")
}
