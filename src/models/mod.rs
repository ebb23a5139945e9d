pub mod contact_message;
pub mod project;

pub use contact_message::{ContactForm, ContactMessage, NewContactMessage};
pub use project::{Project, ProjectInput};

use std::borrow::Cow;

use validator::ValidationError;

/// Error for a value that is empty or whitespace only. Uses the `required` code.
pub(crate) fn require_present(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed(message));
        return Err(err);
    }
    Ok(())
}
