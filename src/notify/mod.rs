pub mod email;
pub mod templates;

use async_trait::async_trait;

use crate::error::NotifyError;
use crate::models::ContactMessage;

pub use email::EmailNotifier;

/// Delivers an alert for a newly saved contact message.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &ContactMessage) -> Result<(), NotifyError>;
}
