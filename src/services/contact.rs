use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;

use crate::error::StoreError;
use crate::models::{ContactMessage, NewContactMessage};
use crate::notify::Notifier;
use crate::store::ContactStore;

/// Contact-message persistence plus best-effort owner notification.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
    notifier: Arc<dyn Notifier>,
    notify_timeout: Duration,
}

impl ContactService {
    pub fn new(
        store: Arc<dyn ContactStore>,
        notifier: Arc<dyn Notifier>,
        notify_timeout: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            notify_timeout,
        }
    }

    /// Persist `message`, then notify about the stored row.
    ///
    /// Only the store can fail this call. Once the row is committed the saved
    /// message is returned whatever the notifier does.
    pub async fn save_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, StoreError> {
        tracing::info!(
            "Saving contact message from: {} ({})",
            message.name(),
            message.email()
        );
        let saved = self.store.save(message).await?;
        self.dispatch_notification(&saved).await;
        Ok(saved)
    }

    /// Single attempt, never retried. Errors, panics and timeouts are logged only.
    async fn dispatch_notification(&self, message: &ContactMessage) {
        let attempt = AssertUnwindSafe(self.notifier.notify(message)).catch_unwind();

        match tokio::time::timeout(self.notify_timeout, attempt).await {
            Ok(Ok(Ok(()))) => {}
            Ok(Ok(Err(e))) => {
                tracing::error!("Failed to send contact notification for message {}: {e}", message.id);
            }
            Ok(Err(_)) => {
                tracing::error!("Contact notifier panicked for message {}", message.id);
            }
            Err(_) => {
                tracing::error!(
                    "Contact notification for message {} timed out after {:?}",
                    message.id,
                    self.notify_timeout
                );
            }
        }
    }

    pub async fn get_all_messages(&self) -> Result<Vec<ContactMessage>, StoreError> {
        tracing::debug!("Fetching all contact messages");
        self.store.list_all().await
    }

    pub async fn get_unread_messages(&self) -> Result<Vec<ContactMessage>, StoreError> {
        tracing::debug!("Fetching unread contact messages");
        self.store.list_unread().await
    }

    pub async fn get_message_by_id(&self, id: i64) -> Result<Option<ContactMessage>, StoreError> {
        tracing::debug!("Fetching contact message with id: {id}");
        self.store.find_by_id(id).await
    }

    pub async fn mark_as_read(&self, id: i64) -> Result<(), StoreError> {
        tracing::info!("Marking message {id} as read");
        self.store.mark_read(id).await
    }

    pub async fn count_unread_messages(&self) -> Result<i64, StoreError> {
        self.store.count_unread().await
    }

    pub async fn delete_message(&self, id: i64) -> Result<(), StoreError> {
        tracing::info!("Deleting contact message with id: {id}");
        self.store.delete_by_id(id).await
    }
}
