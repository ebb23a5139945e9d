use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{templates, Notifier};
use crate::config::{NotifyConfig, SmtpConfig, TlsMode};
use crate::error::NotifyError;
use crate::models::ContactMessage;

/// Emails the site owner about new contact messages over SMTP.
///
/// A notifier built from a disabled or incomplete config sends nothing and
/// reports success.
pub struct EmailNotifier {
    mailer: Option<Mailer>,
}

struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl EmailNotifier {
    pub fn new(config: &NotifyConfig) -> Result<Self, NotifyError> {
        if !config.enabled {
            return Ok(Self::disabled());
        }

        let (Some(recipient), Some(smtp)) = (&config.recipient, &config.smtp) else {
            tracing::warn!("Email notifications enabled but recipient or SMTP is not configured");
            return Ok(Self::disabled());
        };

        let to: Mailbox = recipient
            .parse()
            .map_err(|e| NotifyError::Address(format!("{recipient}: {e}")))?;
        let from: Mailbox = match &smtp.from {
            Some(from) => from
                .parse()
                .map_err(|e| NotifyError::Address(format!("{from}: {e}")))?,
            None => to.clone(),
        };

        Ok(Self {
            mailer: Some(Mailer {
                transport: build_smtp_transport(smtp, config)?,
                from,
                to,
            }),
        })
    }

    pub fn disabled() -> Self {
        Self { mailer: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.mailer.is_some()
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify(&self, message: &ContactMessage) -> Result<(), NotifyError> {
        let Some(mailer) = &self.mailer else {
            tracing::info!("Email notifications disabled or recipient not configured");
            return Ok(());
        };

        let email = Message::builder()
            .from(mailer.from.clone())
            .to(mailer.to.clone())
            .subject(templates::contact_subject(message))
            .header(ContentType::TEXT_HTML)
            .body(templates::render_contact_notification(message))
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        mailer
            .transport
            .send(email)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        tracing::info!(
            "Contact notification for message {} sent to {}",
            message.id,
            mailer.to
        );
        Ok(())
    }
}

fn build_smtp_transport(
    smtp: &SmtpConfig,
    config: &NotifyConfig,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, NotifyError> {
    let creds = Credentials::new(smtp.user.clone(), smtp.pass.clone());

    let builder = match smtp.tls {
        TlsMode::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)
            .map_err(|e| NotifyError::Transport(format!("SMTP relay error: {e}")))?,
        TlsMode::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp.host),
        TlsMode::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
            .map_err(|e| NotifyError::Transport(format!("SMTP starttls error: {e}")))?,
    };

    Ok(builder
        .port(smtp.port)
        .credentials(creds)
        .timeout(Some(config.timeout))
        .build())
}
