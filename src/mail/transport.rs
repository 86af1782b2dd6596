//! Transport acquisition and the SMTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{Mailbox, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

use super::{MailError, OutboundMessage};

/// A live, verified connection handle, valid for one dispatch attempt.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Send one message over the verified connection.
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError>;
}

/// Constructs and verifies transport handles from externally supplied
/// credentials. Implement this trait to provide alternative backends or test
/// doubles.
#[async_trait]
pub trait TransportProvider: Send + Sync {
    /// Build a fresh transport and run the remote verification handshake.
    /// An unverified handle is never returned.
    async fn acquire(&self) -> Result<Box<dyn MailTransport>, MailError>;
}

/// SMTP-backed provider using lettre. Every acquisition builds and verifies a
/// new relay connection; nothing is cached across dispatches, so credential
/// rotation takes effect on the next attempt.
pub struct SmtpTransportProvider {
    config: SmtpConfig,
}

impl SmtpTransportProvider {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl TransportProvider for SmtpTransportProvider {
    async fn acquire(&self) -> Result<Box<dyn MailTransport>, MailError> {
        let (Some(user), Some(password)) = (&self.config.user, &self.config.password) else {
            return Err(MailError::MissingConfig(
                "Email credentials are not properly configured. \
                 Please set EMAIL_USER and EMAIL_PASSWORD environment variables."
                    .to_string(),
            ));
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .port(self.config.port)
            .timeout(Some(Duration::from_secs(self.config.timeout_seconds)))
            .credentials(Credentials::new(user.clone(), password.clone()))
            .build();

        let verified = transport
            .test_connection()
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;
        if !verified {
            return Err(MailError::Smtp(
                "SMTP verification handshake failed".to_string(),
            ));
        }

        tracing::debug!(host = %self.config.host, port = self.config.port, "SMTP connection verified");

        Ok(Box::new(SmtpMailer { transport }))
    }
}

struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    fn build_message(&self, message: &OutboundMessage) -> Result<Message, MailError> {
        let from: Mailbox = message
            .from
            .parse()
            .map_err(|_| MailError::InvalidAddress(message.from.clone()))?;

        let to: Mailbox = message
            .to
            .parse()
            .map_err(|_| MailError::InvalidAddress(message.to.clone()))?;

        let mut builder = Message::builder().from(from).to(to);

        if let Some(reply_to) = &message.reply_to {
            let mailbox: Mailbox = reply_to
                .parse()
                .map_err(|_| MailError::InvalidAddress(reply_to.clone()))?;
            builder = builder.reply_to(mailbox);
        }

        builder
            .subject(&message.subject)
            .singlepart(SinglePart::html(message.html.clone()))
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let email = self.build_message(message)?;

        self.transport
            .send(email)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SmtpConfig;

    #[test]
    fn acquire_without_credentials_is_a_config_error() {
        let provider = SmtpTransportProvider::new(SmtpConfig::default());

        let result = tokio_test::block_on(provider.acquire());
        assert!(matches!(result, Err(MailError::MissingConfig(_))));
    }

    #[test]
    fn acquire_without_password_is_a_config_error() {
        let provider = SmtpTransportProvider::new(SmtpConfig {
            user: Some("info@trainapp.org".to_string()),
            ..SmtpConfig::default()
        });

        let result = tokio_test::block_on(provider.acquire());
        assert!(matches!(result, Err(MailError::MissingConfig(_))));
    }
}
