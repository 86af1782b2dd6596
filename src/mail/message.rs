//! Outbound message type and builder.

use super::MailError;

/// A complete outbound email, immutable once built.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    /// Sender identity, e.g. `Train App <info@trainapp.org>`.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Rendered HTML body.
    pub html: String,
    /// Optional reply-to address.
    pub reply_to: Option<String>,
}

impl OutboundMessage {
    pub fn builder() -> OutboundMessageBuilder {
        OutboundMessageBuilder::default()
    }
}

/// Builder for [`OutboundMessage`] instances.
#[derive(Debug, Default)]
pub struct OutboundMessageBuilder {
    from: Option<String>,
    to: Option<String>,
    subject: Option<String>,
    html: Option<String>,
    reply_to: Option<String>,
}

impl OutboundMessageBuilder {
    /// Set the sender identity (required).
    pub fn from(mut self, address: impl Into<String>) -> Self {
        self.from = Some(address.into());
        self
    }

    /// Set the recipient address (required).
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to = Some(address.into());
        self
    }

    /// Set the subject line (required).
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the rendered HTML body (required).
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Set the reply-to address.
    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to = Some(address.into());
        self
    }

    /// Set the reply-to address from an optional value.
    pub fn reply_to_opt(mut self, address: Option<impl Into<String>>) -> Self {
        self.reply_to = address.map(Into::into);
        self
    }

    /// Build the message, validating required fields.
    pub fn build(self) -> Result<OutboundMessage, MailError> {
        let from = self
            .from
            .ok_or_else(|| MailError::Build("from address required".into()))?;

        let to = self
            .to
            .ok_or_else(|| MailError::Build("recipient required".into()))?;

        let subject = self
            .subject
            .ok_or_else(|| MailError::Build("subject required".into()))?;

        let html = self
            .html
            .ok_or_else(|| MailError::Build("body required".into()))?;

        Ok(OutboundMessage {
            from,
            to,
            subject,
            html,
            reply_to: self.reply_to,
        })
    }
}
