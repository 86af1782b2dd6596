//! Outbound mail: message types and the SMTP transport seam.
//!
//! A transport handle is acquired fresh for every dispatch attempt and must
//! pass the remote verification handshake before it is handed out; it is
//! dropped at the end of the attempt. No caching, no pooling, no retries.

mod message;
mod transport;

pub use message::{OutboundMessage, OutboundMessageBuilder};
pub use transport::{MailTransport, SmtpTransportProvider, TransportProvider};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("missing required config: {0}")]
    MissingConfig(String),

    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}
