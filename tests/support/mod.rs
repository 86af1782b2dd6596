//! Shared test doubles for the dispatch pipeline.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use trainapp_mail_service::mail::{MailError, MailTransport, OutboundMessage, TransportProvider};

#[derive(Debug, Clone, Copy)]
enum FailureMode {
    None,
    MissingCredentials,
    Handshake,
    /// Sends with 0-based index >= n are rejected
    SendFrom(usize),
}

/// Transport provider double that records every acquisition and every
/// attempted send.
pub struct MockTransportProvider {
    mode: FailureMode,
    acquire_calls: AtomicUsize,
    attempts: Arc<Mutex<Vec<OutboundMessage>>>,
}

impl MockTransportProvider {
    fn with_mode(mode: FailureMode) -> Arc<Self> {
        Arc::new(Self {
            mode,
            acquire_calls: AtomicUsize::new(0),
            attempts: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn healthy() -> Arc<Self> {
        Self::with_mode(FailureMode::None)
    }

    pub fn missing_credentials() -> Arc<Self> {
        Self::with_mode(FailureMode::MissingCredentials)
    }

    pub fn failing_handshake() -> Arc<Self> {
        Self::with_mode(FailureMode::Handshake)
    }

    /// Sends from the given 0-based index onward fail; earlier sends succeed.
    pub fn failing_sends_from(index: usize) -> Arc<Self> {
        Self::with_mode(FailureMode::SendFrom(index))
    }

    /// Number of acquisition attempts, successful or not.
    pub fn acquires(&self) -> usize {
        self.acquire_calls.load(Ordering::SeqCst)
    }

    /// Every attempted send in order, whether it was delivered or rejected.
    pub fn attempts(&self) -> Vec<OutboundMessage> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransportProvider for MockTransportProvider {
    async fn acquire(&self) -> Result<Box<dyn MailTransport>, MailError> {
        self.acquire_calls.fetch_add(1, Ordering::SeqCst);

        match self.mode {
            FailureMode::MissingCredentials => Err(MailError::MissingConfig(
                "email credentials are not configured".to_string(),
            )),
            FailureMode::Handshake => {
                Err(MailError::Smtp("verification handshake refused".to_string()))
            }
            _ => Ok(Box::new(MockTransport {
                mode: self.mode,
                attempts: self.attempts.clone(),
            })),
        }
    }
}

struct MockTransport {
    mode: FailureMode,
    attempts: Arc<Mutex<Vec<OutboundMessage>>>,
}

#[async_trait]
impl MailTransport for MockTransport {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let index = {
            let mut attempts = self.attempts.lock().unwrap();
            attempts.push(message.clone());
            attempts.len() - 1
        };

        match self.mode {
            FailureMode::SendFrom(first_failing) if index >= first_failing => {
                Err(MailError::Smtp("send rejected".to_string()))
            }
            _ => Ok(()),
        }
    }
}
