use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::mail::{SmtpTransportProvider, TransportProvider};
use crate::template::TemplateRegistry;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub dispatcher: Arc<Dispatcher>,
    pub start_time: Instant,
}

impl AppState {
    /// Build state with the production SMTP provider. Template compilation
    /// happens here, so a malformed template fails startup.
    pub fn new(settings: Settings) -> Result<Self> {
        let provider = Arc::new(SmtpTransportProvider::new(settings.smtp.clone()));
        Self::with_provider(settings, provider)
    }

    /// Build state around an externally supplied transport provider.
    pub fn with_provider(
        settings: Settings,
        provider: Arc<dyn TransportProvider>,
    ) -> Result<Self> {
        let templates = Arc::new(TemplateRegistry::new()?);
        let dispatcher = Arc::new(Dispatcher::new(settings.mail.clone(), templates, provider));

        Ok(Self {
            settings: Arc::new(settings),
            dispatcher,
            start_time: Instant::now(),
        })
    }
}
