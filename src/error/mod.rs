use thiserror::Error;

/// Pipeline stage at which a dispatch attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStage {
    TransportAcquisition,
    PrimarySend,
    ConfirmationSend,
}

impl DispatchStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStage::TransportAcquisition => "transport-acquisition",
            DispatchStage::PrimarySend => "primary-send",
            DispatchStage::ConfirmationSend => "confirmation-send",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Caller-supplied fields missing. The only variant whose detail is
    /// forwarded to callers.
    #[error("missing required fields: {}", missing.join(", "))]
    Validation { missing: Vec<String> },

    /// Server-side credential or template misconfiguration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Verification or send failed against the remote mail service.
    #[error("transport error at {}: {message}", stage.as_str())]
    Transport {
        stage: DispatchStage,
        message: String,
    },

    /// Template compilation or rendering failure.
    #[error("template error: {0}")]
    Template(String),
}

impl From<handlebars::TemplateError> for AppError {
    fn from(e: handlebars::TemplateError) -> Self {
        AppError::Template(e.to_string())
    }
}

impl From<handlebars::RenderError> for AppError {
    fn from(e: handlebars::RenderError) -> Self {
        AppError::Template(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
