//! Compiled email template registry.
//!
//! All template sources are embedded into the binary and compiled exactly
//! once, at startup, into an immutable [`TemplateRegistry`]. A malformed
//! source fails registry construction, which halts process initialization.
//! Rendering is non-strict: context keys absent at render time produce empty
//! output rather than an error.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;

/// One compiled template per notification kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Greeting sent to a new recipient.
    Welcome,
    /// Staff notice for a demo form submission.
    FormNotice,
    /// Confirmation sent back to a form submitter.
    FormConfirmation,
    /// Staff notice for post-session feedback.
    FeedbackNotice,
    /// Confirmation sent back to a feedback submitter.
    FeedbackConfirmation,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Welcome,
        TemplateKind::FormNotice,
        TemplateKind::FormConfirmation,
        TemplateKind::FeedbackNotice,
        TemplateKind::FeedbackConfirmation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Welcome => "welcome",
            TemplateKind::FormNotice => "form-notice",
            TemplateKind::FormConfirmation => "form-confirmation",
            TemplateKind::FeedbackNotice => "feedback-notice",
            TemplateKind::FeedbackConfirmation => "feedback-confirmation",
        }
    }

    fn source(self) -> &'static str {
        match self {
            TemplateKind::Welcome => include_str!("../../templates/welcome.html"),
            TemplateKind::FormNotice => include_str!("../../templates/form_notice.html"),
            TemplateKind::FormConfirmation => {
                include_str!("../../templates/form_confirmation.html")
            }
            TemplateKind::FeedbackNotice => include_str!("../../templates/feedback_notice.html"),
            TemplateKind::FeedbackConfirmation => {
                include_str!("../../templates/feedback_confirmation.html")
            }
        }
    }
}

/// Immutable registry of compiled templates, built once at startup and shared
/// read-only across all dispatches.
pub struct TemplateRegistry {
    registry: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Compile every template kind. Fails on the first malformed source.
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        for kind in TemplateKind::ALL {
            registry.register_template_string(kind.name(), kind.source())?;
        }
        Ok(Self { registry })
    }

    /// Render a compiled template against a context. Missing context keys
    /// render as empty strings.
    pub fn render<T: Serialize>(&self, kind: TemplateKind, context: &T) -> Result<String> {
        Ok(self.registry.render(kind.name(), context)?)
    }
}
