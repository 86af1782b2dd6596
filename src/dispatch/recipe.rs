//! Notification recipes: the fixed per-kind plan of required fields,
//! templates, addressing, and whether a confirmation stage runs.

use chrono::{DateTime, Utc};

use crate::template::TemplateKind;

use super::SubmissionContext;

/// Placeholder for optional fields the caller left unset.
pub const UNSET_FIELD_PLACEHOLDER: &str = "Not specified";

const CONFIRMATION_SUBJECT: &str = "Thank you for your interest in Train App";

/// One notification kind and its dispatch plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// Single-stage greeting addressed to the submitted recipient.
    Welcome,
    /// Demo form notice to staff plus a confirmation to the submitter.
    FormSubmission,
    /// Post-session feedback notice to staff plus a confirmation.
    Feedback,
}

impl Recipe {
    pub fn name(self) -> &'static str {
        match self {
            Recipe::Welcome => "welcome",
            Recipe::FormSubmission => "form-submission",
            Recipe::Feedback => "feedback",
        }
    }

    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Recipe::Welcome => &["recipient", "name"],
            Recipe::FormSubmission => &["name", "email", "role"],
            Recipe::Feedback => &["name", "email", "difficulty", "feedback"],
        }
    }

    pub const fn optional_fields(self) -> &'static [&'static str] {
        match self {
            Recipe::FormSubmission => &["used_program", "program_format"],
            _ => &[],
        }
    }

    /// Required fields absent from the context, in declaration order.
    pub fn missing_fields(self, context: &SubmissionContext) -> Vec<String> {
        self.required_fields()
            .iter()
            .filter(|field| !context.is_present(field))
            .map(|field| field.to_string())
            .collect()
    }

    pub(crate) fn primary_template(self) -> TemplateKind {
        match self {
            Recipe::Welcome => TemplateKind::Welcome,
            Recipe::FormSubmission => TemplateKind::FormNotice,
            Recipe::Feedback => TemplateKind::FeedbackNotice,
        }
    }

    pub(crate) fn confirmation_template(self) -> Option<TemplateKind> {
        match self {
            Recipe::Welcome => None,
            Recipe::FormSubmission => Some(TemplateKind::FormConfirmation),
            Recipe::Feedback => Some(TemplateKind::FeedbackConfirmation),
        }
    }

    pub(crate) fn primary_subject(self, context: &SubmissionContext) -> String {
        let name = context.get_str("name").unwrap_or_default();
        match self {
            Recipe::Welcome => "Welcome to Train App!".to_string(),
            Recipe::FormSubmission => format!("New Demo Form Submission from {name}"),
            Recipe::Feedback => format!("New After Demo Form Submission from {name}"),
        }
    }

    pub(crate) fn confirmation_subject(self) -> &'static str {
        CONFIRMATION_SUBJECT
    }
}

/// Categorical label for a numeric difficulty score.
pub fn difficulty_label(score: f64) -> &'static str {
    if score <= 3.0 {
        "Very Easy"
    } else if score <= 5.0 {
        "Easy"
    } else if score <= 7.0 {
        "Moderate"
    } else if score <= 8.0 {
        "Challenging"
    } else {
        "Very Difficult"
    }
}

/// Human-readable timestamp of the submission moment.
pub(crate) fn format_submission_date(moment: DateTime<Utc>) -> String {
    moment.format("%A, %B %-d, %Y at %I:%M %p UTC").to_string()
}
