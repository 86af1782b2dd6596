use std::sync::atomic::Ordering;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::config::MailConfig;
use crate::error::{AppError, DispatchStage};
use crate::mail::{MailError, MailTransport, OutboundMessage, TransportProvider};
use crate::template::{TemplateKind, TemplateRegistry};

use super::recipe::{difficulty_label, format_submission_date, UNSET_FIELD_PLACEHOLDER};
use super::{DispatchStats, DispatchStatsSnapshot, Recipe, SubmissionContext};

/// Result of one dispatch attempt that got past validation and the primary
/// send. The partial variant records the two-stage send's intentional lack of
/// atomicity: the primary is already delivered and is not compensated.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// Every stage of the recipe succeeded.
    Delivered {
        /// Whether the recipe included (and delivered) a confirmation stage.
        confirmation_sent: bool,
    },
    /// The primary notice was delivered but the confirmation send failed.
    ConfirmationFailed { error: AppError },
}

/// Drives one notification recipe per submission: validate, render, acquire a
/// verified transport, send the primary message, then optionally send the
/// confirmation. Holds only immutable shared state; every dispatch gets a
/// fresh transport handle.
pub struct Dispatcher {
    templates: Arc<TemplateRegistry>,
    provider: Arc<dyn TransportProvider>,
    mail: MailConfig,
    stats: DispatchStats,
}

impl Dispatcher {
    pub fn new(
        mail: MailConfig,
        templates: Arc<TemplateRegistry>,
        provider: Arc<dyn TransportProvider>,
    ) -> Self {
        Self {
            templates,
            provider,
            mail,
            stats: DispatchStats::default(),
        }
    }

    pub fn stats(&self) -> DispatchStatsSnapshot {
        self.stats.snapshot()
    }

    #[tracing::instrument(
        name = "dispatch",
        skip(self, context),
        fields(recipe = recipe.name(), dispatch_id = %Uuid::new_v4())
    )]
    pub async fn dispatch(
        &self,
        recipe: Recipe,
        mut context: SubmissionContext,
    ) -> Result<DispatchOutcome, AppError> {
        self.stats.total_dispatched.fetch_add(1, Ordering::Relaxed);

        // Stage 1: required fields. Nothing is sent on failure.
        let missing = recipe.missing_fields(&context);
        if !missing.is_empty() {
            self.stats
                .validation_failures
                .fetch_add(1, Ordering::Relaxed);
            tracing::warn!(missing = ?missing, "submission rejected");
            return Err(AppError::Validation { missing });
        }

        // Stage 2: derived fields, then the primary body.
        context.fill_missing(recipe.optional_fields(), UNSET_FIELD_PLACEHOLDER);
        context.insert_str("submission_date", format_submission_date(Utc::now()));
        if recipe == Recipe::Feedback {
            if let Some(score) = context.get_number("difficulty") {
                context.insert_str("difficulty_label", difficulty_label(score));
            }
        }
        if let Some(link) = &self.mail.demo_link {
            context.insert_str("demo_link", link.clone());
        }

        let body = self.templates.render(recipe.primary_template(), &context)?;

        // Stage 3: fresh, verified transport for this attempt only.
        let transport = self.provider.acquire().await.map_err(|e| {
            self.stats.transport_failures.fetch_add(1, Ordering::Relaxed);
            acquisition_error(e)
        })?;

        // Stage 4: primary message.
        let primary = self.primary_message(recipe, &context, body)?;
        transport.send(&primary).await.map_err(|e| {
            self.stats.transport_failures.fetch_add(1, Ordering::Relaxed);
            AppError::Transport {
                stage: DispatchStage::PrimarySend,
                message: e.to_string(),
            }
        })?;
        self.stats.primary_sent.fetch_add(1, Ordering::Relaxed);
        tracing::info!(to = %primary.to, "primary message sent");

        // Stage 5: confirmation back to the submitter, only once the primary
        // is delivered.
        let Some(confirmation_template) = recipe.confirmation_template() else {
            return Ok(DispatchOutcome::Delivered {
                confirmation_sent: false,
            });
        };

        match self
            .send_confirmation(recipe, confirmation_template, &context, transport.as_ref())
            .await
        {
            Ok(()) => {
                self.stats
                    .confirmations_sent
                    .fetch_add(1, Ordering::Relaxed);
                Ok(DispatchOutcome::Delivered {
                    confirmation_sent: true,
                })
            }
            Err(error) => {
                self.stats.partial_failures.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(error = %error, "primary delivered but confirmation failed");
                Ok(DispatchOutcome::ConfirmationFailed { error })
            }
        }
    }

    fn primary_message(
        &self,
        recipe: Recipe,
        context: &SubmissionContext,
        body: String,
    ) -> Result<OutboundMessage, AppError> {
        let builder = OutboundMessage::builder()
            .subject(recipe.primary_subject(context))
            .html(body);

        let builder = match recipe {
            // The greeting goes straight to the submitted address.
            Recipe::Welcome => builder
                .from(self.mail.sender.clone())
                .to(context.get_str("recipient").unwrap_or_default()),
            // Notices go to staff, with reply-to pointing at the submitter.
            Recipe::FormSubmission | Recipe::Feedback => builder
                .from(self.mail.form_sender.clone())
                .to(self.mail.staff_recipient.clone())
                .reply_to_opt(context.get_str("email")),
        };

        builder.build().map_err(assembly_error)
    }

    async fn send_confirmation(
        &self,
        recipe: Recipe,
        template: TemplateKind,
        context: &SubmissionContext,
        transport: &dyn MailTransport,
    ) -> Result<(), AppError> {
        let body = self.templates.render(template, context)?;

        let message = OutboundMessage::builder()
            .from(self.mail.sender.clone())
            .to(context.get_str("email").unwrap_or_default())
            .subject(recipe.confirmation_subject())
            .html(body)
            .build()
            .map_err(assembly_error)?;

        transport.send(&message).await.map_err(|e| AppError::Transport {
            stage: DispatchStage::ConfirmationSend,
            message: e.to_string(),
        })
    }
}

fn acquisition_error(error: MailError) -> AppError {
    match error {
        MailError::MissingConfig(message) => AppError::Config(message),
        other => AppError::Transport {
            stage: DispatchStage::TransportAcquisition,
            message: other.to_string(),
        },
    }
}

fn assembly_error(error: MailError) -> AppError {
    AppError::Config(error.to_string())
}
