//! Submission endpoint handlers.

use axum::{extract::State, Json};

use crate::dispatch::{DispatchOutcome, Recipe, SubmissionContext};
use crate::error::AppError;
use crate::server::AppState;

use super::models::{
    AfterDemoFormRequest, MessageResponse, SendEmailRequest, SubmitFormRequest,
};
use super::response::ApiFailure;

const SEND_EMAIL_SUCCESS: &str = "Email sent successfully";
const SEND_EMAIL_FAILURE: &str = "Error sending email";

const SUBMIT_FORM_SUCCESS: &str = "Form submission received and processed successfully";
const SUBMIT_FORM_FAILURE: &str = "Error processing form submission";

const AFTER_DEMO_SUCCESS: &str = "After demo form submission received and processed successfully";
const AFTER_DEMO_FAILURE: &str = "Error processing after demo form submission";

/// Send a welcome email to a specified recipient.
#[tracing::instrument(name = "http.send_email", skip(state, request))]
pub async fn send_email(
    State(state): State<AppState>,
    Json(request): Json<SendEmailRequest>,
) -> Result<Json<MessageResponse>, ApiFailure> {
    let mut context = SubmissionContext::new();
    context.insert_opt_str("recipient", request.recipient);
    context.insert_opt_str("name", request.name);

    let result = state.dispatcher.dispatch(Recipe::Welcome, context).await;
    compose(result, SEND_EMAIL_SUCCESS, SEND_EMAIL_FAILURE)
}

/// Receive a demo form submission: notify staff, then confirm to the
/// submitter.
#[tracing::instrument(name = "http.submit_form", skip(state, request))]
pub async fn submit_form(
    State(state): State<AppState>,
    Json(request): Json<SubmitFormRequest>,
) -> Result<Json<MessageResponse>, ApiFailure> {
    let mut context = SubmissionContext::new();
    context.insert_opt_str("name", request.name);
    context.insert_opt_str("email", request.email);
    context.insert_opt_str("role", request.role);
    context.insert_opt_str("used_program", request.used_program);
    context.insert_opt_str("program_format", request.program_format);

    let result = state
        .dispatcher
        .dispatch(Recipe::FormSubmission, context)
        .await;
    compose(result, SUBMIT_FORM_SUCCESS, SUBMIT_FORM_FAILURE)
}

/// Receive post-session feedback: notify staff, then confirm to the
/// submitter.
#[tracing::instrument(name = "http.after_demo_form", skip(state, request))]
pub async fn after_demo_form(
    State(state): State<AppState>,
    Json(request): Json<AfterDemoFormRequest>,
) -> Result<Json<MessageResponse>, ApiFailure> {
    let mut context = SubmissionContext::new();
    context.insert_opt_str("name", request.name);
    context.insert_opt_str("email", request.email);
    context.insert_opt_number("difficulty", request.difficulty);
    context.insert_opt_str("feedback", request.feedback);

    let result = state.dispatcher.dispatch(Recipe::Feedback, context).await;
    compose(result, AFTER_DEMO_SUCCESS, AFTER_DEMO_FAILURE)
}

/// Map a dispatch result onto the endpoint's wire contract. A partial
/// outcome (primary delivered, confirmation failed) is reported to the
/// caller as a failure.
fn compose(
    result: Result<DispatchOutcome, AppError>,
    success: &str,
    failure: &'static str,
) -> Result<Json<MessageResponse>, ApiFailure> {
    match result {
        Ok(DispatchOutcome::Delivered { .. }) => Ok(Json(MessageResponse {
            message: success.to_string(),
        })),
        Ok(DispatchOutcome::ConfirmationFailed { error }) | Err(error) => {
            Err(ApiFailure::new(error, failure))
        }
    }
}
