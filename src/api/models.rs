//! Request and response models for the submission endpoints.
//!
//! Every inbound field is optional at the serde layer; requiredness is
//! enforced by the dispatch recipe so a missing field produces the recipe's
//! 400 with the precise field list rather than a deserialization error.

use serde::{Deserialize, Serialize};

/// Body for `POST /send-email`.
#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    /// Address the greeting is sent to
    pub recipient: Option<String>,
    /// Name used inside the greeting
    pub name: Option<String>,
}

/// Body for `POST /submit-form`.
#[derive(Debug, Deserialize)]
pub struct SubmitFormRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    /// Whether the submitter has used the program before
    pub used_program: Option<String>,
    /// Preferred program format
    pub program_format: Option<String>,
}

/// Body for `POST /after-demo-form`.
#[derive(Debug, Deserialize)]
pub struct AfterDemoFormRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Numeric difficulty score for the session
    pub difficulty: Option<f64>,
    pub feedback: Option<String>,
}

/// Success payload for all submission endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure payload for all submission endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
