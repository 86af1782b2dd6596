//! API layer - HTTP endpoint handlers and response composition.

mod handlers;
mod health;
mod models;
mod response;
mod routes;

pub use handlers::{after_demo_form, send_email, submit_form};
pub use health::{health, stats};
pub use models::{
    AfterDemoFormRequest, ErrorResponse, MessageResponse, SendEmailRequest, SubmitFormRequest,
};
pub use response::ApiFailure;
pub use routes::api_routes;
