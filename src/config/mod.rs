mod settings;

pub use settings::{MailConfig, ServerConfig, Settings, SmtpConfig};
