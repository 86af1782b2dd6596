use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub mail: MailConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    /// Outbound relay hostname
    #[serde(default = "default_smtp_host")]
    pub host: String,
    /// Relay port (STARTTLS)
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Account identity; absence is surfaced at send time, not startup
    pub user: Option<String>,
    /// Account secret; absence is surfaced at send time, not startup
    pub password: Option<String>,
    /// Bound on the verification handshake and each send
    #[serde(default = "default_smtp_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// Operator inbox that receives form and feedback notices
    #[serde(default = "default_staff_recipient")]
    pub staff_recipient: String,
    /// Sender identity for welcome and confirmation messages
    #[serde(default = "default_sender")]
    pub sender: String,
    /// Sender identity for staff-addressed notices
    #[serde(default = "default_form_sender")]
    pub form_sender: String,
    /// External demo link rendered into confirmation messages
    pub demo_link: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_smtp_host() -> String {
    "smtp-relay.brevo.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_timeout() -> u64 {
    10
}

fn default_staff_recipient() -> String {
    "trainapp9@gmail.com".to_string()
}

fn default_sender() -> String {
    "Train App <info@trainapp.org>".to_string()
}

fn default_form_sender() -> String {
    "Train App Form <info@trainapp.org>".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("smtp.host", "smtp-relay.brevo.com")?
            .set_default("smtp.port", 587)?
            .set_default("smtp.timeout_seconds", 10)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // SERVER_HOST, SERVER_PORT, SMTP_HOST, SMTP_PORT, SMTP_USER, SMTP_PASSWORD, etc.
            .add_source(
                Environment::default()
                    .separator("_")
                    .try_parsing(true),
            )
            // Legacy environment variables kept from the original deployment
            .set_override_option("smtp.user", env::var("EMAIL_USER").ok())?
            .set_override_option("smtp.password", env::var("EMAIL_PASSWORD").ok())?
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("mail.demo_link", env::var("DEMO_LINK_URL").ok())?;

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            user: None,
            password: None,
            timeout_seconds: default_smtp_timeout(),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            staff_recipient: default_staff_recipient(),
            sender: default_sender(),
            form_sender: default_form_sender(),
            demo_link: None,
        }
    }
}
