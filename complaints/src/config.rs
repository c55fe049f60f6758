use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(3);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com";

pub const EMAIL_ENDPOINT_PATH: &str = "/api/complaints/send-email";
pub const SMS_ENDPOINT_PATH: &str = "/api/complaints/send-sms";

const PLACEHOLDER_PREFIX: &str = "YOUR_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    Development,
    #[default]
    Production,
}

impl ExecutionMode {
    /// `development` (or `dev`) selects development, anything else is production.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => ExecutionMode::Development,
            _ => ExecutionMode::Production,
        }
    }

    /// Development builds pretend delivery worked so the form can be tried
    /// without any backend running.
    pub fn simulates_delivery(self) -> bool {
        matches!(self, ExecutionMode::Development)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailProviderConfig {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    pub api_url: String,
}

impl EmailProviderConfig {
    pub fn new(public_key: impl Into<String>, service_id: impl Into<String>, template_id: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            api_url: DEFAULT_EMAILJS_API_URL.to_string(),
        }
    }

    pub fn is_usable(&self) -> bool {
        [&self.public_key, &self.service_id, &self.template_id]
            .iter()
            .all(|value| {
                let value = value.trim();
                !value.is_empty() && !value.starts_with(PLACEHOLDER_PREFIX)
            })
    }

    pub fn send_url(&self) -> String {
        format!("{}/api/v1.0/email/send", self.api_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintConfig {
    pub mode: ExecutionMode,
    /// Base URL of the backend; empty means same origin.
    pub backend_url: String,
    pub email_provider: Option<EmailProviderConfig>,
    /// How long the success banner stays up before the form resets.
    pub reset_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for ComplaintConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::default(),
            backend_url: String::new(),
            email_provider: None,
            reset_delay: DEFAULT_RESET_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ComplaintConfig {
    pub fn email_endpoint(&self) -> String {
        format!("{}{}", self.backend_url.trim_end_matches('/'), EMAIL_ENDPOINT_PATH)
    }

    pub fn sms_endpoint(&self) -> String {
        format!("{}{}", self.backend_url.trim_end_matches('/'), SMS_ENDPOINT_PATH)
    }

    /// Only hands out provider settings that can actually be used.
    pub fn usable_email_provider(&self) -> Option<&EmailProviderConfig> {
        self.email_provider.as_ref().filter(|provider| provider.is_usable())
    }

    /// Builds the configuration from any key/value source. Missing keys fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mode = get("ENVIRONMENT")
            .map(|value| ExecutionMode::parse(&value))
            .unwrap_or_default();

        let email_provider = match (
            get("EMAILJS_PUBLIC_KEY"),
            get("EMAILJS_SERVICE_ID"),
            get("EMAILJS_TEMPLATE_ID"),
        ) {
            (Some(public_key), Some(service_id), Some(template_id)) => {
                let mut provider = EmailProviderConfig::new(public_key, service_id, template_id);
                if let Some(api_url) = get("EMAILJS_API_URL") {
                    provider.api_url = api_url;
                }
                Some(provider)
            }
            _ => None,
        };

        Ok(Self {
            mode,
            backend_url: get("COMPLAINTS_BACKEND_URL").unwrap_or_default(),
            email_provider,
            reset_delay: parse_millis("COMPLAINT_RESET_DELAY_MS", get("COMPLAINT_RESET_DELAY_MS"))?
                .unwrap_or(DEFAULT_RESET_DELAY),
            request_timeout: parse_millis(
                "COMPLAINT_REQUEST_TIMEOUT_MS",
                get("COMPLAINT_REQUEST_TIMEOUT_MS"),
            )?
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        })
    }

    /// Process environment, after loading a `.env` from the working
    /// directory if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads an env file without touching the process environment. Variables
    /// already set in the process win over the file, as with `from_env`.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let vars = dotenvy::from_path_iter(path)?.collect::<Result<HashMap<_, _>, _>>()?;
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| vars.get(key).cloned()))
    }
}

fn parse_millis(key: &'static str, value: Option<String>) -> Result<Option<Duration>, ConfigError> {
    match value {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(|millis| Some(Duration::from_millis(millis)))
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
