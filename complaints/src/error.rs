use crate::delivery::Channel;

/// Why a confirmation could not be delivered.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The strategy has no usable credentials.
    #[error("delivery not configured: {0}")]
    NotConfigured(String),

    /// The endpoint answered with a non-success status.
    #[error("{endpoint} rejected the request with status {status}")]
    Rejected { endpoint: String, status: u16 },

    #[cfg(feature = "reqwest-client")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Network failure reported by a non-reqwest client.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("json error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Every strategy configured for the channel failed.
    #[error("{channel} delivery failed after {attempts} attempt(s)")]
    Exhausted { channel: Channel, attempts: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("env file error: {0}")]
    EnvFile(#[from] dotenvy::Error),
}
