//! Complaint registration for the Vault landing page.
//!
//! [`FormController`] holds the "Register a complaint" form and, on submit,
//! hands a [`ComplaintRecord`] to the [`NotificationDispatcher`], which sends
//! an email confirmation (required) and an SMS confirmation (best effort).
//! Nothing here is persisted.

pub mod complaint_id;
pub mod config;
pub mod controller;
pub mod delivery;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod models;
pub mod templates;

pub use complaint_id::ComplaintId;
pub use config::{ComplaintConfig, EmailProviderConfig, ExecutionMode};
pub use controller::{Clock, FormController, FormSnapshot, FormStatus, SubmitOutcome, SystemClock, Timer};
pub use delivery::{Channel, DeliveryStrategy};
pub use dispatcher::{NotificationDispatcher, SmsOutcome};
pub use error::{ConfigError, DeliveryError};
pub use http::{HttpPoster, TimeoutPoster};
#[cfg(feature = "reqwest-client")]
pub use http::ReqwestPoster;
pub use models::{ComplaintCategory, ComplaintField, ComplaintForm, ComplaintRecord};
