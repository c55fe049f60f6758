use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::config::EmailProviderConfig;
use crate::error::DeliveryError;
use crate::http::HttpPoster;
use crate::models::ComplaintRecord;
use crate::templates::{self, EmailTemplateParams, SmsRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Sms,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email => f.write_str("email"),
            Channel::Sms => f.write_str("sms"),
        }
    }
}

/// One way of getting a confirmation to the submitter.
#[async_trait(?Send)]
pub trait DeliveryStrategy {
    fn name(&self) -> &'static str;

    /// True when the strategy only logs the message.
    fn is_simulated(&self) -> bool {
        false
    }

    async fn attempt_delivery(&self, record: &ComplaintRecord) -> Result<(), DeliveryError>;
}

/// Hosted email service (EmailJS REST API) rendering its own template from
/// [`EmailTemplateParams`].
pub struct EmailProviderStrategy {
    provider: EmailProviderConfig,
    http: Rc<dyn HttpPoster>,
}

impl EmailProviderStrategy {
    pub fn new(provider: EmailProviderConfig, http: Rc<dyn HttpPoster>) -> Self {
        Self { provider, http }
    }
}

#[async_trait(?Send)]
impl DeliveryStrategy for EmailProviderStrategy {
    fn name(&self) -> &'static str {
        "email-provider"
    }

    async fn attempt_delivery(&self, record: &ComplaintRecord) -> Result<(), DeliveryError> {
        if !self.provider.is_usable() {
            return Err(DeliveryError::NotConfigured(
                "email provider credentials are missing".to_string(),
            ));
        }

        let template_params = serde_json::to_value(EmailTemplateParams::from_record(record))?;
        let body = json!({
            "service_id": self.provider.service_id,
            "template_id": self.provider.template_id,
            "user_id": self.provider.public_key,
            "template_params": template_params,
        });

        self.http.post_json(&self.provider.send_url(), &body).await?;
        info!(complaint_id = %record.complaint_id, "Confirmation email sent through provider");
        Ok(())
    }
}

/// Hands the whole record to our backend, which sends the email itself.
pub struct BackendEmailStrategy {
    endpoint: String,
    http: Rc<dyn HttpPoster>,
}

impl BackendEmailStrategy {
    pub fn new(endpoint: impl Into<String>, http: Rc<dyn HttpPoster>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }
}

#[async_trait(?Send)]
impl DeliveryStrategy for BackendEmailStrategy {
    fn name(&self) -> &'static str {
        "backend-email"
    }

    async fn attempt_delivery(&self, record: &ComplaintRecord) -> Result<(), DeliveryError> {
        let body = serde_json::to_value(record)?;
        self.http.post_json(&self.endpoint, &body).await?;
        info!(complaint_id = %record.complaint_id, "Confirmation email handed to backend");
        Ok(())
    }
}

pub struct BackendSmsStrategy {
    endpoint: String,
    http: Rc<dyn HttpPoster>,
}

impl BackendSmsStrategy {
    pub fn new(endpoint: impl Into<String>, http: Rc<dyn HttpPoster>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }
}

#[async_trait(?Send)]
impl DeliveryStrategy for BackendSmsStrategy {
    fn name(&self) -> &'static str {
        "backend-sms"
    }

    async fn attempt_delivery(&self, record: &ComplaintRecord) -> Result<(), DeliveryError> {
        let body = serde_json::to_value(SmsRequest::from_record(record))?;
        self.http.post_json(&self.endpoint, &body).await?;
        info!(complaint_id = %record.complaint_id, "Confirmation SMS handed to backend");
        Ok(())
    }
}

/// Logs the message instead of sending it. Only installed in development.
pub struct SimulatedDelivery {
    channel: Channel,
}

impl SimulatedDelivery {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

#[async_trait(?Send)]
impl DeliveryStrategy for SimulatedDelivery {
    fn name(&self) -> &'static str {
        match self.channel {
            Channel::Email => "simulated-email",
            Channel::Sms => "simulated-sms",
        }
    }

    fn is_simulated(&self) -> bool {
        true
    }

    async fn attempt_delivery(&self, record: &ComplaintRecord) -> Result<(), DeliveryError> {
        match self.channel {
            Channel::Email => info!(
                to = %record.email,
                subject = %templates::email_subject(record),
                body = %templates::email_body(record),
                "Email would be sent"
            ),
            Channel::Sms => info!(
                to = %record.phone,
                text = %templates::sms_message(record),
                "SMS would be sent"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::complaint_id::ComplaintId;
    use crate::models::ComplaintCategory;
    use chrono::TimeZone;
    use serde_json::Value;
    use std::cell::RefCell;

    /// Records every post and answers with a fixed result.
    pub(crate) struct RecordingPoster {
        pub(crate) posts: RefCell<Vec<(String, Value)>>,
        pub(crate) reject_with: Option<u16>,
    }

    impl RecordingPoster {
        pub(crate) fn accepting() -> Rc<Self> {
            Rc::new(Self { posts: RefCell::new(Vec::new()), reject_with: None })
        }

        pub(crate) fn rejecting(status: u16) -> Rc<Self> {
            Rc::new(Self { posts: RefCell::new(Vec::new()), reject_with: Some(status) })
        }
    }

    #[async_trait(?Send)]
    impl HttpPoster for RecordingPoster {
        async fn post_json(&self, url: &str, body: &Value) -> Result<(), DeliveryError> {
            self.posts.borrow_mut().push((url.to_string(), body.clone()));
            match self.reject_with {
                Some(status) => Err(DeliveryError::Rejected { endpoint: url.to_string(), status }),
                None => Ok(()),
            }
        }
    }

    pub(crate) fn jane_record() -> ComplaintRecord {
        ComplaintRecord {
            complaint_id: ComplaintId::from("COMP-MVDRWQO0-AB12"),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+15551234567".to_string(),
            category: ComplaintCategory::BillingInquiry,
            subject: "Double charge".to_string(),
            description: "I was charged twice.".to_string(),
            timestamp: chrono::Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn provider_posts_template_params() {
        let poster = RecordingPoster::accepting();
        let provider = EmailProviderConfig::new("pk_live", "service_vault", "template_complaint");
        let strategy = EmailProviderStrategy::new(provider, poster.clone());

        strategy.attempt_delivery(&jane_record()).await.unwrap();

        let posts = poster.posts.borrow();
        assert_eq!(posts.len(), 1);
        let (url, body) = &posts[0];
        assert_eq!(url, "https://api.emailjs.com/api/v1.0/email/send");
        assert_eq!(body["service_id"], "service_vault");
        assert_eq!(body["template_id"], "template_complaint");
        assert_eq!(body["user_id"], "pk_live");
        assert_eq!(body["template_params"]["complaint_id"], "COMP-MVDRWQO0-AB12");
        assert_eq!(body["template_params"]["to_email"], "jane@example.com");
    }

    #[tokio::test]
    async fn provider_without_credentials_never_calls_out() {
        let poster = RecordingPoster::accepting();
        let provider = EmailProviderConfig::new("YOUR_PUBLIC_KEY", "YOUR_SERVICE_ID", "YOUR_TEMPLATE_ID");
        let strategy = EmailProviderStrategy::new(provider, poster.clone());

        let err = strategy.attempt_delivery(&jane_record()).await.unwrap_err();
        assert!(matches!(err, DeliveryError::NotConfigured(_)));
        assert!(poster.posts.borrow().is_empty());
    }

    #[tokio::test]
    async fn backend_email_posts_full_record() {
        let poster = RecordingPoster::accepting();
        let strategy = BackendEmailStrategy::new("/api/complaints/send-email", poster.clone());

        strategy.attempt_delivery(&jane_record()).await.unwrap();

        let posts = poster.posts.borrow();
        assert_eq!(posts[0].0, "/api/complaints/send-email");
        assert_eq!(posts[0].1, serde_json::to_value(jane_record()).unwrap());
    }

    #[tokio::test]
    async fn backend_sms_posts_phone_and_message() {
        let poster = RecordingPoster::accepting();
        let strategy = BackendSmsStrategy::new("/api/complaints/send-sms", poster.clone());

        strategy.attempt_delivery(&jane_record()).await.unwrap();

        let posts = poster.posts.borrow();
        let body = posts[0].1.as_object().unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body["phone"], "+15551234567");
        assert_eq!(body["message"], templates::sms_message(&jane_record()).as_str());
    }

    #[tokio::test]
    async fn rejected_status_surfaces_as_error() {
        let poster = RecordingPoster::rejecting(502);
        let strategy = BackendSmsStrategy::new("/api/complaints/send-sms", poster);

        let err = strategy.attempt_delivery(&jane_record()).await.unwrap_err();
        assert!(matches!(err, DeliveryError::Rejected { status: 502, .. }));
    }

    #[tokio::test]
    async fn simulated_delivery_always_succeeds() {
        for channel in [Channel::Email, Channel::Sms] {
            let strategy = SimulatedDelivery::new(channel);
            assert!(strategy.attempt_delivery(&jane_record()).await.is_ok());
        }
        assert_eq!(SimulatedDelivery::new(Channel::Sms).name(), "simulated-sms");
    }
}
