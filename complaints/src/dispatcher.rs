use std::rc::Rc;

use tracing::{info, warn};

use crate::config::ComplaintConfig;
use crate::delivery::{
    BackendEmailStrategy, BackendSmsStrategy, Channel, DeliveryStrategy, EmailProviderStrategy,
    SimulatedDelivery,
};
use crate::error::DeliveryError;
use crate::http::HttpPoster;
use crate::models::ComplaintRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsOutcome {
    Delivered,
    /// Only a development simulation accepted it; no SMS went out.
    Simulated,
    /// Every SMS strategy failed; logged and otherwise ignored.
    Dropped,
}

/// Sends the email and SMS confirmations for a registered complaint.
///
/// Each channel walks its strategies in order and stops at the first one that
/// succeeds. Every strategy is tried at most once per call. Email failure is
/// reported to the caller, SMS failure never is.
#[derive(Default)]
pub struct NotificationDispatcher {
    email: Vec<Box<dyn DeliveryStrategy>>,
    sms: Vec<Box<dyn DeliveryStrategy>>,
}

impl NotificationDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Email: provider (when usable), then backend, then simulation in
    /// development. SMS: backend, then simulation in development.
    pub fn from_config(config: &ComplaintConfig, http: Rc<dyn HttpPoster>) -> Self {
        let mut dispatcher = Self::new();

        if let Some(provider) = config.usable_email_provider() {
            dispatcher = dispatcher
                .with_email_strategy(EmailProviderStrategy::new(provider.clone(), http.clone()));
        }
        dispatcher = dispatcher
            .with_email_strategy(BackendEmailStrategy::new(config.email_endpoint(), http.clone()))
            .with_sms_strategy(BackendSmsStrategy::new(config.sms_endpoint(), http));

        if config.mode.simulates_delivery() {
            dispatcher = dispatcher
                .with_email_strategy(SimulatedDelivery::new(Channel::Email))
                .with_sms_strategy(SimulatedDelivery::new(Channel::Sms));
        }

        info!(
            mode = ?config.mode,
            email = ?dispatcher.email_strategies(),
            sms = ?dispatcher.sms_strategies(),
            "Notification dispatcher ready"
        );
        dispatcher
    }

    pub fn with_email_strategy(mut self, strategy: impl DeliveryStrategy + 'static) -> Self {
        self.email.push(Box::new(strategy));
        self
    }

    pub fn with_sms_strategy(mut self, strategy: impl DeliveryStrategy + 'static) -> Self {
        self.sms.push(Box::new(strategy));
        self
    }

    pub fn email_strategies(&self) -> Vec<&'static str> {
        self.email.iter().map(|strategy| strategy.name()).collect()
    }

    pub fn sms_strategies(&self) -> Vec<&'static str> {
        self.sms.iter().map(|strategy| strategy.name()).collect()
    }

    pub async fn send_email(&self, record: &ComplaintRecord) -> Result<(), DeliveryError> {
        deliver(Channel::Email, &self.email, record).await.map(|_| ())
    }

    pub async fn send_sms(&self, record: &ComplaintRecord) -> SmsOutcome {
        match deliver(Channel::Sms, &self.sms, record).await {
            Ok(strategy) if strategy.is_simulated() => SmsOutcome::Simulated,
            Ok(_) => SmsOutcome::Delivered,
            Err(e) => {
                warn!(
                    complaint_id = %record.complaint_id,
                    error = %e,
                    "SMS notification failed, but complaint was registered"
                );
                SmsOutcome::Dropped
            }
        }
    }
}

/// Returns the strategy that accepted the record.
async fn deliver<'a>(
    channel: Channel,
    strategies: &'a [Box<dyn DeliveryStrategy>],
    record: &ComplaintRecord,
) -> Result<&'a dyn DeliveryStrategy, DeliveryError> {
    for strategy in strategies {
        match strategy.attempt_delivery(record).await {
            Ok(()) => {
                info!(
                    complaint_id = %record.complaint_id,
                    %channel,
                    strategy = strategy.name(),
                    "Notification accepted"
                );
                return Ok(&**strategy);
            }
            Err(e) => warn!(
                complaint_id = %record.complaint_id,
                %channel,
                strategy = strategy.name(),
                error = %e,
                "Delivery strategy failed"
            ),
        }
    }

    Err(DeliveryError::Exhausted {
        channel,
        attempts: strategies.len(),
    })
}
