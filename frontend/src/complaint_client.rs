use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use complaints::{
    DeliveryError, FormController, HttpPoster, NotificationDispatcher, SystemClock, TimeoutPoster,
    Timer,
};
use gloo_net::http::Request;
use gloo_timers::future::sleep;
use serde_json::Value;

use crate::config;

pub type ComplaintController = FormController<GlooTimer, SystemClock>;

/// Browser `fetch` through gloo-net. It has no deadline of its own, so it is
/// wrapped in a [`TimeoutPoster`].
pub struct GlooPoster;

#[async_trait(?Send)]
impl HttpPoster for GlooPoster {
    async fn post_json(&self, url: &str, body: &Value) -> Result<(), DeliveryError> {
        let request = Request::post(url)
            .json(body)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(DeliveryError::Rejected {
                endpoint: url.to_string(),
                status: response.status(),
            });
        }
        Ok(())
    }
}

pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        sleep(duration).await;
    }
}

pub fn build_controller() -> ComplaintController {
    let config = config::complaint_config();
    let http = TimeoutPoster::new(GlooPoster, GlooTimer, config.request_timeout);
    let dispatcher = NotificationDispatcher::from_config(&config, Rc::new(http));
    FormController::new(dispatcher, GlooTimer, SystemClock, config.reset_delay)
}
