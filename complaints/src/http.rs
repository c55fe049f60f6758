use std::time::Duration;

use async_trait::async_trait;
use futures::future::{self, Either};
use serde_json::Value;

use crate::controller::Timer;
use crate::error::DeliveryError;

/// Minimal HTTP capability the delivery strategies need.
///
/// Implementations must turn any non-2xx answer into
/// [`DeliveryError::Rejected`].
#[async_trait(?Send)]
pub trait HttpPoster {
    async fn post_json(&self, url: &str, body: &Value) -> Result<(), DeliveryError>;
}

/// Gives up on a post that outlives `timeout`, for clients with no deadline
/// of their own (browser `fetch`).
pub struct TimeoutPoster<P, T> {
    inner: P,
    timer: T,
    timeout: Duration,
}

impl<P: HttpPoster, T: Timer> TimeoutPoster<P, T> {
    pub fn new(inner: P, timer: T, timeout: Duration) -> Self {
        Self { inner, timer, timeout }
    }
}

#[async_trait(?Send)]
impl<P: HttpPoster, T: Timer> HttpPoster for TimeoutPoster<P, T> {
    async fn post_json(&self, url: &str, body: &Value) -> Result<(), DeliveryError> {
        let post = Box::pin(self.inner.post_json(url, body));
        let deadline = Box::pin(self.timer.sleep(self.timeout));

        match future::select(post, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(DeliveryError::Transport(format!(
                "{} timed out after {} ms",
                url,
                self.timeout.as_millis()
            ))),
        }
    }
}

#[cfg(feature = "reqwest-client")]
pub use self::reqwest_poster::ReqwestPoster;

#[cfg(feature = "reqwest-client")]
mod reqwest_poster {
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::Client;
    use serde_json::Value;

    use super::HttpPoster;
    use crate::error::DeliveryError;

    pub struct ReqwestPoster {
        client: Client,
    }

    impl ReqwestPoster {
        pub fn new(timeout: Duration) -> Result<Self, DeliveryError> {
            let client = Client::builder()
                .timeout(timeout)
                .user_agent(concat!("vault-complaints/", env!("CARGO_PKG_VERSION")))
                .build()?;
            Ok(Self { client })
        }
    }

    #[async_trait(?Send)]
    impl HttpPoster for ReqwestPoster {
        async fn post_json(&self, url: &str, body: &Value) -> Result<(), DeliveryError> {
            let response = self.client.post(url).json(body).send().await?;

            if !response.status().is_success() {
                return Err(DeliveryError::Rejected {
                    endpoint: url.to_string(),
                    status: response.status().as_u16(),
                });
            }

            Ok(())
        }
    }
}
