use std::rc::Rc;

use async_trait::async_trait;
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::Deserialize;

use crate::config::{SiteConfig, SubmissionMode};
use crate::contact::form::ContactFormInput;
use crate::error::SubmitError;

/// Acknowledgment returned by a submitter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Sends a validated contact form somewhere.
#[async_trait(?Send)]
pub trait ContactSubmitter {
    async fn submit_contact(&self, input: &ContactFormInput) -> Result<Ack, SubmitError>;
}

/// Stands in for a backend: waits a fixed delay and always succeeds.
pub struct SimulatedSubmitter {
    delay_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

#[async_trait(?Send)]
impl ContactSubmitter for SimulatedSubmitter {
    async fn submit_contact(&self, _input: &ContactFormInput) -> Result<Ack, SubmitError> {
        info!("Simulating contact submission ({}ms)", self.delay_ms);
        TimeoutFuture::new(self.delay_ms).await;
        Ok(Ack::default())
    }
}

pub struct HttpSubmitter {
    endpoint: String,
    timeout_ms: u32,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_ms,
        }
    }
}

#[async_trait(?Send)]
impl ContactSubmitter for HttpSubmitter {
    async fn submit_contact(&self, input: &ContactFormInput) -> Result<Ack, SubmitError> {
        let request = Request::post(&self.endpoint)
            .json(input)
            .map_err(|e| SubmitError::NetworkFailure(e.to_string()))?;

        let send = request.send();
        let deadline = TimeoutFuture::new(self.timeout_ms);
        pin_mut!(send);
        pin_mut!(deadline);

        let response = match select(send, deadline).await {
            Either::Left((Ok(response), _)) => response,
            Either::Left((Err(e), _)) => {
                warn!("Contact request to {} failed: {}", self.endpoint, e);
                return Err(SubmitError::NetworkFailure(e.to_string()));
            }
            Either::Right(_) => {
                warn!("Contact request to {} timed out after {}ms", self.endpoint, self.timeout_ms);
                return Err(SubmitError::Timeout);
            }
        };

        if response.ok() {
            // An empty or non-JSON body still counts as accepted.
            Ok(response.json::<Ack>().await.unwrap_or_default())
        } else {
            let status = response.status();
            let reason = response.json::<ErrorResponse>().await.ok().map(|body| body.error);
            warn!("Contact request rejected with status {}: {:?}", status, reason);
            Err(SubmitError::from_status(status, reason))
        }
    }
}

pub fn submitter_for(config: &SiteConfig) -> Rc<dyn ContactSubmitter> {
    match config.submission {
        SubmissionMode::Simulated => Rc::new(SimulatedSubmitter::new(config.submit_delay_ms)),
        SubmissionMode::Http => Rc::new(HttpSubmitter::new(
            config.contact_endpoint.clone(),
            config.request_timeout_ms,
        )),
    }
}
