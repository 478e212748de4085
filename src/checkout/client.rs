//! Payment-session endpoint client

use anyhow::Context;
use std::time::Duration;
use tracing::{info, warn};
use crate::{
    config::Config,
    errors::{CheckoutError, CheckoutResult, PAYMENT_FALLBACK_MESSAGE},
    checkout::CheckoutRequest,
    network::{retry_with_backoff, RetryConfig},
    types::{CheckoutRedirect, PaymentSessionResponse},
};

pub struct PaymentClient {
    http: reqwest::Client,
    endpoint: String,
    retry: RetryConfig,
}

impl PaymentClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> CheckoutResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                warn!("⚠️ Failed to initialize HTTP client: {}", e);
                CheckoutError::Network {
                    message: "Failed to build HTTP client".to_string(),
                    source: Some(e.into()),
                    retry_count: 0,
                }
            })?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            retry: RetryConfig {
                max_attempts: 3,
                initial_delay_ms: 300,
                ..Default::default()
            },
        })
    }

    /// Returns `None` when no payment endpoint is configured.
    pub fn from_config(config: &Config) -> CheckoutResult<Option<Self>> {
        match &config.payment_endpoint {
            Some(endpoint) => Ok(Some(Self::new(
                endpoint.clone(),
                Duration::from_secs(config.http_timeout_secs),
            )?)),
            None => Ok(None),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Creates a payment session and returns where to send the browser.
    ///
    /// Only connection failures are retried: once a request has reached the
    /// server a retry could open a second session.
    pub async fn create_payment(&self, request: &CheckoutRequest) -> CheckoutResult<CheckoutRedirect> {
        let operation = || send_once(&self.http, &self.endpoint, request);

        let redirect = retry_with_backoff(
            operation,
            &self.retry,
            "Payment session creation",
            |e| {
                e.downcast_ref::<reqwest::Error>()
                    .is_some_and(|re| re.is_connect())
            },
        )
        .await?;

        info!(
            session_id = ?redirect.session_id,
            quantity = request.quantity,
            total = %request.total,
            "💳 Payment session created"
        );

        Ok(redirect)
    }
}

async fn send_once(
    http: &reqwest::Client,
    endpoint: &str,
    request: &CheckoutRequest,
) -> anyhow::Result<CheckoutRedirect> {
    let response = http
        .post(endpoint)
        .multipart(request.to_multipart())
        .send()
        .await
        .context("HTTP request failed")?;

    let status = response.status();
    let body = response.text().await.context("Failed to read response body")?;

    if !status.is_success() {
        let parsed: PaymentSessionResponse = serde_json::from_str(&body).unwrap_or_default();
        warn!("⚠️ Payment endpoint returned error status {}: {}", status, body);
        return Err(CheckoutError::PaymentRejected {
            status,
            message: parsed
                .error
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| PAYMENT_FALLBACK_MESSAGE.to_string()),
        }
        .into());
    }

    let parsed: PaymentSessionResponse = serde_json::from_str(&body)
        .context("Failed to parse payment session response")?;

    match parsed.checkout_url.filter(|url| !url.is_empty()) {
        Some(checkout_url) => Ok(CheckoutRedirect {
            checkout_url,
            session_id: parsed.session_id,
        }),
        None => Err(CheckoutError::MissingCheckoutUrl.into()),
    }
}
