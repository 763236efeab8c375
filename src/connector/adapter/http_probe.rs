use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ReadinessProbe;
use crate::domain::DomainError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);
const DEFAULT_INTERVAL: Duration = Duration::from_millis(250);

/// Readiness probe that polls the application URL over HTTP.
///
/// Any HTTP response, even 4xx/5xx, means the application is up; only
/// connection failures and request timeouts count as "not ready yet".
pub struct HttpReadinessProbe {
    client: reqwest::Client,
    deadline: Duration,
    interval: Duration,
}

impl HttpReadinessProbe {
    pub fn new(deadline: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::probe(format!("failed to build probe client: {}", e)))?;

        Ok(Self {
            client,
            deadline,
            interval: DEFAULT_INTERVAL,
        })
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

#[async_trait]
impl ReadinessProbe for HttpReadinessProbe {
    async fn poll_until_ready(&self, url: &str) -> Result<bool, DomainError> {
        let started = Instant::now();

        loop {
            match self.client.get(url).send().await {
                Ok(response) => {
                    debug!("Probe got HTTP {} from {}", response.status(), url);
                    return Ok(true);
                }
                Err(e) if e.is_connect() || e.is_timeout() => {
                    debug!("Probe: {} not answering yet ({})", url, e);
                }
                Err(e) => {
                    return Err(DomainError::probe(format!("probe of {} failed: {}", url, e)));
                }
            }

            if started.elapsed() >= self.deadline {
                return Ok(false);
            }
            tokio::time::sleep(self.interval).await;
        }
    }
}
