//! The simulated submission collaborator.

use std::time::Duration;

use async_trait::async_trait;

use crate::form::SUBMISSION_DELAY;

/// Asynchronous submission backend. Resolving is the only signal the
/// engine consumes; there is no failure mode and no cancellation.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, form_type: &str, success_message: &str);
}

/// Default backend: a fixed network-latency sleep.
#[derive(Debug, Clone)]
pub struct FixedDelaySubmitter {
    delay: Duration,
}

impl FixedDelaySubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelaySubmitter {
    fn default() -> Self {
        Self::new(SUBMISSION_DELAY)
    }
}

#[async_trait]
impl Submitter for FixedDelaySubmitter {
    async fn submit(&self, form_type: &str, _success_message: &str) {
        log::info!("submitting '{form_type}' ({} ms)", self.delay.as_millis());
        tokio::time::sleep(self.delay).await;
    }
}
