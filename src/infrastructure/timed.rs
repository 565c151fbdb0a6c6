use crate::domain::ports::ProcessingStep;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Simulates rental processing by sleeping for a fixed duration on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct TimedProcessing {
    delay: Duration,
}

impl TimedProcessing {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ProcessingStep for TimedProcessing {
    async fn perform(&self) {
        debug!(delay = ?self.delay, "simulating rental processing");
        tokio::time::sleep(self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ProcessingStepBox;
    use std::time::Instant;

    #[tokio::test]
    async fn test_timed_processing_waits_at_least_delay() {
        let step = TimedProcessing::new(Duration::from_millis(20));
        let started = Instant::now();
        step.perform().await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_timed_processing_as_trait_object() {
        let step: ProcessingStepBox = Box::new(TimedProcessing::new(Duration::ZERO));
        // Verify Send + Sync by moving into a task
        tokio::spawn(async move { step.perform().await })
            .await
            .unwrap();
    }
}
