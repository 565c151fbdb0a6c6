use async_trait::async_trait;

/// The simulated work performed before a rental is finalized.
#[async_trait]
pub trait ProcessingStep: Send + Sync {
    async fn perform(&self);
}

pub type ProcessingStepBox = Box<dyn ProcessingStep>;

#[async_trait]
impl ProcessingStep for ProcessingStepBox {
    async fn perform(&self) {
        self.as_ref().perform().await
    }
}
