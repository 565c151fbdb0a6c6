use crate::domain::ports::ProcessingStep;
use crate::domain::rental::{Completion, Rental, RentalState};
use crate::error::{RentalError, Result};
use std::future::Future;
use std::io::Write;
use tracing::{debug, warn};

/// Processes an active rental and then completes it.
///
/// The processing step is raced against an interrupt signal. When the interrupt
/// fires first the rental is left active (its vehicle stays unavailable) and the
/// worker returns [`RentalError::Interrupted`] so the caller can report it.
pub struct RentalWorker<P: ProcessingStep> {
    step: P,
}

impl<P: ProcessingStep> RentalWorker<P> {
    pub fn new(step: P) -> Self {
        Self { step }
    }

    pub async fn process<W, I>(
        &self,
        rental: &mut Rental<'_>,
        out: &mut W,
        interrupt: I,
    ) -> Result<Completion>
    where
        W: Write,
        I: Future<Output = ()>,
    {
        if rental.state() == RentalState::Completed {
            return Err(RentalError::AlreadyCompleted);
        }

        writeln!(out, "\nProcessing rental, please wait...")?;
        out.flush()?;
        debug!(
            license_plate = rental.vehicle().license_plate(),
            "rental processing started"
        );

        let interrupted = tokio::select! {
            _ = self.step.perform() => false,
            _ = interrupt => true,
        };

        if interrupted {
            writeln!(out, "Rental process interrupted.")?;
            warn!(
                license_plate = rental.vehicle().license_plate(),
                "rental processing interrupted; rental left active"
            );
            return Err(RentalError::Interrupted {
                license_plate: rental.vehicle().license_plate().to_string(),
            });
        }

        writeln!(out, "\nRental Processed Successfully!")?;
        writeln!(out, "{rental}")?;
        let completion = rental.complete()?;
        writeln!(out, "{completion}")?;
        Ok(completion)
    }
}
