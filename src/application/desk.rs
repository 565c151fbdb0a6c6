use super::worker::RentalWorker;
use crate::domain::customer::Customer;
use crate::domain::money::Rate;
use crate::domain::ports::ProcessingStep;
use crate::domain::rental::{Completion, Rental};
use crate::domain::vehicle::{Vehicle, VehicleCategory};
use crate::error::{RentalError, Result};
use crate::interfaces::console::prompt_reader::PromptReader;
use rust_decimal::Decimal;
use std::future::Future;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const FAREWELL: &str = "Thank you for using our rental system!";

/// What a console session ended with: the completed rental, or the error that was
/// reported to the user instead.
pub type SessionOutcome = std::result::Result<Completion, RentalError>;

/// Runs one interactive rental session.
///
/// Reads the vehicle, customer and rental details, hands the rental to a
/// [`RentalWorker`] and waits for it. Every domain failure is reported on the
/// console; the session always ends with a farewell line.
pub struct RentalDesk<P: ProcessingStep> {
    worker: RentalWorker<P>,
}

impl<P: ProcessingStep> RentalDesk<P> {
    pub fn new(step: P) -> Self {
        Self {
            worker: RentalWorker::new(step),
        }
    }

    /// Runs the session to the end and closes the input.
    ///
    /// Only failures to write the farewell escape as errors.
    pub async fn run<R, W, I>(
        &self,
        mut prompts: PromptReader<R, W>,
        interrupt: I,
    ) -> io::Result<SessionOutcome>
    where
        R: BufRead,
        W: Write,
        I: Future<Output = ()>,
    {
        let outcome = self.session(&mut prompts, interrupt).await;
        match &outcome {
            Ok(completion) => info!(
                customer = %completion.customer_name,
                total_cost = %completion.total_cost,
                "rental session completed"
            ),
            Err(err) => {
                if let Err(write_err) = report(&mut prompts, err) {
                    debug!(error = %write_err, "failed to report session error");
                }
            }
        }

        let mut out = prompts.close();
        writeln!(out, "{FAREWELL}")?;
        out.flush()?;
        Ok(outcome)
    }

    async fn session<R, W, I>(
        &self,
        prompts: &mut PromptReader<R, W>,
        interrupt: I,
    ) -> Result<Completion>
    where
        R: BufRead,
        W: Write,
        I: Future<Output = ()>,
    {
        let category: VehicleCategory =
            prompts.ask("Enter vehicle type (Car/Bike): ")?.parse()?;
        let license_plate = prompts.ask("Enter license plate: ")?;
        let model = prompts.ask("Enter model: ")?;
        let rate: Decimal = prompts.ask_parsed("Enter rate per day: ", "rate per day")?;
        let rate: Rate = rate.try_into()?;
        let vehicle = Vehicle::new(category, license_plate, model, rate);
        debug!(%vehicle, %category, "vehicle registered");

        let name = prompts.ask("Enter customer name: ")?;
        let driver_license = prompts.ask("Enter driver license number: ")?;
        let customer = Customer::new(name, driver_license);

        let days: i32 = prompts.ask_parsed("Enter rental days: ", "rental days")?;
        let mut rental = Rental::new(&vehicle, &customer, days)?;

        self.worker
            .process(&mut rental, prompts.output(), interrupt)
            .await
    }
}

fn report<R: BufRead, W: Write>(
    prompts: &mut PromptReader<R, W>,
    err: &RentalError,
) -> io::Result<()> {
    match err {
        RentalError::TypeMismatch { field, input } => {
            debug!(field, input = input.as_str(), "input did not parse");
            prompts.say(err)
        }
        RentalError::Interrupted { license_plate } => {
            prompts.say(err)?;
            prompts.say(format_args!(
                "Vehicle {license_plate} remains unavailable; the rental was not completed."
            ))
        }
        _ => prompts.say(format_args!("Error: {err}")),
    }
}
