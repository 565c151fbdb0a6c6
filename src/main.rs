use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rentaldesk::application::desk::RentalDesk;
use rentaldesk::config::{DEFAULT_PROCESSING_DELAY_MS, RentalConfig};
use rentaldesk::domain::ports::ProcessingStepBox;
use rentaldesk::infrastructure::timed::TimedProcessing;
use rentaldesk::interfaces::console::prompt_reader::PromptReader;
use rentaldesk::telemetry;
use std::io;
use tracing::debug;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How long rental processing takes, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_PROCESSING_DELAY_MS)]
    processing_delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing();

    let config = RentalConfig::with_processing_delay_ms(cli.processing_delay_ms);
    let step: ProcessingStepBox = Box::new(TimedProcessing::new(config.processing_delay));
    let desk = RentalDesk::new(step);

    // Ctrl-C during processing interrupts the worker
    let interrupt = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompts = PromptReader::new(stdin.lock(), stdout.lock());

    // Session errors are reported on the console; the exit status stays zero.
    let outcome = desk.run(prompts, interrupt).await.into_diagnostic()?;
    if let Err(err) = outcome {
        debug!(error = %err, "rental session ended without completing");
    }

    Ok(())
}
