#![deny(
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic)]

mod app;
mod config;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use app::{App, Args};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::set_up(args.verbose);

    if let Err(e) = run(args).await {
        tracing::error!("{:#}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run(args: Args) -> anyhow::Result<()> {
    let app = App::new(args)?;
    app.run().await?;
    Ok(())
}
