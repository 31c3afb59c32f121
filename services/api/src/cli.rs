use crate::commands::{
    run_batch, run_predict, run_simulate, BatchArgs, PredictArgs, SimulateArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_scoring::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Youbank Loan Simulator",
    about = "Serve or run the home loan eligibility simulator from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score one application entered as raw classifier codes
    Predict(PredictArgs),
    /// Score one application from the guided simulation choices
    Simulate(SimulateArgs),
    /// Score every row of a CSV export of direct-form submissions
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) artifacts: ArtifactArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ArtifactArgs {
    /// Directory holding model.json, scaler.json and features.json
    #[arg(long)]
    pub(crate) artifact_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Predict(args) => run_predict(args),
        Command::Simulate(args) => run_simulate(args),
        Command::Batch(args) => run_batch(args),
    }
}
