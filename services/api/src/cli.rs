use crate::demo::{run_demo, run_precheck_report, DemoArgs, PrecheckReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use visa_precheck::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Visa Pre-check Service",
    about = "Serve and demonstrate the Schengen document pre-check engine from the command line",
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
    /// Derive readiness views from a saved analysis response
    Precheck {
        #[command(subcommand)]
        command: PrecheckCommand,
    },
    /// Run an end-to-end demo over a synthetic analysis response
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum PrecheckCommand {
    /// Derive and print the readiness report for an analysis JSON file
    Report(PrecheckReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Precheck {
            command: PrecheckCommand::Report(args),
        } => run_precheck_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
