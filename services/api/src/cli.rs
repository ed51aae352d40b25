use clap::{Args, Parser, Subcommand};

use crate::demo::{run_demo, run_price, DemoArgs, PriceArgs};
use crate::server;
use geoquote::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Geoquote",
    about = "Run the map-data quote service or exercise the pipeline from the command line",
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
    /// Compute a one-off price breakdown from the configured rate card
    Price(PriceArgs),
    /// Run an end-to-end CLI demo covering resolution, pricing, and comparison
    Demo(DemoArgs),
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
        Command::Price(args) => run_price(args),
        Command::Demo(args) => run_demo(args),
    }
}
