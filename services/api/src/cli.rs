use crate::console::{run_catalog, run_client, run_freelancer, ClientArgs, FreelancerArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fair_rate::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Fair Rate Calculator",
    about = "Calculate fair freelance rates and client cost estimates, or serve them over HTTP",
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
    /// Score a freelancer profile and suggest an hourly rate
    Freelancer(FreelancerArgs),
    /// Estimate a fair hourly range and total cost for hiring a freelancer
    Client(ClientArgs),
    /// List countries, sectors, market rates and quiz questions
    Catalog,
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
        Command::Freelancer(args) => run_freelancer(args).await,
        Command::Client(args) => run_client(args),
        Command::Catalog => run_catalog(),
    }
}
