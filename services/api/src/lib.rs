mod cli;
mod console;
mod infra;
mod routes;
mod server;

use fair_rate::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
