mod cli;
mod evaluate;
mod infra;
mod routes;
mod server;

use ghostjob::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
