use clap::Parser;
use navcycle_client::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), navcycle_client::AppError> {
    run(Cli::parse()).await
}
