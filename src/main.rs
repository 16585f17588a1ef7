use clap::Parser;
use dotenv::dotenv;
use rolodex_web::prelude::{command::Cli, run_app};
use std::process::exit;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run_app(cli).await {
        eprintln!("{e}");
        exit(1);
    }
}
