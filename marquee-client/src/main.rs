use std::{io, path::PathBuf};

use anyhow::Error;

use clap::Parser as _;

use marquee_client::{
    cli::{Args, run_command},
    config::Config,
    http::Client,
};

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // load config
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("./marquee.toml"));
    let config = Config::load(config_path)?;

    tracing::debug!(endpoint = %config.api.endpoint(), "connecting to api");

    let client = Client::new(&config.api)?;

    run_command(&args.command, &client).await
}
