mod client;
mod config;
mod error;
mod handlers;
mod page;
mod render;
mod response;

use crate::config::{Config, Endpoints};
use crate::handlers::{Activation, UploadAndAnalyzeHandler};
use crate::page::TerminalPage;
use anyhow::Context;
use clap::Parser;
use envconfig::Envconfig;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Uploads an image and prints the HPI analysis returned for it.
#[derive(Parser, Debug)]
#[command(name = "hpi-client", version)]
struct Args {
    /// Selected images; only the first one is uploaded.
    files: Vec<PathBuf>,
    /// Origin serving `/upload` [env: HPI_UPLOAD_ORIGIN]
    #[arg(long)]
    upload_origin: Option<String>,
    /// Base URL of the analysis service [env: HPI_ANALYSIS_BASE_URL]
    #[arg(long)]
    analysis_url: Option<String>,
    /// Write the analysis image to this PNG file instead of printing a data URI.
    #[arg(long)]
    image_out: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::init_from_env().context("Failed to load config")?;

    let endpoints = Endpoints {
        upload_origin: args.upload_origin.unwrap_or(config.upload_origin),
        analysis_base_url: args
            .analysis_url
            .or(config.analysis_base_url)
            .context("No analysis endpoint configured, set HPI_ANALYSIS_BASE_URL")?,
    };
    info!(
        "Using upload origin {} and analysis service {}",
        endpoints.upload_origin, endpoints.analysis_base_url
    );

    let handler = UploadAndAnalyzeHandler::new(reqwest::Client::new(), endpoints);
    let page = TerminalPage::new(args.files, args.image_out);

    match handler.activate(&page).await? {
        Activation::Rendered => Ok(()),
        outcome => Err(anyhow::anyhow!("Nothing rendered: {outcome:?}")),
    }
}
