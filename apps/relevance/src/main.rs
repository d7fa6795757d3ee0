use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_relevance::config::Config;
use portfolio_relevance::errors::RelevanceError;
use portfolio_relevance::request::{handle_request, Request};
use portfolio_relevance::state::RelevanceService;

fn main() -> Result<ExitCode> {
    // Load configuration first (fails on malformed boost weights)
    let config = Config::from_env()?;

    // Initialize structured logging on stderr; stdout carries the JSON response
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = &config.rust_log;
            EnvFilter::new(format!("portfolio_relevance={level},relevance={level}"))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting relevance engine v{}", env!("CARGO_PKG_VERSION"));
    info!("Boost weights: {:?}", config.boost);

    let service = RelevanceService::portfolio(config.boost.clone());
    service
        .warm_up()
        .context("Built-in content registry failed validation")?;

    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read request from stdin")?;

    let (body, status) = match run(&service, &raw) {
        Ok(body) => (body, ExitCode::SUCCESS),
        Err(e) => {
            error!("Request failed: {e}");
            (e.to_envelope(), ExitCode::FAILURE)
        }
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &body).context("Failed to write response")?;
    writeln!(stdout)?;

    Ok(status)
}

fn run(service: &RelevanceService, raw: &str) -> Result<serde_json::Value, RelevanceError> {
    let request = Request::parse(raw)?;
    handle_request(service, request)
}
