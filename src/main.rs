use easyrecipe::cli::{self, output::Output, Cli};
use easyrecipe::config::{ClientConfig, API_URL_ENV};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before reading EASYRECIPE_API_URL
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let config = match ClientConfig::load_or_default(&cli.config) {
        Ok(config) => config.with_overrides(std::env::var(API_URL_ENV).ok(), cli.api_url.clone()),
        Err(e) => {
            output.error(&format!("Failed to load {}: {}", cli.config.display(), e));
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        output.error(&e.to_string());
        return ExitCode::FAILURE;
    }

    init_tracing(&config, cli.verbose, !cli.no_color);

    if cli::run(&cli, &config, &output).await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// `RUST_LOG` wins over the configured level; `--verbose` forces debug.
fn init_tracing(config: &ClientConfig, verbose: bool, ansi: bool) {
    let filter = if verbose {
        EnvFilter::new("easyrecipe=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false),
        )
        .init();
}
