use clap::Parser;
use dioxus_logger::tracing::{self, Level};

use fundbank::{api::ApiClient, cli, config::Config, session::Session};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = cli::Cli::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let api = match Session::from_config(&config)
        .map_err(fundbank::error::Error::from)
        .and_then(|session| ApiClient::new(&session))
    {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::debug!("Using backend at {}", api.session().base_url());

    match cli::execute(args.command, api, &config).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
