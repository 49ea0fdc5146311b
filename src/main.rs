use std::process::ExitCode;

use easy_decision_bot::config::{Cli, Config, VERSION};
use log::LevelFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    // Print version and exit.
    if cli.version {
        println!("{}", VERSION);
        return ExitCode::SUCCESS;
    }

    init_logger();
    let config = Config::from(cli);

    if !config.has_token() {
        println!("Please provide token.");
    }

    log::info!("Starting Easy Decision Bot {}", VERSION);
    if let Err(err) = easy_decision_bot::runner::run(config).await {
        log::error!("{}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_logger() {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), LevelFilter::Info)
        .parse_default_env()
        .init();
}
