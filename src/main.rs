use std::path::Path;

use clap::Parser;

use rust_passgen::api;
use rust_passgen::config::Config;
use rust_passgen::logging;

mod cli;

use crate::cli::{Args, CliCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, warnings) = Config::load();

    logging::init(config.log_level);
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    match args.command.unwrap_or(CliCommand::Interactive) {
        CliCommand::Generate(generate) => {
            cli::handlers::handle_generate(&generate, &config, args.json)?;
        }
        CliCommand::Classify { length, classes } => {
            cli::handlers::handle_classify(length, classes, args.json)?;
        }
        CliCommand::Interactive => {
            cli::menu::run_interactive(&config, args.json)?;
        }
        CliCommand::Serve { port } => {
            let port = port.unwrap_or(config.web_port);
            api::start_server(config, port).await?;
        }
    }

    Ok(())
}
