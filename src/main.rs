mod alfred;
mod config;
mod controller;
mod models;
mod omdb_client;
mod repository;
mod session;
mod view;
use std::path::PathBuf;

use crate::{
    alfred::AlfredOutput, config::OmdbConfig, controller::SearchController,
    omdb_client::OmdbClient, repository::MovieRepository, view::SearchScreenView,
};
use clap::Parser;
use serde::Serialize;
use tokio::io::BufReader;

// Parsed command instructions from the command line
#[derive(Parser)]
#[clap(author, about, version)]
struct OmdbSearchCommand {
    /// OMDb api key, takes precedence over OMDB_API_KEY and the stored key
    #[clap(long, global = true)]
    api_key: Option<String>,

    /// Config file to use instead of the default location
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// the command to execute
    #[clap(subcommand)]
    command: CliCommand,
}

/// The subcommand to execute
#[derive(Parser, Debug)]
enum CliCommand {
    /// Search movies by title and print the results
    Search {
        title: String,
        #[clap(long, arg_enum, default_value = "alfred")]
        format: OutputFormat,
    },
    /// Interactive search session
    /// Type a title to search it, `:retry` to run the last search again, `:dismiss` to hide
    /// the current error and `:quit` to exit
    Interactive,
    /// Store the OMDb api key in the config file
    SetKey { key: String },
    /// Print the current configuration
    ShowConfig,
}

#[derive(clap::ArgEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Alfred,
    Text,
}

/// Load the config file from the given path, or the default location
fn load_config(path: Option<&PathBuf>) -> anyhow::Result<OmdbConfig> {
    let config = match path {
        Some(path) => OmdbConfig::load_path(path)?,
        None => OmdbConfig::load()?,
    };
    Ok(config)
}

/// Build a search controller from the resolved configuration
fn create_controller(
    config: &OmdbConfig,
    api_key: Option<String>,
) -> anyhow::Result<SearchController> {
    let api_key = config.resolve_api_key(api_key)?;
    let client = OmdbClient::create(config.resolve_base_url())?;
    Ok(SearchController::new(MovieRepository::new(client, api_key)))
}

/// Execute the search command
async fn search(
    controller: SearchController,
    title: String,
    format: OutputFormat,
) -> anyhow::Result<()> {
    controller.update_query(title);
    if let Some(request) = controller.search() {
        request.await?;
    }

    let state = controller.state();
    match format {
        OutputFormat::Alfred => print_results(&AlfredOutput::from(state)),
        OutputFormat::Text => {
            print!("{}", SearchScreenView::new(&state));
            Ok(())
        }
    }
}

/// Execute the interactive command, rendering the state each time it changes
async fn interactive(controller: SearchController) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    session::run_session(controller, stdin, |state| {
        println!("{}", SearchScreenView::new(state).to_string().trim_end());
    })
    .await
}

/// Print the results as JSON to stdout
fn print_results<T: Serialize>(value: &T) -> anyhow::Result<()> {
    if cfg!(debug_assertions) {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", serde_json::to_string(&value)?);
    }
    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    // load .env file, if any
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }

    // parse the command line
    let args = OmdbSearchCommand::parse();

    // initialize logger
    let logger = flexi_logger::Logger::try_with_env()?;

    #[cfg(not(debug_assertions))]
    let logger = logger.log_to_file(flexi_logger::FileSpec::default().suppress_timestamp());
    let _logger = logger.start()?;

    run_subcommand(args)?;

    Ok(())
}

/// Execute the parsed subcommand
#[tokio::main]
async fn run_subcommand(args: OmdbSearchCommand) -> Result<(), anyhow::Error> {
    let mut config = load_config(args.config.as_ref())?;
    match args.command {
        CliCommand::SetKey { key } => {
            config.set_api_key(key)?;
            log::info!("api key stored");
            Ok(())
        }
        CliCommand::ShowConfig => print_results(&config),
        CliCommand::Search { title, format } => {
            search(create_controller(&config, args.api_key)?, title, format).await
        }
        CliCommand::Interactive => interactive(create_controller(&config, args.api_key)?).await,
    }
}
