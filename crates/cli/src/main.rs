use crate::{
    commands::Commands,
    config::ServeConfig,
    env::EnvManager,
    error::CliError,
    shutdown::{ExitCode, ShutdownCoordinator},
};
use api::state::AppState;
use catalog::{repository::CatalogRepository, settings::CatalogSettings};
use clap::Parser;
use connectors::memory::MemoryStore;
use model::{
    catalog::category::Category,
    pagination::{
        cursor::{Boundary, PageDirection, SortMethod},
        request::PaginationRequest,
    },
};
use std::{path::Path, sync::Arc};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod env;
mod error;
mod output;
mod shutdown;

#[derive(Parser)]
#[command(
    name = "storefront",
    version = "0.1.0",
    about = "Product catalog with keyset pagination"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    // Initialize logger
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let code = match run(Cli::parse()).await {
        Ok(code) => code,
        Err(err) => {
            error!("{err}");
            ExitCode::GeneralError
        }
    };

    std::process::exit(code.as_i32());
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    match cli.command {
        Commands::Serve {
            port,
            seed,
            page_size,
            env_file,
        } => {
            let mut env = EnvManager::new();
            if let Some(path) = env_file {
                env.load_from_file(path)?;
            }
            let config = ServeConfig::resolve(&env, port, page_size, seed)?;
            return serve(config).await;
        }
        Commands::Search {
            seed,
            sort_method,
            page,
            sort_key,
            unique_key,
            query,
            brand,
            category,
            page_size,
            json,
        } => {
            let method: SortMethod = sort_method.parse()?;
            let direction: PageDirection = page.parse()?;

            let boundary = search_boundary(method, direction, sort_key, unique_key.as_deref())?;

            let request = PaginationRequest::builder(method, direction)
                .boundary(boundary)
                .query(query)
                .brand(brand)
                .category(category)
                .build();

            let repository = open_catalog(Some(seed.as_path()), page_size).await?;
            let page = repository.paginate(&request).await?;

            if json {
                println!("{}", output::page_json(&page)?);
            } else {
                output::print_page(&page);
            }
        }
        Commands::Categories { json } => {
            let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else {
                for category in categories {
                    println!("{category}");
                }
            }
        }
    }

    Ok(ExitCode::Success)
}

/// The sort key and anchor name one boundary item, so they come as a pair.
/// Without either the search starts from the first page.
fn search_boundary(
    method: SortMethod,
    direction: PageDirection,
    sort_key: Option<f64>,
    unique_key: Option<&str>,
) -> Result<Boundary, CliError> {
    match (sort_key, unique_key) {
        (Some(key), Some(anchor)) => Ok(Boundary::new(key, anchor.parse()?)),
        (None, None) => Ok(Boundary::first_page(method, direction)),
        _ => Err(CliError::Config(
            "--sort-key and --unique-key must be given together".to_string(),
        )),
    }
}

async fn open_catalog(
    seed: Option<&Path>,
    page_size: usize,
) -> Result<CatalogRepository, CliError> {
    let store = match seed {
        Some(path) => MemoryStore::from_seed_file(path).await?,
        None => MemoryStore::new(),
    };

    Ok(CatalogRepository::new(
        Arc::new(store),
        CatalogSettings::new(page_size),
    ))
}

async fn serve(config: ServeConfig) -> Result<ExitCode, CliError> {
    info!(
        port = config.port,
        page_size = config.page_size,
        seed = ?config.seed,
        "Starting storefront"
    );

    let repository = open_catalog(config.seed.as_deref(), config.page_size).await?;

    let shutdown = ShutdownCoordinator::new(CancellationToken::new());
    shutdown.register_handlers();

    api::server::serve(AppState::new(repository), config.port, shutdown.cancel_token()).await?;

    if shutdown.is_shutdown_requested() {
        Ok(ExitCode::ShutdownRequested)
    } else {
        Ok(ExitCode::Success)
    }
}
