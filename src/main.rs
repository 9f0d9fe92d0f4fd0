use clap::Parser;
use serde::Serialize;
use slop_catalog::config::cli::{Args, Command};
use slop_catalog::config::settings::EngineSettings;
use slop_catalog::domain::entities::query_params::CatalogQuery;
use slop_catalog::domain::errors::domain_error::DomainError;
use slop_catalog::domain::ports::primary::catalog_use_case::CatalogUseCase;
use slop_catalog::domain::ports::primary::import_use_case::{ImportSummary, ImportUseCase};
use slop_catalog::domain::services::catalog_service::CatalogService;
use slop_catalog::domain::services::import_service::ImportService;
use slop_catalog::infrastructure::database::command_repository::CommandRepository;
use slop_catalog::infrastructure::database::pool::SqliteRepositoryPool;
use slop_catalog::infrastructure::database::query_repository::QueryRepository;
use slop_catalog::infrastructure::import::json_result_loader::JsonResultLoader;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},diesel=warn")));

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(args: Args) -> Result<(), DomainError> {
    let pool = SqliteRepositoryPool::new(&args.database_url)?;
    let settings = EngineSettings {
        current_year: args.current_year,
        ..EngineSettings::default()
    };

    match args.command {
        Command::Browse(browse) => {
            let catalog = catalog_service(&pool, settings);
            print_json(&catalog.browse(CatalogQuery::from(browse)).await?)
        }
        Command::Facets(browse) => {
            let catalog = catalog_service(&pool, settings);
            print_json(&catalog.facets(CatalogQuery::from(browse)).await)
        }
        Command::Stats(browse) => {
            let catalog = catalog_service(&pool, settings);
            print_json(&catalog.statistics(CatalogQuery::from(browse)).await)
        }
        Command::Game { app_id } => {
            let catalog = catalog_service(&pool, settings);
            print_json(&catalog.game_details(app_id).await?)
        }
        Command::Import { files } => print_json(&import(pool, files).await?),
    }
}

fn catalog_service(
    pool: &Arc<SqliteRepositoryPool>,
    settings: EngineSettings,
) -> impl CatalogUseCase {
    CatalogService::new(Arc::new(QueryRepository::new(Arc::clone(pool))), settings)
}

async fn import(
    pool: Arc<SqliteRepositoryPool>,
    files: Vec<PathBuf>,
) -> Result<ImportSummary, DomainError> {
    let service = ImportService::new(
        Arc::new(CommandRepository::new(pool)),
        Arc::new(JsonResultLoader),
    );
    tokio::task::spawn_blocking(move || service.import_files(&files))
        .await
        .map_err(|err| DomainError::StoreQuery(err.into()))?
}

fn print_json<T: Serialize>(value: &T) -> Result<(), DomainError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
