use crate::domain::entities::query_params::CatalogQuery;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path of the SQLite catalog database
    #[arg(long, env = "CATALOG_DATABASE_URL", default_value = "catalog.db")]
    pub database_url: String,

    /// Log level (error, warn, info, debug, trace), overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Year used as "now" for release year bounds, defaults to the local clock
    #[arg(long, value_parser = clap::value_parser!(i32).range(1980..=9998))]
    pub current_year: Option<i32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List games with facets and statistics, printed as JSON
    Browse(BrowseArgs),
    /// Print only the facets for a listing
    Facets(BrowseArgs),
    /// Print only the statistics for a listing
    Stats(BrowseArgs),
    /// Show one game with its launch options
    Game {
        /// Steam application id
        app_id: i64,
    },
    /// Load scraper result files into the catalog
    Import {
        /// JSON files produced by the scraper
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Listing parameters. Values are passed through as given and normalized by
/// the query engine, so malformed input is corrected rather than rejected.
#[derive(ClapArgs, Debug, Default)]
pub struct BrowseArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub developer: Option<String>,
    #[arg(long)]
    pub engine: Option<String>,
    #[arg(long)]
    pub platform: Option<String>,
    #[arg(long, alias = "category")]
    pub genre: Option<String>,
    #[arg(long, alias = "release-year")]
    pub year: Option<String>,
    /// title, release_date, total_options_count, developer, publisher, engine
    #[arg(long)]
    pub sort: Option<String>,
    /// asc or desc
    #[arg(long)]
    pub order: Option<String>,
    #[arg(long)]
    pub page: Option<String>,
    #[arg(long)]
    pub limit: Option<String>,
    #[arg(long)]
    pub has_options: Option<String>,
    #[arg(long)]
    pub show_all: Option<String>,
    /// has-options, no-options, many-options, few-options, performance, graphics
    #[arg(long, alias = "options-filter")]
    pub options: Option<String>,
    #[arg(long)]
    pub min_options_count: Option<String>,
    #[arg(long)]
    pub max_options_count: Option<String>,
}

impl From<BrowseArgs> for CatalogQuery {
    fn from(args: BrowseArgs) -> Self {
        Self {
            search: args.search,
            developer: args.developer,
            engine: args.engine,
            platform: args.platform,
            genre: args.genre,
            year: args.year,
            sort: args.sort,
            order: args.order,
            page: args.page,
            limit: args.limit,
            has_options: args.has_options,
            show_all: args.show_all,
            options: args.options,
            min_options_count: args.min_options_count,
            max_options_count: args.max_options_count,
        }
    }
}
