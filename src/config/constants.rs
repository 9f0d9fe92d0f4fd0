use diesel_migrations::{EmbeddedMigrations, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Oldest release year accepted by the year filter and facet.
pub const MIN_RELEASE_YEAR: i32 = 1980;

/// Rows sampled per facet query.
pub const FACET_SAMPLE_WINDOW: u32 = 1000;
/// Values kept per field facet.
pub const FACET_TOP_N: usize = 50;
pub const YEAR_FACET_CAP: usize = 30;

/// Options count from which a game counts as having "many" options.
pub const MANY_OPTIONS_THRESHOLD: u32 = 5;
