//! Translation of domain predicates into boxed diesel queries over `games`.

use crate::domain::entities::predicate::{CompiledFilter, Predicate, TextField};
use crate::domain::entities::sort::{SortColumn, SortDirection, SortSpec};
use crate::domain::entities::strategy::{OptionCategory, OptionsPredicate};
use crate::domain::errors::repository_error::RepositoryError;
use crate::domain::services::year_extractor::YearExtractor;
use crate::infrastructure::database::conversion::ToI32;
use crate::infrastructure::database::schema::{game_launch_options, games, launch_options};
use diesel::define_sql_function;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Text};
use diesel::sqlite::Sqlite;

pub type GamesQuery = games::BoxedQuery<'static, Sqlite>;

/// Upper bound for years recognised as sort keys.
const SORTABLE_YEAR_CEILING: i32 = 9998;

define_sql_function! {
    fn strftime(format: Text, value: Nullable<Text>) -> Nullable<Text>;
}

define_sql_function! {
    /// `lower()` that folds every Unicode letter, not just ASCII.
    fn lower_unicode(value: Text) -> Text;
}

define_sql_function! {
    /// Release year of a raw `release_date`, whatever its format.
    fn release_year(value: Nullable<Text>) -> Nullable<Integer>;
}

/// Registers the Rust implemented SQL functions on a fresh connection.
///
/// # Errors
///
/// Returns the diesel error if `SQLite` refuses the registration.
pub(super) fn register_functions(conn: &mut SqliteConnection) -> QueryResult<()> {
    lower_unicode_utils::register_impl(conn, |value: String| value.to_lowercase())?;

    let years = YearExtractor::new(SORTABLE_YEAR_CEILING);
    release_year_utils::register_impl(conn, move |value: Option<String>| {
        years.extract(value.as_deref())
    })
}

/// Case-insensitive substring match on a text column. `%` and `_` in the
/// needle are matched literally.
macro_rules! contains {
    ($column:expr, $pattern:expr) => {
        lower_unicode($column).like($pattern).escape('\\')
    };
}

/// Builds a `games` query restricted by every predicate of `filter`.
///
/// Category tagged predicates need a lookup in the options tables first,
/// which is why a connection is required.
pub fn filtered_games(
    filter: &CompiledFilter,
    conn: &mut SqliteConnection,
) -> Result<GamesQuery, RepositoryError> {
    let mut query = games::table.into_boxed();
    for predicate in filter.predicates() {
        query = apply(query, predicate, conn)?;
    }
    Ok(query)
}

fn apply(
    query: GamesQuery,
    predicate: &Predicate,
    conn: &mut SqliteConnection,
) -> Result<GamesQuery, RepositoryError> {
    let query = match predicate {
        Predicate::Search { term } => {
            let pattern = like_pattern(term);
            query.filter(
                contains!(games::title, pattern.clone())
                    .or(contains!(games::developer, pattern.clone()))
                    .or(contains!(games::publisher, pattern)),
            )
        }
        Predicate::Contains { field, needle } => {
            let pattern = like_pattern(needle);
            match field {
                TextField::Developer => query.filter(contains!(games::developer, pattern)),
                TextField::Engine => query.filter(contains!(games::engine, pattern)),
                TextField::Platform => query.filter(contains!(games::platform, pattern)),
                TextField::Publisher => query.filter(contains!(games::publisher, pattern)),
            }
        }
        Predicate::OptionsCount { predicate } => apply_options(query, *predicate, conn)?,
        Predicate::MinOptions { count } => {
            query.filter(games::total_options_count.ge(count.to_i32_or_max()))
        }
        Predicate::MaxOptions { count } => {
            query.filter(games::total_options_count.le(count.to_i32_or_max()))
        }
        Predicate::ReleaseYear { year } => {
            let year = year.to_string();
            query.filter(
                strftime("%Y", games::release_date)
                    .eq(year.clone())
                    .or(games::release_date.like(format!("%{year}%"))),
            )
        }
    };
    Ok(query)
}

fn apply_options(
    query: GamesQuery,
    predicate: OptionsPredicate,
    conn: &mut SqliteConnection,
) -> Result<GamesQuery, RepositoryError> {
    let count = games::total_options_count;
    let query = match predicate {
        OptionsPredicate::Unconstrained => query,
        OptionsPredicate::Exactly { count: exact } => {
            query.filter(count.eq(exact.to_i32_or_max()))
        }
        OptionsPredicate::AtLeast { count: min } => query.filter(count.ge(min.to_i32_or_max())),
        OptionsPredicate::Between { min, max } => {
            query.filter(count.between(min.to_i32_or_max(), max.to_i32_or_max()))
        }
        OptionsPredicate::Tagged { category } => {
            let tagged = tagged_game_ids(category, conn)?;
            query.filter(count.gt(0)).filter(games::app_id.eq_any(tagged))
        }
    };
    Ok(query)
}

/// Ids of games with at least one option whose command or description
/// contains one of the category keywords.
fn tagged_game_ids(
    category: OptionCategory,
    conn: &mut SqliteConnection,
) -> Result<Vec<i64>, RepositoryError> {
    let mut query = game_launch_options::table
        .inner_join(launch_options::table)
        .select(game_launch_options::game_app_id)
        .distinct()
        .into_boxed();

    for keyword in category.keywords() {
        let pattern = like_pattern(keyword);
        query = query
            .or_filter(contains!(launch_options::command, pattern.clone()))
            .or_filter(contains!(launch_options::description, pattern));
    }

    Ok(query.load::<i64>(conn)?)
}

/// Orders by the allow-listed sort column, with title and id as tie breakers
/// so pages never overlap.
///
/// Release dates are ordered by their extracted year first, since the raw
/// values mix formats, then by the raw text.
pub fn sorted(query: GamesQuery, sort: SortSpec) -> GamesQuery {
    macro_rules! order_by {
        ($column:expr) => {
            match sort.direction {
                SortDirection::Asc => query.order_by($column.asc()),
                SortDirection::Desc => query.order_by($column.desc()),
            }
        };
        ($column:expr, $then:expr) => {
            match sort.direction {
                SortDirection::Asc => query.order_by(($column.asc(), $then.asc())),
                SortDirection::Desc => query.order_by(($column.desc(), $then.desc())),
            }
        };
    }

    let query = match sort.column {
        SortColumn::Title => order_by!(games::title),
        SortColumn::ReleaseDate => {
            order_by!(release_year(games::release_date), games::release_date)
        }
        SortColumn::TotalOptionsCount => order_by!(games::total_options_count),
        SortColumn::Developer => order_by!(games::developer),
        SortColumn::Publisher => order_by!(games::publisher),
        SortColumn::Engine => order_by!(games::engine),
    };
    query
        .then_order_by(games::title.asc())
        .then_order_by(games::app_id.asc())
}

/// Lowercased `%term%` with the `LIKE` wildcards escaped by a backslash.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_matches_anywhere() {
        assert_eq!(like_pattern("doom"), "%doom%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%"), r"%100\%%");
        assert_eq!(like_pattern("a_b"), r"%a\_b%");
        assert_eq!(like_pattern(r"c:\games"), r"%c:\\games%");
    }

    #[test]
    fn like_pattern_folds_unicode_case() {
        assert_eq!(like_pattern("ŌKAMI"), "%ōkami%");
    }
}
