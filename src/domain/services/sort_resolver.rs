use crate::domain::entities::sort::{SortColumn, SortDirection, SortSpec};
use crate::domain::entities::strategy::Strategy;
use crate::domain::errors::validation_error::ValidationError;

/// Maps a client sort key, legacy aliases included, onto the column allow-list.
#[must_use]
pub fn sort_column(key: &str) -> Option<SortColumn> {
    match key.trim().to_ascii_lowercase().as_str() {
        "title" | "name" | "relevance" => Some(SortColumn::Title),
        "release_date" | "releasedate" | "year" => Some(SortColumn::ReleaseDate),
        "total_options_count" | "totaloptionscount" | "options" => {
            Some(SortColumn::TotalOptionsCount)
        }
        "developer" => Some(SortColumn::Developer),
        "publisher" => Some(SortColumn::Publisher),
        "engine" => Some(SortColumn::Engine),
        _ => None,
    }
}

fn sort_direction(order: &str) -> Option<SortDirection> {
    match order.trim().to_ascii_lowercase().as_str() {
        "asc" => Some(SortDirection::Asc),
        "desc" => Some(SortDirection::Desc),
        _ => None,
    }
}

/// Resolves the listing order.
///
/// Without a sort key, options-first listings sort by option count
/// descending and everything else by title. Unknown keys fall back to
/// `title asc` regardless of `order`.
pub fn resolve_sort(
    key: Option<&str>,
    order: Option<&str>,
    strategy: Strategy,
    corrections: &mut Vec<ValidationError>,
) -> SortSpec {
    let key = key.map(str::trim).filter(|key| !key.is_empty());

    let column = match key {
        None if strategy.is_options_first() => SortColumn::TotalOptionsCount,
        None => SortColumn::Title,
        Some(key) => match sort_column(key) {
            Some(column) => column,
            None => {
                corrections.push(ValidationError::Sort {
                    given: key.to_string(),
                });
                return SortSpec::title_asc();
            }
        },
    };

    let context_default = if column == SortColumn::TotalOptionsCount && strategy.is_options_first()
    {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };

    let order = order.map(str::trim).filter(|order| !order.is_empty());
    let direction = match order {
        None => context_default,
        Some(order) => sort_direction(order).unwrap_or_else(|| {
            corrections.push(ValidationError::Order {
                given: order.to_string(),
            });
            context_default
        }),
    };

    SortSpec::new(column, direction)
}
