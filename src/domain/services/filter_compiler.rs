use crate::config::constants::DEFAULT_PAGE_SIZE;
use crate::domain::entities::filter_criteria::FilterCriteria;
use crate::domain::entities::genre::Genre;
use crate::domain::entities::pagination::PageRequest;
use crate::domain::entities::predicate::{CompiledFilter, Predicate, TextField};
use crate::domain::entities::query_params::{CatalogQuery, non_blank, parse_flag};
use crate::domain::entities::strategy::{OptionsPredicate, OptionsSelector};
use crate::domain::errors::validation_error::ValidationError;
use crate::domain::services::sort_resolver::resolve_sort;
use crate::domain::services::strategy_resolver::resolve_strategy;
use crate::domain::services::year_extractor::YearExtractor;
use tracing::warn;

/// Normalizes raw request parameters into [`FilterCriteria`].
///
/// Never fails: malformed values are replaced by defaults and recorded in
/// [`FilterCriteria::corrections`].
#[must_use]
pub fn build_criteria(query: &CatalogQuery, current_year: i32) -> FilterCriteria {
    let mut corrections = Vec::new();

    let has_options = flag(query.has_options.as_deref(), "hasOptions", &mut corrections);
    let show_all = flag(query.show_all.as_deref(), "showAll", &mut corrections);
    let selector = non_blank(query.options.as_deref()).and_then(|given| {
        given.parse::<OptionsSelector>().ok().or_else(|| {
            corrections.push(ValidationError::OptionsSelector { given });
            None
        })
    });
    let resolution = resolve_strategy(has_options, show_all, selector);

    let sort = resolve_sort(
        query.sort.as_deref(),
        query.order.as_deref(),
        resolution.strategy,
        &mut corrections,
    );

    let years = YearExtractor::new(current_year);
    let year = non_blank(query.year.as_deref()).and_then(|given| {
        years.parse_filter(&given).or_else(|| {
            corrections.push(ValidationError::Year {
                given,
                min: years.min_year(),
                max: years.max_year(),
            });
            None
        })
    });

    let genre = non_blank(query.genre.as_deref()).and_then(|given| {
        Genre::from_label(&given).or_else(|| {
            corrections.push(ValidationError::Genre { given });
            None
        })
    });

    let criteria = FilterCriteria {
        search: non_blank(query.search.as_deref()),
        developer: non_blank(query.developer.as_deref()),
        engine: non_blank(query.engine.as_deref()),
        platform: non_blank(query.platform.as_deref()),
        genre,
        year,
        min_options_count: options_count(
            query.min_options_count.as_deref(),
            "minOptionsCount",
            &mut corrections,
        ),
        max_options_count: options_count(
            query.max_options_count.as_deref(),
            "maxOptionsCount",
            &mut corrections,
        ),
        strategy: resolution.strategy,
        options_predicate: resolution.predicate,
        options_selector: resolution.selector,
        sort,
        page: page_request(query.page.as_deref(), query.limit.as_deref(), &mut corrections),
        corrections,
    };

    for correction in &criteria.corrections {
        warn!(%correction, "corrected catalog request parameter");
    }

    criteria
}

/// Translates criteria into the conjunctive predicate list run against the store.
///
/// Genre is deliberately absent: it only narrows facets.
#[must_use]
pub fn compile(criteria: &FilterCriteria) -> CompiledFilter {
    let mut predicates = Vec::new();

    if let Some(term) = &criteria.search {
        predicates.push(Predicate::Search { term: term.clone() });
    }

    let text_filters = [
        (TextField::Developer, &criteria.developer),
        (TextField::Engine, &criteria.engine),
        (TextField::Platform, &criteria.platform),
    ];
    for (field, value) in text_filters {
        if let Some(needle) = value {
            predicates.push(Predicate::Contains {
                field,
                needle: needle.clone(),
            });
        }
    }

    if criteria.options_predicate != OptionsPredicate::Unconstrained {
        predicates.push(Predicate::OptionsCount {
            predicate: criteria.options_predicate,
        });
    }
    if let Some(count) = criteria.min_options_count {
        predicates.push(Predicate::MinOptions { count });
    }
    if let Some(count) = criteria.max_options_count {
        predicates.push(Predicate::MaxOptions { count });
    }

    if let Some(year) = criteria.year {
        predicates.push(Predicate::ReleaseYear { year });
    }

    CompiledFilter::new(predicates)
}

fn flag(
    value: Option<&str>,
    name: &'static str,
    corrections: &mut Vec<ValidationError>,
) -> Option<bool> {
    let given = non_blank(value)?;
    let parsed = parse_flag(Some(&given));
    if parsed.is_none() {
        corrections.push(ValidationError::Flag { name, given });
    }
    parsed
}

fn options_count(
    value: Option<&str>,
    name: &'static str,
    corrections: &mut Vec<ValidationError>,
) -> Option<u32> {
    let given = non_blank(value)?;
    given.parse::<u32>().ok().or_else(|| {
        corrections.push(ValidationError::OptionsCount { name, given });
        None
    })
}

fn page_request(
    page: Option<&str>,
    limit: Option<&str>,
    corrections: &mut Vec<ValidationError>,
) -> PageRequest {
    let page = non_blank(page).map_or(1, |given| match given.parse::<i64>() {
        Ok(value) if value >= 1 => u32::try_from(value).unwrap_or(u32::MAX),
        _ => {
            corrections.push(ValidationError::Page { given, applied: 1 });
            1
        }
    });

    let limit = non_blank(limit).map_or(DEFAULT_PAGE_SIZE, |given| match given.parse::<i64>() {
        Ok(value) => {
            let request = PageRequest::new(1, u32::try_from(value.max(0)).unwrap_or(u32::MAX));
            if i64::from(request.page_size()) != value {
                corrections.push(ValidationError::Limit {
                    given,
                    applied: request.page_size(),
                });
            }
            request.page_size()
        }
        Err(_) => {
            corrections.push(ValidationError::Limit {
                given,
                applied: DEFAULT_PAGE_SIZE,
            });
            DEFAULT_PAGE_SIZE
        }
    });

    PageRequest::new(page, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::sort::{SortColumn, SortDirection, SortSpec};
    use crate::domain::entities::strategy::Strategy;

    const YEAR: i32 = 2026;

    fn query() -> CatalogQuery {
        CatalogQuery::default()
    }

    #[test]
    fn empty_request_is_options_first() {
        let criteria = build_criteria(&query(), YEAR);
        assert_eq!(criteria.strategy, Strategy::DefaultOptionsFirst);
        assert_eq!(criteria.options_predicate, OptionsPredicate::has_options());
        assert_eq!(
            criteria.sort,
            SortSpec::new(SortColumn::TotalOptionsCount, SortDirection::Desc)
        );
        assert_eq!(criteria.page, PageRequest::new(1, DEFAULT_PAGE_SIZE));
        assert!(criteria.corrections.is_empty());

        assert_eq!(
            compile(&criteria).predicates(),
            &[Predicate::OptionsCount {
                predicate: OptionsPredicate::has_options()
            }]
        );
    }

    #[test]
    fn show_all_compiles_no_options_constraint() {
        let criteria = build_criteria(
            &CatalogQuery {
                show_all: Some("true".to_string()),
                has_options: Some("false".to_string()),
                ..query()
            },
            YEAR,
        );
        assert_eq!(criteria.strategy, Strategy::ShowAll);
        assert!(compile(&criteria).is_empty());
    }

    #[test]
    fn blank_text_filters_are_absent() {
        let criteria = build_criteria(
            &CatalogQuery {
                search: Some("  ".to_string()),
                developer: Some("\t".to_string()),
                engine: Some(" Source ".to_string()),
                show_all: Some("true".to_string()),
                ..query()
            },
            YEAR,
        );
        assert_eq!(
            compile(&criteria).predicates(),
            &[Predicate::Contains {
                field: TextField::Engine,
                needle: "Source".to_string()
            }]
        );
    }

    #[test]
    fn explicit_bounds_compose_with_strategy() {
        let criteria = build_criteria(
            &CatalogQuery {
                has_options: Some("true".to_string()),
                min_options_count: Some("2".to_string()),
                max_options_count: Some("8".to_string()),
                ..query()
            },
            YEAR,
        );
        let compiled = compile(&criteria);
        assert_eq!(compiled.predicates().len(), 3);
        assert!(compiled.predicates().contains(&Predicate::MinOptions { count: 2 }));
        assert!(compiled.predicates().contains(&Predicate::MaxOptions { count: 8 }));
    }

    #[test]
    fn genre_never_becomes_a_row_predicate() {
        let criteria = build_criteria(
            &CatalogQuery {
                genre: Some("horror".to_string()),
                show_all: Some("true".to_string()),
                ..query()
            },
            YEAR,
        );
        assert_eq!(criteria.genre, Some(Genre::Horror));
        assert!(compile(&criteria).is_empty());
    }

    #[test]
    fn invalid_inputs_are_corrected_not_rejected() {
        let criteria = build_criteria(
            &CatalogQuery {
                page: Some("-4".to_string()),
                limit: Some("500".to_string()),
                year: Some("1850".to_string()),
                min_options_count: Some("lots".to_string()),
                has_options: Some("perhaps".to_string()),
                options: Some("everything".to_string()),
                genre: Some("Cooking".to_string()),
                ..query()
            },
            YEAR,
        );

        assert_eq!(criteria.page.page(), 1);
        assert_eq!(criteria.page.page_size(), 100);
        assert_eq!(criteria.year, None);
        assert_eq!(criteria.min_options_count, None);
        assert_eq!(criteria.strategy, Strategy::DefaultOptionsFirst);
        assert_eq!(criteria.genre, None);
        assert_eq!(criteria.corrections.len(), 7);
        assert!(criteria.corrections.contains(&ValidationError::Limit {
            given: "500".to_string(),
            applied: 100
        }));
    }

    #[test]
    fn limit_below_one_is_clamped() {
        let criteria = build_criteria(
            &CatalogQuery {
                limit: Some("0".to_string()),
                ..query()
            },
            YEAR,
        );
        assert_eq!(criteria.page.page_size(), 1);
        assert_eq!(criteria.corrections.len(), 1);
    }

    #[test]
    fn valid_year_compiles_to_a_year_predicate() {
        let criteria = build_criteria(
            &CatalogQuery {
                year: Some("2011".to_string()),
                ..query()
            },
            YEAR,
        );
        assert!(
            compile(&criteria)
                .predicates()
                .contains(&Predicate::ReleaseYear { year: 2011 })
        );
    }
}
