use serde::Deserialize;

/// Raw request parameters, exactly as a client sent them.
///
/// Every value stays a string here; [`build_criteria`] parses and corrects
/// them. Historical parameter names are accepted as serde aliases.
///
/// [`build_criteria`]: crate::domain::services::filter_compiler::build_criteria
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub developer: Option<String>,
    pub engine: Option<String>,
    pub platform: Option<String>,
    #[serde(alias = "category")]
    pub genre: Option<String>,
    #[serde(alias = "releaseYear")]
    pub year: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub has_options: Option<String>,
    pub show_all: Option<String>,
    #[serde(alias = "optionsFilter")]
    pub options: Option<String>,
    pub min_options_count: Option<String>,
    pub max_options_count: Option<String>,
}

/// Parses a three-valued flag. Anything unrecognized is treated as absent.
#[must_use]
pub fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Trims a value and drops it when nothing is left.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn historical_names_map_to_the_same_fields() {
        let query: CatalogQuery = serde_json::from_value(json!({
            "category": "Horror",
            "releaseYear": "2015",
            "optionsFilter": "many-options",
            "hasOptions": "false",
        }))
        .unwrap();

        assert_eq!(query.genre.as_deref(), Some("Horror"));
        assert_eq!(query.year.as_deref(), Some("2015"));
        assert_eq!(query.options.as_deref(), Some("many-options"));
        assert_eq!(query.has_options.as_deref(), Some("false"));
    }

    #[test]
    fn flags_are_three_valued() {
        assert_eq!(parse_flag(Some("TRUE")), Some(true));
        assert_eq!(parse_flag(Some(" 0 ")), Some(false));
        assert_eq!(parse_flag(Some("maybe")), None);
        assert_eq!(parse_flag(None), None);
    }

    #[test]
    fn blank_values_are_absent() {
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some(" Valve ")), Some("Valve".to_string()));
    }
}
