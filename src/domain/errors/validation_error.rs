use serde::Serialize;

/// A malformed request value that was replaced by a safe default.
///
/// These are reported back in the response metadata and logged; they never
/// fail a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "parameter", rename_all = "camelCase")]
pub enum ValidationError {
    #[error("page `{given}` is not a positive integer, using {applied}")]
    Page { given: String, applied: u32 },
    #[error("limit `{given}` is outside 1..=100, using {applied}")]
    Limit { given: String, applied: u32 },
    #[error("year `{given}` is not a release year between {min} and {max}, ignored")]
    Year { given: String, min: i32, max: i32 },
    #[error("{name} `{given}` is not a non-negative integer, ignored")]
    OptionsCount { name: &'static str, given: String },
    #[error("{name} `{given}` is not a boolean, treated as absent")]
    Flag { name: &'static str, given: String },
    #[error("options `{given}` is not a known selector, ignored")]
    OptionsSelector { given: String },
    #[error("sort `{given}` is not sortable, using title asc")]
    Sort { given: String },
    #[error("order `{given}` is neither asc nor desc, using the default")]
    Order { given: String },
    #[error("genre `{given}` is not a known genre, ignored")]
    Genre { given: String },
}
