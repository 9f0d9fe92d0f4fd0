use crate::config::constants::MANY_OPTIONS_THRESHOLD;
use crate::domain::entities::statistics::Statistics;
use crate::domain::entities::strategy::OptionsPredicate;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FacetCount {
    pub value: String,
    pub count: u64,
}

impl FacetCount {
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Free-text columns that get a value facet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FacetField {
    Developer,
    Engine,
    Publisher,
}

impl FacetField {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Developer => "developers",
            Self::Engine => "engines",
            Self::Publisher => "publishers",
        }
    }
}

/// Fixed options-count buckets shown as a facet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionsBucket {
    None,
    Few,
    Many,
}

impl OptionsBucket {
    pub const ALL: [Self; 3] = [Self::None, Self::Few, Self::Many];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Few => "1-4",
            Self::Many => "5+",
        }
    }

    #[must_use]
    pub const fn predicate(self) -> OptionsPredicate {
        match self {
            Self::None => OptionsPredicate::Exactly { count: 0 },
            Self::Few => OptionsPredicate::Between {
                min: 1,
                max: MANY_OPTIONS_THRESHOLD - 1,
            },
            Self::Many => OptionsPredicate::AtLeast {
                count: MANY_OPTIONS_THRESHOLD,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsRangeCount {
    pub label: String,
    pub min: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    pub count: u64,
}

impl OptionsRangeCount {
    #[must_use]
    pub fn new(bucket: OptionsBucket, count: u64) -> Self {
        let (min, max) = match bucket.predicate() {
            OptionsPredicate::Exactly { count } => (count, Some(count)),
            OptionsPredicate::Between { min, max } => (min, Some(max)),
            OptionsPredicate::AtLeast { count } => (count, None),
            OptionsPredicate::Unconstrained | OptionsPredicate::Tagged { .. } => (0, None),
        };
        Self {
            label: bucket.label().to_string(),
            min,
            max,
            count,
        }
    }
}

/// Available filter values with counts, recomputed for every request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetDocument {
    pub developers: Vec<FacetCount>,
    pub engines: Vec<FacetCount>,
    pub publishers: Vec<FacetCount>,
    pub genres: Vec<FacetCount>,
    pub options_ranges: Vec<OptionsRangeCount>,
    pub release_years: Vec<FacetCount>,
    /// Catalog-wide figures, independent of the request's filters.
    pub stats: Statistics,
}
