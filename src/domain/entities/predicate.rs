use crate::domain::entities::strategy::OptionsPredicate;
use serde::Serialize;

/// Text columns that accept a substring filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    Developer,
    Engine,
    Platform,
    Publisher,
}

/// One store-level condition. A [`CompiledFilter`] is the conjunction of its predicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Predicate {
    /// Case-insensitive substring over title, developer and publisher.
    Search { term: String },
    Contains { field: TextField, needle: String },
    OptionsCount { predicate: OptionsPredicate },
    MinOptions { count: u32 },
    MaxOptions { count: u32 },
    ReleaseYear { year: i32 },
}

impl Predicate {
    const fn constrains_options(&self) -> bool {
        matches!(
            self,
            Self::OptionsCount { .. } | Self::MinOptions { .. } | Self::MaxOptions { .. }
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompiledFilter {
    predicates: Vec<Predicate>,
}

impl CompiledFilter {
    #[must_use]
    pub const fn new(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Returns a copy with `predicate` appended.
    #[must_use]
    pub fn with(&self, predicate: Predicate) -> Self {
        let mut predicates = self.predicates.clone();
        predicates.push(predicate);
        Self { predicates }
    }

    /// The same filter context with every options-count constraint removed.
    #[must_use]
    pub fn without_options_constraints(&self) -> Self {
        Self {
            predicates: self
                .predicates
                .iter()
                .filter(|predicate| !predicate.constrains_options())
                .cloned()
                .collect(),
        }
    }

    /// Only the free-text search predicate, used to pre-scope facet samples.
    #[must_use]
    pub fn search_scope(&self) -> Self {
        Self {
            predicates: self
                .predicates
                .iter()
                .filter(|predicate| matches!(predicate, Predicate::Search { .. }))
                .cloned()
                .collect(),
        }
    }
}
