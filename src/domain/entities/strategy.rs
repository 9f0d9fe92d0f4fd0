use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

/// Which slice of the catalog a request sees, by presence of launch options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    ShowAll,
    OptionsOnly,
    NoOptionsOnly,
    DefaultOptionsFirst,
}

impl Strategy {
    /// Listings that hide zero-option games and sort by option count by default.
    #[must_use]
    pub const fn is_options_first(self) -> bool {
        matches!(self, Self::OptionsOnly | Self::DefaultOptionsFirst)
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            Self::ShowAll => "showAll",
            Self::OptionsOnly => "optionsOnly",
            Self::NoOptionsOnly => "noOptionsOnly",
            Self::DefaultOptionsFirst => "defaultOptionsFirst",
        };
        f.write_str(name)
    }
}

/// The discrete `options` request selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionsSelector {
    HasOptions,
    NoOptions,
    ManyOptions,
    FewOptions,
    Performance,
    Graphics,
}

impl FromStr for OptionsSelector {
    type Err = ();

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "has-options" => Ok(Self::HasOptions),
            "no-options" => Ok(Self::NoOptions),
            "many-options" => Ok(Self::ManyOptions),
            "few-options" => Ok(Self::FewOptions),
            "performance" => Ok(Self::Performance),
            "graphics" => Ok(Self::Graphics),
            _ => Err(()),
        }
    }
}

/// Keyword families used to tag games by the kind of launch options they carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionCategory {
    Performance,
    Graphics,
}

impl OptionCategory {
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Performance => &[
                "fps", "perf", "threads", "high", "nojoy", "cpu", "malloc", "heapsize",
            ],
            Self::Graphics => &[
                "dx", "vulkan", "opengl", "gl", "window", "fullscreen", "res", "refresh", "width",
                "height",
            ],
        }
    }
}

/// Constraint on `total_options_count` derived from the resolved strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OptionsPredicate {
    Unconstrained,
    Exactly { count: u32 },
    AtLeast { count: u32 },
    Between { min: u32, max: u32 },
    /// At least one option whose command or description matches the category.
    Tagged { category: OptionCategory },
}

impl OptionsPredicate {
    #[must_use]
    pub const fn has_options() -> Self {
        Self::AtLeast { count: 1 }
    }

    #[must_use]
    pub const fn no_options() -> Self {
        Self::Exactly { count: 0 }
    }

    /// Whether a game with `count` options satisfies the count part of the predicate.
    ///
    /// `Tagged` also requires a keyword match that only the store can answer,
    /// so this only checks that the game has options at all.
    #[must_use]
    pub const fn admits(self, count: u32) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::Exactly { count: exact } => count == exact,
            Self::AtLeast { count: min } => count >= min,
            Self::Between { min, max } => count >= min && count <= max,
            Self::Tagged { .. } => count > 0,
        }
    }
}

/// Output of strategy resolution: the reported strategy and the predicate it implies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrategyResolution {
    pub strategy: Strategy,
    pub predicate: OptionsPredicate,
    pub selector: Option<OptionsSelector>,
}
