use serde::Serialize;

/// Columns a listing may be ordered by. Nothing outside this list ever
/// reaches the store as a sort column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Title,
    /// Ordered by the year extracted from the raw date, then the raw text.
    ReleaseDate,
    TotalOptionsCount,
    Developer,
    Publisher,
    Engine,
}

impl SortColumn {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::ReleaseDate => "release_date",
            Self::TotalOptionsCount => "total_options_count",
            Self::Developer => "developer",
            Self::Publisher => "publisher",
            Self::Engine => "engine",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    #[must_use]
    pub const fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    #[must_use]
    pub const fn title_asc() -> Self {
        Self::new(SortColumn::Title, SortDirection::Asc)
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::title_asc()
    }
}
