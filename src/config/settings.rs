use crate::config::constants::{FACET_SAMPLE_WINDOW, FACET_TOP_N, YEAR_FACET_CAP};
use chrono::{Datelike, Local};

/// Tunables for facet computation and date handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineSettings {
    pub facet_sample_window: u32,
    pub facet_top_n: usize,
    pub year_facet_cap: usize,
    /// Fixed "current year"; the local clock is used when unset.
    pub current_year: Option<i32>,
}

impl EngineSettings {
    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Local::now().year())
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            facet_sample_window: FACET_SAMPLE_WINDOW,
            facet_top_n: FACET_TOP_N,
            year_facet_cap: YEAR_FACET_CAP,
            current_year: None,
        }
    }
}
