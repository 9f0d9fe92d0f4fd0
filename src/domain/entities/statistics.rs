use serde::Serialize;

/// Counts of games with and without launch options.
///
/// Always satisfies `with_options + without_options == total`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub with_options: u64,
    pub without_options: u64,
    pub total: u64,
    pub percentage_with_options: u32,
}

impl Statistics {
    /// Builds statistics from two independent counts.
    ///
    /// The counts come from separate queries, so `with_options` is clamped to
    /// `total` in case rows changed in between.
    #[must_use]
    pub fn from_counts(with_options: u64, total: u64) -> Self {
        let with_options = with_options.min(total);
        Self {
            with_options,
            without_options: total - with_options,
            total,
            percentage_with_options: rounded_percentage(with_options, total),
        }
    }
}

/// `round(100 * part / whole)`, half away from zero, 0 for an empty whole.
fn rounded_percentage(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = u128::from(part);
    let whole = u128::from(whole);
    let rounded = (200 * part + whole) / (2 * whole);
    u32::try_from(rounded).unwrap_or(100)
}
