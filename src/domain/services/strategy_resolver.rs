use crate::config::constants::MANY_OPTIONS_THRESHOLD;
use crate::domain::entities::strategy::{
    OptionCategory, OptionsPredicate, OptionsSelector, Strategy, StrategyResolution,
};

/// Reduces the overlapping options flags to one strategy and predicate.
///
/// Precedence, first match wins: the discrete selector, then `show_all`,
/// then `has_options`, then the options-first default.
#[must_use]
pub const fn resolve_strategy(
    has_options: Option<bool>,
    show_all: Option<bool>,
    selector: Option<OptionsSelector>,
) -> StrategyResolution {
    if let Some(selector) = selector {
        return resolve_selector(selector);
    }

    let (strategy, predicate) = match (show_all, has_options) {
        (Some(true), _) => (Strategy::ShowAll, OptionsPredicate::Unconstrained),
        (_, Some(true)) => (Strategy::OptionsOnly, OptionsPredicate::has_options()),
        (_, Some(false)) => (Strategy::NoOptionsOnly, OptionsPredicate::no_options()),
        (_, None) => (
            Strategy::DefaultOptionsFirst,
            OptionsPredicate::has_options(),
        ),
    };

    StrategyResolution {
        strategy,
        predicate,
        selector: None,
    }
}

const fn resolve_selector(selector: OptionsSelector) -> StrategyResolution {
    let predicate = match selector {
        OptionsSelector::HasOptions => OptionsPredicate::has_options(),
        OptionsSelector::NoOptions => OptionsPredicate::no_options(),
        OptionsSelector::ManyOptions => OptionsPredicate::AtLeast {
            count: MANY_OPTIONS_THRESHOLD,
        },
        OptionsSelector::FewOptions => OptionsPredicate::Between {
            min: 1,
            max: MANY_OPTIONS_THRESHOLD - 1,
        },
        OptionsSelector::Performance => OptionsPredicate::Tagged {
            category: OptionCategory::Performance,
        },
        OptionsSelector::Graphics => OptionsPredicate::Tagged {
            category: OptionCategory::Graphics,
        },
    };

    let strategy = match selector {
        OptionsSelector::NoOptions => Strategy::NoOptionsOnly,
        _ => Strategy::OptionsOnly,
    };

    StrategyResolution {
        strategy,
        predicate,
        selector: Some(selector),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAGS: [Option<bool>; 3] = [None, Some(true), Some(false)];
    const SELECTORS: [Option<OptionsSelector>; 7] = [
        None,
        Some(OptionsSelector::HasOptions),
        Some(OptionsSelector::NoOptions),
        Some(OptionsSelector::ManyOptions),
        Some(OptionsSelector::FewOptions),
        Some(OptionsSelector::Performance),
        Some(OptionsSelector::Graphics),
    ];

    /// Independent statement of the precedence rules.
    fn expected_strategy(
        has_options: Option<bool>,
        show_all: Option<bool>,
        selector: Option<OptionsSelector>,
    ) -> Strategy {
        if let Some(selector) = selector {
            return if selector == OptionsSelector::NoOptions {
                Strategy::NoOptionsOnly
            } else {
                Strategy::OptionsOnly
            };
        }
        if show_all == Some(true) {
            return Strategy::ShowAll;
        }
        match has_options {
            Some(true) => Strategy::OptionsOnly,
            Some(false) => Strategy::NoOptionsOnly,
            None => Strategy::DefaultOptionsFirst,
        }
    }

    #[test]
    fn precedence_is_total_and_deterministic() {
        for has_options in FLAGS {
            for show_all in FLAGS {
                for selector in SELECTORS {
                    let first = resolve_strategy(has_options, show_all, selector);
                    let second = resolve_strategy(has_options, show_all, selector);
                    assert_eq!(first, second);
                    assert_eq!(
                        first.strategy,
                        expected_strategy(has_options, show_all, selector),
                        "has_options={has_options:?} show_all={show_all:?} selector={selector:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn show_all_never_constrains_options() {
        for has_options in FLAGS {
            let resolution = resolve_strategy(has_options, Some(true), None);
            assert_eq!(resolution.strategy, Strategy::ShowAll);
            assert_eq!(resolution.predicate, OptionsPredicate::Unconstrained);
        }
    }

    #[test]
    fn default_behaves_like_options_only() {
        let default = resolve_strategy(None, None, None);
        let explicit = resolve_strategy(Some(true), None, None);
        assert_eq!(default.strategy, Strategy::DefaultOptionsFirst);
        assert_eq!(default.predicate, explicit.predicate);
    }

    #[test]
    fn show_all_false_falls_through_to_has_options() {
        let resolution = resolve_strategy(Some(false), Some(false), None);
        assert_eq!(resolution.strategy, Strategy::NoOptionsOnly);
        assert_eq!(resolution.predicate, OptionsPredicate::no_options());
    }

    #[test]
    fn selector_bypasses_flags() {
        let resolution =
            resolve_strategy(Some(false), Some(true), Some(OptionsSelector::ManyOptions));
        assert_eq!(resolution.strategy, Strategy::OptionsOnly);
        assert_eq!(resolution.predicate, OptionsPredicate::AtLeast { count: 5 });
        assert_eq!(resolution.selector, Some(OptionsSelector::ManyOptions));

        let few = resolve_strategy(None, None, Some(OptionsSelector::FewOptions));
        assert_eq!(few.predicate, OptionsPredicate::Between { min: 1, max: 4 });
    }
}
