use std::fmt::{Display, Formatter, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Genre {
    Action,
    Adventure,
    Rpg,
    Strategy,
    Simulation,
    Sports,
    Racing,
    Puzzle,
    Horror,
    Survival,
    Shooter,
    Indie,
    Mmorpg,
    Platformer,
}

impl Genre {
    pub const ALL: [Self; 14] = [
        Self::Action,
        Self::Adventure,
        Self::Rpg,
        Self::Strategy,
        Self::Simulation,
        Self::Sports,
        Self::Racing,
        Self::Puzzle,
        Self::Horror,
        Self::Survival,
        Self::Shooter,
        Self::Indie,
        Self::Mmorpg,
        Self::Platformer,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Rpg => "RPG",
            Self::Strategy => "Strategy",
            Self::Simulation => "Simulation",
            Self::Sports => "Sports",
            Self::Racing => "Racing",
            Self::Puzzle => "Puzzle",
            Self::Horror => "Horror",
            Self::Survival => "Survival",
            Self::Shooter => "Shooter",
            Self::Indie => "Indie",
            Self::Mmorpg => "MMORPG",
            Self::Platformer => "Platformer",
        }
    }

    /// Case-insensitive lookup by label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|genre| genre.label().eq_ignore_ascii_case(label))
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}
