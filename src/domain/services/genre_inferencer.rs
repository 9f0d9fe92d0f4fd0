use crate::domain::entities::facets::FacetCount;
use crate::domain::entities::genre::Genre;
use rayon::prelude::*;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// Derives genres from a game title. There is no genre column in the store,
/// so this is a heuristic and may return zero or several genres.
pub trait GenreInferencer: Send + Sync {
    fn infer_genres(&self, title: &str) -> BTreeSet<Genre>;
}

static TITLE_RULES: LazyLock<Vec<(Genre, Regex)>> = LazyLock::new(|| {
    [
        (
            Genre::Action,
            r"\b(action|combat|fight(ing|er)?|battle|warfare|assault|strike|hitman|devil may cry)\b",
        ),
        (
            Genre::Adventure,
            r"\b(adventure|quest|journey|odyssey|legend|tales?|uncharted|tomb raider)\b",
        ),
        (
            Genre::Rpg,
            r"\b(rpg|role.?playing|dragon|souls|fantasy|elder scrolls|witcher|fallout|baldur'?s gate|mass effect)\b",
        ),
        (
            Genre::Strategy,
            r"\b(strategy|tactics|civilization|empires?|total war|command|conquer|commander|kingdoms?|crusader kings|stellaris)\b",
        ),
        (
            Genre::Simulation,
            r"\b(simulator|simulation|sim|tycoon|farming|flight|truck|cities|planet coaster)\b",
        ),
        (
            Genre::Sports,
            r"\b(fifa|nba|nfl|nhl|pga|football|soccer|basketball|golf|tennis|sports?|rocket league)\b",
        ),
        (
            Genre::Racing,
            r"\b(racing|race|racer|rally|kart|forza|need for speed|drift|motorsport|grid|dirt)\b",
        ),
        (
            Genre::Puzzle,
            r"\b(puzzle|portal|tetris|sokoban|riddle|the witness|talos)\b",
        ),
        (
            Genre::Horror,
            r"\b(horror|evil|dead|zombies?|nightmare|fear|silent hill|outlast|amnesia|phasmophobia)\b",
        ),
        (
            Genre::Survival,
            r"\b(survival|survive|survivor|rust|the forest|ark|dayz|subnautica|don'?t starve|valheim)\b",
        ),
        (
            Genre::Shooter,
            r"\b(shooter|counter.?strike|call of duty|battlefield|doom|halo|quake|sniper|half.?life|borderlands|overwatch)\b",
        ),
        (
            Genre::Indie,
            r"\b(indie|pixel|retro|roguelike|roguelite|undertale|stardew)\b",
        ),
        (
            Genre::Mmorpg,
            r"\b(mmo|mmorpg|world of warcraft|guild wars|final fantasy xiv|runescape|elder scrolls online|lost ark)\b",
        ),
        (
            Genre::Platformer,
            r"\b(platformer|jump|mario|sonic|celeste|hollow knight|ori|rayman|cuphead)\b",
        ),
    ]
    .into_iter()
    .map(|(genre, pattern)| {
        let regex = Regex::new(&format!("(?i){pattern}")).expect("genre pattern is valid");
        (genre, regex)
    })
    .collect()
});

/// Fixed table of title patterns.
#[derive(Clone, Copy, Debug, Default)]
pub struct TitlePatternInferencer;

impl GenreInferencer for TitlePatternInferencer {
    fn infer_genres(&self, title: &str) -> BTreeSet<Genre> {
        TITLE_RULES
            .iter()
            .filter(|(_, regex)| regex.is_match(title))
            .map(|(genre, _)| *genre)
            .collect()
    }
}

/// Per-genre occurrence counts over `titles`, most frequent first.
///
/// Titles can count toward several genres or none, so the counts do not
/// partition the input.
pub fn count_genres(inferencer: &dyn GenreInferencer, titles: &[String]) -> Vec<FacetCount> {
    let counts = titles
        .par_iter()
        .fold(HashMap::new, |mut counts: HashMap<Genre, u64>, title| {
            for genre in inferencer.infer_genres(title) {
                *counts.entry(genre).or_default() += 1;
            }
            counts
        })
        .reduce(HashMap::new, |mut left, right| {
            for (genre, count) in right {
                *left.entry(genre).or_default() += count;
            }
            left
        });

    let mut genres: Vec<(Genre, u64)> = counts.into_iter().collect();
    genres.sort_by(|(a_genre, a_count), (b_genre, b_count)| {
        b_count.cmp(a_count).then(a_genre.cmp(b_genre))
    });
    genres
        .into_iter()
        .map(|(genre, count)| FacetCount::new(genre.label(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres(title: &str) -> BTreeSet<Genre> {
        TitlePatternInferencer.infer_genres(title)
    }

    #[test]
    fn titles_can_match_several_genres() {
        let found = genres("Dead Island 2: Zombie Survival");
        assert!(found.contains(&Genre::Horror));
        assert!(found.contains(&Genre::Survival));
    }

    #[test]
    fn titles_can_match_nothing() {
        assert!(genres("Untitled Goose").is_empty());
        assert!(genres("").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_and_word_bounded() {
        assert!(genres("PORTAL 2").contains(&Genre::Puzzle));
        assert!(genres("Counter-Strike 2").contains(&Genre::Shooter));
        // "sim" must not fire inside an unrelated word.
        assert!(!genres("Simple Things").contains(&Genre::Simulation));
    }

    #[test]
    fn counts_are_sorted_descending() {
        let titles = vec![
            "Portal".to_string(),
            "Portal 2".to_string(),
            "DOOM Eternal".to_string(),
            "Nothing Here".to_string(),
        ];
        let counts = count_genres(&TitlePatternInferencer, &titles);
        assert_eq!(counts[0], FacetCount::new("Puzzle", 2));
        assert_eq!(counts[1], FacetCount::new("Shooter", 1));
        assert_eq!(counts.len(), 2);
    }
}
