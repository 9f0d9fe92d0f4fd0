use crate::domain::entities::game::{Game, LaunchOption, NewGame};
use crate::infrastructure::database::entities::{GameDto, LaunchOptionDto, NewGameDto};

pub trait ToI64 {
    fn to_i64_or_zero(self) -> i64;
}

pub trait ToU64 {
    fn to_u64_or_zero(self) -> u64;
}

pub trait ToI32 {
    fn to_i32_or_max(self) -> i32;
}

pub trait ToU32 {
    fn to_u32_or_zero(self) -> u32;
}

impl ToI64 for u64 {
    fn to_i64_or_zero(self) -> i64 {
        i64::try_from(self).unwrap_or(0)
    }
}

impl ToI64 for u32 {
    fn to_i64_or_zero(self) -> i64 {
        i64::from(self)
    }
}

impl ToU64 for i64 {
    fn to_u64_or_zero(self) -> u64 {
        u64::try_from(self).unwrap_or(0)
    }
}

// Option counts above i32::MAX cannot be stored, so saturating keeps
// comparisons against the column correct.
impl ToI32 for u32 {
    fn to_i32_or_max(self) -> i32 {
        i32::try_from(self).unwrap_or(i32::MAX)
    }
}

impl ToU32 for i32 {
    fn to_u32_or_zero(self) -> u32 {
        u32::try_from(self).unwrap_or(0)
    }
}

impl From<GameDto> for Game {
    fn from(dto: GameDto) -> Self {
        Self {
            app_id: dto.app_id,
            title: dto.title,
            developer: dto.developer,
            publisher: dto.publisher,
            engine: dto.engine,
            platform: Some(dto.platform).filter(|platform| !platform.is_empty()),
            release_date: dto.release_date.filter(|date| !date.trim().is_empty()),
            total_options_count: dto.total_options_count.to_u32_or_zero(),
        }
    }
}

impl From<LaunchOptionDto> for LaunchOption {
    fn from(dto: LaunchOptionDto) -> Self {
        Self {
            id: dto.id,
            command: dto.command,
            description: dto.description,
            source: dto.source,
            verified: dto.verified,
            upvotes: dto.upvotes.to_u32_or_zero(),
            downvotes: dto.downvotes.to_u32_or_zero(),
        }
    }
}

impl From<NewGame> for NewGameDto {
    fn from(game: NewGame) -> Self {
        Self {
            app_id: game.app_id,
            title: game.title,
            developer: game.developer,
            publisher: game.publisher,
            engine: game.engine,
            platform: game.platform.unwrap_or_default(),
            release_date: game.release_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_numbers_fall_back() {
        assert_eq!(u64::MAX.to_i64_or_zero(), 0);
        assert_eq!((-3_i64).to_u64_or_zero(), 0);
        assert_eq!(u32::MAX.to_i32_or_max(), i32::MAX);
        assert_eq!((-1_i32).to_u32_or_zero(), 0);
    }

    #[test]
    fn empty_platform_and_date_become_absent() {
        let game = Game::from(GameDto {
            app_id: 70,
            title: "Half-Life".to_string(),
            developer: "Valve".to_string(),
            publisher: "Valve".to_string(),
            engine: "GoldSrc".to_string(),
            platform: String::new(),
            release_date: Some(" ".to_string()),
            total_options_count: 3,
        });
        assert_eq!(game.platform, None);
        assert_eq!(game.release_date, None);
        assert_eq!(game.total_options_count, 3);
    }
}
