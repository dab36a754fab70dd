use soroban_sdk::contracterror;
use thiserror::Error;

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GameErrorCode {
    Unauthorized = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,
    InvalidScore = 4,
    AlreadyRewarded = 5,
    InvalidPeriod = 6,
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Unauthorized access")]
    Unauthorized,
    #[error("Game already initialized")]
    AlreadyInitialized,
    #[error("Game not initialized")]
    NotInitialized,
    #[error("Trophy registry not initialized")]
    TrophyRegistryNotInitialized,
    #[error("Trophy registry is administered by another account")]
    TrophyRegistryAdminMismatch,
    #[error("Invalid score: {score}")]
    InvalidScore { score: u64 },
    #[error("Period starting at {window_start} already rewarded (last boundary {last_reward_boundary})")]
    AlreadyRewarded {
        window_start: u64,
        last_reward_boundary: u64,
    },
    #[error("Invalid award period: {period}")]
    InvalidPeriod { period: u64 },
}

impl From<GameError> for GameErrorCode {
    fn from(err: GameError) -> Self {
        match err {
            GameError::Unauthorized | GameError::TrophyRegistryAdminMismatch => {
                GameErrorCode::Unauthorized
            }
            GameError::AlreadyInitialized => GameErrorCode::AlreadyInitialized,
            GameError::NotInitialized | GameError::TrophyRegistryNotInitialized => {
                GameErrorCode::NotInitialized
            }
            GameError::InvalidScore { .. } => GameErrorCode::InvalidScore,
            GameError::AlreadyRewarded { .. } => GameErrorCode::AlreadyRewarded,
            GameError::InvalidPeriod { .. } => GameErrorCode::InvalidPeriod,
        }
    }
}
