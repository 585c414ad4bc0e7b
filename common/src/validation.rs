use crate::models::ScoreSubmission;
use thiserror::Error;

pub const MAX_PLAYER_NAME_LEN: usize = 20;
pub const MAX_SCORE: i64 = 999_999_999;
/// Two hours, in seconds.
pub const MAX_SURVIVAL_TIME: f64 = 7200.0;
pub const MAX_CHARACTER_LEN: usize = 50;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Player name is required")]
    PlayerNameRequired,
    #[error("Player name must be 20 characters or less")]
    PlayerNameTooLong,
    #[error("Player name can only contain letters, numbers, spaces, hyphens and underscores")]
    PlayerNameCharset,
    #[error("Score must be an integer")]
    ScoreNotInteger,
    #[error("Score must be positive")]
    ScoreNotPositive,
    #[error("Score is too high")]
    ScoreTooHigh,
    #[error("Survival time must be positive")]
    SurvivalTimeNotPositive,
    #[error("Survival time cannot exceed 2 hours")]
    SurvivalTimeTooLong,
    #[error("Character name is too long")]
    CharacterTooLong,
    #[error("Limit must be an integer")]
    LimitNotInteger,
    #[error("Limit must be between 1 and 100")]
    LimitOutOfRange,
}

/// A submission that passed every rule. Only `validate_submission` builds one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSubmission {
    player_name: String,
    score: i64,
    survival_time: f64,
    character: Option<String>,
}

impl ValidatedSubmission {
    /// Trimmed player name.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn survival_time(&self) -> f64 {
        self.survival_time
    }

    pub fn character(&self) -> Option<&str> {
        self.character.as_deref()
    }
}

/// Row limit for ranked queries, always within `1..=MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(u32);

impl Limit {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Limit(DEFAULT_LIMIT)
    }
}

pub fn validate_submission(input: &ScoreSubmission) -> Result<ValidatedSubmission, ValidationError> {
    let player_name = validate_player_name(&input.player_name)?;
    let score = validate_score(&input.score)?;
    let survival_time = validate_survival_time(input.survival_time)?;
    validate_character(input.character.as_deref())?;

    Ok(ValidatedSubmission {
        player_name,
        score,
        survival_time,
        character: input.character.clone(),
    })
}

pub fn validate_player_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::PlayerNameRequired);
    }
    if trimmed.chars().count() > MAX_PLAYER_NAME_LEN {
        return Err(ValidationError::PlayerNameTooLong);
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' ');
    if !trimmed.chars().all(allowed) {
        return Err(ValidationError::PlayerNameCharset);
    }
    Ok(trimmed.to_string())
}

pub fn validate_score(score: &serde_json::Number) -> Result<i64, ValidationError> {
    let value = if let Some(n) = score.as_i64() {
        n
    } else if score.is_u64() {
        // Beyond i64, so certainly beyond MAX_SCORE.
        return Err(ValidationError::ScoreTooHigh);
    } else {
        let f = score.as_f64().ok_or(ValidationError::ScoreNotInteger)?;
        if !f.is_finite() || f.fract() != 0.0 {
            return Err(ValidationError::ScoreNotInteger);
        }
        if f > MAX_SCORE as f64 {
            return Err(ValidationError::ScoreTooHigh);
        }
        f as i64
    };

    if value <= 0 {
        Err(ValidationError::ScoreNotPositive)
    } else if value > MAX_SCORE {
        Err(ValidationError::ScoreTooHigh)
    } else {
        Ok(value)
    }
}

pub fn validate_survival_time(seconds: f64) -> Result<f64, ValidationError> {
    // NaN fails the first comparison.
    if !(seconds > 0.0) {
        Err(ValidationError::SurvivalTimeNotPositive)
    } else if seconds > MAX_SURVIVAL_TIME {
        Err(ValidationError::SurvivalTimeTooLong)
    } else {
        Ok(seconds)
    }
}

/// Length is measured in UTF-16 code units, the unit the game client counts in.
pub fn validate_character(character: Option<&str>) -> Result<(), ValidationError> {
    match character {
        Some(c) if c.encode_utf16().count() > MAX_CHARACTER_LEN => {
            Err(ValidationError::CharacterTooLong)
        }
        _ => Ok(()),
    }
}

pub fn validate_limit(limit: Option<i64>) -> Result<Limit, ValidationError> {
    match limit {
        None => Ok(Limit::default()),
        Some(n) if (1..=MAX_LIMIT as i64).contains(&n) => Ok(Limit(n as u32)),
        Some(_) => Err(ValidationError::LimitOutOfRange),
    }
}

/// Query-string form of `validate_limit`. Blank input counts as absent.
pub fn parse_limit(raw: Option<&str>) -> Result<Limit, ValidationError> {
    let limit = match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => None,
        Some(s) => Some(s.parse::<i64>().map_err(|_| ValidationError::LimitNotInteger)?),
    };
    validate_limit(limit)
}
