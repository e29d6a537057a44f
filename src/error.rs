use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Role weights for {role} do not sum to 5 within tolerance 0.5 (sum: {sum:.2})")]
    RoleWeightSum { role: String, sum: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Player not found in team: {0}")]
    MissingPlayer(String),

    #[error("Player champion {0} is not in the champion catalog")]
    UnknownPlayer(String),

    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("File error: {0}")]
    FileError(String),

    #[error("Win rate parsing error: {0}")]
    WinRateParse(String),
}
