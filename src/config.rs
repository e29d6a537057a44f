use crate::analysis::stats::ClipPolicy;
use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const CATALOG_FILE: &str = "champion_ratings.json";
pub const ROLE_WEIGHTS_FILE: &str = "role_weights.json";
pub const WIN_RATES_FILE: &str = "win_rates.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub clip: ClipPolicy,
    pub player_puuid: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("ARAM_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let clip = match env::var("ARAM_CLIP_BOUND") {
            Ok(value) => parse_clip_bound(&value)?,
            Err(_) => ClipPolicy::Unclipped,
        };

        let player_puuid = env::var("ARAM_PLAYER_PUUID").ok().filter(|p| !p.is_empty());

        Ok(Config {
            data_dir,
            clip,
            player_puuid,
        })
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(CATALOG_FILE)
    }

    pub fn role_weights_path(&self) -> PathBuf {
        self.data_dir.join(ROLE_WEIGHTS_FILE)
    }

    pub fn win_rates_path(&self) -> PathBuf {
        self.data_dir.join(WIN_RATES_FILE)
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".aram_pick")
}

pub fn parse_clip_bound(value: &str) -> Result<ClipPolicy, AppError> {
    let bound: f64 = value.trim().parse().map_err(|_| {
        AppError::ConfigError(format!("clip bound must be a number, got '{}'", value))
    })?;

    if !bound.is_finite() || bound <= 0.0 {
        return Err(AppError::ConfigError(format!(
            "clip bound must be positive, got {}",
            bound
        )));
    }

    Ok(ClipPolicy::Symmetric(bound))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clip_bound() {
        assert_eq!(parse_clip_bound("50").unwrap(), ClipPolicy::Symmetric(50.0));
        assert_eq!(parse_clip_bound(" 37.5 ").unwrap(), ClipPolicy::Symmetric(37.5));
    }

    #[test]
    fn rejects_bad_clip_bound() {
        assert!(parse_clip_bound("abc").is_err());
        assert!(parse_clip_bound("0").is_err());
        assert!(parse_clip_bound("-10").is_err());
        assert!(parse_clip_bound("inf").is_err());
    }

    #[test]
    fn data_paths_live_in_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/tmp/aram"),
            clip: ClipPolicy::Unclipped,
            player_puuid: None,
        };
        assert_eq!(config.catalog_path(), PathBuf::from("/tmp/aram/champion_ratings.json"));
        assert_eq!(config.win_rates_path(), PathBuf::from("/tmp/aram/win_rates.csv"));
    }
}
