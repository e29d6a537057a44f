//! ARAM champion-select pick evaluation.
//!
//! Scores the locked-in champion and every bench reroll by how much it adds
//! to the team's composition and by its aggregate win rate, then ranks the
//! bench best-first.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;

pub use analysis::catalog::{Category, ChampionCatalog, ChampionMetadata, Ratings};
pub use analysis::evaluator::Evaluator;
pub use analysis::pool::{ChampionPool, ChampionState, EvaluationReport, Roster, ScoredChampion};
pub use analysis::role_weights::RoleWeightTable;
pub use analysis::stats::ClipPolicy;
pub use analysis::win_rate::{WinRate, WinRateNormalizer, WinRateTable};
pub use error::AppError;
