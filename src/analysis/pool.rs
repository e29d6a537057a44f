use super::catalog::{ChampionCatalog, ChampionMetadata};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Champion ids grouped the way champion select reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(deserialize_with = "deserialize_ids")]
    pub team: Vec<String>,
    #[serde(deserialize_with = "deserialize_ids", default)]
    pub bench: Vec<String>,
    #[serde(deserialize_with = "deserialize_ids", default)]
    pub player: Vec<String>,
}

impl Roster {
    pub fn new<T: ToString>(team: &[T], bench: &[T], player: T) -> Self {
        Roster {
            team: team.iter().map(ToString::to_string).collect(),
            bench: bench.iter().map(ToString::to_string).collect(),
            player: vec![player.to_string()],
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json)
            .map_err(|e| AppError::JsonError(format!("Failed to parse roster: {}", e)))
    }

    fn player_id(&self) -> Result<&str, AppError> {
        match self.player.as_slice() {
            [id] => Ok(id.as_str()),
            [] => Err(AppError::MissingPlayer("no player id supplied".to_string())),
            ids => Err(AppError::InvalidRoster(format!(
                "expected exactly one player id, got {}",
                ids.len()
            ))),
        }
    }
}

// The client reports champion ids as integers while catalog keys are strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

fn deserialize_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = Vec::<RawId>::deserialize(deserializer)?;
    Ok(ids
        .into_iter()
        .map(|id| match id {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s.trim().to_string(),
        })
        .collect())
}

/// Per-run evaluation record wrapping immutable catalog metadata.
#[derive(Debug, Clone)]
pub struct ChampionState<'a> {
    meta: &'a ChampionMetadata,
    pub(crate) raw_win_rate: f64,
    pub(crate) normalized_win_rate: f64,
    pub(crate) raw_gain: f64,
    pub(crate) normalized_gain: f64,
    pub(crate) score: f64,
}

impl<'a> ChampionState<'a> {
    pub fn new(meta: &'a ChampionMetadata) -> Self {
        ChampionState {
            meta,
            raw_win_rate: 50.0,
            normalized_win_rate: 0.0,
            raw_gain: 0.0,
            normalized_gain: 0.0,
            score: 0.0,
        }
    }

    pub fn meta(&self) -> &'a ChampionMetadata {
        self.meta
    }

    pub fn id(&self) -> &str {
        &self.meta.id
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn raw_win_rate(&self) -> f64 {
        self.raw_win_rate
    }

    pub fn normalized_win_rate(&self) -> f64 {
        self.normalized_win_rate
    }

    pub fn raw_gain(&self) -> f64 {
        self.raw_gain
    }

    pub fn normalized_gain(&self) -> f64 {
        self.normalized_gain
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn to_scored(&self) -> ScoredChampion {
        ScoredChampion {
            id: self.id().to_string(),
            name: self.name().to_string(),
            raw_gain: self.raw_gain,
            normalized_gain: self.normalized_gain,
            raw_win_rate: self.raw_win_rate,
            normalized_win_rate: self.normalized_win_rate,
            score: self.score,
        }
    }
}

/// Team, bench and locked-in player for one champion-select snapshot.
///
/// `available` is the player plus the bench; `unavailable` is every other
/// teammate.
#[derive(Debug, Clone)]
pub struct ChampionPool<'a> {
    team: Vec<ChampionState<'a>>,
    bench: Vec<ChampionState<'a>>,
    player: usize,
}

impl<'a> ChampionPool<'a> {
    /// Resolves roster ids against the catalog. Unknown team and bench ids
    /// are dropped; the player must be on the team and in the catalog.
    pub fn build(roster: &Roster, catalog: &'a ChampionCatalog) -> Result<Self, AppError> {
        let player_id = roster.player_id()?;
        if !roster.team.iter().any(|id| id == player_id) {
            return Err(AppError::MissingPlayer(player_id.to_string()));
        }
        if catalog.get(player_id).is_none() {
            return Err(AppError::UnknownPlayer(player_id.to_string()));
        }

        let team = resolve(&roster.team, catalog, "team");
        let bench = resolve(&roster.bench, catalog, "bench");
        let player = team
            .iter()
            .position(|c| c.id() == player_id)
            .ok_or_else(|| AppError::MissingPlayer(player_id.to_string()))?;

        tracing::debug!(team = team.len(), bench = bench.len(), player = player_id, "built champion pool");

        Ok(ChampionPool {
            team,
            bench,
            player,
        })
    }

    pub fn player(&self) -> &ChampionState<'a> {
        &self.team[self.player]
    }

    pub fn team(&self) -> &[ChampionState<'a>] {
        &self.team
    }

    pub fn bench(&self) -> &[ChampionState<'a>] {
        &self.bench
    }

    pub fn is_player(&self, champion: &ChampionState<'a>) -> bool {
        std::ptr::eq(champion, self.player())
    }

    pub fn available(&self) -> impl Iterator<Item = &ChampionState<'a>> {
        std::iter::once(self.player()).chain(self.bench.iter())
    }

    pub fn unavailable(&self) -> impl Iterator<Item = &ChampionState<'a>> {
        let player = self.player;
        self.team
            .iter()
            .enumerate()
            .filter(move |(idx, _)| *idx != player)
            .map(|(_, c)| c)
    }

    pub(crate) fn available_mut(&mut self) -> impl Iterator<Item = &mut ChampionState<'a>> {
        std::iter::once(&mut self.team[self.player]).chain(self.bench.iter_mut())
    }

    pub(crate) fn all_mut(&mut self) -> impl Iterator<Item = &mut ChampionState<'a>> {
        self.team.iter_mut().chain(self.bench.iter_mut())
    }

    pub(crate) fn bench_mut(&mut self) -> &mut Vec<ChampionState<'a>> {
        &mut self.bench
    }

    pub fn to_report(&self) -> EvaluationReport {
        EvaluationReport {
            evaluated_at: Utc::now(),
            player: self.player().to_scored(),
            team: self.team.iter().map(ChampionState::to_scored).collect(),
            bench: self.bench.iter().map(ChampionState::to_scored).collect(),
        }
    }
}

fn resolve<'a>(ids: &[String], catalog: &'a ChampionCatalog, group: &str) -> Vec<ChampionState<'a>> {
    ids.iter()
        .filter_map(|id| match catalog.get(id) {
            Some(meta) => Some(ChampionState::new(meta)),
            None => {
                tracing::warn!(id = %id, group, "champion not in catalog, dropping");
                None
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredChampion {
    pub id: String,
    pub name: String,
    pub raw_gain: f64,
    pub normalized_gain: f64,
    pub raw_win_rate: f64,
    pub normalized_win_rate: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub evaluated_at: DateTime<Utc>,
    pub player: ScoredChampion,
    pub team: Vec<ScoredChampion>,
    pub bench: Vec<ScoredChampion>,
}
