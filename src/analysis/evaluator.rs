use super::catalog::ChampionCatalog;
use super::composition::CompositionScorer;
use super::pool::{ChampionPool, Roster};
use super::role_weights::RoleWeightTable;
use super::stats::{self, ClipPolicy};
use super::win_rate::WinRateTable;
use crate::error::AppError;

pub const COMPOSITION_WEIGHT: f64 = 0.7;
pub const WIN_RATE_WEIGHT: f64 = 0.3;

/// Floor for the gain standard deviation; small benches often tie.
const MIN_GAIN_STD: f64 = 1e-6;

/// Scores a champion-select snapshot against shared, read-only data.
///
/// Holds no mutable state, so one evaluator can serve any number of
/// snapshots, including concurrently. Its clip policy bounds both the
/// win-rate and the composition-gain z-scores; the `WinRateTable` it reads
/// stays unclipped.
pub struct Evaluator<'a> {
    catalog: &'a ChampionCatalog,
    weights: &'a RoleWeightTable,
    win_rates: &'a WinRateTable,
    clip: ClipPolicy,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        catalog: &'a ChampionCatalog,
        weights: &'a RoleWeightTable,
        win_rates: &'a WinRateTable,
    ) -> Self {
        Evaluator {
            catalog,
            weights,
            win_rates,
            clip: ClipPolicy::default(),
        }
    }

    pub fn with_clip(mut self, clip: ClipPolicy) -> Self {
        self.clip = clip;
        self
    }

    /// Runs the full pipeline: build the pool, assign win rates and
    /// composition gains, fuse scores and rank the bench best-first.
    pub fn evaluate(&self, roster: &Roster) -> Result<ChampionPool<'a>, AppError> {
        let mut pool = ChampionPool::build(roster, self.catalog)?;
        self.assign_win_rates(&mut pool);
        self.assign_composition_gains(&mut pool);
        compute_scores(&mut pool);
        Ok(pool)
    }

    fn assign_win_rates(&self, pool: &mut ChampionPool<'a>) {
        for champion in pool.all_mut() {
            let rate = self.win_rates.get(champion.id());
            champion.raw_win_rate = rate.raw;
            champion.normalized_win_rate = self.clip.apply(rate.normalized);
        }
    }

    fn assign_composition_gains(&self, pool: &mut ChampionPool<'a>) {
        let scorer = CompositionScorer::new(self.weights);
        let base = CompositionScorer::baseline(pool.unavailable().map(|c| c.meta()));

        for champion in pool.available_mut() {
            champion.raw_gain = scorer.raw_gain(&base, champion.meta());
        }

        let gains: Vec<f64> = pool.available().map(|c| c.raw_gain()).collect();
        let mean = stats::mean(&gains);
        let std = stats::std_dev(&gains, mean).max(MIN_GAIN_STD);
        tracing::debug!(mean, std, candidates = gains.len(), "gain normalization");

        for champion in pool.available_mut() {
            champion.normalized_gain =
                self.clip.apply(stats::scaled_z_score(champion.raw_gain, mean, std));
        }
    }
}

fn compute_scores(pool: &mut ChampionPool<'_>) {
    for champion in pool.available_mut() {
        champion.score = fuse_score(champion.normalized_gain, champion.normalized_win_rate);
    }

    // Stable: tied scores keep their bench order.
    pool.bench_mut()
        .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
}

/// `0.7 * normalized_gain + 0.3 * normalized_win_rate`, rounded to two decimals.
pub fn fuse_score(normalized_gain: f64, normalized_win_rate: f64) -> f64 {
    stats::round2(COMPOSITION_WEIGHT * normalized_gain + WIN_RATE_WEIGHT * normalized_win_rate)
}
