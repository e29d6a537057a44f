use super::stats;
use crate::error::AppError;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

pub const DEFAULT_RAW_WIN_RATE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinRate {
    pub raw: f64,
    pub normalized: f64,
}

impl Default for WinRate {
    /// An untracked champion is treated as exactly average.
    fn default() -> Self {
        WinRate {
            raw: DEFAULT_RAW_WIN_RATE,
            normalized: 0.0,
        }
    }
}

/// Normalized win rates keyed by champion id.
#[derive(Debug, Clone, Default)]
pub struct WinRateTable {
    rates: HashMap<String, WinRate>,
}

impl WinRateTable {
    pub fn get(&self, id: &str) -> WinRate {
        self.rates.get(id).copied().unwrap_or_default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rates.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Produces unclipped z-scores. Clipping belongs to the `Evaluator`, which
/// applies one policy to both normalization passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinRateNormalizer;

impl WinRateNormalizer {
    /// Converts raw percentages into `((raw - mean) / std) * 50`, using the
    /// population standard deviation over every tracked champion. A zero
    /// spread yields 0 for everyone.
    pub fn normalize(&self, raw: &BTreeMap<String, f64>) -> WinRateTable {
        let values: Vec<f64> = raw.values().copied().collect();
        let mean = stats::mean(&values);
        let std = stats::std_dev(&values, mean);
        tracing::debug!(mean, std, champions = values.len(), "win rate normalization");

        let rates = raw
            .iter()
            .map(|(id, &raw)| {
                let normalized = if std > 0.0 {
                    stats::scaled_z_score(raw, mean, std)
                } else {
                    0.0
                };
                (id.clone(), WinRate { raw, normalized })
            })
            .collect();

        WinRateTable { rates }
    }
}

/// Parses `name,championId,winRate` rows after a header line. Extra columns
/// are ignored, quoted names may contain commas and a trailing `%` on the
/// rate is accepted. Rates must be finite percentages in `0..=100`.
pub fn parse_raw_win_rates(content: &str) -> Result<BTreeMap<String, f64>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut raw = BTreeMap::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map_or(0, |p| p.line());
            AppError::WinRateParse(format!("line {}: {}", line, e))
        })?;
        let line = record.position().map_or(0, |p| p.line());

        let (Some(id), Some(rate)) = (record.get(1), record.get(2)) else {
            return Err(AppError::WinRateParse(format!(
                "line {}: expected at least 3 columns",
                line
            )));
        };

        let value: f64 = rate.trim_end_matches('%').trim().parse().map_err(|_| {
            AppError::WinRateParse(format!("line {}: invalid win rate '{}'", line, rate))
        })?;
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(AppError::WinRateParse(format!(
                "line {}: win rate '{}' is not a percentage between 0 and 100",
                line, rate
            )));
        }

        raw.insert(id.to_string(), value);
    }

    Ok(raw)
}

pub fn load_raw_win_rates(path: &Path) -> Result<BTreeMap<String, f64>, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::FileError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_raw_win_rates(&content)
}
