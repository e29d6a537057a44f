//! Z-score helpers shared by the win-rate and composition-gain passes.

/// One standard deviation maps to this many points.
pub const Z_SCALE: f64 = 50.0;

/// Whether normalized values are clipped to a symmetric bound.
///
/// Unclipped is the default: strong outliers may exceed ±50.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ClipPolicy {
    #[default]
    Unclipped,
    Symmetric(f64),
}

impl ClipPolicy {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            ClipPolicy::Unclipped => value,
            ClipPolicy::Symmetric(bound) => value.clamp(-bound, bound),
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by n, not n - 1).
pub fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// `((value - mean) / std) * 50` rounded to two decimals. Caller guarantees `std > 0`.
pub fn scaled_z_score(value: f64, mean: f64, std: f64) -> f64 {
    round2(((value - mean) / std) * Z_SCALE)
}
