use super::catalog::{Category, ChampionMetadata};
use super::role_weights::RoleWeightTable;

/// Summed category ratings of a group of champions, indexed by [`Category::index`].
pub type CategoryTotals = [f64; 5];

/// Saturating value of a summed category rating.
///
/// `f(x) = 5 + 10 * (1 - e^(-(x - 5) / 4))`: equals 5 at x = 5, approaches 15
/// from below as x grows, and is unbounded below.
pub fn diminishing_returns(x: f64) -> f64 {
    5.0 + 10.0 * (1.0 - (-(x - 5.0) / 4.0).exp())
}

pub struct CompositionScorer<'a> {
    weights: &'a RoleWeightTable,
}

impl<'a> CompositionScorer<'a> {
    pub fn new(weights: &'a RoleWeightTable) -> Self {
        CompositionScorer { weights }
    }

    /// A champion's rating scaled by whichever of its two roles favours the
    /// category more.
    pub fn weighted_contribution(&self, champion: &ChampionMetadata, category: Category) -> f64 {
        let primary = self.weights.weight_for(&champion.primary, category);
        let secondary = self.weights.weight_for(champion.secondary(), category);
        champion.ratings.get(category) * primary.max(secondary)
    }

    /// Unweighted per-category sum over the fixed teammates.
    pub fn baseline<'c>(teammates: impl IntoIterator<Item = &'c ChampionMetadata>) -> CategoryTotals {
        let mut base = [0.0; 5];
        for champion in teammates {
            for category in Category::ALL {
                base[category.index()] += champion.ratings.get(category);
            }
        }
        base
    }

    /// Increase in diminishing-returns team strength from adding `candidate`
    /// on top of `base`.
    pub fn raw_gain(&self, base: &CategoryTotals, candidate: &ChampionMetadata) -> f64 {
        Category::ALL
            .iter()
            .map(|&category| {
                let before = base[category.index()];
                let after = before + self.weighted_contribution(candidate, category);
                diminishing_returns(after) - diminishing_returns(before)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::catalog::Ratings;
    use std::collections::BTreeMap;

    fn ratings(values: [f64; 5]) -> Ratings {
        Ratings {
            damage: values[0],
            toughness: values[1],
            control: values[2],
            mobility: values[3],
            utility: values[4],
        }
    }

    /// `{Mage: {Damage: 1.5}}`; too partial to pass the sum check.
    fn mage_damage_table() -> RoleWeightTable {
        let mut weights = BTreeMap::new();
        weights.insert("Mage".to_string(), BTreeMap::from([(Category::Damage, 1.5)]));
        RoleWeightTable::unchecked(weights)
    }

    #[test]
    fn curve_reference_points() {
        assert_eq!(diminishing_returns(5.0), 5.0);
        assert!((diminishing_returns(10.0) - 12.13).abs() < 0.1);
        assert!((diminishing_returns(15.0) - 14.18).abs() < 0.1);
        assert!(diminishing_returns(0.0) < 0.0);
        assert!(diminishing_returns(100.0) < 15.0);
    }

    #[test]
    fn curve_is_concave() {
        let early = diminishing_returns(6.0) - diminishing_returns(5.0);
        let late = diminishing_returns(11.0) - diminishing_returns(10.0);
        assert!(early > late);
        assert!(late > 0.0);
    }

    #[test]
    fn best_fit_role_weight_applies() {
        let table = mage_damage_table();
        let scorer = CompositionScorer::new(&table);
        let champion = ChampionMetadata::new(
            "136",
            "Aurelion Sol",
            "Mage",
            Some("Controller"),
            ratings([3.0, 1.0, 4.0, 2.0, 3.0]),
        );

        assert_eq!(scorer.weighted_contribution(&champion, Category::Damage), 4.5);
        // Neither Mage nor the unknown secondary role weights toughness.
        assert_eq!(scorer.weighted_contribution(&champion, Category::Toughness), 1.0);
    }

    #[test]
    fn baseline_sums_raw_ratings() {
        let a = ChampionMetadata::new("1", "A", "Mage", None, ratings([1.0, 2.0, 3.0, 4.0, 5.0]));
        let b = ChampionMetadata::new("2", "B", "Tank", None, ratings([2.0, 2.0, 0.0, 1.0, 1.0]));

        assert_eq!(CompositionScorer::baseline([&a, &b]), [3.0, 4.0, 3.0, 5.0, 6.0]);
        assert_eq!(CompositionScorer::baseline(std::iter::empty()), [0.0; 5]);
    }

    #[test]
    fn gain_against_empty_team() {
        let table = RoleWeightTable::default();
        let scorer = CompositionScorer::new(&table);
        let solo = ChampionMetadata::new("1", "A", "Fighter", None, ratings([2.0, 0.0, 0.0, 0.0, 0.0]));

        let expected = diminishing_returns(2.0) - diminishing_returns(0.0);
        assert!((scorer.raw_gain(&[0.0; 5], &solo) - expected).abs() < 1e-12);
    }

    #[test]
    fn dominating_ratings_never_gain_less() {
        let table = mage_damage_table();
        let scorer = CompositionScorer::new(&table);
        let base = [6.0, 4.0, 5.0, 7.0, 3.0];
        let strong = ChampionMetadata::new("1", "A", "Mage", None, ratings([3.0, 2.0, 3.0, 2.0, 2.0]));
        let weak = ChampionMetadata::new("2", "B", "Mage", None, ratings([3.0, 1.0, 2.0, 2.0, 2.0]));

        assert!(scorer.raw_gain(&base, &strong) >= scorer.raw_gain(&base, &weak));
    }
}
