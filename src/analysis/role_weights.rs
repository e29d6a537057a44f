use super::catalog::Category;
use crate::error::AppError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const TARGET_SUM: f64 = 5.0;
const SUM_TOLERANCE: f64 = 0.5;
const NEUTRAL_WEIGHT: f64 = 1.0;

/// Per-role category multipliers. Every role's multipliers sum to 5 ± 0.5,
/// checked on construction.
#[derive(Debug, Clone, Default)]
pub struct RoleWeightTable {
    weights: BTreeMap<String, BTreeMap<Category, f64>>,
}

impl RoleWeightTable {
    pub fn new(weights: BTreeMap<String, BTreeMap<Category, f64>>) -> Result<Self, AppError> {
        let table = RoleWeightTable { weights };
        table.validate()?;
        Ok(table)
    }

    /// Builds a table without the sum check, for partial tables in tests.
    #[cfg(test)]
    pub(crate) fn unchecked(weights: BTreeMap<String, BTreeMap<Category, f64>>) -> Self {
        RoleWeightTable { weights }
    }

    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let weights = serde_json::from_str(json)
            .map_err(|e| AppError::JsonError(format!("Failed to parse role weights: {}", e)))?;
        Self::new(weights)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for (role, categories) in &self.weights {
            let sum: f64 = categories.values().sum();
            if (sum - TARGET_SUM).abs() > SUM_TOLERANCE {
                return Err(AppError::RoleWeightSum {
                    role: role.clone(),
                    sum,
                });
            }
        }
        Ok(())
    }

    /// Multiplier for `role` in `category`; unknown roles and categories are neutral.
    pub fn weight_for(&self, role: &str, category: Category) -> f64 {
        self.weights
            .get(role)
            .and_then(|categories| categories.get(&category))
            .copied()
            .unwrap_or(NEUTRAL_WEIGHT)
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_table_validates() {
        let table = RoleWeightTable::from_json_str(
            r#"{
                "Tank": {"Damage": 0.7, "Toughness": 1.5, "Control": 1.3, "Mobility": 0.8, "Utility": 0.7},
                "Mage": {"Damage": 1.4, "Toughness": 0.7, "Control": 1.1, "Mobility": 0.8, "Utility": 1.0}
            }"#,
        )
        .unwrap();

        assert_eq!(table.roles().collect::<Vec<_>>(), vec!["Mage", "Tank"]);
        assert_eq!(table.weight_for("Tank", Category::Toughness), 1.5);
    }

    #[test]
    fn inflated_role_is_rejected_by_name() {
        let err = RoleWeightTable::from_json_str(
            r#"{
                "Tank": {"Damage": 0.7, "Toughness": 1.5, "Control": 1.3, "Mobility": 0.8, "Utility": 0.7},
                "Marksman": {"Damage": 2.0, "Toughness": 1.0, "Control": 1.0, "Mobility": 1.1, "Utility": 1.1}
            }"#,
        )
        .unwrap_err();

        match err {
            AppError::RoleWeightSum { role, sum } => {
                assert_eq!(role, "Marksman");
                assert!((sum - 6.2).abs() < 1e-9);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    fn uniform_with_utility(utility: f64) -> BTreeMap<String, BTreeMap<Category, f64>> {
        let mut categories: BTreeMap<Category, f64> =
            Category::ALL.iter().map(|&c| (c, 1.0)).collect();
        categories.insert(Category::Utility, utility);

        let mut weights = BTreeMap::new();
        weights.insert("Support".to_string(), categories);
        weights
    }

    #[test]
    fn tolerance_bounds_are_inclusive() {
        assert!(RoleWeightTable::new(uniform_with_utility(0.5)).is_ok());
        assert!(RoleWeightTable::new(uniform_with_utility(1.5)).is_ok());
        assert!(RoleWeightTable::new(uniform_with_utility(0.25)).is_err());
        assert!(RoleWeightTable::new(uniform_with_utility(1.75)).is_err());
    }

    #[test]
    fn missing_role_or_category_is_neutral() {
        let mut weights = BTreeMap::new();
        let mut mage = BTreeMap::new();
        mage.insert(Category::Damage, 1.5);
        mage.insert(Category::Toughness, 0.5);
        mage.insert(Category::Control, 1.0);
        mage.insert(Category::Utility, 2.0);
        weights.insert("Mage".to_string(), mage);
        let table = RoleWeightTable::new(weights).unwrap();

        assert_eq!(table.weight_for("Mage", Category::Mobility), 1.0);
        assert_eq!(table.weight_for("Bard", Category::Damage), 1.0);
    }

    #[test]
    fn partial_table_skips_validation_only_when_unchecked() {
        let mut weights = BTreeMap::new();
        weights.insert(
            "Mage".to_string(),
            BTreeMap::from([(Category::Damage, 1.5)]),
        );

        assert!(RoleWeightTable::new(weights.clone()).is_err());
        let table = RoleWeightTable::unchecked(weights);
        assert!(table.validate().is_err());
        assert_eq!(table.weight_for("Mage", Category::Damage), 1.5);
        assert_eq!(table.weight_for("Mage", Category::Control), 1.0);
    }
}
