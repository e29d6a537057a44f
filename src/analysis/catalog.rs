use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Role assigned when a champion has no secondary classification.
pub const NO_ROLE: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Damage,
    Toughness,
    Control,
    Mobility,
    Utility,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Damage,
        Category::Toughness,
        Category::Control,
        Category::Mobility,
        Category::Utility,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Damage => "Damage",
            Category::Toughness => "Toughness",
            Category::Control => "Control",
            Category::Mobility => "Mobility",
            Category::Utility => "Utility",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ratings {
    #[serde(default)]
    pub damage: f64,
    #[serde(default)]
    pub toughness: f64,
    #[serde(default)]
    pub control: f64,
    #[serde(default)]
    pub mobility: f64,
    #[serde(default)]
    pub utility: f64,
}

impl Ratings {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Damage => self.damage,
            Category::Toughness => self.toughness,
            Category::Control => self.control,
            Category::Mobility => self.mobility,
            Category::Utility => self.utility,
        }
    }
}

/// Static per-champion attributes, loaded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionMetadata {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    #[serde(rename = "Primary")]
    pub primary: String,
    #[serde(rename = "Secondary", default)]
    secondary: Option<String>,
    #[serde(rename = "Ratings", default)]
    pub ratings: Ratings,
    #[serde(rename = "Basic Attacks", default)]
    pub attack_range: String,
    #[serde(rename = "Style", default)]
    pub style: u8,
    #[serde(rename = "Abilities", default)]
    pub abilities: String,
    #[serde(rename = "Damage Type", default)]
    pub damage_type: String,
    #[serde(rename = "Difficulty", default)]
    pub difficulty: u8,
}

impl ChampionMetadata {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        primary: impl Into<String>,
        secondary: Option<&str>,
        ratings: Ratings,
    ) -> Self {
        ChampionMetadata {
            id: id.into(),
            name: name.into(),
            primary: primary.into(),
            secondary: secondary.map(str::to_string),
            ratings,
            attack_range: String::new(),
            style: 0,
            abilities: String::new(),
            damage_type: String::new(),
            difficulty: 0,
        }
    }

    pub fn secondary(&self) -> &str {
        self.secondary.as_deref().unwrap_or(NO_ROLE)
    }
}

/// Read-only champion lookup, constructed once and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct ChampionCatalog {
    champions: HashMap<String, ChampionMetadata>,
}

impl ChampionCatalog {
    pub fn new(champions: impl IntoIterator<Item = ChampionMetadata>) -> Self {
        ChampionCatalog {
            champions: champions
                .into_iter()
                .map(|c| (c.id.clone(), c))
                .collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let raw: HashMap<String, ChampionMetadata> = serde_json::from_str(json)
            .map_err(|e| AppError::JsonError(format!("Failed to parse champion catalog: {}", e)))?;

        let champions = raw
            .into_iter()
            .map(|(id, mut meta)| {
                meta.id = id.clone();
                (id, meta)
            })
            .collect();

        Ok(ChampionCatalog { champions })
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    pub fn get(&self, id: &str) -> Option<&ChampionMetadata> {
        self.champions.get(id)
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}
