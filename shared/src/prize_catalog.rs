use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_TOLERANCE;

pub const LAVENDER: &str = "#ddd6fe";
pub const SILVER: &str = "#e5e7eb";
const INDIGO_INK: &str = "#1e1b4b";
const SLATE_INK: &str = "#374151";

/// One slice of the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub id: u32,
    /// May contain one `\n` to render on two lines.
    pub label: String,
    pub color: String,
    pub weight: f64,
}

impl Prize {
    pub fn new(id: u32, label: &str, color: &str, weight: f64) -> Self {
        Self {
            id,
            label: label.to_string(),
            color: color.to_string(),
            weight,
        }
    }

    /// First line sits nearer the hub, the optional second line further out.
    pub fn label_lines(&self) -> (&str, Option<&str>) {
        match self.label.split_once('\n') {
            Some((first, second)) => (first, Some(second)),
            None => (self.label.as_str(), None),
        }
    }

    pub fn display_name(&self) -> String {
        match self.label_lines() {
            (first, Some(second)) => format!("{} {}", first, second),
            (first, None) => first.to_string(),
        }
    }

    pub fn ink_color(&self) -> &'static str {
        if self.color.eq_ignore_ascii_case(LAVENDER) {
            INDIGO_INK
        } else {
            SLATE_INK
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Empty,
    DuplicateId(u32),
    InvalidWeight { id: u32, weight: f64 },
    WeightSum(f64),
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "prize catalog is empty"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate prize id {}", id),
            CatalogError::InvalidWeight { id, weight } => {
                write!(f, "prize {} has weight {} outside [0, 1]", id, weight)
            }
            CatalogError::WeightSum(sum) => {
                write!(f, "prize weights sum to {} instead of 1.0", sum)
            }
            CatalogError::Parse(msg) => write!(f, "invalid catalog JSON: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

/// Ordered, immutable prize list whose weights sum to 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeCatalog {
    prizes: Vec<Prize>,
}

impl PrizeCatalog {
    pub fn new(prizes: Vec<Prize>) -> Result<Self, CatalogError> {
        if prizes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for prize in &prizes {
            if !seen.insert(prize.id) {
                return Err(CatalogError::DuplicateId(prize.id));
            }
            if !prize.weight.is_finite() || !(0.0..=1.0).contains(&prize.weight) {
                return Err(CatalogError::InvalidWeight { id: prize.id, weight: prize.weight });
            }
        }

        let sum: f64 = prizes.iter().map(|p| p.weight).sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(CatalogError::WeightSum(sum));
        }

        log::debug!("Loaded prize catalog with {} entries", prizes.len());
        Ok(Self { prizes })
    }

    /// Parses an ordered `[{id, label, color, weight}, ...]` list.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let prizes: Vec<Prize> = serde_json::from_str(json)?;
        Self::new(prizes)
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Prize> {
        self.prizes.get(index)
    }

    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.prizes.iter().position(|p| p.id == id)
    }

    pub fn last(&self) -> &Prize {
        &self.prizes[self.prizes.len() - 1]
    }
}

impl Default for PrizeCatalog {
    fn default() -> Self {
        Self {
            prizes: vec![
                Prize::new(1, "Autographed\nBaseball", LAVENDER, 0.15),
                Prize::new(2, "Bay Republic\n30% Off", SILVER, 0.20),
                Prize::new(3, "Culver's\nFree Concrete Mixer", LAVENDER, 0.25),
                Prize::new(4, "Rays\n2026 Tickets", SILVER, 0.15),
                Prize::new(5, "Grand Prize Entry\n2026 Suite Night", LAVENDER, 0.05),
                Prize::new(6, "City Connect\nBomber Jacket", SILVER, 0.10),
                Prize::new(7, "Rays\nSwag Bag", LAVENDER, 0.10),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = PrizeCatalog::default();
        let rebuilt = PrizeCatalog::new(catalog.prizes().to_vec()).unwrap();
        assert_eq!(rebuilt, catalog);
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.index_of(5), Some(4));
        assert_eq!(catalog.last().id, 7);
    }

    #[test]
    fn test_rejects_bad_catalogs() {
        assert_eq!(PrizeCatalog::new(vec![]), Err(CatalogError::Empty));

        let dup = vec![Prize::new(1, "A", LAVENDER, 0.5), Prize::new(1, "B", SILVER, 0.5)];
        assert_eq!(PrizeCatalog::new(dup), Err(CatalogError::DuplicateId(1)));

        let negative = vec![Prize::new(1, "A", LAVENDER, 1.5), Prize::new(2, "B", SILVER, -0.5)];
        assert!(matches!(
            PrizeCatalog::new(negative),
            Err(CatalogError::InvalidWeight { id: 1, .. })
        ));

        let short = vec![Prize::new(1, "A", LAVENDER, 0.5), Prize::new(2, "B", SILVER, 0.4)];
        assert!(matches!(PrizeCatalog::new(short), Err(CatalogError::WeightSum(_))));
    }

    #[test]
    fn test_from_json() {
        let json = r##"[
            {"id": 10, "label": "Hat", "color": "#ddd6fe", "weight": 0.7},
            {"id": 11, "label": "Free\nDrink", "color": "#e5e7eb", "weight": 0.3}
        ]"##;
        let catalog = PrizeCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().label_lines(), ("Free", Some("Drink")));

        assert!(matches!(PrizeCatalog::from_json("{not json"), Err(CatalogError::Parse(_))));
        assert!(matches!(
            PrizeCatalog::from_json(r#"[{"id": 1, "label": "A", "color": "red", "weight": 0.2}]"#),
            Err(CatalogError::WeightSum(_))
        ));
    }

    #[test]
    fn test_label_rendering_helpers() {
        let catalog = PrizeCatalog::default();
        let baseball = catalog.get(0).unwrap();
        assert_eq!(baseball.display_name(), "Autographed Baseball");
        assert_eq!(baseball.ink_color(), INDIGO_INK);
        assert_eq!(catalog.get(1).unwrap().ink_color(), SLATE_INK);

        let single = Prize::new(9, "Sticker", SILVER, 1.0);
        assert_eq!(single.label_lines(), ("Sticker", None));
        assert_eq!(single.display_name(), "Sticker");
    }
}
