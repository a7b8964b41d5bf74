use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Store-assigned item identifier (SQLite rowid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// A single inventory record as stored in the `items` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<u32>,
    /// `YYYY-MM-DD HH:MM:SS`, refreshed on every insert and update.
    pub last_updated: String,
}

impl Item {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.quantity, self.min_stock)
    }
}

/// Stock classification driving the colored indicator of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Normal,
    Low,
    Out,
}

impl StockLevel {
    /// Out of stock wins over low stock; an absent minimum never flags low stock.
    pub fn classify(quantity: u32, min_stock: Option<u32>) -> Self {
        if quantity == 0 {
            return StockLevel::Out;
        }
        match min_stock {
            Some(min) if quantity <= min => StockLevel::Low,
            _ => StockLevel::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockLevel::Normal => "normal",
            StockLevel::Low => "low",
            StockLevel::Out => "out",
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: Option<&str>, quantity: u32, min_stock: Option<u32>) -> Item {
        Item {
            id: ItemId::new(1),
            name: name.to_string(),
            category: category.map(String::from),
            quantity,
            min_stock,
            last_updated: "2025-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn test_zero_quantity_is_out_of_stock() {
        assert_eq!(StockLevel::classify(0, None), StockLevel::Out);
        assert_eq!(StockLevel::classify(0, Some(5)), StockLevel::Out);
        assert_eq!(StockLevel::classify(0, Some(0)), StockLevel::Out);
    }

    #[test]
    fn test_at_or_below_minimum_is_low() {
        assert_eq!(StockLevel::classify(3, Some(5)), StockLevel::Low);
        assert_eq!(StockLevel::classify(5, Some(5)), StockLevel::Low);
        assert_eq!(StockLevel::classify(1, Some(1)), StockLevel::Low);
    }

    #[test]
    fn test_above_minimum_or_no_minimum_is_normal() {
        assert_eq!(StockLevel::classify(6, Some(5)), StockLevel::Normal);
        assert_eq!(StockLevel::classify(1, None), StockLevel::Normal);
        assert_eq!(StockLevel::classify(10, Some(0)), StockLevel::Normal);
    }

    #[test]
    fn test_classification_ignores_name_and_category() {
        let a = item("Widget", Some("Tools"), 3, Some(5));
        let b = item("Zebra", None, 3, Some(5));
        assert_eq!(a.stock_level(), b.stock_level());
        assert_eq!(a.stock_level(), StockLevel::Low);
    }

    #[test]
    fn test_item_id_parse() {
        assert_eq!("42".parse::<ItemId>().unwrap(), ItemId::new(42));
        assert_eq!(" 7 ".parse::<ItemId>().unwrap(), ItemId::new(7));
        assert!("abc".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_item_serializes_id_transparently() {
        let json = serde_json::to_value(item("Nail", None, 0, None)).unwrap();
        assert_eq!(json["id"], 1);
        assert!(json.get("category").is_none());
        assert!(json.get("min_stock").is_none());
    }
}
