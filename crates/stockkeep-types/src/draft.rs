use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::item::Item;

/// Raw form contents, exactly as typed.
///
/// Every field is text so a half-filled form can be held, shown and edited
/// without losing what the user entered. `validate` turns it into `ItemFields`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub min_stock: String,
}

/// Validated payload for insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub category: Option<String>,
    pub quantity: u32,
    pub min_stock: Option<u32>,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
        min_stock: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
            min_stock: min_stock.into(),
        }
    }

    /// Re-populate a form from a stored item (edit mode).
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone().unwrap_or_default(),
            quantity: item.quantity.to_string(),
            min_stock: item.min_stock.map(|m| m.to_string()).unwrap_or_default(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.category.trim().is_empty()
            && self.quantity.trim().is_empty()
            && self.min_stock.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<ItemFields> {
        let name = self.name.trim();
        let quantity = self.quantity.trim();

        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if quantity.is_empty() {
            return Err(ValidationError::MissingField("quantity"));
        }

        let quantity = parse_count("quantity", quantity)?;

        let min_stock = match self.min_stock.trim() {
            "" => None,
            raw => Some(parse_count("min_stock", raw)?),
        };

        let category = match self.category.trim() {
            "" => None,
            c => Some(c.to_string()),
        };

        Ok(ItemFields {
            name: name.to_string(),
            category,
            quantity,
            min_stock,
        })
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32> {
    let value: i64 = raw.parse().map_err(|_| {
        let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            ValidationError::OutOfRange {
                field,
                value: raw.to_string(),
            }
        } else {
            ValidationError::NotANumber {
                field,
                value: raw.to_string(),
            }
        }
    })?;

    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }

    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field,
        value: raw.to_string(),
    })
}
