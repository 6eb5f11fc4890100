//! Menu Item Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::presence::{non_null, nullable};

/// Menu item entity
///
/// The public projection of a stored row. Only ever produced from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub is_available: bool,
    pub category: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItemCreate {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub price: f64,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub category: Option<String>,
}

/// Update menu item payload
///
/// Only keys present in the request are applied. `name`, `price` and
/// `is_available` reject an explicit `null`; `category: null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MenuItemUpdate {
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_available: Option<bool>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub category: Option<Option<String>>,
}
