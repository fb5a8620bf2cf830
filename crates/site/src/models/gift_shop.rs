//! Gift-shop merchandise.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hearth_core::{GiftShopItemId, Price};

use super::{ValidationError, optional_text, required_name};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct GiftShopItem {
    pub id: GiftShopItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GiftShopItemInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "available")]
    pub is_available: bool,
    #[serde(default)]
    pub sort_order: i32,
}

const fn available() -> bool {
    true
}

impl GiftShopItemInput {
    /// Trim text fields and check the name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is blank or too long.
    pub fn normalize(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_name("name", &self.name)?,
            description: optional_text(self.description),
            image_url: optional_text(self.image_url),
            ..self
        })
    }
}
