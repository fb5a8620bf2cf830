//! Menu categories and items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hearth_core::{CategoryId, MenuItemId, Price};

use super::{ValidationError, optional_text, required_name};

/// A menu section such as "Starters" or "Drinks".
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl CategoryInput {
    /// Trim text fields and check the name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is blank or too long.
    pub fn normalize(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_name("name", &self.name)?,
            description: optional_text(self.description),
            sort_order: self.sort_order,
        })
    }
}

/// A dish on the menu.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for a menu item.
///
/// `price` goes through [`Price`] deserialization, so negative amounts are
/// rejected before the handler runs.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemInput {
    pub category_id: CategoryId,
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

impl MenuItemInput {
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

/// A category with the menu items that belong to it, for the menu page.
#[derive(Debug, Clone, Serialize)]
pub struct MenuSection {
    pub category: Category,
    pub items: Vec<MenuItem>,
}

impl MenuSection {
    /// Pair each category with its items, keeping category order and dropping
    /// categories that end up empty.
    #[must_use]
    pub fn group(categories: Vec<Category>, items: &[MenuItem]) -> Vec<Self> {
        categories
            .into_iter()
            .map(|category| {
                let items = items
                    .iter()
                    .filter(|item| item.category_id == category.id)
                    .cloned()
                    .collect();
                Self { category, items }
            })
            .filter(|section| !section.items.is_empty())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_input_defaults() {
        let input: MenuItemInput =
            serde_json::from_str(r#"{ "category_id": 3, "name": " Soup ", "price": "6.5" }"#)
                .unwrap();
        let input = input.normalize().unwrap();

        assert_eq!(input.category_id, CategoryId::new(3));
        assert_eq!(input.name, "Soup");
        assert!(input.is_available);
        assert_eq!(input.sort_order, 0);
        assert_eq!(input.price.to_string(), "$6.50");
    }

    #[test]
    fn test_menu_item_input_rejects_negative_price() {
        let result = serde_json::from_str::<MenuItemInput>(
            r#"{ "category_id": 3, "name": "Soup", "price": "-1" }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_menu_sections_skip_empty_categories() {
        let now = Utc::now();
        let category = |id: i32, name: &str| Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            description: None,
            sort_order: id,
            created_at: now,
            updated_at: now,
        };
        let item = MenuItem {
            id: MenuItemId::new(1),
            category_id: CategoryId::new(2),
            name: "Pie".to_string(),
            description: None,
            price: "4".parse().unwrap(),
            image_url: None,
            is_available: true,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        };

        let sections = MenuSection::group(vec![category(1, "Drinks"), category(2, "Dessert")], &[item]);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].category.name, "Dessert");
        assert_eq!(sections[0].items.len(), 1);
    }
}
