//! Domain models for site content.
//!
//! Row types derive `sqlx::FromRow` and `Serialize` so repositories and the
//! JSON API share one shape. Input types derive `Deserialize` and normalize
//! themselves before they reach the database.

pub mod business_info;
pub mod gift_shop;
pub mod menu;
pub mod photo;
pub mod session;
pub mod setting;

pub use business_info::{BusinessInfo, BusinessInfoInput};
pub use gift_shop::{GiftShopItem, GiftShopItemInput};
pub use menu::{Category, CategoryInput, MenuItem, MenuItemInput};
pub use photo::{Photo, PhotoInput, PhotoUpdate};
pub use session::CurrentAdmin;
pub use setting::Setting;

use thiserror::Error;

/// Longest accepted name for any content row.
pub const MAX_NAME_LENGTH: usize = 200;

/// A submitted value failed validation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Trim a required name, rejecting blank or overlong values.
///
/// # Errors
///
/// Returns `ValidationError` naming `field` if the value is blank after
/// trimming or longer than [`MAX_NAME_LENGTH`] characters.
pub fn required_name(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError(format!("{field} is required")));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError(format!(
            "{field} must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim optional text, mapping blank values to `None`.
#[must_use]
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_required_name_trims() {
        assert_eq!(required_name("name", "  Soup  ").unwrap(), "Soup");
    }

    #[test]
    fn test_required_name_rejects_blank_and_long() {
        assert_eq!(
            required_name("name", "   "),
            Err(ValidationError("name is required".to_string()))
        );
        assert!(required_name("name", &"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
        assert!(required_name("name", &"x".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(Some("  ".to_string())), None);
        assert_eq!(optional_text(Some(" hi ".to_string())), Some("hi".to_string()));
        assert_eq!(optional_text(None), None);
    }
}
