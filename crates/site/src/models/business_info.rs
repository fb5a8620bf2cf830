//! The singleton business-info record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use hearth_core::hours::{DayHours, Weekday, WeeklyHours};

use super::{ValidationError, optional_text, required_name};

/// Restaurant name, contact details and weekly hours.
///
/// Serializes flat: the 14 `{day}_open` / `{day}_close` fields sit beside
/// `name`, `phone` and the rest, with closed fields as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessInfo {
    pub name: String,
    pub tagline: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    #[serde(flatten)]
    pub hours: WeeklyHours,
    pub updated_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for BusinessInfo {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let mut hours = WeeklyHours::all_closed();
        for day in Weekday::ALL {
            let prefix = day.field_prefix();
            let open: Option<String> = row.try_get(format!("{prefix}_open").as_str())?;
            let close: Option<String> = row.try_get(format!("{prefix}_close").as_str())?;
            hours.set(
                day,
                DayHours::new(open.unwrap_or_default(), close.unwrap_or_default()),
            );
        }

        Ok(Self {
            name: row.try_get("name")?,
            tagline: row.try_get("tagline")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            address: row.try_get("address")?,
            hours,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// Admin submission replacing the business-info record.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessInfoInput {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(flatten)]
    pub hours: WeeklyHours,
}

impl BusinessInfoInput {
    /// Trim every field and check the name.
    ///
    /// Hour strings are kept as entered apart from surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is blank or too long.
    pub fn normalize(self) -> Result<Self, ValidationError> {
        let mut hours = WeeklyHours::all_closed();
        for (day, day_hours) in self.hours.iter() {
            hours.set(
                day,
                DayHours::new(day_hours.open.trim(), day_hours.close.trim()),
            );
        }

        Ok(Self {
            name: required_name("name", &self.name)?,
            tagline: optional_text(self.tagline),
            phone: optional_text(self.phone),
            email: optional_text(self.email),
            address: optional_text(self.address),
            hours,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_input_reads_flat_hours() {
        let input: BusinessInfoInput = serde_json::from_str(
            r#"{
                "name": "Hearth",
                "phone": "555-0100",
                "friday_open": " 10:00 ",
                "friday_close": "01:00",
                "saturday_open": null
            }"#,
        )
        .unwrap();
        let input = input.normalize().unwrap();

        assert_eq!(input.name, "Hearth");
        assert_eq!(input.tagline, None);
        assert_eq!(
            input.hours.day(Weekday::Friday),
            &DayHours::new("10:00", "01:00")
        );
        assert!(input.hours.day(Weekday::Saturday).is_closed());
    }

    #[test]
    fn test_whitespace_hours_become_closed() {
        let input: BusinessInfoInput = serde_json::from_str(
            r#"{ "name": "Hearth", "monday_open": "  ", "monday_close": "17:00" }"#,
        )
        .unwrap();
        let input = input.normalize().unwrap();

        assert_eq!(input.hours.day(Weekday::Monday), &DayHours::new("", "17:00"));
        assert!(input.hours.day(Weekday::Monday).is_closed());
    }

    #[test]
    fn test_input_requires_name() {
        let input: BusinessInfoInput = serde_json::from_str(r#"{ "name": " " }"#).unwrap();
        assert!(input.normalize().is_err());
    }

    #[test]
    fn test_serialize_is_flat() {
        let info = BusinessInfo {
            name: "Hearth".to_string(),
            tagline: None,
            phone: None,
            email: None,
            address: None,
            hours: WeeklyHours::default_schedule(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&info).unwrap();

        assert_eq!(value["name"], "Hearth");
        assert_eq!(value["tuesday_open"], "10:00");
        assert!(value["monday_open"].is_null());
    }
}
