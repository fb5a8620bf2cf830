//! The seven-day open/close record.

use std::collections::HashMap;

use serde::de::{Deserializer, IgnoredAny};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::weekday::Weekday;

/// Opening and closing time for one day, as entered by staff.
///
/// Times are kept as the literal strings stored in the business-info record
/// (`"10:00"`, `"23:30:00"`, ...). An empty string means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DayHours {
    pub open: String,
    pub close: String,
}

impl DayHours {
    /// Hours for a day that opens and closes at the given times.
    #[must_use]
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// A day with no hours set.
    #[must_use]
    pub fn closed() -> Self {
        Self::default()
    }

    /// A day is closed unless both times are present.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.open.is_empty() || self.close.is_empty()
    }
}

/// Open/close times for Monday through Sunday.
///
/// Serializes as the flat business-info shape: `monday_open`, `monday_close`,
/// ..., `sunday_close`. Missing keys, `null`, and non-string values all read
/// as empty, and unrelated keys are ignored, so the whole business-info object
/// can be fed in directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WeeklyHours {
    days: [DayHours; 7],
}

impl WeeklyHours {
    /// Every day closed.
    #[must_use]
    pub fn all_closed() -> Self {
        Self::default()
    }

    /// The schedule shown when no business-info record is available.
    ///
    /// Friday and Saturday close at `01:00`; the pair is kept literally and no
    /// past-midnight reasoning is applied anywhere.
    #[must_use]
    pub fn default_schedule() -> Self {
        Self {
            days: [
                DayHours::closed(),
                DayHours::new("10:00", "23:30"),
                DayHours::new("10:00", "23:30"),
                DayHours::new("10:00", "23:30"),
                DayHours::new("10:00", "01:00"),
                DayHours::new("10:00", "01:00"),
                DayHours::new("10:00", "19:00"),
            ],
        }
    }

    /// Build from any `{day}_open` / `{day}_close` keyed source.
    ///
    /// `lookup` is called with each of the 14 field names; `None` reads as empty.
    pub fn from_fields<F, S>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<S>,
        S: Into<String>,
    {
        let mut hours = Self::default();
        for day in Weekday::ALL {
            let open = lookup(&open_key(day)).map(Into::into).unwrap_or_default();
            let close = lookup(&close_key(day)).map(Into::into).unwrap_or_default();
            hours.set(day, DayHours { open, close });
        }
        hours
    }

    /// Hours for one day.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // Weekday::index is always < 7
    pub fn day(&self, day: Weekday) -> &DayHours {
        &self.days[day.index()]
    }

    /// Replace the hours for one day.
    #[allow(clippy::indexing_slicing)] // Weekday::index is always < 7
    pub fn set(&mut self, day: Weekday, hours: DayHours) {
        self.days[day.index()] = hours;
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, day: Weekday, hours: DayHours) -> Self {
        self.set(day, hours);
        self
    }

    /// Days paired with their hours, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayHours)> {
        Weekday::ALL.into_iter().zip(self.days.iter())
    }
}

fn open_key(day: Weekday) -> String {
    format!("{}_open", day.field_prefix())
}

fn close_key(day: Weekday) -> String {
    format!("{}_close", day.field_prefix())
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

impl Serialize for WeeklyHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(14))?;
        for (day, hours) in self.iter() {
            map.serialize_entry(&open_key(day), &non_empty(&hours.open))?;
            map.serialize_entry(&close_key(day), &non_empty(&hours.close))?;
        }
        map.end()
    }
}

/// A field value in the business-info object; anything but a string is ignored.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Text(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for WeeklyHours {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = HashMap::<String, FieldValue>::deserialize(deserializer)?;
        Ok(Self::from_fields(|key| match fields.get(key) {
            Some(FieldValue::Text(value)) => Some(value.clone()),
            Some(FieldValue::Other(_)) | None => None,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_day_is_closed() {
        assert!(DayHours::new("09:00", "").is_closed());
        assert!(DayHours::new("", "17:00").is_closed());
        assert!(DayHours::closed().is_closed());
        assert!(!DayHours::new("09:00", "17:00").is_closed());
    }

    #[test]
    fn test_default_schedule_days() {
        let hours = WeeklyHours::default_schedule();
        assert!(hours.day(Weekday::Monday).is_closed());
        assert_eq!(hours.day(Weekday::Friday), &DayHours::new("10:00", "01:00"));
        assert_eq!(hours.day(Weekday::Sunday), &DayHours::new("10:00", "19:00"));
    }

    #[test]
    fn test_from_fields_missing_keys_are_empty() {
        let source: HashMap<&str, &str> =
            HashMap::from([("monday_open", "08:00"), ("tuesday_close", "18:00")]);
        let hours = WeeklyHours::from_fields(|key| source.get(key).copied());

        assert_eq!(hours.day(Weekday::Monday), &DayHours::new("08:00", ""));
        assert_eq!(hours.day(Weekday::Tuesday), &DayHours::new("", "18:00"));
        assert!(hours.iter().all(|(_, day)| day.is_closed()));
    }

    #[test]
    fn test_deserialize_ignores_unrelated_and_null_fields() {
        let json = r#"{
            "name": "Hearth",
            "id": 1,
            "wednesday_open": "09:00",
            "wednesday_close": "17:00",
            "thursday_open": null
        }"#;
        let hours: WeeklyHours = serde_json::from_str(json).unwrap();

        assert_eq!(
            hours.day(Weekday::Wednesday),
            &DayHours::new("09:00", "17:00")
        );
        for (day, day_hours) in hours.iter() {
            if day != Weekday::Wednesday {
                assert!(day_hours.is_closed(), "{day} should be closed");
            }
        }
    }

    #[test]
    fn test_serialize_emits_all_fourteen_keys() {
        let hours = WeeklyHours::all_closed().with(Weekday::Saturday, DayHours::new("11:00", "22:00"));
        let value = serde_json::to_value(&hours).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 14);
        assert_eq!(object["saturday_open"], "11:00");
        assert!(object["monday_open"].is_null());
    }
}
