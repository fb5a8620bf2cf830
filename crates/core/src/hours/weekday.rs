//! Calendar weekdays in display order.

use core::fmt;

/// A day of the week.
///
/// Ordering is fixed Monday-first and never depends on locale or on which
/// days happen to be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Three-letter English abbreviation used in schedule rows.
    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    /// Lowercase English name, the prefix of the `{day}_open` / `{day}_close` fields.
    #[must_use]
    pub const fn field_prefix(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Zero-based position in the week (Monday = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_monday_first_and_indexed() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
        assert_eq!(Weekday::ALL.first(), Some(&Weekday::Monday));
        assert_eq!(Weekday::ALL.last(), Some(&Weekday::Sunday));
    }

    #[test]
    fn test_abbrev_and_prefix() {
        assert_eq!(Weekday::Thursday.abbrev(), "Thu");
        assert_eq!(Weekday::Thursday.field_prefix(), "thursday");
        assert_eq!(Weekday::Sunday.to_string(), "Sun");
    }
}
