//! Grouping weekly hours into display rows.

use core::fmt;

use super::weekday::Weekday;
use super::weekly::{DayHours, WeeklyHours};

/// What decides whether two neighbouring days share a row.
///
/// Open days compare by their literal strings, so `"09:00"` and `"09:00:00"`
/// are different schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleKey<'a> {
    Closed,
    Open { open: &'a str, close: &'a str },
}

impl<'a> ScheduleKey<'a> {
    /// Classify one day.
    #[must_use]
    pub fn of(hours: &'a DayHours) -> Self {
        if hours.is_closed() {
            Self::Closed
        } else {
            Self::Open {
                open: hours.open.as_str(),
                close: hours.close.as_str(),
            }
        }
    }
}

/// Hours shared by every day in a [`ScheduleRow`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowHours {
    Closed,
    Range { open: String, close: String },
}

/// A maximal run of consecutive days with the same hours.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduleRow {
    pub first: Weekday,
    pub last: Weekday,
    pub hours: RowHours,
}

impl ScheduleRow {
    /// The days covered by this row, in calendar order.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL
            .into_iter()
            .filter(|day| (self.first..=self.last).contains(day))
    }

    /// Whether this row covers exactly one day.
    #[must_use]
    pub fn is_single_day(&self) -> bool {
        self.first == self.last
    }

    /// The key every day in this row shares.
    #[must_use]
    pub fn key(&self) -> ScheduleKey<'_> {
        match &self.hours {
            RowHours::Closed => ScheduleKey::Closed,
            RowHours::Range { open, close } => ScheduleKey::Open {
                open: open.as_str(),
                close: close.as_str(),
            },
        }
    }
}

impl fmt::Display for ScheduleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_day() {
            write!(f, "{}", self.first)?;
        } else {
            write!(f, "{}\u{2013}{}", self.first, self.last)?;
        }

        match &self.hours {
            RowHours::Closed => f.write_str(" Closed"),
            RowHours::Range { open, close } => write!(
                f,
                " {} \u{2013} {}",
                format_time(open),
                format_time(close)
            ),
        }
    }
}

/// Collapse a week into rows of consecutive days with identical hours.
///
/// Rows cover Monday through Sunday exactly once, in order, and no two
/// adjacent rows share a [`ScheduleKey`].
#[must_use]
pub fn group_into_rows(hours: &WeeklyHours) -> Vec<ScheduleRow> {
    let mut rows: Vec<ScheduleRow> = Vec::with_capacity(7);

    for (day, day_hours) in hours.iter() {
        let key = ScheduleKey::of(day_hours);
        if let Some(current) = rows.last_mut() {
            if current.key() == key {
                current.last = day;
                continue;
            }
        }

        let row_hours = match key {
            ScheduleKey::Closed => RowHours::Closed,
            ScheduleKey::Open { open, close } => RowHours::Range {
                open: open.to_owned(),
                close: close.to_owned(),
            },
        };
        rows.push(ScheduleRow {
            first: day,
            last: day,
            hours: row_hours,
        });
    }

    rows
}

/// Render one row, e.g. `"Tue–Thu 10:00am – 11:30pm"` or `"Mon Closed"`.
#[must_use]
pub fn format_row(row: &ScheduleRow) -> String {
    row.to_string()
}

/// Convert a 24-hour `HH:MM[:SS]` string to `h:MMam` / `h:MMpm`.
///
/// Only the first five characters are read. Empty input gives an empty
/// string; input whose hour is not `0..=23` comes back as that five-character
/// slice unchanged.
#[must_use]
pub fn format_time(time: &str) -> String {
    let clock = time.get(..5).unwrap_or(time);
    let Some((hour, minutes)) = clock.split_once(':') else {
        return clock.to_owned();
    };
    let Ok(hour) = hour.parse::<u8>() else {
        return clock.to_owned();
    };

    match hour {
        0 => format!("12:{minutes}am"),
        1..=11 => format!("{hour}:{minutes}am"),
        12 => format!("12:{minutes}pm"),
        13..=23 => format!("{}:{minutes}pm", hour - 12),
        _ => clock.to_owned(),
    }
}

/// Display lines for a week, substituting the default schedule when no record
/// is available.
#[must_use]
pub fn schedule_lines(hours: Option<&WeeklyHours>) -> Vec<String> {
    let fallback;
    let hours = if let Some(hours) = hours {
        hours
    } else {
        fallback = WeeklyHours::default_schedule();
        &fallback
    };

    group_into_rows(hours).iter().map(format_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(hours: &WeeklyHours) -> Vec<String> {
        group_into_rows(hours).iter().map(format_row).collect()
    }

    /// Weeks covering the shapes that matter: uniform, alternating, partial
    /// days, literal-string mismatches and the default.
    fn sample_weeks() -> Vec<WeeklyHours> {
        let same = DayHours::new("08:00", "20:00");
        let mut alternating = WeeklyHours::all_closed();
        for day in [Weekday::Monday, Weekday::Wednesday, Weekday::Friday, Weekday::Sunday] {
            alternating.set(day, same.clone());
        }

        vec![
            WeeklyHours::all_closed(),
            WeeklyHours::default_schedule(),
            WeeklyHours::from_fields(|_| Some("08:00")),
            alternating,
            WeeklyHours::all_closed()
                .with(Weekday::Monday, DayHours::new("09:00", ""))
                .with(Weekday::Tuesday, DayHours::new("", "17:00")),
            WeeklyHours::all_closed()
                .with(Weekday::Thursday, DayHours::new("09:00", "17:00"))
                .with(Weekday::Friday, DayHours::new("09:00:00", "17:00")),
        ]
    }

    #[test]
    fn test_format_time_boundaries() {
        assert_eq!(format_time("00:00"), "12:00am");
        assert_eq!(format_time("12:00"), "12:00pm");
        assert_eq!(format_time("09:05"), "9:05am");
        assert_eq!(format_time("23:30"), "11:30pm");
        assert_eq!(format_time(""), "");
    }

    #[test]
    fn test_format_time_ignores_seconds() {
        assert_eq!(format_time("13:45:59"), "1:45pm");
        assert_eq!(format_time("00:30:00"), "12:30am");
    }

    #[test]
    fn test_format_time_malformed_passes_through() {
        assert_eq!(format_time("noon"), "noon");
        assert_eq!(format_time("25:00"), "25:00");
        assert_eq!(format_time("ab:cd:ef"), "ab:cd");
    }

    #[test]
    fn test_default_schedule_lines() {
        assert_eq!(
            schedule_lines(None),
            vec![
                "Mon Closed",
                "Tue\u{2013}Thu 10:00am \u{2013} 11:30pm",
                "Fri\u{2013}Sat 10:00am \u{2013} 1:00am",
                "Sun 10:00am \u{2013} 7:00pm",
            ]
        );
    }

    #[test]
    fn test_single_open_day() {
        let hours =
            WeeklyHours::all_closed().with(Weekday::Wednesday, DayHours::new("09:00", "17:00"));

        assert_eq!(
            lines(&hours),
            vec![
                "Mon\u{2013}Tue Closed",
                "Wed 9:00am \u{2013} 5:00pm",
                "Thu\u{2013}Sun Closed",
            ]
        );
    }

    #[test]
    fn test_all_days_identical() {
        let hours = WeeklyHours::from_fields(|key| {
            Some(if key.ends_with("_open") { "08:00" } else { "20:00" })
        });

        assert_eq!(lines(&hours), vec!["Mon\u{2013}Sun 8:00am \u{2013} 8:00pm"]);
    }

    #[test]
    fn test_single_closed_day() {
        let hours = WeeklyHours::from_fields(|_| Some("10:00"))
            .with(Weekday::Sunday, DayHours::closed());

        assert_eq!(
            lines(&hours),
            vec!["Mon\u{2013}Sat 10:00am \u{2013} 10:00am", "Sun Closed"]
        );
    }

    #[test]
    fn test_partial_days_group_with_closed() {
        let hours = WeeklyHours::all_closed()
            .with(Weekday::Monday, DayHours::new("09:00", ""))
            .with(Weekday::Tuesday, DayHours::new("", "17:00"));

        assert_eq!(lines(&hours), vec!["Mon\u{2013}Sun Closed"]);
    }

    #[test]
    fn test_grouping_uses_literal_strings() {
        let hours = WeeklyHours::all_closed()
            .with(Weekday::Thursday, DayHours::new("09:00", "17:00"))
            .with(Weekday::Friday, DayHours::new("09:00:00", "17:00"));
        let rows = group_into_rows(&hours);

        assert_eq!(rows.len(), 4);
        assert_eq!(format_row(&rows[1]), "Thu 9:00am \u{2013} 5:00pm");
        assert_eq!(format_row(&rows[2]), "Fri 9:00am \u{2013} 5:00pm");
    }

    #[test]
    fn test_rows_partition_the_week() {
        for hours in sample_weeks() {
            let days: Vec<Weekday> = group_into_rows(&hours)
                .iter()
                .flat_map(|row| row.days().collect::<Vec<_>>())
                .collect();
            assert_eq!(days, Weekday::ALL.to_vec());
        }
    }

    #[test]
    fn test_adjacent_rows_differ() {
        for hours in sample_weeks() {
            let rows = group_into_rows(&hours);
            for pair in rows.windows(2) {
                assert_ne!(pair[0].key(), pair[1].key());
            }
        }
    }

    #[test]
    fn test_rows_match_each_day() {
        for hours in sample_weeks() {
            for row in group_into_rows(&hours) {
                for day in row.days() {
                    assert_eq!(ScheduleKey::of(hours.day(day)), row.key());
                }
            }
        }
    }

    #[test]
    fn test_grouping_is_idempotent() {
        for hours in sample_weeks() {
            assert_eq!(lines(&hours), lines(&hours));
            assert_eq!(schedule_lines(Some(&hours)), lines(&hours));
        }
    }
}
