//! Business hours and their display schedule.
//!
//! A [`WeeklyHours`] record holds the literal open/close strings for each day.
//! [`group_into_rows`] collapses it into [`ScheduleRow`]s of consecutive days
//! sharing the same hours, and each row renders in 12-hour notation:
//!
//! ```
//! use hearth_core::hours::{DayHours, Weekday, WeeklyHours, schedule_lines};
//!
//! let hours = WeeklyHours::all_closed()
//!     .with(Weekday::Wednesday, DayHours::new("09:00", "17:00"));
//!
//! assert_eq!(
//!     schedule_lines(Some(&hours)),
//!     ["Mon–Tue Closed", "Wed 9:00am – 5:00pm", "Thu–Sun Closed"],
//! );
//! ```
//!
//! Everything here is pure and allocation-light; callers decide whether a
//! missing record means [`WeeklyHours::default_schedule`].

mod schedule;
mod weekday;
mod weekly;

pub use schedule::{
    RowHours, ScheduleKey, ScheduleRow, format_row, format_time, group_into_rows, schedule_lines,
};
pub use weekday::Weekday;
pub use weekly::{DayHours, WeeklyHours};
