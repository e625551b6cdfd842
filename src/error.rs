use crate::Calendar;
use crate::convert;

/// An out-of-range date component.
///
/// Returned by month-length lookups and by validating constructors. The conversion functions
/// themselves never return errors; they expect components that already passed these checks.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CalendarError {
  /// The month is outside `1..=12`.
  #[error("month {month} is out of range (must be 1..=12)")]
  MonthOutOfRange { month: u8 },

  /// The day is zero or past the end of its month.
  #[error("day {day} is out of range for {calendar} {year}-{month:02} (must be 1..={max})")]
  DayOutOfRange { calendar: Calendar, year: i32, month: u8, day: u8, max: u8 },

  /// The year is zero or negative.
  #[error("year {year} is out of range (must be at least 1)")]
  YearOutOfRange { year: i32 },

  /// The date is real but lies outside [`convert::supported_range`].
  #[error(
    "{calendar} date {year}-{month:02}-{day:02} is outside the supported range ({})",
    describe_range(.calendar)
  )]
  DateOutOfRange { calendar: Calendar, year: i64, month: u8, day: u8 },
}

fn describe_range(calendar: &Calendar) -> String {
  let ((y0, m0, d0), (y1, m1, d1)) = convert::supported_range(*calendar);
  format!("{y0}-{m0:02}-{d0:02} through {y1}-{m1:02}-{d1:02}")
}

/// A failure to read a date from a string.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
  /// The string is not three numeric components joined by `/`, `-`, or `.`.
  #[error("invalid date format {src:?}, expected YYYY/MM/DD, YYYY-MM-DD, or YYYY.MM.DD")]
  Format { src: String },

  /// One component could not be read as a number.
  #[error("failed to parse {component} in {src:?}")]
  Component { src: String, component: &'static str },

  /// The components were read but do not form a valid date.
  #[error(transparent)]
  Invalid(#[from] CalendarError),
}
