//! The `shamsi` crate provides Solar Hijri (Persian, "Shamsi") calendar dates, exact conversion
//! to and from the Gregorian calendar, and the leap year, month length and weekday rules both
//! calendars need.
//!
//! The conversion engine is a set of pure `const fn`s over integers: no I/O, no global state,
//! safe to call from any thread.
//!
//! ## Examples
//!
//! Converting a date:
//!
//! ```rs
//! use shamsi::CalendarDate;
//!
//! let nowruz = CalendarDate::solar_hijri(1403, 1, 1);
//! let gregorian = nowruz.to_gregorian();
//! ```
//!
//! You can also use the `shamsi!` and `gregorian!` macros to get a syntax resembling a date
//! literal:
//!
//! ```rs
//! use shamsi::gregorian;
//! use shamsi::shamsi;
//!
//! assert_eq!(gregorian! { 2024-03-20 }.to_solar_hijri(), shamsi! { 1403-01-01 });
//! ```

use std::fmt;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Construct a Solar Hijri date from a `YYYY-MM-DD` literal.
///
/// ## Examples
///
/// ```
/// # use shamsi::shamsi;
/// let d = shamsi! { 1403-01-01 };
/// assert_eq!(d.year(), 1403);
/// assert_eq!(d.month(), 1);
/// assert_eq!(d.day(), 1);
/// ```
#[macro_export]
macro_rules! shamsi {
  ($y:literal-$m:literal-$d:literal) => {{
    #[allow(clippy::zero_prefixed_literal)]
    {
      $crate::CalendarDate::solar_hijri($y, $m, $d)
    }
  }};
}

/// Construct a Gregorian date from a `YYYY-MM-DD` literal.
///
/// ## Examples
///
/// ```
/// # use shamsi::gregorian;
/// let d = gregorian! { 2024-03-20 };
/// assert_eq!(d.year(), 2024);
/// assert_eq!(d.month(), 3);
/// assert_eq!(d.day(), 20);
/// ```
#[macro_export]
macro_rules! gregorian {
  ($y:literal-$m:literal-$d:literal) => {{
    #[allow(clippy::zero_prefixed_literal)]
    {
      $crate::CalendarDate::gregorian($y, $m, $d)
    }
  }};
}

pub mod convert;
mod error;
mod format;
pub mod iter;
pub mod leap;
pub mod month;
mod parse;
#[cfg(feature = "serde")]
pub mod serde;
mod weekday;

pub use error::CalendarError;
pub use error::ParseError;
pub use format::FormattedDate;
pub use weekday::Weekday;
pub use weekday::first_weekday_of_month;
pub use weekday::to_solar_hijri_week_ordering;
pub use weekday::weekday_of;

/// A calendar system.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Calendar {
  /// The proleptic Gregorian calendar.
  Gregorian,
  /// The Solar Hijri (Persian, "Shamsi") calendar.
  SolarHijri,
}

impl Calendar {
  /// The calendar a date is converted into by [`CalendarDate::convert_to`] when switching sides.
  pub const fn other(self) -> Self {
    match self {
      Self::Gregorian => Self::SolarHijri,
      Self::SolarHijri => Self::Gregorian,
    }
  }
}

impl fmt::Display for Calendar {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Gregorian => "Gregorian",
      Self::SolarHijri => "Solar Hijri",
    })
  }
}

/// A single calendar date, tagged with the calendar its components belong to.
///
/// A `CalendarDate` always holds a valid date: the month is within `1..=12`, the day is within
/// that month, and the day lies within [`convert::supported_range`] (Solar Hijri 1-01-01 through
/// 9999-12-29, or Gregorian 622-03-21 through 10621-03-19), so it can always be converted into
/// the other calendar. Ordering is chronological between dates of the same
/// calendar; dates of different calendars order Gregorian first.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
  calendar: Calendar,
  year: i32,
  month: u8,
  day: u8,
}

impl CalendarDate {
  /// Construct a new Solar Hijri date from the provided year, month, and day.
  ///
  /// ## Examples
  ///
  /// ```
  /// use shamsi::CalendarDate;
  /// let date = CalendarDate::solar_hijri(1403, 12, 30);
  /// assert_eq!(date.year(), 1403);
  /// assert_eq!(date.month(), 12);
  /// assert_eq!(date.day(), 30);
  /// ```
  ///
  /// ## Panic
  ///
  /// This function panics if it receives out-of-bounds values (e.g. "Mehr 31" or "Esfand 30" in
  /// a common year). Use [`CalendarDate::try_new`] to validate untrusted input.
  pub const fn solar_hijri(year: i32, month: u8, day: u8) -> Self {
    match Self::try_new(Calendar::SolarHijri, year, month, day) {
      Ok(date) => date,
      Err(_) => panic!("Solar Hijri date out-of-bounds"),
    }
  }

  /// Construct a new Gregorian date from the provided year, month, and day.
  ///
  /// ## Panic
  ///
  /// This function panics if it receives out-of-bounds values (e.g. "April 31" or "February 29"
  /// in a common year). Use [`CalendarDate::try_new`] to validate untrusted input.
  pub const fn gregorian(year: i32, month: u8, day: u8) -> Self {
    match Self::try_new(Calendar::Gregorian, year, month, day) {
      Ok(date) => date,
      Err(_) => panic!("Gregorian date out-of-bounds"),
    }
  }

  /// Construct a new date, validating every component against the given calendar.
  ///
  /// ## Examples
  ///
  /// ```
  /// use shamsi::Calendar;
  /// use shamsi::CalendarDate;
  /// use shamsi::CalendarError;
  ///
  /// assert!(CalendarDate::try_new(Calendar::SolarHijri, 1403, 12, 30).is_ok());
  /// assert!(matches!(
  ///   CalendarDate::try_new(Calendar::SolarHijri, 1404, 12, 30),
  ///   Err(CalendarError::DayOutOfRange { max: 29, .. })
  /// ));
  /// assert!(matches!(
  ///   CalendarDate::try_new(Calendar::Gregorian, 600, 1, 1),
  ///   Err(CalendarError::DateOutOfRange { .. })
  /// ));
  /// ```
  pub const fn try_new(
    calendar: Calendar,
    year: i32,
    month: u8,
    day: u8,
  ) -> Result<Self, CalendarError> {
    if year < 1 {
      return Err(CalendarError::YearOutOfRange { year });
    }
    let max = match month::month_length(calendar, year, month) {
      Ok(max) => max,
      Err(e) => return Err(e),
    };
    if day < 1 || day > max {
      return Err(CalendarError::DayOutOfRange { calendar, year, month, day, max });
    }
    if !convert::is_supported(calendar, year as i64, month, day) {
      return Err(CalendarError::DateOutOfRange { calendar, year: year as i64, month, day });
    }
    Ok(Self { calendar, year, month, day })
  }

  /// Parse a `YYYY/MM/DD`, `YYYY-MM-DD`, or `YYYY.MM.DD` string as a date in the given calendar.
  ///
  /// ## Examples
  ///
  /// ```
  /// use shamsi::Calendar;
  /// use shamsi::CalendarDate;
  ///
  /// let date = CalendarDate::parse("1403/09/15", Calendar::SolarHijri)?;
  /// assert_eq!(date, shamsi::shamsi! { 1403-09-15 });
  /// # Ok::<(), shamsi::ParseError>(())
  /// ```
  pub fn parse(date_str: impl AsRef<str>, calendar: Calendar) -> Result<Self, ParseError> {
    let (year, month, day) = parse::parse_ymd(date_str.as_ref())?;
    Ok(Self::try_new(calendar, year, month, day)?)
  }
}

impl CalendarDate {
  /// The calendar this date's components belong to.
  #[inline]
  pub const fn calendar(&self) -> Calendar {
    self.calendar
  }

  /// The year, month, and day for the given date.
  #[inline]
  pub const fn ymd(&self) -> (i32, u8, u8) {
    (self.year, self.month, self.day)
  }

  /// Returns the year number in the calendar date.
  #[inline]
  pub const fn year(&self) -> i32 {
    self.year
  }

  /// Returns the month number, starting from 1.
  ///
  /// The return value ranges from 1 to 12.
  #[inline]
  pub const fn month(&self) -> u8 {
    self.month
  }

  /// Returns the day of the month, starting from 1.
  ///
  /// The return value ranges from 1 to 31. (The last day of the month differs by months.)
  #[inline]
  pub const fn day(&self) -> u8 {
    self.day
  }

  /// The day of the current year. Range: `[1, 366]`
  #[inline]
  pub const fn day_of_year(&self) -> u16 {
    month::day_of_year(self.calendar, self.year, self.month, self.day)
  }

  /// The number of days in this date's month.
  pub const fn month_length(&self) -> u8 {
    match month::month_length(self.calendar, self.year, self.month) {
      Ok(length) => length,
      #[cfg(not(tarpaulin_include))]
      Err(_) => panic!("Unreachable: a CalendarDate always holds a valid month"),
    }
  }

  /// Whether this date falls in a leap year of its own calendar.
  pub const fn is_leap_year(&self) -> bool {
    match self.calendar {
      Calendar::Gregorian => leap::is_gregorian_leap_year(self.year),
      Calendar::SolarHijri => leap::is_solar_hijri_leap_year(self.year),
    }
  }

  /// The English name (or transliteration) of this date's month.
  pub const fn month_name(&self) -> &'static str {
    match month::month_name(self.calendar, self.month) {
      Ok(name) => name,
      #[cfg(not(tarpaulin_include))]
      Err(_) => panic!("Unreachable: a CalendarDate always holds a valid month"),
    }
  }

  /// The three-letter abbreviation of this date's month.
  pub(crate) const fn month_abbv(&self) -> &'static str {
    match month::month_abbv(self.calendar, self.month) {
      Ok(name) => name,
      #[cfg(not(tarpaulin_include))]
      Err(_) => panic!("Unreachable: a CalendarDate always holds a valid month"),
    }
  }
}

impl CalendarDate {
  /// The same day in the Gregorian calendar.
  ///
  /// ## Examples
  ///
  /// ```
  /// # use shamsi::gregorian;
  /// # use shamsi::shamsi;
  /// assert_eq!(shamsi! { 1403-01-01 }.to_gregorian(), gregorian! { 2024-03-20 });
  /// ```
  pub const fn to_gregorian(&self) -> Self {
    match self.calendar {
      Calendar::Gregorian => *self,
      Calendar::SolarHijri => {
        let (year, month, day) = convert::solar_hijri_to_gregorian(self.year, self.month, self.day);
        Self { calendar: Calendar::Gregorian, year, month, day }
      },
    }
  }

  /// The same day in the Solar Hijri calendar.
  ///
  /// ## Examples
  ///
  /// ```
  /// # use shamsi::gregorian;
  /// # use shamsi::shamsi;
  /// assert_eq!(gregorian! { 2024-12-05 }.to_solar_hijri(), shamsi! { 1403-09-15 });
  /// ```
  pub const fn to_solar_hijri(&self) -> Self {
    match self.calendar {
      Calendar::SolarHijri => *self,
      Calendar::Gregorian => {
        let (year, month, day) = convert::gregorian_to_solar_hijri(self.year, self.month, self.day);
        Self { calendar: Calendar::SolarHijri, year, month, day }
      },
    }
  }

  /// The same day in the given calendar.
  pub const fn convert_to(&self, calendar: Calendar) -> Self {
    match calendar {
      Calendar::Gregorian => self.to_gregorian(),
      Calendar::SolarHijri => self.to_solar_hijri(),
    }
  }
}

impl CalendarDate {
  /// The following day, in the same calendar.
  ///
  /// ## Examples
  ///
  /// ```
  /// # use shamsi::shamsi;
  /// assert_eq!(shamsi! { 1403-06-31 }.succ(), shamsi! { 1403-07-01 });
  /// assert_eq!(shamsi! { 1403-12-30 }.succ(), shamsi! { 1404-01-01 });
  /// ```
  ///
  /// ## Panic
  ///
  /// Panics when called on the last supported day.
  pub const fn succ(&self) -> Self {
    let Self { calendar, year, month, day } = *self;
    let next = match (day < self.month_length(), month < 12) {
      (true, _) => Self { calendar, year, month, day: day + 1 },
      (false, true) => Self { calendar, year, month: month + 1, day: 1 },
      (false, false) => Self { calendar, year: year + 1, month: 1, day: 1 },
    };
    assert!(next.is_supported(), "No supported date follows this one");
    next
  }

  /// The preceding day, in the same calendar.
  ///
  /// ## Panic
  ///
  /// Panics when called on the first supported day (Solar Hijri 1-01-01, Gregorian 622-03-21).
  pub const fn pred(&self) -> Self {
    let Self { calendar, year, month, day } = *self;
    let previous = match (day > 1, month > 1) {
      (true, _) => Self { calendar, year, month, day: day - 1 },
      (false, true) => {
        let day = match month::month_length(calendar, year, month - 1) {
          Ok(length) => length,
          #[cfg(not(tarpaulin_include))]
          Err(_) => panic!("Unreachable: month - 1 is within 1..=11"),
        };
        Self { calendar, year, month: month - 1, day }
      },
      (false, false) => {
        assert!(year > 1, "No supported date precedes this one");
        Self { calendar, year: year - 1, month: 12, day: 1 }.last_of_month()
      },
    };
    assert!(previous.is_supported(), "No supported date precedes this one");
    previous
  }

  /// The last day of this date's month.
  ///
  /// Gregorian March 10621 is cut short at the end of the supported range, on the 19th.
  pub const fn last_of_month(&self) -> Self {
    let Self { calendar, year, month, .. } = *self;
    let mut day = match month::month_length(calendar, year, month) {
      Ok(length) => length,
      #[cfg(not(tarpaulin_include))]
      Err(_) => panic!("Unreachable: a CalendarDate always holds a valid month"),
    };
    while day > 1 && !convert::is_supported(calendar, year as i64, month, day) {
      day -= 1;
    }
    Self { calendar, year, month, day }
  }

  const fn is_supported(&self) -> bool {
    convert::is_supported(self.calendar, self.year as i64, self.month, self.day)
  }

  /// An iterator of dates beginning with this date, and ending with the provided end date
  /// (inclusive).
  ///
  /// The end date is converted into this date's calendar first.
  pub fn iter_through(&self, end: CalendarDate) -> iter::DateIterator {
    iter::DateIterator::new(self, end.convert_to(self.calendar))
  }
}

impl CalendarDate {
  /// Format the date according to the provided `strftime` specifier.
  ///
  /// Supported specifiers: `%Y %C %y %m %d %B %b %h %A %a %w %u %j %F %D %t %n %%`, with the
  /// padding modifiers `%-` (none), `%_` (spaces), and `%0` (zeros). `%B` and `%b` name the
  /// month in this date's own calendar; `%w` numbers the weekday within this calendar's week.
  pub fn format<'a>(&self, format_str: &'a str) -> FormattedDate<'a> {
    FormattedDate { date: *self, format: format_str }
  }
}

impl CalendarDate {
  /// The date representing today in the given calendar, according to the system local clock.
  #[cfg(feature = "tz")]
  pub fn today(calendar: Calendar) -> anyhow::Result<Self> {
    let tz = tzdb::local_tz().ok_or(anyhow::format_err!("Could not determine local time zone"))?;
    let now = now().duration_since(UNIX_EPOCH)?.as_secs() as i64;
    let offset = tz.find_local_time_type(now)?.ut_offset() as i64;
    Ok(Self::from_timestamp(now + offset).convert_to(calendar))
  }

  /// The date representing today in the given calendar, in UTC.
  ///
  /// ## Panic
  ///
  /// This function will panic if the system clock is set to a time prior to January 1, 1970.
  pub fn today_utc(calendar: Calendar) -> Self {
    let now = now().duration_since(UNIX_EPOCH).expect("system time set prior to 1970").as_secs();
    Self::from_timestamp(now as i64).convert_to(calendar)
  }

  /// The Gregorian date on which the given Unix timestamp falls, in UTC.
  ///
  /// ## Panic
  ///
  /// Panics if the timestamp falls outside the supported range (Gregorian 622-03-21 through
  /// 10621-03-19). Use [`CalendarDate::try_from_timestamp`] for untrusted input.
  pub const fn from_timestamp(unix_timestamp: i64) -> Self {
    match Self::try_from_timestamp(unix_timestamp) {
      Ok(date) => date,
      Err(_) => panic!("timestamp out of the supported range"),
    }
  }

  /// The Gregorian date on which the given Unix timestamp falls, in UTC, or an error if that
  /// date is outside the supported range.
  ///
  /// The algorithm to convert from a count of days since the epoch to a civil year/month/day is
  /// taken from here:
  /// https://howardhinnant.github.io/date_algorithms.html#civil_from_days
  pub const fn try_from_timestamp(unix_timestamp: i64) -> Result<Self, CalendarError> {
    let shifted = unix_timestamp.div_euclid(86_400) + 719_468; // Days from March 1, 0 A.D.
    let era = if shifted >= 0 { shifted } else { shifted - 146_096 } / 146_097;
    let doe = shifted - era * 146_097; // day of era: [0, 146_097)
    let year_of_era = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = year_of_era + era * 400;
    let day_of_year = doe - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = year + if month <= 2 { 1 } else { 0 };
    let (calendar, month, day) = (Calendar::Gregorian, month as u8, day as u8);
    match convert::is_supported(calendar, year, month, day) {
      true => Ok(Self { calendar, year: year as i32, month, day }),
      false => Err(CalendarError::DateOutOfRange { calendar, year, month, day }),
    }
  }
}

impl fmt::Debug for CalendarDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let calendar = match self.calendar {
      Calendar::Gregorian => "Gregorian",
      Calendar::SolarHijri => "SolarHijri",
    };
    write!(f, "{}({})", calendar, self.format("%Y-%m-%d"))
  }
}

impl fmt::Display for CalendarDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.format("%Y-%m-%d"))
  }
}

#[cfg(not(test))]
fn now() -> SystemTime {
  SystemTime::now()
}

#[cfg(test)]
use tests::now;
