use std::fmt::Display;

use crate::Calendar;
use crate::CalendarDate;
use crate::CalendarError;
use crate::convert;
use crate::month;

/// Solar Hijri week position for each Gregorian weekday index (0 = Sunday).
const SOLAR_HIJRI_ORDER: [u8; 7] = [1, 2, 3, 4, 5, 6, 0];

/// The weekday of a proleptic Gregorian date.
///
/// This is pure day counting with no time zone involved, so the result cannot be shifted by a
/// daylight saving transition.
///
/// The algorithm to convert from a civil year/month/day to the number of days that have elapsed
/// since the Unix epoch is taken from here:
/// https://howardhinnant.github.io/date_algorithms.html#days_from_civil
pub const fn weekday_of(year: i32, month: u8, day: u8) -> Weekday {
  let year = year as i64 - if month <= 2 { 1 } else { 0 };
  let month = month as i64;
  let day = day as i64;
  let era = if year >= 0 { year } else { year - 399 } / 400;
  let year_of_era = year - era * 400;
  let day_of_year = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day - 1;
  let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
  let days = era * 146_097 + day_of_era - 719_468;

  // 1970-01-01 was a Thursday.
  match (days + 4).rem_euclid(7) {
    0 => Weekday::Sunday,
    1 => Weekday::Monday,
    2 => Weekday::Tuesday,
    3 => Weekday::Wednesday,
    4 => Weekday::Thursday,
    5 => Weekday::Friday,
    6 => Weekday::Saturday,
    #[cfg(not(tarpaulin_include))]
    _ => panic!("Unreachable: rem_euclid(7) is always within 0..7"),
  }
}

/// The position of a weekday in the Solar Hijri week, which starts on Saturday (0).
#[inline]
pub const fn to_solar_hijri_week_ordering(weekday: Weekday) -> u8 {
  SOLAR_HIJRI_ORDER[weekday as usize]
}

/// The weekday on which the given month begins.
pub const fn first_weekday_of_month(
  calendar: Calendar,
  year: i32,
  month: u8,
) -> Result<Weekday, CalendarError> {
  if let Err(e) = month::month_length(calendar, year, month) {
    return Err(e);
  }
  let (g_year, g_month, g_day) = match calendar {
    Calendar::Gregorian => (year, month, 1),
    Calendar::SolarHijri => convert::solar_hijri_to_gregorian(year, month, 1),
  };
  Ok(weekday_of(g_year, g_month, g_day))
}

impl CalendarDate {
  /// Return the weekday corresponding to the given date.
  #[inline]
  pub const fn weekday(&self) -> Weekday {
    let (year, month, day) = self.to_gregorian().ymd();
    weekday_of(year, month, day)
  }
}

/// A representation of the day of the week.
///
/// The discriminants follow the Gregorian convention (Sunday = 0); use
/// [`Weekday::solar_hijri_index`] for the Solar Hijri week, which starts on Saturday.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
  Sunday = 0,
  Monday = 1,
  Tuesday = 2,
  Wednesday = 3,
  Thursday = 4,
  Friday = 5,
  Saturday = 6,
}

impl Display for Weekday {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    macro_rules! display {
      ($($e:ident),*) => {
        f.write_str(match self {
          $(Self::$e => stringify!($e)),*
        })
      };
    }
    display!(Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday)
  }
}

impl Weekday {
  /// The weekday with the given Gregorian index (0 = Sunday).
  pub const fn from_index(index: u8) -> Option<Self> {
    match index {
      0 => Some(Self::Sunday),
      1 => Some(Self::Monday),
      2 => Some(Self::Tuesday),
      3 => Some(Self::Wednesday),
      4 => Some(Self::Thursday),
      5 => Some(Self::Friday),
      6 => Some(Self::Saturday),
      _ => None,
    }
  }

  /// The weekday at the given position of the Solar Hijri week (0 = Saturday).
  pub const fn from_solar_hijri_index(index: u8) -> Option<Self> {
    match index {
      0 => Some(Self::Saturday),
      1..=6 => Self::from_index(index - 1),
      _ => None,
    }
  }

  /// The position of this weekday in the Solar Hijri week (0 = Saturday).
  #[inline]
  pub const fn solar_hijri_index(self) -> u8 {
    to_solar_hijri_week_ordering(self)
  }

  /// The position of this weekday in the week of the given calendar.
  pub const fn index_in(self, calendar: Calendar) -> u8 {
    match calendar {
      Calendar::Gregorian => self as u8,
      Calendar::SolarHijri => self.solar_hijri_index(),
    }
  }

  /// Whether this is Friday, the Solar Hijri weekly rest day.
  pub const fn is_solar_hijri_rest_day(self) -> bool {
    matches!(self, Self::Friday)
  }

  /// Whether this is Saturday or Sunday.
  pub const fn is_gregorian_weekend(self) -> bool {
    matches!(self, Self::Saturday | Self::Sunday)
  }

  /// Whether this weekday is a rest day in the given calendar.
  pub const fn is_rest_day(self, calendar: Calendar) -> bool {
    match calendar {
      Calendar::Gregorian => self.is_gregorian_weekend(),
      Calendar::SolarHijri => self.is_solar_hijri_rest_day(),
    }
  }

  /// The three-letter abbreviation for this weekday.
  pub const fn abbv(&self) -> &'static str {
    match self {
      Self::Sunday => "Sun",
      Self::Monday => "Mon",
      Self::Tuesday => "Tue",
      Self::Wednesday => "Wed",
      Self::Thursday => "Thu",
      Self::Friday => "Fri",
      Self::Saturday => "Sat",
    }
  }
}
