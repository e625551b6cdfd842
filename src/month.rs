//! Month lengths, month names, and day-of-year arithmetic.

use crate::Calendar;
use crate::CalendarError;
use crate::leap;

/// The number of days in each Gregorian month of a common year.
const GREGORIAN_MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The day of the year on which each Gregorian month starts, indexed from 0 (not 1), in a common
/// year.
///
/// Leap years are one value higher starting at index 2.
pub(crate) const GREGORIAN_MONTH_STARTS: [u16; 12] =
  [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// The number of days in the first six Solar Hijri months combined.
pub(crate) const SOLAR_HIJRI_FIRST_HALF: u16 = 186;

/// The number of days in the given Solar Hijri month.
///
/// Months 1-6 have 31 days and months 7-11 have 30. Esfand (month 12) has 30 days in a leap
/// year and 29 otherwise.
pub const fn solar_hijri_month_length(year: i32, month: u8) -> Result<u8, CalendarError> {
  match month {
    1..=6 => Ok(31),
    7..=11 => Ok(30),
    12 => Ok(if leap::is_solar_hijri_leap_year(year) { 30 } else { 29 }),
    _ => Err(CalendarError::MonthOutOfRange { month }),
  }
}

/// The number of days in the given Gregorian month.
pub const fn gregorian_month_length(year: i32, month: u8) -> Result<u8, CalendarError> {
  match month {
    2 if leap::is_gregorian_leap_year(year) => Ok(29),
    1..=12 => Ok(GREGORIAN_MONTH_DAYS[month as usize - 1]),
    _ => Err(CalendarError::MonthOutOfRange { month }),
  }
}

/// The number of days in the given month of the given calendar.
pub const fn month_length(calendar: Calendar, year: i32, month: u8) -> Result<u8, CalendarError> {
  match calendar {
    Calendar::Gregorian => gregorian_month_length(year, month),
    Calendar::SolarHijri => solar_hijri_month_length(year, month),
  }
}

/// The day of the year (1-based) for a date whose components are already validated.
pub(crate) const fn day_of_year(calendar: Calendar, year: i32, month: u8, day: u8) -> u16 {
  let day = day as u16;
  match calendar {
    Calendar::SolarHijri => match month {
      1..=6 => (month as u16 - 1) * 31 + day,
      _ => SOLAR_HIJRI_FIRST_HALF + (month as u16 - 7) * 30 + day,
    },
    Calendar::Gregorian => {
      let leap_day = if month > 2 && leap::is_gregorian_leap_year(year) { 1 } else { 0 };
      GREGORIAN_MONTH_STARTS[month as usize - 1] + leap_day + day
    },
  }
}

macro_rules! month_names {
  ($($num:literal => $sh_short:ident ~ $sh_long:ident, $g_short:ident ~ $g_long:ident)*) => {
    /// The English transliteration of a Solar Hijri month name.
    pub const fn solar_hijri_month_name(month: u8) -> Result<&'static str, CalendarError> {
      match month {
        $($num => Ok(stringify!($sh_long)),)*
        _ => Err(CalendarError::MonthOutOfRange { month }),
      }
    }

    /// The English name of a Gregorian month.
    pub const fn gregorian_month_name(month: u8) -> Result<&'static str, CalendarError> {
      match month {
        $($num => Ok(stringify!($g_long)),)*
        _ => Err(CalendarError::MonthOutOfRange { month }),
      }
    }

    /// The three-letter abbreviation of a month name in the given calendar.
    pub(crate) const fn month_abbv(
      calendar: Calendar,
      month: u8,
    ) -> Result<&'static str, CalendarError> {
      match (calendar, month) {
        $((Calendar::SolarHijri, $num) => Ok(stringify!($sh_short)),)*
        $((Calendar::Gregorian, $num) => Ok(stringify!($g_short)),)*
        _ => Err(CalendarError::MonthOutOfRange { month }),
      }
    }
  };
}
month_names! {
   1 => Far ~ Farvardin,   Jan ~ January
   2 => Ord ~ Ordibehesht, Feb ~ February
   3 => Kho ~ Khordad,     Mar ~ March
   4 => Tir ~ Tir,         Apr ~ April
   5 => Mor ~ Mordad,      May ~ May
   6 => Sha ~ Shahrivar,   Jun ~ June
   7 => Meh ~ Mehr,        Jul ~ July
   8 => Aba ~ Aban,        Aug ~ August
   9 => Aza ~ Azar,        Sep ~ September
  10 => Dey ~ Dey,         Oct ~ October
  11 => Bah ~ Bahman,      Nov ~ November
  12 => Esf ~ Esfand,      Dec ~ December
}

/// The name of a month in the given calendar.
pub const fn month_name(calendar: Calendar, month: u8) -> Result<&'static str, CalendarError> {
  match calendar {
    Calendar::Gregorian => gregorian_month_name(month),
    Calendar::SolarHijri => solar_hijri_month_name(month),
  }
}
