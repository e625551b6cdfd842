//! Conversion between Gregorian and Solar Hijri calendar coordinates.
//!
//! Both directions turn the source date into a count of days from a shared anchor and then peel
//! whole cycles off that count to rebuild a date in the target calendar. The Solar Hijri side
//! uses 33-year sub-cycles of the 2820-year grand cycle; the Gregorian side uses the 400-year,
//! 100-year, and 4-year cycles.
//!
//! Both functions expect validated input: a real date within [`supported_range`]. Other input
//! gives unspecified results and may panic. In particular, years far outside the range wrap
//! around `i32`; [`CalendarDate::try_new`](crate::CalendarDate::try_new) rejects them.

use crate::Calendar;
use crate::leap;
use crate::month::GREGORIAN_MONTH_STARTS;
use crate::month::SOLAR_HIJRI_FIRST_HALF;

/// Solar Hijri years are rebased by this much so both calendars share one anchor.
const YEAR_REBASE: i64 = 1595;

/// Days from the rebased anchor to the start of Gregorian year 0.
const GREGORIAN_ANCHOR: i64 = 355_666;

/// Days from the rebased anchor to the start of (rebased) Solar Hijri year 0, less one.
const SOLAR_HIJRI_ANCHOR: i64 = -355_668;

/// Days in 33 Solar Hijri years (8 of them leap).
const DAYS_PER_33_YEARS: i64 = 12_053;

/// Days in a 4-year block containing one leap year.
const DAYS_PER_4_YEARS: i64 = 1_461;

/// Days in 400 Gregorian years.
const DAYS_PER_400_YEARS: i64 = 146_097;

/// Days in a Gregorian century whose first year is not a leap year.
const DAYS_PER_CENTURY: i64 = 36_524;

/// The first and last supported day of each calendar, as `(year, month, day)` pairs.
///
/// Solar Hijri 1-01-01 through 9999-12-29, which is Gregorian 622-03-21 through 10621-03-19.
pub const fn supported_range(calendar: Calendar) -> ((i32, u8, u8), (i32, u8, u8)) {
  match calendar {
    Calendar::SolarHijri => ((1, 1, 1), (9999, 12, 29)),
    Calendar::Gregorian => ((622, 3, 21), (10621, 3, 19)),
  }
}

/// Whether the given day falls within [`supported_range`].
pub(crate) const fn is_supported(calendar: Calendar, year: i64, month: u8, day: u8) -> bool {
  const fn precedes(a: (i64, u8, u8), b: (i32, u8, u8)) -> bool {
    let b_year = b.0 as i64;
    a.0 < b_year || (a.0 == b_year && (a.1 < b.1 || (a.1 == b.1 && a.2 < b.2)))
  }
  const fn follows(a: (i64, u8, u8), b: (i32, u8, u8)) -> bool {
    let b_year = b.0 as i64;
    a.0 > b_year || (a.0 == b_year && (a.1 > b.1 || (a.1 == b.1 && a.2 > b.2)))
  }
  let (first, last) = supported_range(calendar);
  !precedes((year, month, day), first) && !follows((year, month, day), last)
}

/// Convert a Gregorian date to the Solar Hijri date falling on the same day.
///
/// ## Examples
///
/// ```
/// use shamsi::convert::gregorian_to_solar_hijri;
/// assert_eq!(gregorian_to_solar_hijri(2024, 3, 20), (1403, 1, 1));
/// assert_eq!(gregorian_to_solar_hijri(2025, 3, 20), (1403, 12, 30));
/// ```
pub const fn gregorian_to_solar_hijri(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
  let year = year as i64;

  // February's leap day only counts once the date is past it, so January and February take
  // their leap days from the year before.
  let leap_basis = if month > 2 { year + 1 } else { year };
  let mut days = GREGORIAN_ANCHOR
    + 365 * year
    + (leap_basis + 3) / 4
    - (leap_basis + 99) / 100
    + (leap_basis + 399) / 400
    + GREGORIAN_MONTH_STARTS[month as usize - 1] as i64
    + day as i64;

  let mut sh_year = -YEAR_REBASE + 33 * (days / DAYS_PER_33_YEARS);
  days %= DAYS_PER_33_YEARS;
  sh_year += 4 * (days / DAYS_PER_4_YEARS);
  days %= DAYS_PER_4_YEARS;
  if days > 365 {
    sh_year += (days - 1) / 365;
    days = (days - 1) % 365;
  }

  // `days` is now the 0-based day of the Solar Hijri year.
  let first_half = SOLAR_HIJRI_FIRST_HALF as i64;
  let (sh_month, sh_day) = match days < first_half {
    true => (1 + days / 31, 1 + days % 31),
    false => (7 + (days - first_half) / 30, 1 + (days - first_half) % 30),
  };
  (sh_year as i32, sh_month as u8, sh_day as u8)
}

/// Convert a Solar Hijri date to the Gregorian date falling on the same day.
///
/// ## Examples
///
/// ```
/// use shamsi::convert::solar_hijri_to_gregorian;
/// assert_eq!(solar_hijri_to_gregorian(1403, 1, 1), (2024, 3, 20));
/// assert_eq!(solar_hijri_to_gregorian(1403, 9, 15), (2024, 12, 5));
/// ```
pub const fn solar_hijri_to_gregorian(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
  let year = year as i64 + YEAR_REBASE;
  let month = month as i64;
  let mut days = SOLAR_HIJRI_ANCHOR
    + 365 * year
    + (year / 33) * 8
    + (year % 33 + 3) / 4
    + day as i64
    + match month < 7 {
      true => (month - 1) * 31,
      false => SOLAR_HIJRI_FIRST_HALF as i64 + (month - 7) * 30,
    };

  let mut g_year = 400 * (days / DAYS_PER_400_YEARS);
  days %= DAYS_PER_400_YEARS;

  // Only the first century of each 400-year block has a leap day in its first year.
  if days > DAYS_PER_CENTURY {
    days -= 1;
    g_year += 100 * (days / DAYS_PER_CENTURY);
    days %= DAYS_PER_CENTURY;
    if days >= 365 {
      days += 1;
    }
  }

  g_year += 4 * (days / DAYS_PER_4_YEARS);
  days %= DAYS_PER_4_YEARS;
  if days > 365 {
    g_year += (days - 1) / 365;
    days = (days - 1) % 365;
  }

  // Walk the 0-based day of year through the month table.
  let leap = leap::is_gregorian_leap_year(g_year as i32);
  let mut g_day = days + 1;
  let mut g_month = 1;
  while g_month < 12 {
    let length = match (g_month, leap) {
      (2, true) => 29,
      (2, false) => 28,
      (4 | 6 | 9 | 11, _) => 30,
      _ => 31,
    };
    if g_day <= length {
      break;
    }
    g_day -= length;
    g_month += 1;
  }
  (g_year as i32, g_month as u8, g_day as u8)
}

#[cfg(test)]
mod tests {
  use assert2::check;
  use proptest::prelude::*;

  use super::*;
  use crate::month;

  #[test]
  fn test_known_dates() {
    for (g, sh) in [
      ((2024, 3, 20), (1403, 1, 1)),
      ((2025, 3, 21), (1404, 1, 1)),
      ((2025, 3, 20), (1403, 12, 30)),
      ((2024, 12, 5), (1403, 9, 15)),
      ((1979, 2, 11), (1357, 11, 22)),
      ((2000, 1, 1), (1378, 10, 11)),
      ((1970, 1, 1), (1348, 10, 11)),
      ((2016, 3, 20), (1395, 1, 1)),
      ((622, 3, 21), (1, 1, 1)),
      ((1600, 12, 31), (979, 10, 11)),
      ((1601, 1, 1), (979, 10, 12)),
    ] {
      check!(gregorian_to_solar_hijri(g.0, g.1, g.2) == sh, "{:?}", g);
      check!(solar_hijri_to_gregorian(sh.0, sh.1, sh.2) == g, "{:?}", sh);
    }
  }

  #[test]
  fn test_century_boundaries() {
    // Non-leap century years and the leap 400th year.
    for (g, sh) in [
      ((1900, 2, 28), (1278, 12, 9)),
      ((1900, 3, 1), (1278, 12, 10)),
      ((2000, 2, 29), (1378, 12, 10)),
      ((2100, 3, 1), (1478, 12, 11)),
    ] {
      check!(gregorian_to_solar_hijri(g.0, g.1, g.2) == sh, "{:?}", g);
      check!(solar_hijri_to_gregorian(sh.0, sh.1, sh.2) == g, "{:?}", sh);
    }
  }

  #[test]
  fn test_gregorian_sweep() {
    // Every Gregorian day from 1000 through 3000 converts to the day after the previous
    // conversion, and converts back to itself.
    let mut previous = gregorian_to_solar_hijri(999, 12, 31);
    for year in 1000..=3000 {
      for m in 1..=12 {
        let length = month::gregorian_month_length(year, m).unwrap_or_default();
        for d in 1..=length {
          let sh = gregorian_to_solar_hijri(year, m, d);
          check!(solar_hijri_to_gregorian(sh.0, sh.1, sh.2) == (year, m, d));
          check!(sh == next_solar_hijri(previous), "after {:?}", previous);
          previous = sh;
        }
      }
    }
  }

  #[test]
  fn test_solar_hijri_sweep() {
    let mut previous = solar_hijri_to_gregorian(1, 1, 1);
    check!(previous == (622, 3, 21));
    for year in 1..=3000 {
      for m in 1..=12 {
        let length = month::solar_hijri_month_length(year, m).unwrap_or_default();
        for d in 1..=length {
          let g = solar_hijri_to_gregorian(year, m, d);
          check!(gregorian_to_solar_hijri(g.0, g.1, g.2) == (year, m, d));
          if (year, m, d) != (1, 1, 1) {
            check!(g == next_gregorian(previous), "after {:?}", previous);
          }
          previous = g;
        }
      }
    }
  }

  fn next_solar_hijri((y, m, d): (i32, u8, u8)) -> (i32, u8, u8) {
    match (d < month::solar_hijri_month_length(y, m).unwrap_or_default(), m < 12) {
      (true, _) => (y, m, d + 1),
      (false, true) => (y, m + 1, 1),
      (false, false) => (y + 1, 1, 1),
    }
  }

  fn next_gregorian((y, m, d): (i32, u8, u8)) -> (i32, u8, u8) {
    match (d < month::gregorian_month_length(y, m).unwrap_or_default(), m < 12) {
      (true, _) => (y, m, d + 1),
      (false, true) => (y, m + 1, 1),
      (false, false) => (y + 1, 1, 1),
    }
  }

  #[test]
  fn test_supported_range() {
    let (sh_first, sh_last) = supported_range(Calendar::SolarHijri);
    let (g_first, g_last) = supported_range(Calendar::Gregorian);
    check!(solar_hijri_to_gregorian(sh_first.0, sh_first.1, sh_first.2) == g_first);
    check!(solar_hijri_to_gregorian(sh_last.0, sh_last.1, sh_last.2) == g_last);
    check!(gregorian_to_solar_hijri(g_last.0, g_last.1, g_last.2) == sh_last);
    check!(!leap::is_solar_hijri_leap_year(sh_last.0));

    check!(is_supported(Calendar::SolarHijri, 1, 1, 1));
    check!(is_supported(Calendar::SolarHijri, 9999, 12, 29));
    check!(!is_supported(Calendar::SolarHijri, 0, 12, 29));
    check!(!is_supported(Calendar::SolarHijri, 10_000, 1, 1));
    check!(is_supported(Calendar::Gregorian, 622, 3, 21));
    check!(!is_supported(Calendar::Gregorian, 622, 3, 20));
    check!(!is_supported(Calendar::Gregorian, 1, 1, 1));
    check!(is_supported(Calendar::Gregorian, 10_621, 3, 19));
    check!(!is_supported(Calendar::Gregorian, 10_621, 3, 20));
    check!(!is_supported(Calendar::Gregorian, i64::from(i32::MAX) + 1, 1, 1));
  }

  #[test]
  fn test_top_of_range_sweep() {
    let mut previous = solar_hijri_to_gregorian(9000, 1, 1);
    for year in 9000..=9999 {
      for m in 1..=12 {
        let length = month::solar_hijri_month_length(year, m).unwrap_or_default();
        for d in 1..=length {
          let g = solar_hijri_to_gregorian(year, m, d);
          check!(gregorian_to_solar_hijri(g.0, g.1, g.2) == (year, m, d));
          if (year, m, d) != (9000, 1, 1) {
            check!(g == next_gregorian(previous), "after {:?}", previous);
          }
          previous = g;
        }
      }
    }
  }

  proptest! {
    #[test]
    fn prop_round_trip_gregorian(year in 623i32..=10620, month in 1u8..=12, day in 1u8..=31) {
      let day = day.min(month::gregorian_month_length(year, month).unwrap_or_default());
      let sh = gregorian_to_solar_hijri(year, month, day);
      prop_assert_eq!(solar_hijri_to_gregorian(sh.0, sh.1, sh.2), (year, month, day));
    }

    #[test]
    fn prop_round_trip_solar_hijri(year in 1i32..=9999, month in 1u8..=12, day in 1u8..=31) {
      let day = day.min(month::solar_hijri_month_length(year, month).unwrap_or_default());
      let g = solar_hijri_to_gregorian(year, month, day);
      prop_assert_eq!(gregorian_to_solar_hijri(g.0, g.1, g.2), (year, month, day));
    }
  }
}
