//! Leap year rules for both calendars.

/// Positions within the 33-year sub-cycle that are Solar Hijri leap years.
const SOLAR_HIJRI_LEAP_RESIDUES: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Return true if this is a Solar Hijri leap year (Esfand has 30 days), false otherwise.
///
/// The year's position in the 33-year sub-cycle is taken relative to the same epoch the date
/// converter uses, so that a year is leap here exactly when the converter gives it 366 days.
/// The position is normalized to be non-negative.
pub const fn is_solar_hijri_leap_year(year: i32) -> bool {
  let position = year.rem_euclid(33);
  let mut i = 0;
  while i < SOLAR_HIJRI_LEAP_RESIDUES.len() {
    if SOLAR_HIJRI_LEAP_RESIDUES[i] == position {
      return true;
    }
    i += 1;
  }
  false
}

/// Return true if this is a Gregorian leap year, false otherwise.
pub const fn is_gregorian_leap_year(year: i32) -> bool {
  year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the Solar Hijri year.
pub const fn solar_hijri_days_in_year(year: i32) -> u16 {
  if is_solar_hijri_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in the Gregorian year.
pub const fn gregorian_days_in_year(year: i32) -> u16 {
  if is_gregorian_leap_year(year) { 366 } else { 365 }
}
