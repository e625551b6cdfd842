//! Iterator over dates

use std::iter::Iterator;

use crate::Calendar;
use crate::CalendarDate;
use crate::CalendarError;

/// An iterator that yields consecutive days, in a single calendar, through an end date.
pub struct DateIterator {
  cursor: Option<CalendarDate>,
  end: CalendarDate,
}

impl DateIterator {
  pub(crate) const fn new(d: &CalendarDate, end: CalendarDate) -> Self {
    Self { cursor: Some(*d), end }
  }
}

impl Iterator for DateIterator {
  type Item = CalendarDate;

  fn next(&mut self) -> Option<Self::Item> {
    let cursor = self.cursor?;
    match cursor > self.end {
      true => None,
      false => {
        self.cursor = (cursor < self.end).then(|| cursor.succ());
        Some(cursor)
      },
    }
  }
}

/// Every day of the given month, in order.
///
/// ## Examples
///
/// ```
/// use shamsi::Calendar;
/// use shamsi::iter::month_days;
///
/// assert_eq!(month_days(Calendar::SolarHijri, 1404, 12)?.count(), 29);
/// # Ok::<(), shamsi::CalendarError>(())
/// ```
pub fn month_days(calendar: Calendar, year: i32, month: u8) -> Result<DateIterator, CalendarError> {
  let first = CalendarDate::try_new(calendar, year, month, 1)?;
  Ok(first.iter_through(first.last_of_month()))
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_iter() {
    let start = shamsi! { 1403-12-28 };
    check!(start.iter_through(shamsi! { 1404-01-02 }).collect::<Vec<CalendarDate>>().len() == 5);
    check!(start.iter_through(shamsi! { 1403-12-28 }).collect::<Vec<CalendarDate>>().len() == 1);
    check!(start.iter_through(shamsi! { 1403-12-27 }).collect::<Vec<CalendarDate>>().is_empty());
  }

  #[test]
  fn test_iter_converts_end() {
    // 1403-01-01 through 2024-03-22 is three days.
    let days: Vec<_> = shamsi! { 1403-01-01 }.iter_through(gregorian! { 2024-03-22 }).collect();
    check!(days == vec![shamsi! { 1403-01-01 }, shamsi! { 1403-01-02 }, shamsi! { 1403-01-03 }]);
  }

  #[test]
  fn test_month_days() -> Result<(), CalendarError> {
    check!(month_days(Calendar::SolarHijri, 1403, 12)?.count() == 30);
    check!(month_days(Calendar::Gregorian, 2024, 2)?.count() == 29);
    check!(month_days(Calendar::Gregorian, 2024, 2)?.last() == Some(gregorian! { 2024-02-29 }));
    check!(month_days(Calendar::Gregorian, 2024, 0).is_err());
    Ok(())
  }
}
