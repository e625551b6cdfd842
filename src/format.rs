use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::fmt::Result;
use std::fmt::Write;

use crate::CalendarDate;
use crate::Weekday;

/// A date with a requested format.
pub struct FormattedDate<'a> {
  pub(crate) date: CalendarDate,
  pub(crate) format: &'a str,
}

impl Debug for FormattedDate<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(self, f)
  }
}

impl Display for FormattedDate<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    // Iterate over the format string and consume it.
    let d = self.date;
    let (year, month, day) = d.ymd();
    let mut flag = false;
    let mut padding = Padding::Default;
    for c in self.format.chars() {
      if flag {
        // Apply padding if this is a padding change.
        #[rustfmt::skip]
        match c {
          '0' => { padding = Padding::Zero; continue; },
          '-' => { padding = Padding::Suppress; continue; },
          '_' => { padding = Padding::Space; continue; },
          _ => {},
        };

        // Set up a macro to process padding.
        macro_rules! write_padded {
          ($f:ident, $pad:ident, $level:literal, $e:expr) => {
            match $pad {
              Padding::Default | Padding::Zero => write!($f, concat!("{:0", $level, "}"), $e),
              Padding::Space => write!($f, concat!("{:", $level, "}"), $e),
              Padding::Suppress => write!($f, "{}", $e),
            }
          };
        }

        // Write out the formatted component.
        flag = false;
        match c {
          'Y' => write_padded!(f, padding, 4, year)?,
          'C' => write_padded!(f, padding, 2, year / 100)?,
          'y' => write_padded!(f, padding, 2, year % 100)?,
          'm' => write_padded!(f, padding, 2, month)?,
          'b' | 'h' => f.write_str(d.month_abbv())?,
          'B' => f.write_str(d.month_name())?,
          'd' => write_padded!(f, padding, 2, day)?,
          'a' => f.write_str(d.weekday().abbv())?,
          'A' => write!(f, "{}", d.weekday())?,
          'w' => write!(f, "{}", d.weekday().index_in(d.calendar()))?,
          'u' => write!(f, "{}", match d.weekday() {
            Weekday::Sunday => 7,
            weekday => weekday as u8,
          })?,
          'j' => write_padded!(f, padding, 3, d.day_of_year())?,
          'D' => write!(f, "{:02}/{:02}/{:02}", month, day, year % 100)?,
          'F' => write!(f, "{:04}-{:02}-{:02}", year, month, day)?,
          't' => f.write_char('\t')?,
          'n' => f.write_char('\n')?,
          '%' => f.write_char('%')?,
          _ => Err(Error)?,
        }
      } else if c == '%' {
        flag = true;
        padding = Padding::Default;
      } else {
        f.write_char(c)?;
      }
    }
    Ok(())
  }
}

impl PartialEq<&str> for FormattedDate<'_> {
  fn eq(&self, other: &&str) -> bool {
    &self.to_string().as_str() == other
  }
}

/// A padding modifier
enum Padding {
  /// Use the default padding (usually either `0` or nothing).
  Default,
  /// Explicitly pad with `0`
  Zero,
  /// Explicitly pad with ` `.
  Space,
  /// Explicitly prevent padding, even if the token has default padding.
  Suppress,
}

#[cfg(test)]
mod tests {
  use assert2::check;

  #[test]
  fn test_format_solar_hijri() {
    let date = shamsi! { 1403-09-15 };
    for (fmt_string, date_str) in [
      ("%Y-%m-%d", "1403-09-15"),
      ("%F", "1403-09-15"),
      ("%Y/%m/%d - %-d %B %Y", "1403/09/15 - 15 Azar 1403"),
      ("%d %b %Y", "15 Aza 1403"),
      ("%A, %-d %B %Y", "Thursday, 15 Azar 1403"),
      ("%a %w %u", "Thu 5 4"),
      ("year: %Y / day: %j", "year: 1403 / day: 261"),
      ("%C%y", "1403"),
      ("%%", "%"),
      ("%t %n", "\t \n"),
    ] {
      check!(date.format(fmt_string).to_string() == date_str);
      check!(date.format(fmt_string) == date_str);
      check!(format!("{:?}", date.format(fmt_string)) == date_str);
    }
  }

  #[test]
  fn test_format_gregorian() {
    let date = gregorian! { 2024-12-05 };
    for (fmt_string, date_str) in [
      ("%Y/%m/%d - %B %-d, %Y", "2024/12/05 - December 5, 2024"),
      ("%D", "12/05/24"),
      ("%a %w %u", "Thu 4 4"),
      ("%j", "340"),
    ] {
      check!(date.format(fmt_string) == date_str);
    }
  }

  #[test]
  fn test_padding() {
    let date = shamsi! { 1404-07-04 };
    for (fmt_string, date_str) in
      [("%Y-%m-%d", "1404-07-04"), ("%-d %B %Y", "4 Mehr 1404"), ("%_m/%-d", " 7/4"), ("%0d", "04")]
    {
      check!(date.format(fmt_string) == date_str);
    }
    check!(shamsi! { 1403-01-01 }.format("%-j") == "1");
    check!(shamsi! { 1403-01-01 }.format("%j") == "001");
  }

  #[test]
  fn test_unknown_specifier() {
    use std::fmt::Write;
    let mut out = String::new();
    check!(write!(out, "{}", shamsi! { 1403-01-01 }.format("%Q")).is_err());
  }
}
