//! Serialization of dates as `YYYY-MM-DD` strings.
//!
//! A `CalendarDate` serializes as its `YYYY-MM-DD` string. That string does not say which
//! calendar it belongs to, so deserialization goes through one of the [`solar_hijri`] or
//! [`gregorian`] modules, for use with `#[serde(with = "...")]`:
//!
//! ```
//! # use serde::Deserialize;
//! # use serde::Serialize;
//! #[derive(Deserialize, Serialize)]
//! struct Holiday {
//!   #[serde(with = "shamsi::serde::solar_hijri")]
//!   date: shamsi::CalendarDate,
//! }
//! ```

use std::fmt;

use serde::Serialize;
use serde::Serializer;
use serde::de::Visitor;

use crate::Calendar;
use crate::CalendarDate;

impl Serialize for CalendarDate {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&self.format("%Y-%m-%d"))
  }
}

struct DateVisitor(Calendar);

impl Visitor<'_> for DateVisitor {
  type Value = CalendarDate;

  #[cfg(not(tarpaulin_include))]
  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    write!(formatter, "a YYYY-MM-DD {} date string", self.0)
  }

  fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
    CalendarDate::parse(s, self.0).map_err(E::custom)
  }
}

macro_rules! calendar_module {
  ($name:ident, $calendar:ident, $doc:literal) => {
    #[doc = $doc]
    pub mod $name {
      use serde::Deserializer;
      use serde::Serializer;

      use super::DateVisitor;
      use crate::Calendar;
      use crate::CalendarDate;

      /// Serialize the date as a `YYYY-MM-DD` string in this calendar.
      pub fn serialize<S: Serializer>(
        date: &CalendarDate,
        serializer: S,
      ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.convert_to(Calendar::$calendar).format("%Y-%m-%d"))
      }

      /// Deserialize a `YYYY-MM-DD` string in this calendar.
      pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
      ) -> Result<CalendarDate, D::Error> {
        deserializer.deserialize_str(DateVisitor(Calendar::$calendar))
      }
    }
  };
}
calendar_module!(solar_hijri, SolarHijri, "(De)serialize Solar Hijri dates as `YYYY-MM-DD`.");
calendar_module!(gregorian, Gregorian, "(De)serialize Gregorian dates as `YYYY-MM-DD`.");
