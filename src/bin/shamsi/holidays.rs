//! Official holidays of the Solar Hijri calendar, as published by a remote calendar API.

use std::collections::BTreeMap;
use std::io;
use std::io::IsTerminal;
use std::time::Duration;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use indicatif::ProgressBar;
use serde::Deserialize;
use shamsi::Calendar;
use shamsi::CalendarDate;

/// Holiday descriptions keyed by Solar Hijri date.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Holidays(BTreeMap<CalendarDate, String>);

impl Holidays {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a holiday. Dates of either calendar are accepted and stored in Solar Hijri.
  pub fn insert(&mut self, date: CalendarDate, description: impl Into<String>) {
    self.0.insert(date.to_solar_hijri(), description.into());
  }

  /// The description of the holiday on the given date, if it is one.
  pub fn get(&self, date: &CalendarDate) -> Option<&str> {
    self.0.get(&date.to_solar_hijri()).map(String::as_str)
  }

  /// Add every holiday of `other`, replacing descriptions for dates already present.
  pub fn merge(&mut self, other: Holidays) {
    self.0.extend(other.0);
  }

  /// The holidays falling within a month of the given calendar, in date order.
  ///
  /// Dates are returned in the requested calendar.
  pub fn in_month(&self, calendar: Calendar, year: i32, month: u8) -> Vec<(CalendarDate, &str)> {
    let Ok(days) = shamsi::iter::month_days(calendar, year, month) else {
      return Vec::new();
    };
    days.filter_map(|date| self.get(&date).map(|desc| (date, desc))).collect()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub(crate) fn iter(&self) -> impl Iterator<Item = (&CalendarDate, &String)> {
    self.0.iter()
  }
}

impl FromIterator<(CalendarDate, String)> for Holidays {
  fn from_iter<I: IntoIterator<Item = (CalendarDate, String)>>(iter: I) -> Self {
    let mut holidays = Self::new();
    for (date, description) in iter {
      holidays.insert(date, description);
    }
    holidays
  }
}

/// A provider of holidays for a Solar Hijri year.
pub trait HolidaySource {
  fn holidays(&self, year: i32) -> Result<Holidays>;
}

impl<S: HolidaySource + ?Sized> HolidaySource for Box<S> {
  fn holidays(&self, year: i32) -> Result<Holidays> {
    (**self).holidays(year)
  }
}

/// Fetches holidays over HTTP from the calendar API.
pub struct HttpSource {
  agent: ureq::Agent,
  api_url: String,
}

impl HttpSource {
  pub fn new(api_url: impl Into<String>, timeout: Duration) -> Self {
    let agent = ureq::AgentBuilder::new().timeout(timeout).build();
    Self { agent, api_url: api_url.into() }
  }
}

impl HttpSource {
  fn fetch(&self, year: i32) -> Result<Holidays> {
    let response = self
      .agent
      .get(&self.api_url)
      .query("year", &year.to_string())
      .query("holiday", "true")
      .call()
      .with_context(|| format!("failed to fetch holidays for {year}"))?;
    let payload: ApiResponse =
      response.into_json().context("failed to parse the calendar API response")?;
    payload.into_holidays()
  }
}

impl HolidaySource for HttpSource {
  fn holidays(&self, year: i32) -> Result<Holidays> {
    log::info!("fetching holidays for {year} from {}", self.api_url);
    let spinner = spinner(year);
    let result = self.fetch(year);
    spinner.finish_and_clear();
    result
  }
}

/// A spinner on stderr for the duration of a request, hidden unless stderr is a terminal.
fn spinner(year: i32) -> ProgressBar {
  if !io::stderr().is_terminal() {
    return ProgressBar::hidden();
  }
  let spinner = ProgressBar::new_spinner();
  spinner.set_message(format!("Fetching holidays for {year}..."));
  spinner.enable_steady_tick(Duration::from_millis(100));
  spinner
}

/// A source with no access to holiday data.
pub struct Offline;

impl HolidaySource for Offline {
  fn holidays(&self, year: i32) -> Result<Holidays> {
    bail!("holidays for {year} are not cached and offline mode is enabled")
  }
}

/// The calendar API payload: `result` maps month to day to the day's details.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
  status: bool,
  #[serde(default)]
  result: BTreeMap<String, BTreeMap<String, ApiDay>>,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
  solar: ApiDate,
  #[serde(default)]
  holiday: bool,
  #[serde(default)]
  event: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDate {
  year: i32,
  month: u8,
  day: u8,
}

impl ApiResponse {
  pub(crate) fn into_holidays(self) -> Result<Holidays> {
    if !self.status {
      bail!("the calendar API reported a failure");
    }
    let mut holidays = Holidays::new();
    for day in self.result.into_values().flat_map(BTreeMap::into_values) {
      if !day.holiday {
        continue;
      }
      let ApiDate { year, month, day: dom } = day.solar;
      let date = match CalendarDate::try_new(Calendar::SolarHijri, year, month, dom) {
        Ok(date) => date,
        Err(e) => {
          log::warn!("skipping holiday with an invalid date: {e}");
          continue;
        },
      };
      let description = match day.event.is_empty() {
        true => "Holiday".to_string(),
        false => day.event.join("; "),
      };
      holidays.insert(date, description);
    }
    log::debug!("received {} holidays", holidays.len());
    Ok(holidays)
  }
}
