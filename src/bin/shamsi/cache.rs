//! On-disk cache of holidays, one JSON file per Solar Hijri year.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use serde::Deserialize;
use serde::Serialize;
use shamsi::CalendarDate;

use crate::holidays::HolidaySource;
use crate::holidays::Holidays;

/// Wraps another source, reading through and writing back to a cache directory.
pub struct CachedSource<S> {
  dir: PathBuf,
  inner: S,
}

impl<S: HolidaySource> CachedSource<S> {
  pub fn new(dir: impl Into<PathBuf>, inner: S) -> Self {
    Self { dir: dir.into(), inner }
  }

  fn path(&self, year: i32) -> PathBuf {
    self.dir.join(format!("holidays_{year}.json"))
  }
}

impl<S: HolidaySource> HolidaySource for CachedSource<S> {
  fn holidays(&self, year: i32) -> Result<Holidays> {
    let path = self.path(year);
    match read(&path, year) {
      Ok(Some(holidays)) => {
        log::debug!("using cached holidays from {}", path.display());
        return Ok(holidays);
      },
      Ok(None) => log::debug!("no cached holidays for {year}"),
      Err(e) => log::warn!("ignoring unreadable cache file: {e:#}"),
    }
    let holidays = self.inner.holidays(year)?;
    if let Err(e) = write(&path, year, &holidays) {
      log::warn!("failed to save holidays to cache: {e:#}");
    }
    Ok(holidays)
  }
}

#[derive(Deserialize, Serialize)]
struct CacheFile {
  year: i32,
  holidays: Vec<CacheEntry>,
}

#[derive(Deserialize, Serialize)]
struct CacheEntry {
  #[serde(with = "shamsi::serde::solar_hijri")]
  date: CalendarDate,
  description: String,
}

fn read(path: &Path, year: i32) -> Result<Option<Holidays>> {
  if !path.is_file() {
    return Ok(None);
  }
  let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
  let file: CacheFile =
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
  if file.year != year {
    bail!("{} holds holidays for {}, not {year}", path.display(), file.year);
  }
  Ok(Some(file.holidays.into_iter().map(|e| (e.date, e.description)).collect()))
}

fn write(path: &Path, year: i32, holidays: &Holidays) -> Result<()> {
  if let Some(dir) = path.parent() {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
  }
  let file = CacheFile {
    year,
    holidays: holidays
      .iter()
      .map(|(date, description)| CacheEntry { date: *date, description: description.clone() })
      .collect(),
  };
  fs::write(path, serde_json::to_string_pretty(&file)?)
    .with_context(|| format!("writing {}", path.display()))?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use assert2::check;
  use shamsi::shamsi;

  use super::*;

  /// Counts calls, optionally failing every one of them.
  struct Counting {
    calls: Cell<u32>,
    fail: bool,
  }

  impl Counting {
    fn new(fail: bool) -> Self {
      Self { calls: Cell::new(0), fail }
    }
  }

  impl HolidaySource for &Counting {
    fn holidays(&self, year: i32) -> Result<Holidays> {
      self.calls.set(self.calls.get() + 1);
      if self.fail {
        bail!("no network");
      }
      let mut holidays = Holidays::new();
      holidays.insert(CalendarDate::solar_hijri(year, 1, 1), "Nowruz");
      holidays.insert(CalendarDate::solar_hijri(year, 1, 12), "Islamic Republic Day; Sizdah");
      Ok(holidays)
    }
  }

  #[test]
  fn test_read_through() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let inner = Counting::new(false);
    let source = CachedSource::new(dir.path().join("nested"), &inner);
    let first = source.holidays(1403)?;
    check!(inner.calls.get() == 1);
    check!(dir.path().join("nested/holidays_1403.json").is_file());

    let second = source.holidays(1403)?;
    check!(inner.calls.get() == 1);
    check!(first == second);
    check!(second.get(&shamsi! { 1403-01-12 }) == Some("Islamic Republic Day; Sizdah"));

    source.holidays(1404)?;
    check!(inner.calls.get() == 2);
    Ok(())
  }

  #[test]
  fn test_file_format() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let inner = Counting::new(false);
    CachedSource::new(dir.path(), &inner).holidays(1403)?;
    let json: serde_json::Value =
      serde_json::from_str(&fs::read_to_string(dir.path().join("holidays_1403.json"))?)?;
    check!(json["year"] == 1403);
    check!(json["holidays"][0]["date"] == "1403-01-01");
    check!(json["holidays"][0]["description"] == "Nowruz");
    Ok(())
  }

  #[test]
  fn test_cache_hit_offline() -> Result<()> {
    let dir = tempfile::tempdir()?;
    CachedSource::new(dir.path(), &Counting::new(false)).holidays(1403)?;
    let offline = Counting::new(true);
    let holidays = CachedSource::new(dir.path(), &offline).holidays(1403)?;
    check!(offline.calls.get() == 0);
    check!(holidays.len() == 2);
    check!(CachedSource::new(dir.path(), &offline).holidays(1402).is_err());
    Ok(())
  }

  #[test]
  fn test_corrupt_cache_is_a_miss() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("holidays_1403.json"), "{ not json")?;
    let inner = Counting::new(false);
    let holidays = CachedSource::new(dir.path(), &inner).holidays(1403)?;
    check!(inner.calls.get() == 1);
    check!(holidays.len() == 2);
    // The corrupt file was replaced.
    check!(read(&dir.path().join("holidays_1403.json"), 1403)?.is_some());
    Ok(())
  }

  #[test]
  fn test_mismatched_year_is_a_miss() -> Result<()> {
    let dir = tempfile::tempdir()?;
    CachedSource::new(dir.path(), &Counting::new(false)).holidays(1403)?;
    fs::rename(dir.path().join("holidays_1403.json"), dir.path().join("holidays_1404.json"))?;
    let inner = Counting::new(false);
    let holidays = CachedSource::new(dir.path(), &inner).holidays(1404)?;
    check!(inner.calls.get() == 1);
    check!(holidays.get(&shamsi! { 1404-01-01 }) == Some("Nowruz"));
    Ok(())
  }

  #[test]
  fn test_unwritable_cache() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let blocker = dir.path().join("file");
    fs::write(&blocker, "")?;
    let inner = Counting::new(false);
    let holidays = CachedSource::new(blocker.join("cache"), &inner).holidays(1403)?;
    check!(holidays.len() == 2);
    Ok(())
  }
}
