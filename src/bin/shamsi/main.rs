mod cache;
mod cli;
mod commands;
mod config;
mod grid;
mod holidays;
mod logging;
mod paint;

use std::io;
use std::io::IsTerminal;
use std::io::Write;
use std::process;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use shamsi::Calendar;
use shamsi::CalendarDate;

use crate::cache::CachedSource;
use crate::cli::Cli;
use crate::commands::Context;
use crate::config::Config;
use crate::holidays::HolidaySource;
use crate::holidays::HttpSource;
use crate::holidays::Offline;
use crate::paint::Painter;

fn main() {
  let cli = Cli::parse();
  logging::init(cli.verbose);

  if let Err(e) = run(cli) {
    eprintln!("Error: {e:#}");
    process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  let config = Config::load(cli.config.as_deref())?;
  let source = holiday_source(&config, cli.offline);
  let stdout = io::stdout();
  let cx = Context {
    calendar: match cli.gregorian {
      true => Calendar::Gregorian,
      false => Calendar::SolarHijri,
    },
    painter: Painter::new(config.color && !cli.no_color && stdout.is_terminal()),
    source: source.as_ref(),
  };

  let mut out = stdout.lock();
  match (cli.convert, cli.year, cli.month) {
    (Some(date), ..) => commands::convert(&mut out, &cx, &date)?,
    (None, None, _) => commands::current_month(&mut out, &cx, today(cx.calendar))?,
    (None, Some(year), None) => commands::year(&mut out, &cx, year)?,
    (None, Some(year), Some(month)) => {
      commands::month(&mut out, &cx, year, month, cli.show_holidays)?
    },
  }
  out.flush()?;
  Ok(())
}

/// Today in the local time zone, or in UTC when the local zone cannot be determined.
fn today(calendar: Calendar) -> CalendarDate {
  local_or_utc(CalendarDate::today(calendar), calendar)
}

fn local_or_utc(local: Result<CalendarDate>, calendar: Calendar) -> CalendarDate {
  local.unwrap_or_else(|e| {
    log::warn!("using UTC for today's date: {e:#}");
    CalendarDate::today_utc(calendar)
  })
}

/// Build the holiday source: the API (or nothing, when offline) behind the on-disk cache.
fn holiday_source(config: &Config, offline: bool) -> Box<dyn HolidaySource> {
  let inner: Box<dyn HolidaySource> = match offline || config.holidays.offline {
    true => Box::new(Offline),
    false => Box::new(HttpSource::new(
      &config.holidays.api_url,
      Duration::from_secs(config.holidays.timeout_secs),
    )),
  };
  match config.cache_dir() {
    Ok(dir) => Box::new(CachedSource::new(dir, inner)),
    Err(e) => {
      log::warn!("holiday cache disabled: {e:#}");
      inner
    },
  }
}
