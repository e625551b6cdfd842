//! The calendar views and the date converter.

use std::io::Write;

use anyhow::Result;
use shamsi::Calendar;
use shamsi::CalendarDate;

use crate::grid;
use crate::holidays::HolidaySource;
use crate::holidays::Holidays;
use crate::paint::Painter;
use crate::paint::Rgb;

/// Everything a view needs besides its arguments.
pub struct Context<'a> {
  pub calendar: Calendar,
  pub painter: Painter,
  pub source: &'a dyn HolidaySource,
}

impl Context<'_> {
  /// Load and merge the holidays of the given Solar Hijri years.
  ///
  /// A year that cannot be loaded is logged and skipped; views render without its holidays.
  pub fn holidays(&self, years: impl IntoIterator<Item = i32>) -> Holidays {
    let mut holidays = Holidays::new();
    for year in years {
      match self.source.holidays(year) {
        Ok(found) => holidays.merge(found),
        Err(e) => log::warn!("holidays for {year} are unavailable: {e:#}"),
      }
    }
    if holidays.is_empty() {
      log::info!("rendering without holiday annotations");
    }
    holidays
  }

  /// The Solar Hijri years whose holidays a view of `year` can show.
  fn holiday_years(&self, year: i32) -> Vec<i32> {
    match self.calendar {
      Calendar::SolarHijri => vec![year],
      Calendar::Gregorian => {
        let (first, _, _) = shamsi::convert::gregorian_to_solar_hijri(year, 1, 1);
        vec![first, first + 1]
      },
    }
  }
}

/// Show the month containing `today`, with today highlighted.
pub fn current_month(out: &mut impl Write, cx: &Context, today: CalendarDate) -> Result<()> {
  let today = today.convert_to(cx.calendar);
  let holidays = cx.holidays(cx.holiday_years(today.year()));
  let (year, month, day) = today.ymd();
  for line in grid::month(cx.painter, cx.calendar, year, month, Some(day), &holidays)? {
    writeln!(out, "{}", line.text)?;
  }
  writeln!(out)?;
  Ok(())
}

/// Show one month, optionally followed by its holidays.
pub fn month(
  out: &mut impl Write,
  cx: &Context,
  year: i32,
  month: u8,
  show_holidays: bool,
) -> Result<()> {
  let holidays = cx.holidays(cx.holiday_years(year));
  for line in grid::month(cx.painter, cx.calendar, year, month, None, &holidays)? {
    writeln!(out, "{}", line.text)?;
  }
  writeln!(out)?;
  if show_holidays {
    writeln!(out, "{}", cx.painter.paint(Rgb::HEADING, "📌 Holidays in this month:"))?;
    for line in grid::holiday_listing(cx.calendar, year, month, &holidays) {
      writeln!(out, "{line}")?;
    }
  }
  Ok(())
}

/// Show all twelve months of a year.
pub fn year(out: &mut impl Write, cx: &Context, year: i32) -> Result<()> {
  let holidays = cx.holidays(cx.holiday_years(year));
  for line in grid::year(cx.painter, cx.calendar, year, &holidays)? {
    writeln!(out, "{}", line.text)?;
  }
  Ok(())
}

/// Convert a date out of the context's calendar, and describe it.
pub fn convert(out: &mut impl Write, cx: &Context, date: &str) -> Result<()> {
  let input = CalendarDate::parse(date, cx.calendar)?;
  let shamsi = input.to_solar_hijri();
  let output = input.convert_to(cx.calendar.other());
  let p = cx.painter;

  let (heading, input_color, output_color) = match cx.calendar {
    Calendar::Gregorian => ("Converting Gregorian to Shamsi", Rgb::DAY, Rgb::HIGHLIGHT),
    Calendar::SolarHijri => ("Converting Shamsi to Gregorian", Rgb::HIGHLIGHT, Rgb::DAY),
  };
  writeln!(out, "{}", p.paint(Rgb::RULE, "=".repeat(60)))?;
  writeln!(out, "{}", p.paint(Rgb::HEADING, format_args!("📅 {heading}")))?;
  writeln!(out, "{}", p.paint(Rgb::RULE, "-".repeat(60)))?;
  writeln!(
    out,
    "{}: {}",
    p.paint(Rgb::HEADER, format_args!("Input ({})", label(input.calendar()))),
    p.paint(input_color, describe(&input)),
  )?;
  writeln!(
    out,
    "{}: {}",
    p.paint(Rgb::HEADER, format_args!("Output ({})", label(output.calendar()))),
    p.paint(output_color, describe(&output)),
  )?;
  let weekday = input.weekday();
  writeln!(out, "{}: {}", p.paint(Rgb::HEADER, "Day of Week"), p.paint(Rgb::RULE, weekday))?;
  if let Some(description) = cx.holidays([shamsi.year()]).get(&shamsi) {
    writeln!(out, "{}: {}", p.paint(Rgb::HEADER, "Holiday"), p.paint(Rgb::OFF_DAY, description))?;
  }
  writeln!(out, "{}", p.paint(Rgb::RULE, "=".repeat(60)))?;
  Ok(())
}

fn label(calendar: Calendar) -> &'static str {
  match calendar {
    Calendar::Gregorian => "Gregorian",
    Calendar::SolarHijri => "Shamsi",
  }
}

fn describe(date: &CalendarDate) -> String {
  match date.calendar() {
    Calendar::Gregorian => date.format("%Y/%m/%d - %B %-d, %Y").to_string(),
    Calendar::SolarHijri => date.format("%Y/%m/%d - %-d %B %Y").to_string(),
  }
}

#[cfg(test)]
mod tests {
  use anyhow::bail;
  use assert2::check;
  use shamsi::gregorian;
  use shamsi::shamsi;

  use super::*;

  struct Fixed;

  impl HolidaySource for Fixed {
    fn holidays(&self, year: i32) -> Result<Holidays> {
      match year {
        1403 => Ok(
          [
            (shamsi! { 1403-01-01 }, "Nowruz".to_string()),
            (shamsi! { 1403-09-15 }, "Test Holiday".to_string()),
            (shamsi! { 1403-12-29 }, "Oil Nationalization".to_string()),
          ]
          .into_iter()
          .collect(),
        ),
        1404 => Ok([(shamsi! { 1404-01-01 }, "Nowruz".to_string())].into_iter().collect()),
        _ => bail!("no data for {year}"),
      }
    }
  }

  fn context(calendar: Calendar) -> Context<'static> {
    Context { calendar, painter: Painter::new(false), source: &Fixed }
  }

  fn run(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Result<String> {
    let mut out = Vec::new();
    f(&mut out)?;
    Ok(String::from_utf8(out)?)
  }

  #[test]
  fn test_convert_gregorian() -> Result<()> {
    let cx = context(Calendar::Gregorian);
    let out = run(|out| convert(out, &cx, "2024/12/05"))?;
    let (rule, dashes) = ("=".repeat(60), "-".repeat(60));
    check!(out.lines().collect::<Vec<_>>() == vec![
      rule.as_str(),
      "📅 Converting Gregorian to Shamsi",
      dashes.as_str(),
      "Input (Gregorian): 2024/12/05 - December 5, 2024",
      "Output (Shamsi): 1403/09/15 - 15 Azar 1403",
      "Day of Week: Thursday",
      "Holiday: Test Holiday",
      rule.as_str(),
    ]);
    Ok(())
  }

  #[test]
  fn test_convert_solar_hijri() -> Result<()> {
    let cx = context(Calendar::SolarHijri);
    let out = run(|out| convert(out, &cx, "1404-07-04"))?;
    check!(out.contains("📅 Converting Shamsi to Gregorian"));
    check!(out.contains("Input (Shamsi): 1404/07/04 - 4 Mehr 1404\n"));
    check!(out.contains("Output (Gregorian): 2025/09/26 - September 26, 2025\n"));
    check!(out.contains("Day of Week: Friday\n"));
    check!(!out.contains("Holiday:"));
    Ok(())
  }

  #[test]
  fn test_convert_without_holidays() -> Result<()> {
    let cx = context(Calendar::SolarHijri);
    let out = run(|out| convert(out, &cx, "1402.12.29"))?;
    check!(out.contains("Output (Gregorian): 2024/03/19 - March 19, 2024\n"));
    Ok(())
  }

  #[test]
  fn test_convert_invalid() {
    let cx = context(Calendar::SolarHijri);
    check!(run(|out| convert(out, &cx, "1404/12/30")).is_err());
    check!(run(|out| convert(out, &cx, "1404/13/01")).is_err());
    check!(run(|out| convert(out, &cx, "yesterday")).is_err());
    let cx = context(Calendar::Gregorian);
    check!(run(|out| convert(out, &cx, "2023/02/29")).is_err());
    let err = run(|out| convert(out, &cx, "0622/03/20")).unwrap_err();
    check!(err.to_string().contains("outside the supported range"));
    check!(run(|out| convert(out, &cx, "0622/03/21")).is_ok());
  }

  #[test]
  fn test_month_with_holidays() -> Result<()> {
    let cx = context(Calendar::SolarHijri);
    let out = run(|out| month(out, &cx, 1403, 9, true))?;
    check!(out.starts_with("==========Azar 1403===========\n"));
    check!(out.ends_with("📌 Holidays in this month:\n- 15 Azar: Test Holiday\n"));
    let out = run(|out| month(out, &cx, 1403, 9, false))?;
    check!(!out.contains("Holidays"));
    Ok(())
  }

  #[test]
  fn test_gregorian_month_merges_years() -> Result<()> {
    let cx = context(Calendar::Gregorian);
    let out = run(|out| month(out, &cx, 2025, 3, true))?;
    check!(out.contains("- 19 March: Oil Nationalization (Shamsi: 1403/12/29)\n"));
    check!(out.contains("- 21 March: Nowruz (Shamsi: 1404/1/1)\n"));
    Ok(())
  }

  #[test]
  fn test_missing_holidays_still_render() -> Result<()> {
    let cx = context(Calendar::SolarHijri);
    let out = run(|out| month(out, &cx, 1390, 1, true))?;
    check!(out.contains("Farvardin 1390"));
    check!(out.ends_with("No holidays in this month.\n"));
    Ok(())
  }

  #[test]
  fn test_current_month() -> Result<()> {
    let cx = Context { painter: Painter::new(true), ..context(Calendar::SolarHijri) };
    let out = run(|out| current_month(out, &cx, gregorian! { 2024-12-05 }))?;
    check!(out.contains("Azar 1403"));
    check!(out.contains("\x1b[38;2;255;255;0m  15\x1b[0m"));
    Ok(())
  }

  #[test]
  fn test_year() -> Result<()> {
    let cx = context(Calendar::Gregorian);
    let out = run(|out| year(out, &cx, 2025))?;
    check!(out.contains("January 2025"));
    check!(out.contains("December 2025"));
    Ok(())
  }
}
