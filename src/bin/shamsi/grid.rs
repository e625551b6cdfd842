//! Month and year calendar grids.

use shamsi::Calendar;
use shamsi::CalendarDate;
use shamsi::CalendarError;

use crate::holidays::Holidays;
use crate::paint::Painter;
use crate::paint::Rgb;

/// Width of one day cell.
const CELL: usize = 4;

/// Blank space between the columns of a year grid.
const GUTTER: &str = "    ";

/// Width of a month title line: the widest month title plus room for the `=` rule.
pub const TITLE_WIDTH: usize = {
  let mut width = 28;
  let mut month = 1;
  while month <= 12 {
    let sh = match shamsi::month::solar_hijri_month_name(month) {
      Ok(name) => name.len() + " 1400".len() + 14,
      Err(_) => 0,
    };
    let g = match shamsi::month::gregorian_month_name(month) {
      Ok(name) => name.len() + " 2024".len() + 14,
      Err(_) => 0,
    };
    if sh > width {
      width = sh;
    }
    if g > width {
      width = g;
    }
    month += 1;
  }
  width
};

/// A rendered line, along with its width on screen (which excludes escape sequences).
#[derive(Clone, Debug)]
pub struct Line {
  pub text: String,
  pub width: usize,
}

impl Line {
  fn blank(width: usize) -> Self {
    Self { text: " ".repeat(width), width }
  }

  fn pad_to(mut self, width: usize) -> Self {
    if self.width < width {
      self.text.push_str(&" ".repeat(width - self.width));
      self.width = width;
    }
    self
  }
}

/// Render one month: a title, the weekday header, and one line per week.
///
/// `highlight` marks a day of the month; holidays are looked up by each day's Solar Hijri date.
pub fn month(
  painter: Painter,
  calendar: Calendar,
  year: i32,
  month: u8,
  highlight: Option<u8>,
  holidays: &Holidays,
) -> Result<Vec<Line>, CalendarError> {
  let first = CalendarDate::try_new(calendar, year, month, 1)?;
  let mut lines = Vec::with_capacity(8);

  let title = format!("{} {year}", first.month_name());
  let pad = TITLE_WIDTH.saturating_sub(title.len());
  let title = format!("{}{title}{}", "=".repeat(pad / 2), "=".repeat(pad - pad / 2));
  lines.push(Line { width: title.len(), text: painter.paint(Rgb::TITLE, title).to_string() });

  let mut header = String::new();
  for name in weekday_header(calendar) {
    header += &painter.paint(Rgb::HEADER, format_args!("{name:>4}")).to_string();
  }
  lines.push(Line { text: header, width: 7 * CELL });

  let lead = usize::from(shamsi::first_weekday_of_month(calendar, year, month)?.index_in(calendar));
  let mut week = " ".repeat(lead * CELL);
  let mut column = lead;
  for date in first.iter_through(first.last_of_month()) {
    let color = cell_color(&date, highlight, holidays);
    week += &painter.paint(color, format_args!("{:>4}", date.day())).to_string();
    column += 1;
    if column == 7 {
      lines.push(Line { text: std::mem::take(&mut week), width: 7 * CELL });
      column = 0;
    }
  }
  if column != 0 {
    week += &" ".repeat((7 - column) * CELL);
    lines.push(Line { text: week, width: 7 * CELL });
  }
  Ok(lines)
}

/// Render a whole year as twelve month grids, three rows of four.
pub fn year(
  painter: Painter,
  calendar: Calendar,
  year: i32,
  holidays: &Holidays,
) -> Result<Vec<Line>, CalendarError> {
  let mut lines = Vec::new();
  for row in 0..3 {
    let mut columns = Vec::with_capacity(4);
    for col in 0..4 {
      let grid = month(painter, calendar, year, row * 4 + col + 1, None, holidays)?;
      columns.push(grid.into_iter().map(|line| line.pad_to(TITLE_WIDTH)).collect::<Vec<_>>());
    }
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    for i in 0..height {
      let mut line = Line { text: String::new(), width: 0 };
      for column in &columns {
        let cell = column.get(i).cloned().unwrap_or_else(|| Line::blank(TITLE_WIDTH));
        line.text += &cell.text;
        line.text += GUTTER;
        line.width += cell.width + GUTTER.len();
      }
      lines.push(line);
    }
    lines.push(Line::blank(0));
  }
  Ok(lines)
}

/// List the holidays of a month, one per line.
pub fn holiday_listing(
  calendar: Calendar,
  year: i32,
  month: u8,
  holidays: &Holidays,
) -> Vec<String> {
  let found = holidays.in_month(calendar, year, month);
  if found.is_empty() {
    return vec!["No holidays in this month.".to_string()];
  }
  found
    .into_iter()
    .map(|(date, description)| match calendar {
      Calendar::SolarHijri => format!("- {}: {description}", date.format("%d %B")),
      Calendar::Gregorian => {
        let (y, m, d) = date.to_solar_hijri().ymd();
        format!("- {}: {description} (Shamsi: {y}/{m}/{d})", date.format("%d %B"))
      },
    })
    .collect()
}

fn weekday_header(calendar: Calendar) -> [&'static str; 7] {
  match calendar {
    Calendar::SolarHijri => ["Sh", "Ye", "Do", "Se", "Ch", "Pa", "Jo"],
    Calendar::Gregorian => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
  }
}

fn cell_color(date: &CalendarDate, highlight: Option<u8>, holidays: &Holidays) -> Rgb {
  if highlight == Some(date.day()) {
    Rgb::HIGHLIGHT
  } else if holidays.get(date).is_some() || date.weekday().is_rest_day(date.calendar()) {
    Rgb::OFF_DAY
  } else {
    Rgb::DAY
  }
}
