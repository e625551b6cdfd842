use crate::ParseError;

/// Split a `YYYY/MM/DD`, `YYYY-MM-DD`, or `YYYY.MM.DD` string into its numeric components.
///
/// Only the shape is checked here; calendar validity is left to the caller.
pub(crate) fn parse_ymd(s: &str) -> Result<(i32, u8, u8), ParseError> {
  macro_rules! fail {
    ($r:literal) => {
      ParseError::Component { src: s.into(), component: $r }
    };
  }
  let pieces: Vec<&str> = s.trim().split(['/', '-', '.']).collect();
  if pieces.len() != 3 || pieces.iter().any(|p| p.is_empty()) {
    return Err(ParseError::Format { src: s.into() });
  }
  let year = pieces[0].parse::<i32>().map_err(|_| fail!("year"))?;
  let month = pieces[1].parse::<u8>().map_err(|_| fail!("month"))?;
  let day = pieces[2].parse::<u8>().map_err(|_| fail!("day"))?;
  Ok((year, month, day))
}
