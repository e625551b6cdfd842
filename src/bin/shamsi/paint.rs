//! 24-bit ANSI terminal colors.

use std::fmt;

/// A foreground color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
  pub const TITLE: Self = Self(255, 255, 255);
  pub const HEADER: Self = Self(188, 188, 188);
  pub const DAY: Self = Self(135, 206, 235);
  pub const OFF_DAY: Self = Self(255, 0, 0);
  pub const HIGHLIGHT: Self = Self(255, 255, 0);
  pub const RULE: Self = Self(0, 255, 255);
  pub const HEADING: Self = Self(200, 100, 255);
}

/// Applies colors to text, or passes it through untouched when color is off.
#[derive(Clone, Copy, Debug)]
pub struct Painter {
  enabled: bool,
}

impl Painter {
  pub const fn new(enabled: bool) -> Self {
    Self { enabled }
  }

  pub fn paint<T: fmt::Display>(&self, color: Rgb, text: T) -> Painted<T> {
    Painted { color: self.enabled.then_some(color), text }
  }
}

/// Text with an optional color, written with its escape sequences.
pub struct Painted<T> {
  color: Option<Rgb>,
  text: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.color {
      Some(Rgb(r, g, b)) => write!(f, "\x1b[38;2;{r};{g};{b}m{}\x1b[0m", self.text),
      None => write!(f, "{}", self.text),
    }
  }
}
