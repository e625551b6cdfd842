use std::path::PathBuf;

use clap::Parser;

/// Solar Hijri (Shamsi) calendar for the terminal.
#[derive(Debug, Parser)]
#[command(
  name = "shamsi",
  version,
  about = "Solar Hijri (Shamsi) calendar with Gregorian conversion and holidays",
  after_help = "Examples:
  shamsi                           Show the current month (Shamsi)
  shamsi -g                        Show the current month (Gregorian)
  shamsi 1404                      Show every month of Shamsi year 1404
  shamsi -g 2025 10                Show Gregorian month 10 of 2025
  shamsi 1404 7 --show-holidays    Show Shamsi month 7 of 1404 and its holidays
  shamsi -c 1403/09/15             Convert Shamsi to Gregorian
  shamsi -g -c 2024-12-05          Convert Gregorian to Shamsi"
)]
pub struct Cli {
  /// Increase verbosity (-v info, -vv debug, -vvv trace).
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Use the Gregorian calendar instead of Shamsi.
  #[arg(short, long)]
  pub gregorian: bool,

  /// Convert a date between calendars (YYYY/MM/DD, YYYY-MM-DD, or YYYY.MM.DD).
  ///
  /// Shamsi to Gregorian by default; Gregorian to Shamsi with -g.
  #[arg(short, long, value_name = "DATE", conflicts_with_all = ["year", "show_holidays"])]
  pub convert: Option<String>,

  /// List the holidays of the selected month.
  #[arg(long, requires = "month")]
  pub show_holidays: bool,

  /// Path to a TOML configuration file.
  #[arg(long, value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// Use cached holiday data only; never touch the network.
  #[arg(long)]
  pub offline: bool,

  /// Disable colored output.
  #[arg(long)]
  pub no_color: bool,

  /// Year to display (Shamsi by default, Gregorian with -g).
  #[arg(value_parser = clap::value_parser!(i32).range(1..))]
  pub year: Option<i32>,

  /// Month to display (1-12).
  #[arg(value_parser = clap::value_parser!(u8).range(1..=12), requires = "year")]
  pub month: Option<u8>,
}

#[cfg(test)]
mod tests {
  use assert2::check;
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_command_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_positional() -> Result<(), clap::Error> {
    let cli = Cli::try_parse_from(["shamsi", "1404", "7", "--show-holidays"])?;
    check!(cli.year == Some(1404));
    check!(cli.month == Some(7));
    check!(cli.show_holidays);
    check!(!cli.gregorian);
    Ok(())
  }

  #[test]
  fn test_convert() -> Result<(), clap::Error> {
    let cli = Cli::try_parse_from(["shamsi", "-g", "-c", "2024-12-05", "-vv"])?;
    check!(cli.gregorian);
    check!(cli.convert.as_deref() == Some("2024-12-05"));
    check!(cli.verbose == 2);
    Ok(())
  }

  #[test]
  fn test_rejects_bad_arguments() {
    check!(Cli::try_parse_from(["shamsi", "0"]).is_err());
    check!(Cli::try_parse_from(["shamsi", "1404", "13"]).is_err());
    check!(Cli::try_parse_from(["shamsi", "1404", "--show-holidays"]).is_err());
    check!(Cli::try_parse_from(["shamsi", "-c", "1403/01/01", "1404"]).is_err());
  }
}
