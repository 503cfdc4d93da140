use clap::{Args, Parser, Subcommand};

use kuten_core::Direction;

#[derive(Parser, Debug)]
#[command(
    name = "kutenconv",
    version,
    about = "Convert between 「、。」 and 「，．」 punctuation in a UTF-8 text file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replace punctuation in place (a timestamped backup is written first)
    Replace {
        /// Text file to convert
        file: String,
        #[command(flatten)]
        direction: DirectionArgs,
        /// Custom settings TOML file
        #[arg(long)]
        settings: Option<String>,
    },
    /// Report how many marks would be replaced, without writing anything
    Check {
        /// Text file to inspect
        file: String,
        #[command(flatten)]
        direction: DirectionArgs,
        /// Custom settings TOML file
        #[arg(long)]
        settings: Option<String>,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct DirectionArgs {
    /// kuten-to-comma (、。 → ，．) or comma-to-kuten (，． → 、。)
    #[arg(short, long, conflicts_with_all = ["to_comma", "to_kuten"])]
    pub direction: Option<Direction>,
    /// Shorthand for --direction kuten-to-comma
    #[arg(long)]
    pub to_comma: bool,
    /// Shorthand for --direction comma-to-kuten
    #[arg(long, conflicts_with = "to_comma")]
    pub to_kuten: bool,
}

impl DirectionArgs {
    /// Explicit choice, or `default` (from settings) when none was given.
    pub fn resolve(&self, default: Direction) -> Direction {
        match (self.direction, self.to_comma, self.to_kuten) {
            (Some(d), _, _) => d,
            (None, true, _) => Direction::KutenToComma,
            (None, _, true) => Direction::CommaToKuten,
            (None, false, false) => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("kutenconv").chain(args.iter().copied()))
    }

    fn replace_direction(args: &[&str], default: Direction) -> Direction {
        match parse(args).unwrap().command {
            Command::Replace { direction, .. } => direction.resolve(default),
            other => panic!("expected replace, got {other:?}"),
        }
    }

    #[test]
    fn default_direction_comes_from_caller() {
        assert_eq!(
            replace_direction(&["replace", "a.txt"], Direction::KutenToComma),
            Direction::KutenToComma
        );
        assert_eq!(
            replace_direction(&["replace", "a.txt"], Direction::CommaToKuten),
            Direction::CommaToKuten
        );
    }

    #[test]
    fn explicit_direction() {
        assert_eq!(
            replace_direction(
                &["replace", "a.txt", "--direction", "comma-to-kuten"],
                Direction::KutenToComma
            ),
            Direction::CommaToKuten
        );
        assert_eq!(
            replace_direction(&["replace", "a.txt", "--to-comma"], Direction::CommaToKuten),
            Direction::KutenToComma
        );
        assert_eq!(
            replace_direction(&["replace", "a.txt", "--to-kuten"], Direction::KutenToComma),
            Direction::CommaToKuten
        );
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let err = parse(&["replace", "a.txt", "--direction", "sideways"]).unwrap_err();
        assert!(err.to_string().contains("Undefined Option"));
    }

    #[test]
    fn shorthands_conflict() {
        assert!(parse(&["replace", "a.txt", "--to-comma", "--to-kuten"]).is_err());
        assert!(parse(&["check", "a.txt", "-d", "kuten-to-comma", "--to-kuten"]).is_err());
    }

    #[test]
    fn settings_flag() {
        match parse(&["check", "a.txt", "--settings", "s.toml"]).unwrap().command {
            Command::Check { file, settings, .. } => {
                assert_eq!(file, "a.txt");
                assert_eq!(settings.as_deref(), Some("s.toml"));
            }
            other => panic!("expected check, got {other:?}"),
        }
    }
}
