use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::{fmt, path::PathBuf};

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "fixdec")]
#[command(about = "Evaluate and inspect fixed-point decimal numbers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Number of fractional digits (0..=9)
    #[arg(long, short = 'd', global = true, env = "FIXDEC_DIGITS")]
    pub digits: Option<u32>,

    /// Integer representation backing the decimal
    #[arg(long, short = 'r', global = true, env = "FIXDEC_REPR", value_enum)]
    pub repr: Option<ReprKind>,

    /// Configuration file path (TOML format)
    #[arg(long, short = 'c', global = true, env = "FIXDEC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter (trace, debug, info, warn, error, or an EnvFilter directive)
    #[arg(long, global = true, env = "FIXDEC_LOG")]
    pub log_level: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate an infix expression using + - * / and parentheses
    Eval {
        #[arg(allow_hyphen_values = true)]
        expr: String,
    },

    /// Show how a number is stored
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show the numeric limits of the configured decimal type
    Limits,
}

///
/// ReprKind
///
/// Representations selectable at runtime.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReprKind {
    I32,
    #[default]
    I64,
    U32,
    U64,
}

impl ReprKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U32 => "u32",
            Self::U64 => "u64",
        }
    }
}

impl fmt::Display for ReprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["fixdec", "eval", "1 + 2", "--digits", "3", "-r", "u32"])
            .unwrap();

        assert_eq!(cli.digits, Some(3));
        assert_eq!(cli.repr, Some(ReprKind::U32));
        assert!(matches!(cli.command, Command::Eval { ref expr } if expr == "1 + 2"));
    }

    #[test]
    fn negative_values_are_not_flags() {
        let cli = Cli::try_parse_from(["fixdec", "convert", "-3.45"]).unwrap();

        assert!(matches!(cli.command, Command::Convert { ref value } if value == "-3.45"));
    }

    #[test]
    fn rejects_unknown_repr() {
        assert!(Cli::try_parse_from(["fixdec", "limits", "--repr", "i128"]).is_err());
    }
}
