use crate::{
    cli::{Cli, ReprKind},
    error::ConfigError,
};
use serde::Deserialize;
use std::{fs, path::Path};

///
/// FileConfig
///
/// Optional TOML configuration:
///
/// ```toml
/// digits = 4
/// repr = "i64"
/// log = "fixdec=debug"
/// ```
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub digits: Option<u32>,
    pub repr: Option<ReprKind>,
    pub log: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

///
/// Settings
///
/// Effective settings. Precedence: flag or environment, then file, then
/// defaults.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub digits: u32,
    pub repr: ReprKind,
    pub log: Option<String>,
}

impl Settings {
    pub const DEFAULT_DIGITS: u32 = 2;
    pub const MAX_DIGITS: u32 = 9;

    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Self::merge(cli.digits, cli.repr, cli.log_level.clone(), file)
    }

    pub fn merge(
        digits: Option<u32>,
        repr: Option<ReprKind>,
        log: Option<String>,
        file: FileConfig,
    ) -> Result<Self, ConfigError> {
        let digits = digits.or(file.digits).unwrap_or(Self::DEFAULT_DIGITS);
        if digits > Self::MAX_DIGITS {
            return Err(ConfigError::DigitsOutOfRange {
                digits,
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self {
            digits,
            repr: repr.or(file.repr).unwrap_or_default(),
            log: log.or(file.log),
        })
    }
}

///
/// TESTS
///
