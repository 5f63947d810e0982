use fixdec::{DecimalError, ParseDecimalError};
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("digits must be within 0..={max}, got {digits}")]
    DigitsOutOfRange { digits: u32, max: u32 },
}

///
/// ExprError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ExprError {
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("unexpected token '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("expression is {actual} bytes, limit is {max}")]
    InputTooLarge { max: usize, actual: usize },

    #[error("expression nests deeper than {max} levels at position {position}")]
    NestingTooDeep { max: usize, position: usize },

    #[error("invalid number '{text}'")]
    Number {
        text: String,
        source: ParseDecimalError,
    },

    #[error(transparent)]
    Arithmetic(#[from] DecimalError),
}

///
/// CliError
///

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Expr(#[from] ExprError),

    #[error("cannot convert '{input}': {source}")]
    Convert {
        input: String,
        source: ParseDecimalError,
    },
}
