use crate::{
    cli::{Command, ReprKind},
    config::Settings,
    error::{CliError, ExprError},
    expr::Expr,
};
use fixdec::{Decimal, NumericLimits, Repr};
use serde::Serialize;
use std::fmt;

///
/// DecimalCommand
///
/// A command generic over the compile-time decimal shape. `dispatch` picks the
/// instantiation matching the runtime settings.
///

pub trait DecimalCommand {
    type Output;

    fn run<const DIGITS: u32, T: Repr>(self) -> Self::Output;
}

pub fn dispatch<C: DecimalCommand>(settings: &Settings, command: C) -> Result<C::Output, CliError> {
    macro_rules! by_repr {
        ($digits:literal) => {
            match settings.repr {
                ReprKind::I32 => command.run::<$digits, i32>(),
                ReprKind::I64 => command.run::<$digits, i64>(),
                ReprKind::U32 => command.run::<$digits, u32>(),
                ReprKind::U64 => command.run::<$digits, u64>(),
            }
        };
    }

    let output = match settings.digits {
        0 => by_repr!(0),
        1 => by_repr!(1),
        2 => by_repr!(2),
        3 => by_repr!(3),
        4 => by_repr!(4),
        5 => by_repr!(5),
        6 => by_repr!(6),
        7 => by_repr!(7),
        8 => by_repr!(8),
        9 => by_repr!(9),
        digits => {
            return Err(crate::error::ConfigError::DigitsOutOfRange {
                digits,
                max: Settings::MAX_DIGITS,
            }
            .into());
        }
    };

    Ok(output)
}

/// Run a parsed CLI command against the resolved settings.
pub fn execute(command: &Command, settings: &Settings) -> Result<Report, CliError> {
    tracing::debug!(digits = settings.digits, repr = %settings.repr, "dispatching command");

    match command {
        Command::Eval { expr } => {
            let parsed = Expr::parse(expr)?;
            let evaluation = dispatch(settings, Eval { expr, parsed: &parsed })??;

            Ok(Report::Eval(evaluation))
        }
        Command::Convert { value } => Ok(Report::Convert(dispatch(settings, Convert { value })??)),
        Command::Limits => Ok(Report::Limits(dispatch(settings, Limits)?)),
    }
}

///
/// Report
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Eval(Evaluation),
    Convert(Conversion),
    Limits(LimitsReport),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eval(evaluation) => write!(f, "{}", evaluation.value),
            Self::Convert(conversion) => {
                writeln!(f, "value:   {}", conversion.value)?;
                writeln!(f, "scaled:  {}", conversion.scaled)?;
                writeln!(f, "scalar:  {}", conversion.scalar)?;
                writeln!(f, "f64:     {}", conversion.as_f64)?;
                match &conversion.integer {
                    Some(integer) => write!(f, "integer: {integer}"),
                    None => write!(f, "integer: out of range"),
                }
            }
            Self::Limits(report) => {
                writeln!(f, "decimal<{}, {}>", report.digits, report.repr)?;
                let limits = &report.limits;
                writeln!(f, "min:         {}", limits.min)?;
                writeln!(f, "max:         {}", limits.max)?;
                writeln!(f, "is_signed:   {}", limits.is_signed)?;
                writeln!(f, "is_integer:  {}", limits.is_integer)?;
                writeln!(f, "digits:      {}", limits.digits)?;
                writeln!(f, "digits10:    {}", limits.digits10)?;
                write!(f, "round_style: {:?}", limits.round_style)
            }
        }
    }
}

///
/// Eval
///

struct Eval<'a> {
    expr: &'a str,
    parsed: &'a Expr,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Evaluation {
    pub expr: String,
    pub value: String,
    pub scaled: String,
    pub digits: u32,
    pub repr: &'static str,
}

impl DecimalCommand for Eval<'_> {
    type Output = Result<Evaluation, ExprError>;

    fn run<const DIGITS: u32, T: Repr>(self) -> Self::Output {
        let value = self.parsed.eval::<DIGITS, T>()?;
        tracing::info!(expr = self.expr, %value, "expression evaluated");

        Ok(Evaluation {
            expr: self.expr.to_string(),
            value: value.to_string(),
            scaled: value.scaled().to_string(),
            digits: DIGITS,
            repr: T::NAME,
        })
    }
}

///
/// Convert
///

struct Convert<'a> {
    value: &'a str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub value: String,
    pub scaled: String,
    pub scalar: String,
    pub as_f64: f64,
    pub integer: Option<String>,
}

impl DecimalCommand for Convert<'_> {
    type Output = Result<Conversion, CliError>;

    fn run<const DIGITS: u32, T: Repr>(self) -> Self::Output {
        let value =
            Decimal::<DIGITS, T>::from_str_rounded(self.value).map_err(|source| {
                CliError::Convert {
                    input: self.value.to_string(),
                    source,
                }
            })?;

        Ok(Conversion {
            input: self.value.to_string(),
            value: value.to_string(),
            scaled: value.scaled().to_string(),
            scalar: Decimal::<DIGITS, T>::scalar().to_string(),
            as_f64: value.to_f64(),
            integer: value.to_int::<i64>().map(|n| n.to_string()),
        })
    }
}

///
/// Limits
///

struct Limits;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LimitsReport {
    pub digits: u32,
    pub repr: &'static str,
    pub limits: NumericLimits<String>,
}

impl DecimalCommand for Limits {
    type Output = LimitsReport;

    fn run<const DIGITS: u32, T: Repr>(self) -> Self::Output {
        LimitsReport {
            digits: DIGITS,
            repr: T::NAME,
            limits: Decimal::<DIGITS, T>::limits().map(|bound| bound.to_string()),
        }
    }
}

///
/// TESTS
///
