//! Infix expressions over decimals.
//!
//! Grammar, with `*` and `/` binding tighter than `+` and `-`, all left
//! associative:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := '-' unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```

use crate::error::ExprError;
use fixdec::{Decimal, Repr};
use std::{fmt, iter::Peekable, vec::IntoIter};

/// Longest accepted expression, in bytes.
pub const MAX_EXPR_BYTES: usize = 4 * 1024;

/// Deepest accepted chain of parentheses and unary minus.
pub const MAX_EXPR_NESTING: usize = 64;

///
/// Token
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    Number(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Spanned {
    token: Token,
    position: usize,
}

fn tokenize(input: &str) -> Result<Vec<Spanned>, ExprError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let mut text = String::from(c);
                while let Some(&(_, next)) = chars.peek() {
                    if !(next.is_ascii_digit() || next == '.') {
                        break;
                    }
                    text.push(next);
                    chars.next();
                }
                Token::Number(text)
            }
            found => return Err(ExprError::UnexpectedChar { found, position }),
        };

        tokens.push(Spanned { token, position });
    }

    Ok(tokens)
}

///
/// BinaryOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

///
/// Expr
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    Number(String),
    Neg(Box<Self>),
    Binary {
        op: BinaryOp,
        lhs: Box<Self>,
        rhs: Box<Self>,
    },
}

impl Expr {
    pub fn parse(input: &str) -> Result<Self, ExprError> {
        if input.len() > MAX_EXPR_BYTES {
            return Err(ExprError::InputTooLarge {
                max: MAX_EXPR_BYTES,
                actual: input.len(),
            });
        }

        let mut parser = Parser {
            tokens: tokenize(input)?.into_iter().peekable(),
            depth: 0,
        };

        let expr = parser.expr()?;
        match parser.tokens.next() {
            None => Ok(expr),
            Some(Spanned { token, position }) => Err(ExprError::UnexpectedToken {
                found: token.to_string(),
                position,
            }),
        }
    }

    /// Evaluate with literals rounded to `DIGITS` fractional digits.
    pub fn eval<const DIGITS: u32, T: Repr>(&self) -> Result<Decimal<DIGITS, T>, ExprError> {
        match self {
            Self::Number(text) => {
                Decimal::from_str_rounded(text).map_err(|source| ExprError::Number {
                    text: text.clone(),
                    source,
                })
            }
            Self::Neg(inner) => Ok(inner.eval::<DIGITS, T>()?.try_neg()?),
            Self::Binary { op, lhs, rhs } => {
                let lhs = lhs.eval::<DIGITS, T>()?;
                let rhs = rhs.eval::<DIGITS, T>()?;

                let value = match op {
                    BinaryOp::Add => lhs.try_add(rhs),
                    BinaryOp::Sub => lhs.try_sub(rhs),
                    BinaryOp::Mul => lhs.try_mul(rhs),
                    BinaryOp::Div => lhs.try_div(rhs),
                }?;
                tracing::trace!(?op, %lhs, %rhs, %value, "evaluated");

                Ok(value)
            }
        }
    }
}

struct Parser {
    tokens: Peekable<IntoIter<Spanned>>,
    depth: usize,
}

impl Parser {
    fn expr(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.term()?;

        while let Some(op) = self.take_op(|token| match token {
            Token::Plus => Some(BinaryOp::Add),
            Token::Minus => Some(BinaryOp::Sub),
            _ => None,
        }) {
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.unary()?;

        while let Some(op) = self.take_op(|token| match token {
            Token::Star => Some(BinaryOp::Mul),
            Token::Slash => Some(BinaryOp::Div),
            _ => None,
        }) {
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, ExprError> {
        if let Some(minus) = self.tokens.next_if(|s| s.token == Token::Minus) {
            let inner = self.nested(minus.position, Self::unary)?;
            return Ok(Expr::Neg(Box::new(inner)));
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ExprError> {
        let Spanned { token, position } = self.tokens.next().ok_or(ExprError::UnexpectedEnd)?;

        match token {
            Token::Number(text) => Ok(Expr::Number(text)),
            Token::LParen => {
                let inner = self.nested(position, Self::expr)?;
                match self.tokens.next() {
                    Some(Spanned {
                        token: Token::RParen,
                        ..
                    }) => Ok(inner),
                    Some(Spanned { token, position }) => Err(ExprError::UnexpectedToken {
                        found: token.to_string(),
                        position,
                    }),
                    None => Err(ExprError::UnexpectedEnd),
                }
            }
            token => Err(ExprError::UnexpectedToken {
                found: token.to_string(),
                position,
            }),
        }
    }

    /// Run one nested step, failing past `MAX_EXPR_NESTING`.
    fn nested(
        &mut self,
        position: usize,
        step: impl FnOnce(&mut Self) -> Result<Expr, ExprError>,
    ) -> Result<Expr, ExprError> {
        if self.depth >= MAX_EXPR_NESTING {
            return Err(ExprError::NestingTooDeep {
                max: MAX_EXPR_NESTING,
                position,
            });
        }

        self.depth += 1;
        let result = step(self);
        self.depth -= 1;

        result
    }

    fn take_op(&mut self, classify: impl Fn(&Token) -> Option<BinaryOp>) -> Option<BinaryOp> {
        let op = classify(&self.tokens.peek()?.token)?;
        self.tokens.next();

        Some(op)
    }
}

///
/// TESTS
///
