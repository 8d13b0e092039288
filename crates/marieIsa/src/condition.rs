use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::errors::IsaError;

/// Accumulator test performed by `Skipcond`.
///
/// The next instruction is skipped when the test holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Condition {
    /// `Skipcond 000`: AC < 0
    Negative,
    /// `Skipcond 400`: AC = 0
    Zero,
    /// `Skipcond 800`: AC > 0
    Positive,
}

impl Condition {
    pub const ALL: [Self; 3] = [Self::Negative, Self::Zero, Self::Positive];

    /// Three-digit operand as written after `Skipcond`.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Negative => "000",
            Self::Zero => "400",
            Self::Positive => "800",
        }
    }

    /// Comparison against zero that the condition tests, e.g. `== 0`.
    pub const fn comparison(&self) -> &'static str {
        match self {
            Self::Negative => "< 0",
            Self::Zero => "== 0",
            Self::Positive => "> 0",
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Condition {
    type Err = IsaError;

    /// Skipcond operands are hexadecimal, so `0`, `000` and `0x400` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        match u16::from_str_radix(digits, 16) {
            Ok(0x000) => Ok(Self::Negative),
            Ok(0x400) => Ok(Self::Zero),
            Ok(0x800) => Ok(Self::Positive),
            _ => Err(IsaError::UnknownCondition(s.to_string())),
        }
    }
}
