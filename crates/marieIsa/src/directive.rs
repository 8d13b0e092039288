use std::fmt::{Display, Formatter};

use crate::{
    constants::{HEX_MAX, WORD_MAX, WORD_MIN},
    errors::IsaError,
};

/// Initial value of a named memory cell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Directive {
    Dec(i32),
    /// The digits are kept as written (`00ff`).
    Hex { value: u32, digits: String },
}

impl Directive {
    /// Checks a decimal initializer against the word range.
    pub fn dec(value: i64) -> Result<Self, IsaError> {
        if (i64::from(WORD_MIN)..=i64::from(WORD_MAX)).contains(&value) {
            Ok(Self::Dec(value as i32))
        } else {
            Err(IsaError::WordOutOfRange(value))
        }
    }

    /// Decodes `DEC <value>` / `HEX <value>`; returns `None` when `keyword`
    /// names neither directive.
    pub fn decode(keyword: &str, value: &str) -> Option<Result<Self, IsaError>> {
        if keyword.eq_ignore_ascii_case("DEC") {
            Some(
                value
                    .parse::<i64>()
                    .map_err(|_| IsaError::InvalidDecimal(value.to_string()))
                    .and_then(Self::dec),
            )
        } else if keyword.eq_ignore_ascii_case("HEX") {
            Some(
                u32::from_str_radix(value, 16)
                    .map_err(|_| IsaError::InvalidHex(value.to_string()))
                    .and_then(|raw| {
                        if raw <= HEX_MAX {
                            Ok(Self::hex(raw, value))
                        } else {
                            Err(IsaError::WordOutOfRange(i64::from(raw)))
                        }
                    }),
            )
        } else {
            None
        }
    }

    pub fn hex(value: u32, digits: impl Into<String>) -> Self {
        Self::Hex {
            value,
            digits: digits.into(),
        }
    }

    pub fn value(&self) -> i64 {
        match self {
            Self::Dec(value) => i64::from(*value),
            Self::Hex { value, .. } => i64::from(*value),
        }
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dec(value) => write!(f, "DEC {value}"),
            Self::Hex { digits, .. } => write!(f, "HEX {digits}"),
        }
    }
}

/// A named, initialized memory cell: `name, DEC 5 / comment`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataLine {
    pub name: String,
    pub directive: Directive,
    pub comment: Option<String>,
}

impl DataLine {
    pub fn new(name: impl Into<String>, directive: Directive) -> Self {
        Self {
            name: name.into(),
            directive,
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl Display for DataLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.directive)?;
        if let Some(comment) = &self.comment {
            write!(f, " / {comment}")?;
        }
        Ok(())
    }
}
