use thiserror::Error;

use crate::instruction::Mnemonic;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IsaError {
    #[error("Unknown instruction \"{0}\".")]
    UnknownMnemonic(String),
    #[error("{0} expects an operand.")]
    MissingOperand(Mnemonic),
    #[error("{mnemonic} does not take an operand, but got \"{operand}\".")]
    UnexpectedOperand { mnemonic: Mnemonic, operand: String },
    #[error("Unknown Skipcond code \"{0}\", expected 000, 400 or 800.")]
    UnknownCondition(String),
    #[error("Invalid decimal value \"{0}\".")]
    InvalidDecimal(String),
    #[error("Invalid hexadecimal value \"{0}\".")]
    InvalidHex(String),
    #[error("Value {0} does not fit in a 16-bit word.")]
    WordOutOfRange(i64),
}

impl IsaError {
    /// Errors for shapes the instruction set recognizes but cannot represent.
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnknownCondition(_) | Self::WordOutOfRange(_))
    }
}
