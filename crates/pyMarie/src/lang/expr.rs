//! Operands, operators and expressions.

use std::fmt::{Display, Formatter};

use marie_isa::Condition;

use super::Var;

/// A variable or a literal, the only values an instruction can address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operand {
    Var(Var),
    Literal(i32),
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Var(var) => write!(f, "{var}"),
            Self::Literal(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    /// Lowered to a call of the multiplication subroutine.
    Mul,
}

impl ArithOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            _ => None,
        }
    }
}

impl Display for ArithOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompareOp {
    LessThan,
    Equal,
    GreaterThan,
}

impl CompareOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Self::LessThan),
            "==" => Some(Self::Equal),
            ">" => Some(Self::GreaterThan),
            _ => None,
        }
    }

    /// `Skipcond` test applied to `left - right`.
    ///
    /// The skip steps over the jump past the block, so the block runs exactly
    /// when the relation holds.
    pub const fn skip_condition(&self) -> Condition {
        match self {
            Self::LessThan => Condition::Negative,
            Self::Equal => Condition::Zero,
            Self::GreaterThan => Condition::Positive,
        }
    }
}

impl Display for CompareOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LessThan => write!(f, "<"),
            Self::Equal => write!(f, "=="),
            Self::GreaterThan => write!(f, ">"),
        }
    }
}

/// `left OP right` inside an `if` header.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Comparison {
    pub left: Operand,
    pub op: CompareOp,
    pub right: Operand,
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

/// Right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Expression {
    Value(Operand),
    Binary {
        left: Operand,
        op: ArithOp,
        right: Operand,
    },
    /// `input()`
    Input,
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(operand) => write!(f, "{operand}"),
            Self::Binary { left, op, right } => write!(f, "{left} {op} {right}"),
            Self::Input => write!(f, "input()"),
        }
    }
}
