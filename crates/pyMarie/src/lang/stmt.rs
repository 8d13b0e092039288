//! Statement types for the statement tree.

use std::fmt::{Display, Formatter};

use super::{Comparison, Expression, Operand, SourceLineNumber, Var};
use crate::traits::{IndentedDisplay, render_block};

/// A statement; block statements own their bodies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Line {
    Assignment {
        var: Var,
        value: Expression,
        line: SourceLineNumber,
    },
    Print {
        value: Operand,
        line: SourceLineNumber,
    },
    IfCondition {
        condition: Comparison,
        body: Vec<Self>,
        line: SourceLineNumber,
    },
    /// `for iterator in range(start, end)`, `end` exclusive.
    ForLoop {
        iterator: Var,
        start: i32,
        end: i32,
        body: Vec<Self>,
        line: SourceLineNumber,
    },
}

impl Line {
    pub const fn source_line(&self) -> SourceLineNumber {
        match self {
            Self::Assignment { line, .. }
            | Self::Print { line, .. }
            | Self::IfCondition { line, .. }
            | Self::ForLoop { line, .. } => *line,
        }
    }

    fn header(&self) -> String {
        match self {
            Self::Assignment { var, value, .. } => format!("{var} = {value}"),
            Self::Print { value, .. } => format!("print({value})"),
            Self::IfCondition { condition, .. } => format!("if ({condition}):"),
            Self::ForLoop {
                iterator,
                start,
                end,
                ..
            } => format!("for {iterator} in range({start}, {end}):"),
        }
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_with_indent(0))
    }
}

impl IndentedDisplay for Line {
    fn to_string_with_indent(&self, indent: usize) -> String {
        let header = format!("{}{}", "    ".repeat(indent), self.header());
        match self {
            Self::IfCondition { body, .. } | Self::ForLoop { body, .. } => {
                format!("{header}\n{}", render_block(body, indent + 1))
            }
            Self::Assignment { .. } | Self::Print { .. } => header,
        }
    }
}

/// A whole structured-language program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub lines: Vec<Line>,
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render_block(&self.lines, 0))
    }
}
