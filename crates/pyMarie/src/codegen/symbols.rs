use indexmap::{IndexMap, IndexSet};
use marie_isa::{DataLine, Directive};

use crate::{constants::CONSTANT_PREFIX, lang::Var};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub value: i32,
    /// Source form of the assignment that produced the cell, if any.
    pub comment: Option<String>,
}

/// Variable cells in first-declaration order.
///
/// Redeclaring a name replaces its value and comment but keeps its position.
#[derive(Debug, Default)]
pub struct SymbolTable {
    declarations: IndexMap<Var, Declaration>,
}

impl SymbolTable {
    pub fn declare(&mut self, name: &str, value: i32, comment: Option<String>) {
        self.declarations
            .insert(name.to_string(), Declaration { value, comment });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.declarations.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.get(name)
    }

    pub fn to_lines(&self) -> Vec<DataLine> {
        self.declarations
            .iter()
            .map(|(name, declaration)| {
                let line = DataLine::new(name.as_str(), Directive::Dec(declaration.value));
                match &declaration.comment {
                    Some(comment) => line.with_comment(comment.as_str()),
                    None => line,
                }
            })
            .collect()
    }
}

/// Cells holding literal operands, each value stored once.
#[derive(Debug, Default)]
pub struct ConstantPool {
    values: IndexSet<i32>,
}

impl ConstantPool {
    /// `Const5`, or `ConstNeg5` for -5.
    pub fn name(value: i32) -> String {
        if value < 0 {
            format!("{CONSTANT_PREFIX}Neg{}", value.unsigned_abs())
        } else {
            format!("{CONSTANT_PREFIX}{value}")
        }
    }

    /// Registers `value` and returns the name of its cell.
    pub fn materialize(&mut self, value: i32) -> String {
        self.values.insert(value);
        Self::name(value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_lines(&self) -> Vec<DataLine> {
        self.values
            .iter()
            .map(|&value| DataLine::new(Self::name(value), Directive::Dec(value)))
            .collect()
    }
}
