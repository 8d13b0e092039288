//! Statement tree of the structured language.

pub mod expr;
pub mod stmt;

pub use expr::*;
pub use stmt::*;

/// Variable name.
pub type Var = String;

/// 1-based line in the structured-language source.
pub type SourceLineNumber = usize;
