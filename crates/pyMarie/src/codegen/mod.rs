use utils::TranslationResult;

use crate::lang::Program;

pub mod compiler;
pub mod instruction;
pub mod label;
pub mod multiplication;
pub mod symbols;

pub use compiler::Compiler;
pub use instruction::compile_lines;
pub use label::{Label, LabelAllocator};

/// Lowers a parsed program to MARIE assembly text.
pub fn compile_program(program: &Program) -> TranslationResult<String> {
    let mut compiler = Compiler::default();
    let pending = compile_lines(&program.lines, &mut compiler, Vec::new())?;
    compiler.finish(pending)
}
