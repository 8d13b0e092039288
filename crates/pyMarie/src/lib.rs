#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use tracing::{debug, instrument};
use utils::TranslationResult;

use crate::{codegen::compile_program, parser::parse_program};

pub mod codegen;
pub mod constants;
pub mod lang;
pub mod parser;
pub mod token;
mod traits;

pub use lang::Program;
pub use token::{Token, TokenKind};
pub use traits::IndentedDisplay;

/// Translates a token stream of the structured language into MARIE assembly.
///
/// The first error aborts the run; no partial output is produced.
#[instrument(skip_all, fields(tokens = tokens.len()))]
pub fn translate(tokens: &[Token]) -> TranslationResult<String> {
    let program = parse_program(tokens)?;
    debug!("parsed program:\n{program}");
    compile_program(&program)
}

#[derive(Debug, Clone, Default)]
struct Counter(usize);

impl Counter {
    /// Next number, starting at 1.
    const fn next(&mut self) -> usize {
        self.0 += 1;
        self.0
    }
}
