//! Translators between a small structured language and MARIE assembly.
//!
//! [`high_to_low`] lowers a token stream to assembly text, [`low_to_high`] lifts
//! assembly text back. The two directions share no state.

pub use marie_py::{LiftedProgram, lift};
pub use py_marie::{Token, TokenKind};
pub use utils::{ErrorKind, TranslationError, TranslationResult, init_tracing};

/// Lowers structured-language tokens to MARIE assembly.
pub fn high_to_low(tokens: &[Token]) -> TranslationResult<String> {
    py_marie::translate(tokens)
}

/// Lifts MARIE assembly to structured-language text.
pub fn low_to_high(source: &str) -> TranslationResult<String> {
    marie_py::translate(source)
}
