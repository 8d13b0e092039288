use utils::TranslationResult;

use crate::{lang::Program, token::Token};

pub mod cursor;
pub mod expression;
pub mod statement;

pub use cursor::TokenCursor;

/// Core trait for all parsers.
pub trait Parse<T> {
    /// Consumes the tokens of one `T` from the cursor.
    fn parse(&self, cursor: &mut TokenCursor<'_>) -> TranslationResult<T>;
}

const UNEXPECTED_INDENT: &str = "Unexpected indent.";

/// Builds the statement tree of a whole token stream.
///
/// Top-level statements share the indentation of the first one.
pub fn parse_program(tokens: &[Token]) -> TranslationResult<Program> {
    let mut cursor = TokenCursor::new(tokens);
    let base = cursor.peek().map_or(0, |token| token.indent);
    let mut lines = Vec::new();
    while let Some(token) = cursor.peek() {
        if token.indent > base {
            return Err(cursor.error(UNEXPECTED_INDENT));
        }
        lines.push(statement::StatementParser.parse(&mut cursor)?);
    }
    Ok(Program { lines })
}
