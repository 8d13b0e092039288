//! Forward-only cursor over the token slice.

use utils::{TranslationError, TranslationResult};

use crate::token::{Token, TokenKind};

/// Reads tokens left to right, skipping comments and blank tokens.
///
/// The position only moves forward; at most one token is looked at ahead of it.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> TokenCursor<'a> {
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn skip_noise(&mut self) {
        while self.tokens.get(self.position).is_some_and(Token::is_noise) {
            self.position += 1;
        }
    }

    /// Next meaningful token, without consuming it.
    pub fn peek(&mut self) -> Option<&'a Token> {
        self.skip_noise();
        self.tokens.get(self.position)
    }

    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Consumes the next token if `accept` holds for it, otherwise reports what was expected.
    pub fn expect_with(
        &mut self,
        expected: &str,
        accept: impl Fn(&Token) -> bool,
    ) -> TranslationResult<&'a Token> {
        match self.peek() {
            Some(token) if accept(token) => {
                self.position += 1;
                Ok(token)
            }
            Some(token) => Err(self.error(format!(
                "Expected {expected}, but got a {} with value \"{}\".",
                token.kind, token.text
            ))),
            None => Err(self.error(format!(
                "Reached end of input but was expecting {expected}."
            ))),
        }
    }

    pub fn expect_kind(&mut self, kind: TokenKind, expected: &str) -> TranslationResult<&'a Token> {
        self.expect_with(expected, |token| token.kind == kind)
    }

    /// Matches on the literal text only, so tokenizers may classify punctuation freely.
    pub fn expect_text(&mut self, text: &str) -> TranslationResult<&'a Token> {
        self.expect_with(&format!("\"{text}\""), |token| token.text == text)
    }

    /// Consumes the next token when its text is `text`.
    pub fn eat_text(&mut self, text: &str) -> bool {
        if self.peek().is_some_and(|token| token.text == text) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Line of the token under the cursor, or of the last token once input is exhausted.
    pub fn current_line(&mut self) -> Option<usize> {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|token| token.line)
    }

    pub fn error(&mut self, message: impl Into<String>) -> TranslationError {
        TranslationError::structural(message, self.current_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Vec<Token> {
        vec![
            Token::new(TokenKind::Comment, "# header", 1, 0),
            Token::new(TokenKind::Identifier, "x", 2, 0),
            Token::new(TokenKind::Whitespace, " ", 2, 0),
            Token::new(TokenKind::Operator, "=", 2, 0),
            Token::new(TokenKind::Number, "5", 2, 0),
        ]
    }

    #[test]
    fn test_peek_skips_noise() {
        let tokens = tokens();
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(cursor.peek().map(|t| t.text.as_str()), Some("x"));
        cursor.advance();
        assert_eq!(cursor.peek().map(|t| t.text.as_str()), Some("="));
    }

    #[test]
    fn test_expect_and_end() {
        let tokens = tokens();
        let mut cursor = TokenCursor::new(&tokens);
        cursor.expect_kind(TokenKind::Identifier, "a variable").unwrap();
        cursor.expect_text("=").unwrap();
        assert!(!cursor.eat_text("+"));
        cursor.expect_kind(TokenKind::Number, "a number").unwrap();
        assert!(cursor.peek().is_none());

        let error = cursor.expect_text(")").unwrap_err();
        assert_eq!(error.line(), Some(2));
        assert_eq!(
            error.message(),
            "Reached end of input but was expecting \")\"."
        );
    }

    #[test]
    fn test_expect_reports_found_token() {
        let tokens = tokens();
        let mut cursor = TokenCursor::new(&tokens);
        let error = cursor.expect_kind(TokenKind::Number, "a number").unwrap_err();
        assert_eq!(
            error.to_string(),
            "L2 - Expected a number, but got a identifier with value \"x\"."
        );
    }

    #[test]
    fn test_empty_input() {
        let mut cursor = TokenCursor::new(&[]);
        assert!(cursor.peek().is_none());
        assert_eq!(cursor.current_line(), None);
        assert_eq!(cursor.error("boom").to_string(), "boom");
    }
}
