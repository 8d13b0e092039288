use marie_isa::{WORD_MAX, WORD_MIN};
use utils::{TranslationError, TranslationResult};

use super::{Parse, TokenCursor};
use crate::{
    lang::{ArithOp, CompareOp, Comparison, Expression, Operand},
    token::{Token, TokenKind},
};

/// Reads a number token as a 16-bit signed word.
pub fn parse_literal(token: &Token) -> TranslationResult<i32> {
    let value: i64 = token.text.parse().map_err(|_| {
        let message = format!("Invalid number \"{}\".", token.text);
        TranslationError::structural(message, Some(token.line))
    })?;
    i32::try_from(value)
        .ok()
        .filter(|value| (WORD_MIN..=WORD_MAX).contains(value))
        .ok_or_else(|| {
            TranslationError::unsupported(
                format!("Literal {value} does not fit in a 16-bit word."),
                Some(token.line),
            )
        })
}

/// Parser for number literals.
pub struct LiteralParser;

impl Parse<i32> for LiteralParser {
    fn parse(&self, cursor: &mut TokenCursor<'_>) -> TranslationResult<i32> {
        let token = cursor.expect_kind(TokenKind::Number, "a number")?;
        parse_literal(token)
    }
}

/// Parser for a variable or a literal.
pub struct OperandParser;

impl Parse<Operand> for OperandParser {
    fn parse(&self, cursor: &mut TokenCursor<'_>) -> TranslationResult<Operand> {
        let token = cursor.expect_with("a variable or a number", |token| {
            matches!(token.kind, TokenKind::Identifier | TokenKind::Number)
        })?;
        match token.kind {
            TokenKind::Number => parse_literal(token).map(Operand::Literal),
            _ => Ok(Operand::Var(token.text.clone())),
        }
    }
}

/// Parser for the right-hand side of an assignment.
pub struct ExpressionParser;

impl ExpressionParser {
    /// `input()`, optionally wrapped as `int(input())`.
    fn parse_input(cursor: &mut TokenCursor<'_>) -> TranslationResult<Expression> {
        let wrapped = cursor.eat_text("int");
        if wrapped {
            cursor.expect_text("(")?;
        }
        cursor.expect_text("input")?;
        cursor.expect_text("(")?;
        cursor.expect_text(")")?;
        if wrapped {
            cursor.expect_text(")")?;
        }
        Ok(Expression::Input)
    }
}

impl Parse<Expression> for ExpressionParser {
    fn parse(&self, cursor: &mut TokenCursor<'_>) -> TranslationResult<Expression> {
        let Some(first) = cursor.peek() else {
            return Err(cursor.error("Invalid assignment expression."));
        };
        match first.kind {
            TokenKind::Builtin if first.text == "input" || first.text == "int" => {
                return Self::parse_input(cursor);
            }
            TokenKind::Identifier | TokenKind::Number => {}
            _ => return Err(cursor.error("Invalid assignment expression.")),
        }

        let left = OperandParser.parse(cursor)?;
        let op_token = match cursor.peek() {
            Some(token) if token.kind == TokenKind::Operator && token.line == first.line => token,
            _ => return Ok(Expression::Value(left)),
        };
        cursor.advance();
        let op = ArithOp::from_symbol(&op_token.text).ok_or_else(|| {
            TranslationError::structural(
                format!("Unsupported arithmetic operator \"{}\".", op_token.text),
                Some(op_token.line),
            )
        })?;
        let right = OperandParser.parse(cursor)?;
        Ok(Expression::Binary { left, op, right })
    }
}

/// Parser for `left OP right` comparisons.
pub struct ConditionParser;

impl Parse<Comparison> for ConditionParser {
    fn parse(&self, cursor: &mut TokenCursor<'_>) -> TranslationResult<Comparison> {
        let left = OperandParser.parse(cursor)?;
        let op_token = cursor.expect_kind(TokenKind::Operator, "a comparison operator")?;
        let op = CompareOp::from_symbol(&op_token.text).ok_or_else(|| {
            TranslationError::structural(
                format!("Unsupported comparison operator \"{}\".", op_token.text),
                Some(op_token.line),
            )
        })?;
        let right = OperandParser.parse(cursor)?;
        Ok(Comparison { left, op, right })
    }
}

#[cfg(test)]
mod tests {
    use utils::ErrorKind;

    use super::*;

    fn line(tokens: &[(TokenKind, &str)]) -> Vec<Token> {
        tokens
            .iter()
            .map(|(kind, text)| Token::new(*kind, *text, 1, 0))
            .collect()
    }

    #[test]
    fn test_literal_range() {
        let ok = Token::new(TokenKind::Number, "-32768", 1, 0);
        assert_eq!(parse_literal(&ok).unwrap(), -32768);

        let leading_zeros = Token::new(TokenKind::Number, "007", 1, 0);
        assert_eq!(parse_literal(&leading_zeros).unwrap(), 7);

        let big = Token::new(TokenKind::Number, "40000", 4, 0);
        let error = parse_literal(&big).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnsupportedConstruct);
        assert_eq!(error.line(), Some(4));
    }

    #[test]
    fn test_binary_expression() {
        let tokens = line(&[
            (TokenKind::Identifier, "a"),
            (TokenKind::Operator, "*"),
            (TokenKind::Number, "3"),
        ]);
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(
            ExpressionParser.parse(&mut cursor).unwrap(),
            Expression::Binary {
                left: Operand::Var("a".to_string()),
                op: ArithOp::Mul,
                right: Operand::Literal(3),
            }
        );
    }

    #[test]
    fn test_operator_on_next_line_ends_expression() {
        let tokens = vec![
            Token::new(TokenKind::Identifier, "a", 1, 0),
            Token::new(TokenKind::Operator, "-", 2, 0),
        ];
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(
            ExpressionParser.parse(&mut cursor).unwrap(),
            Expression::Value(Operand::Var("a".to_string()))
        );
    }

    #[test]
    fn test_input_forms() {
        let plain = line(&[
            (TokenKind::Builtin, "input"),
            (TokenKind::Punctuation, "("),
            (TokenKind::Punctuation, ")"),
        ]);
        assert_eq!(
            ExpressionParser.parse(&mut TokenCursor::new(&plain)).unwrap(),
            Expression::Input
        );

        let wrapped = line(&[
            (TokenKind::Builtin, "int"),
            (TokenKind::Punctuation, "("),
            (TokenKind::Builtin, "input"),
            (TokenKind::Punctuation, "("),
            (TokenKind::Punctuation, ")"),
            (TokenKind::Punctuation, ")"),
        ]);
        assert_eq!(
            ExpressionParser.parse(&mut TokenCursor::new(&wrapped)).unwrap(),
            Expression::Input
        );
    }

    #[test]
    fn test_unsupported_operators() {
        let division = line(&[
            (TokenKind::Identifier, "a"),
            (TokenKind::Operator, "/"),
            (TokenKind::Identifier, "b"),
        ]);
        let error = ExpressionParser
            .parse(&mut TokenCursor::new(&division))
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Structural);
        assert_eq!(error.line(), Some(1));

        let not_equal = line(&[
            (TokenKind::Identifier, "a"),
            (TokenKind::Operator, "!="),
            (TokenKind::Identifier, "b"),
        ]);
        let error = ConditionParser
            .parse(&mut TokenCursor::new(&not_equal))
            .unwrap_err();
        assert_eq!(error.message(), "Unsupported comparison operator \"!=\".");
    }

    #[test]
    fn test_invalid_assignment_expression() {
        let tokens = line(&[(TokenKind::Punctuation, ":")]);
        let error = ExpressionParser
            .parse(&mut TokenCursor::new(&tokens))
            .unwrap_err();
        assert_eq!(error.message(), "Invalid assignment expression.");
    }
}
