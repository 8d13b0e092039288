use utils::{TranslationError, TranslationResult};

use super::expression::{ConditionParser, ExpressionParser, LiteralParser, OperandParser};
use super::{Parse, TokenCursor, UNEXPECTED_INDENT};
use crate::{
    lang::Line,
    token::{Token, TokenKind},
};

/// Parser for all statement types, dispatching on the leading token.
pub struct StatementParser;

impl Parse<Line> for StatementParser {
    fn parse(&self, cursor: &mut TokenCursor<'_>) -> TranslationResult<Line> {
        let Some(token) = cursor.peek() else {
            return Err(cursor.error("Reached end of input but was expecting a statement."));
        };
        match (token.kind, token.text.as_str()) {
            (TokenKind::Identifier, _) => AssignmentParser.parse(cursor),
            (TokenKind::Builtin, "print") => PrintParser.parse(cursor),
            (TokenKind::Keyword, "if") => IfStatementParser.parse(cursor),
            (TokenKind::Keyword, "for") => ForStatementParser.parse(cursor),
            _ => Err(cursor.error("Unidentified expression.")),
        }
    }
}

/// Parser for `name = <expression>`.
pub struct AssignmentParser;

impl Parse<Line> for AssignmentParser {
    fn parse(&self, cursor: &mut TokenCursor<'_>) -> TranslationResult<Line> {
        let target = cursor.expect_kind(TokenKind::Identifier, "a variable name")?;
        cursor.expect_text("=")?;
        let value = ExpressionParser.parse(cursor)?;
        Ok(Line::Assignment {
            var: target.text.clone(),
            value,
            line: target.line,
        })
    }
}

/// Parser for `print(operand)`.
pub struct PrintParser;

impl Parse<Line> for PrintParser {
    fn parse(&self, cursor: &mut TokenCursor<'_>) -> TranslationResult<Line> {
        let keyword = cursor.expect_text("print")?;
        cursor.expect_text("(")?;
        let value = OperandParser.parse(cursor)?;
        cursor.expect_text(")")?;
        Ok(Line::Print {
            value,
            line: keyword.line,
        })
    }
}

/// Parser for `if (left OP right):` and its body.
pub struct IfStatementParser;

impl Parse<Line> for IfStatementParser {
    fn parse(&self, cursor: &mut TokenCursor<'_>) -> TranslationResult<Line> {
        let keyword = cursor.expect_text("if")?;
        let parenthesized = cursor.eat_text("(");
        let condition = ConditionParser.parse(cursor)?;
        if parenthesized {
            cursor.expect_text(")")?;
        }
        let colon = cursor.expect_text(":")?;
        let body = BodyParser::new(keyword, colon).parse(cursor)?;
        Ok(Line::IfCondition {
            condition,
            body,
            line: keyword.line,
        })
    }
}

/// Parser for `for [(]var in range(start, end)[)]:` and its body.
pub struct ForStatementParser;

impl Parse<Line> for ForStatementParser {
    fn parse(&self, cursor: &mut TokenCursor<'_>) -> TranslationResult<Line> {
        let keyword = cursor.expect_text("for")?;
        let parenthesized = cursor.eat_text("(");
        let iterator = cursor.expect_kind(TokenKind::Identifier, "a loop variable")?;
        cursor.expect_text("in")?;
        cursor.expect_text("range")?;
        cursor.expect_text("(")?;
        let start = LiteralParser.parse(cursor)?;
        cursor.expect_text(",")?;
        let end = LiteralParser.parse(cursor)?;
        cursor.expect_text(")")?;
        if parenthesized {
            cursor.expect_text(")")?;
        }
        let colon = cursor.expect_text(":")?;
        let body = BodyParser::new(keyword, colon).parse(cursor)?;
        Ok(Line::ForLoop {
            iterator: iterator.text.clone(),
            start,
            end,
            body,
            line: keyword.line,
        })
    }
}

/// Parser for the statements owned by a block header.
///
/// A statement on the colon's line is an inline body of exactly one statement.
/// Otherwise the body runs while statements start deeper than the header keyword,
/// and every one of them must sit at the indentation of the first.
pub struct BodyParser {
    header_indent: usize,
    header_line: usize,
    colon_line: usize,
}

impl BodyParser {
    pub const fn new(header: &Token, colon: &Token) -> Self {
        Self {
            header_indent: header.indent,
            header_line: header.line,
            colon_line: colon.line,
        }
    }

    fn unterminated(&self) -> TranslationError {
        TranslationError::unterminated_block(
            "Expected an indented block after the header.",
            Some(self.header_line),
        )
    }
}

impl Parse<Vec<Line>> for BodyParser {
    fn parse(&self, cursor: &mut TokenCursor<'_>) -> TranslationResult<Vec<Line>> {
        let Some(first) = cursor.peek() else {
            return Err(self.unterminated());
        };
        if first.line == self.colon_line {
            return Ok(vec![StatementParser.parse(cursor)?]);
        }
        if first.indent <= self.header_indent {
            return Err(self.unterminated());
        }

        let (outer, body_indent) = (self.header_indent, first.indent);
        let mut body = Vec::new();
        while let Some(token) = cursor.peek().filter(|next| next.indent > outer) {
            if token.indent > body_indent {
                return Err(cursor.error(UNEXPECTED_INDENT));
            }
            if token.indent < body_indent {
                return Err(cursor.error("Unindent does not match any outer block."));
            }
            body.push(StatementParser.parse(cursor)?);
        }
        Ok(body)
    }
}
