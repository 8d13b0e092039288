//! Token model consumed by the translator.
//!
//! Tokens are produced by an external tokenizer; the translator only reads them.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    /// `if`, `for`, `in`
    Keyword,
    /// `print`, `input`, `range`, `int`
    Builtin,
    Operator,
    /// `(`, `)`, `:`, `,`
    Punctuation,
    Comment,
    Whitespace,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::Keyword => "keyword",
            Self::Builtin => "builtin",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
            Self::Comment => "comment",
            Self::Whitespace => "whitespace",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based source line.
    pub line: usize,
    /// Indentation depth of the logical line this token belongs to.
    pub indent: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, indent: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            indent,
        }
    }

    /// Comments and blank tokens carry no meaning for the translator.
    pub fn is_noise(&self) -> bool {
        matches!(self.kind, TokenKind::Comment | TokenKind::Whitespace)
            || self.text.trim().is_empty()
    }
}
