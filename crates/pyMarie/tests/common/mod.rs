//! Minimal line-based tokenizer for driving the translator from source text.

#![allow(dead_code)]

use py_marie::{Token, TokenKind};
use utils::TranslationResult;

const KEYWORDS: [&str; 3] = ["if", "for", "in"];
const BUILTINS: [&str; 4] = ["print", "input", "range", "int"];
const TWO_CHAR_OPERATORS: [&str; 4] = ["==", "!=", "<=", ">="];

pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        let indent = text.len() - text.trim_start_matches(' ').len();
        let chars: Vec<char> = text.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let start = i;
            let kind = if c.is_whitespace() {
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                TokenKind::Whitespace
            } else if c == '#' {
                i = chars.len();
                TokenKind::Comment
            } else if c.is_ascii_digit() {
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                TokenKind::Number
            } else if c.is_alphabetic() || c == '_' {
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                if KEYWORDS.contains(&word.as_str()) {
                    TokenKind::Keyword
                } else if BUILTINS.contains(&word.as_str()) {
                    TokenKind::Builtin
                } else {
                    TokenKind::Identifier
                }
            } else if "(),:".contains(c) {
                i += 1;
                TokenKind::Punctuation
            } else {
                let pair: String = chars[i..chars.len().min(i + 2)].iter().collect();
                i += if TWO_CHAR_OPERATORS.contains(&pair.as_str()) { 2 } else { 1 };
                TokenKind::Operator
            };
            let text: String = chars[start..i].iter().collect();
            tokens.push(Token::new(kind, text, line, indent));
        }
    }
    tokens
}

pub fn translate(source: &str) -> TranslationResult<String> {
    py_marie::translate(&tokenize(source))
}
