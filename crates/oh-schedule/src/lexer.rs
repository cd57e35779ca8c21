//! Tokenizer for schedule text.
//!
//! Whitespace is not a token; instead every token records whether
//! whitespace preceded it (`spaced`). The grammar checks it at the start of
//! the line (no leading blanks), between the day list and the opening time
//! (blank required), and after a colon (none allowed).
//!
//! The tokenizer never fails.  Characters with no meaning in the grammar
//! become [`TokenKind::Other`] and are rejected by the parser only if it
//! actually reaches them.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TokenKind<'a> {
    /// A run of alphabetic characters (`Mon`, `pm`).
    Word(&'a str),
    /// A run of ASCII digits, kept as text so leading zeros survive.
    Number(&'a str),
    Colon,
    Hyphen,
    Comma,
    Other(char),
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(w) | TokenKind::Number(w) => write!(f, "{w:?}"),
            TokenKind::Colon => f.write_str("':'"),
            TokenKind::Hyphen => f.write_str("'-'"),
            TokenKind::Comma => f.write_str("','"),
            TokenKind::Other(c) => write!(f, "{c:?}"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Token<'a> {
    pub kind:   TokenKind<'a>,
    /// Byte offset of the token in the source text.
    pub offset: usize,
    /// `true` if at least one whitespace character precedes the token.
    pub spaced: bool,
}

/// Split `text` into tokens.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    let mut spaced = false;

    while let Some(&(offset, c)) = chars.peek() {
        if c.is_whitespace() {
            spaced = true;
            chars.next();
            continue;
        }

        let kind = if c.is_ascii_digit() {
            TokenKind::Number(take_run(text, &mut chars, |c| c.is_ascii_digit()))
        } else if c.is_alphabetic() {
            TokenKind::Word(take_run(text, &mut chars, char::is_alphabetic))
        } else {
            chars.next();
            match c {
                ':' => TokenKind::Colon,
                '-' => TokenKind::Hyphen,
                ',' => TokenKind::Comma,
                other => TokenKind::Other(other),
            }
        };

        tokens.push(Token { kind, offset, spaced });
        spaced = false;
    }

    tokens
}

/// Consume the longest run of characters satisfying `pred` and return it as
/// a slice of `text`.
fn take_run<'a>(
    text:  &'a str,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'a>>,
    pred:  impl Fn(char) -> bool,
) -> &'a str {
    let start = chars.peek().map_or(text.len(), |&(i, _)| i);
    let mut end = start;
    while let Some(&(i, c)) = chars.peek() {
        if !pred(c) {
            break;
        }
        end = i + c.len_utf8();
        chars.next();
    }
    &text[start..end]
}
