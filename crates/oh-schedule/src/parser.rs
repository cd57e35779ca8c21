//! Recursive-descent parser producing a typed [`ScheduleLine`].
//!
//! # Grammar
//!
//! ```text
//! line      := dayranges WS+ time '-' time        (trailing text ignored)
//! dayranges := dayrange (',' dayrange)?
//! dayrange  := weekday ('-' weekday)?
//! time      := hour (':' minute)? meridiem        (no space around ':')
//! hour      := 1..12, one or two digits
//! minute    := "00" | "30"
//! meridiem  := "am" | "pm", any case
//! weekday   := Mon | Tue | Wed | Thu | Fri | Sat | Sun
//! ```
//!
//! Whitespace is free around `-`, `,` and before the meridiem.  Matching is
//! anchored at the very start of the text, so leading blanks fail.  Anything
//! after the closing meridiem is ignored, including letters glued to it
//! (`5pmEST`).

use oh_core::{ClockTime, Meridiem, Weekday};

use crate::SyntaxError;
use crate::lexer::{Token, TokenKind, tokenize};

/// Maximum number of comma-separated day ranges on one line.
pub const MAX_DAY_RANGES: usize = 2;

// ── Syntax tree ───────────────────────────────────────────────────────────────

/// `Mon` or `Mon-Fri`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DayRange {
    pub start: Weekday,
    /// `None` for a single day.
    pub end:   Option<Weekday>,
}

/// One fully parsed schedule line, before any interval arithmetic.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ScheduleLine {
    /// One or two day ranges, in source order.
    pub day_ranges: Vec<DayRange>,
    pub start:      ClockTime,
    pub end:        ClockTime,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse one schedule line into its syntax tree.
pub fn parse_schedule_line(text: &str) -> Result<ScheduleLine, SyntaxError> {
    Parser::new(tokenize(text)).line()
}

// ── Parser ────────────────────────────────────────────────────────────────────

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos:    usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: Vec<Token<'a>>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn line(&mut self) -> Result<ScheduleLine, SyntaxError> {
        if let Some(tok) = self.peek().filter(|tok| tok.spaced) {
            return Err(unexpected("a weekday at the start of the line", tok));
        }

        let mut day_ranges = vec![self.day_range()?];
        while day_ranges.len() < MAX_DAY_RANGES && self.eat(TokenKind::Comma) {
            day_ranges.push(self.day_range()?);
        }

        // The opening time must be set apart from the day list.
        match self.peek() {
            Some(tok) if !tok.spaced => {
                return Err(unexpected("whitespace before the opening time", tok));
            }
            None => return Err(SyntaxError::UnexpectedEnd { expected: "an opening time" }),
            Some(_) => {}
        }

        let start = self.time(false)?;
        if !self.eat(TokenKind::Hyphen) {
            return Err(self.error_here("'-' between opening and closing times"));
        }
        let end = self.time(true)?;

        Ok(ScheduleLine { day_ranges, start, end })
    }

    fn day_range(&mut self) -> Result<DayRange, SyntaxError> {
        let start = self.weekday()?;
        let end = if self.eat(TokenKind::Hyphen) {
            Some(self.weekday()?)
        } else {
            None
        };
        Ok(DayRange { start, end })
    }

    fn weekday(&mut self) -> Result<Weekday, SyntaxError> {
        const WHAT: &str = "a weekday (Mon..Sun)";
        let tok = self.expect_token(WHAT)?;
        match tok.kind {
            TokenKind::Word(w) => w.parse().map_err(|_| unexpected(WHAT, tok)),
            _ => Err(unexpected(WHAT, tok)),
        }
    }

    /// `closing` allows trailing letters on the meridiem word.
    fn time(&mut self, closing: bool) -> Result<ClockTime, SyntaxError> {
        let hour = self.hour()?;

        let minute = match self.peek() {
            Some(tok) if tok.kind == TokenKind::Colon && !tok.spaced => {
                self.pos += 1;
                self.minute()?
            }
            _ => 0,
        };

        let meridiem = self.meridiem(closing)?;
        ClockTime::new(hour, minute, meridiem).map_err(|_| SyntaxError::Expected {
            expected: "a valid 12-hour time",
            found:    format!("{hour}:{minute:02} {meridiem}"),
            offset:   self.last_offset(),
        })
    }

    fn hour(&mut self) -> Result<u8, SyntaxError> {
        const WHAT: &str = "an hour between 1 and 12";
        let tok = self.expect_token(WHAT)?;
        match tok.kind {
            TokenKind::Number(digits) if digits.len() <= 2 => digits
                .parse::<u8>()
                .ok()
                .filter(|h| (1..=12).contains(h))
                .ok_or_else(|| unexpected(WHAT, tok)),
            _ => Err(unexpected(WHAT, tok)),
        }
    }

    fn minute(&mut self) -> Result<u8, SyntaxError> {
        const WHAT: &str = "minutes \"00\" or \"30\" directly after ':'";
        let tok = self.expect_token(WHAT)?;
        match tok.kind {
            TokenKind::Number("00") if !tok.spaced => Ok(0),
            TokenKind::Number("30") if !tok.spaced => Ok(30),
            _ => Err(unexpected(WHAT, tok)),
        }
    }

    fn meridiem(&mut self, closing: bool) -> Result<Meridiem, SyntaxError> {
        const WHAT: &str = "\"am\" or \"pm\"";
        let tok = self.expect_token(WHAT)?;
        let word = match tok.kind {
            TokenKind::Word(w) if closing => w.get(..2).unwrap_or(w),
            TokenKind::Word(w) => w,
            _ => return Err(unexpected(WHAT, tok)),
        };
        word.parse().map_err(|_| unexpected(WHAT, tok))
    }

    // ── Token helpers ─────────────────────────────────────────────────────

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    /// Consume the next token if it has kind `kind`.
    fn eat(&mut self, kind: TokenKind<'a>) -> bool {
        match self.peek() {
            Some(tok) if tok.kind == kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn expect_token(&mut self, expected: &'static str) -> Result<Token<'a>, SyntaxError> {
        let tok = self.peek().ok_or(SyntaxError::UnexpectedEnd { expected })?;
        self.pos += 1;
        Ok(tok)
    }

    fn error_here(&self, expected: &'static str) -> SyntaxError {
        match self.peek() {
            Some(tok) => unexpected(expected, tok),
            None => SyntaxError::UnexpectedEnd { expected },
        }
    }

    fn last_offset(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(0, |tok| tok.offset)
    }
}

fn unexpected(expected: &'static str, tok: Token<'_>) -> SyntaxError {
    SyntaxError::Expected {
        expected,
        found:  tok.kind.to_string(),
        offset: tok.offset,
    }
}
