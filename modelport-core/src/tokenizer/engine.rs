//! Generic table-driven tokenizer engine.
//!
//! The engine turns a byte stream into a sequence of [`Token`]s for any
//! language described by the [`Language`] trait: a literal table, a policy
//! for how many symbols a literal announces, and character classifiers.
//!
//! # Matching
//!
//! The engine keeps a lookahead window of decoded characters that is always
//! at least as long as the longest table literal (until the stream ends), and
//! at each cursor position picks the longest literal that matches. A literal
//! only matches at a valid token boundary: at the start of the stream, after
//! a termination character, or when the literal itself begins with one. That
//! is what keeps `get` inside `_get` from being split off as a keyword while
//! still letting `;` terminate `oldValue;`.
//!
//! # Symbols
//!
//! Free-form text becomes [`Token::symbol`] tokens, but only where the
//! language expects them: emitting a table literal may set the
//! expected-symbol budget (see [`Language::expected_symbol_count`]), and each
//! emitted symbol spends one. With no budget left, free-form text is
//! silently skipped, which is how method bodies and attribute noise stay out
//! of the token stream. A pending symbol is emitted when a termination
//! character or a matched literal ends it; text still pending when the
//! stream ends is dropped.

use std::collections::VecDeque;
use std::io::{self, Read};

use thiserror::Error;
use tracing::debug;

use super::token::{LanguageToken, Span, Token};

/// Errors raised while reading the source stream.
///
/// The engine raises no structural errors: malformed source simply yields a
/// token sequence the downstream parser will reject.
#[derive(Error, Debug)]
pub enum TokenizeError {
    #[error("failed to read source stream: {0}")]
    Read(#[from] io::Error),
    #[error("source stream is not valid UTF-8 at byte {offset}")]
    InvalidUtf8 { offset: usize },
}

/// A source language, as the engine sees it.
pub trait Language {
    /// The language's token-kind enumeration.
    type Kind: LanguageToken;

    /// Literal-to-kind table. Order does not matter; the engine sorts it
    /// longest-first so that `=>` wins over `=`.
    fn token_table(&self) -> &'static [(&'static str, Self::Kind)];

    /// How many symbols the language expects after emitting `kind`.
    ///
    /// `Some(n)` replaces the current budget with `n` (zero suppresses
    /// symbols entirely, e.g. inside a body); `None` leaves it unchanged.
    fn expected_symbol_count(&self, kind: Self::Kind) -> Option<usize>;

    /// Characters that end a pending symbol and form valid token boundaries.
    fn is_termination_char(&self, c: char) -> bool {
        c.is_whitespace()
    }

    /// Final filter on accumulated symbol text before emission.
    fn is_valid_symbol(&self, symbol: &str) -> bool {
        !symbol.trim().is_empty()
    }
}

/// Incremental UTF-8 decoder over any [`Read`] source.
///
/// Reads in chunks and carries a partial multi-byte sequence across chunk
/// boundaries. Yields each character with its absolute byte offset.
struct CharReader<R: Read> {
    inner: R,
    pending: Vec<u8>,
    decoded: VecDeque<(char, usize)>,
    offset: usize,
    eof: bool,
}

const READ_CHUNK: usize = 4096;

impl<R: Read> CharReader<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            pending: Vec::new(),
            decoded: VecDeque::new(),
            offset: 0,
            eof: false,
        }
    }

    fn next_char(&mut self) -> Result<Option<(char, usize)>, TokenizeError> {
        while self.decoded.is_empty() && !self.eof {
            self.fill()?;
        }
        Ok(self.decoded.pop_front())
    }

    fn fill(&mut self) -> Result<(), TokenizeError> {
        let mut chunk = [0u8; READ_CHUNK];
        let read = self.inner.read(&mut chunk)?;
        if read == 0 {
            self.eof = true;
            if !self.pending.is_empty() {
                // a multi-byte sequence was cut off by end of stream
                return Err(TokenizeError::InvalidUtf8 {
                    offset: self.offset,
                });
            }
            return Ok(());
        }
        self.pending.extend_from_slice(&chunk[..read]);

        let (valid, malformed) = match std::str::from_utf8(&self.pending) {
            Ok(_) => (self.pending.len(), false),
            // error_len() is None for a truncated tail, which the next read
            // may complete
            Err(e) => (e.valid_up_to(), e.error_len().is_some()),
        };
        if let Ok(text) = std::str::from_utf8(&self.pending[..valid]) {
            for c in text.chars() {
                self.decoded.push_back((c, self.offset));
                self.offset += c.len_utf8();
            }
        }
        self.pending.drain(..valid);
        if malformed {
            return Err(TokenizeError::InvalidUtf8 {
                offset: self.offset,
            });
        }
        Ok(())
    }
}

/// Streaming tokenizer for one source stream.
///
/// Implements `Iterator`; the stream is consumed lazily, exactly once, and
/// the reader is dropped with the tokenizer. After yielding an `Err` the
/// iterator is exhausted.
pub struct Tokenizer<L: Language, R: Read> {
    language: L,
    reader: CharReader<R>,
    /// Literal table sorted by descending length.
    table: Vec<(&'static str, L::Kind)>,
    /// Length in chars of the longest table literal.
    window: usize,
    buffer: Vec<char>,
    /// Absolute byte offset of each buffered character.
    offsets: Vec<usize>,
    cursor: usize,
    /// Start index in `buffer` of the symbol being accumulated, if any.
    symbol_start: Option<usize>,
    /// Remaining expected-symbol budget.
    budget: usize,
    ready: VecDeque<Token<L::Kind>>,
    fully_read: bool,
    failed: bool,
}

impl<L: Language, R: Read> Tokenizer<L, R> {
    pub fn new(language: L, reader: R) -> Self {
        let mut table = language.token_table().to_vec();
        table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        let window = table
            .first()
            .map(|(literal, _)| literal.chars().count())
            .unwrap_or(0);
        Self {
            language,
            reader: CharReader::new(reader),
            table,
            window,
            buffer: Vec::new(),
            offsets: Vec::new(),
            cursor: 0,
            symbol_start: None,
            budget: 0,
            ready: VecDeque::new(),
            fully_read: false,
            failed: false,
        }
    }

    /// Drains the whole stream into a vector.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn tokenize(self) -> Result<Vec<Token<L::Kind>>, TokenizeError> {
        let tokens = self.collect::<Result<Vec<_>, _>>()?;
        debug!(count = tokens.len(), "tokenized source stream");
        Ok(tokens)
    }

    /// Advances the cursor by one position or one matched literal.
    /// Returns `false` once the stream is exhausted.
    fn step(&mut self) -> Result<bool, TokenizeError> {
        // keep the lookahead window at least as long as the longest literal
        while !self.fully_read && self.buffer.len() - self.cursor <= self.window {
            match self.reader.next_char()? {
                Some((c, offset)) => {
                    self.buffer.push(c);
                    self.offsets.push(offset);
                }
                None => self.fully_read = true,
            }
        }
        if self.cursor >= self.buffer.len() {
            return Ok(false);
        }

        let matched = self
            .table
            .iter()
            .copied()
            .find(|&(literal, _)| self.matches_at_cursor(literal));

        if let Some((literal, kind)) = matched {
            if self.is_valid_token_start(literal) {
                self.flush_pending_symbol();
                let start = self.offsets[self.cursor];
                self.cursor += literal.chars().count();
                self.ready
                    .push_back(Token::new(kind).with_span(Span::new(start, literal.len())));
                if let Some(count) = self.language.expected_symbol_count(kind) {
                    self.budget = count;
                }
                return Ok(true);
            }
            // matched mid-symbol; the characters stay part of the symbol
        } else if self.budget > 0 {
            let c = self.buffer[self.cursor];
            if self.language.is_termination_char(c) {
                self.flush_pending_symbol();
            } else if self.symbol_start.is_none() {
                self.symbol_start = Some(self.cursor);
            }
        }
        self.cursor += 1;
        Ok(true)
    }

    fn matches_at_cursor(&self, literal: &str) -> bool {
        let mut index = self.cursor;
        for c in literal.chars() {
            if self.buffer.get(index) != Some(&c) {
                return false;
            }
            index += 1;
        }
        true
    }

    /// A literal only forms a token at a symbol boundary: the stream start,
    /// after a termination character, or when the literal itself begins with
    /// one.
    fn is_valid_token_start(&self, literal: &str) -> bool {
        if self.cursor == 0 {
            return true;
        }
        if self.language.is_termination_char(self.buffer[self.cursor - 1]) {
            return true;
        }
        literal
            .chars()
            .next()
            .is_some_and(|c| self.language.is_termination_char(c))
    }

    fn flush_pending_symbol(&mut self) {
        if let Some(start) = self.symbol_start.take() {
            let text: String = self.buffer[start..self.cursor].iter().collect();
            if self.budget > 0 && self.language.is_valid_symbol(&text) {
                self.budget -= 1;
                let span = Span::new(self.offsets[start], text.len());
                self.ready.push_back(Token::symbol(text).with_span(span));
            }
        }
    }
}

impl<L: Language, R: Read> Iterator for Tokenizer<L, R> {
    type Item = Result<Token<L::Kind>, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(Ok(token));
            }
            if self.failed {
                return None;
            }
            match self.step() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
