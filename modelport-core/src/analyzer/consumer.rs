//! Lookahead cursor over a token sequence.
//!
//! [`TokenConsumer`] is the parser's only window onto its tokens: every
//! grammar rule is expressed as consume/lookahead calls against it.
//! Consuming operations that find the wrong token, or no token at all,
//! return [`ParseError::Syntax`]; lookahead never consumes and never fails.

use std::collections::VecDeque;

use super::error::ParseError;
use crate::tokenizer::token::{LanguageToken, Token};

pub struct TokenConsumer<K: LanguageToken> {
    tokens: VecDeque<Token<K>>,
}

impl<K: LanguageToken> TokenConsumer<K> {
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token<K>>,
    {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Removes and returns the next token, whatever its kind.
    pub fn advance(&mut self) -> Result<Token<K>, ParseError<K>> {
        self.consume_any(&[])
    }

    /// Removes and returns the next token if it has the expected kind.
    pub fn consume(&mut self, expected: K) -> Result<Token<K>, ParseError<K>> {
        self.consume_any(&[expected])
    }

    /// Removes and returns the next token if its kind is one of `expected`.
    /// An empty slice accepts any kind.
    pub fn consume_any(&mut self, expected: &[K]) -> Result<Token<K>, ParseError<K>> {
        let token = self
            .tokens
            .pop_front()
            .ok_or_else(|| ParseError::syntax(expected, None))?;
        if expected.is_empty() || expected.contains(&token.kind()) {
            Ok(token)
        } else {
            Err(ParseError::syntax(expected, Some(token.kind())))
        }
    }

    /// Removes the next token, requiring a symbol, and returns its text.
    pub fn consume_symbol(&mut self) -> Result<String, ParseError<K>> {
        let token = self.consume(K::symbol())?;
        // symbol tokens always carry identifier text
        token
            .into_identifier()
            .ok_or_else(|| ParseError::syntax(&[K::symbol()], None))
    }

    /// Removes the next token if it has the expected kind; reports whether
    /// anything was consumed.
    pub fn try_consume(&mut self, expected: K) -> bool {
        if self.is_consumable(expected) {
            self.tokens.pop_front();
            true
        } else {
            false
        }
    }

    /// Whether the next token has the expected kind.
    pub fn is_consumable(&self, expected: K) -> bool {
        self.tokens.front().is_some_and(|t| t.kind() == expected)
    }

    /// Whether the next token has one of the expected kinds.
    pub fn is_any_consumable(&self, expected: &[K]) -> bool {
        expected.iter().any(|&kind| self.is_consumable(kind))
    }

    /// Whether the tokens starting `from` positions ahead match `expected`
    /// kind-for-kind. False when fewer tokens remain.
    pub fn is_consumable_ahead(&self, from: usize, expected: &[K]) -> bool {
        if from + expected.len() > self.tokens.len() {
            return false;
        }
        expected
            .iter()
            .enumerate()
            .all(|(i, &kind)| self.tokens[from + i].kind() == kind)
    }

    /// Whether any of the next `expected.len()` tokens starting `from`
    /// positions ahead has one of the expected kinds.
    pub fn is_any_consumable_ahead(&self, from: usize, expected: &[K]) -> bool {
        if from + expected.len() > self.tokens.len() {
            return false;
        }
        self.tokens
            .iter()
            .skip(from)
            .take(expected.len())
            .any(|t| expected.contains(&t.kind()))
    }

    /// Discards tokens until the next one has the target kind. The target
    /// itself is left in place. Errors if the sequence runs out first.
    pub fn consume_until(&mut self, target: K) -> Result<(), ParseError<K>> {
        while !self.is_consumable(target) {
            if self.tokens.pop_front().is_none() {
                return Err(ParseError::syntax(&[target], None));
            }
        }
        Ok(())
    }
}
