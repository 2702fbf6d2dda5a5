//! Core token types shared by the tokenizer engine and the analyzers.
//!
//! A [`Token`] is the atomic unit flowing through the pipeline: a kind drawn
//! from a per-language enumeration, identifier text when the kind is the
//! language's symbol kind, and the byte range it was read from. Language
//! enumerations plug in through [`LanguageToken`].

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Byte range of a token in the source stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Length in bytes.
    pub length: usize,
}

impl Span {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Byte offset one past the last character.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// The closed token-kind enumeration of a source language.
///
/// Implementors are small fieldless enums such as
/// [`CSharpToken`](crate::tokenizer::csharp::CSharpToken). The engine,
/// consumer, and parse errors are all generic over this trait.
pub trait LanguageToken: Copy + Eq + Hash + Debug + Display + 'static {
    /// The designated kind that carries caller-defined text: identifiers,
    /// type names, values. Every language has exactly one.
    fn symbol() -> Self;
}

/// An atomic lexical unit produced by the tokenizer.
///
/// Invariant: `identifier` is present exactly when `kind` is the language's
/// symbol kind. The constructors are the only way to build a token, so code
/// downstream of the engine can rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<K: LanguageToken> {
    kind: K,
    identifier: Option<String>,
    span: Option<Span>,
}

impl<K: LanguageToken> Token<K> {
    /// A token of a fixed kind from the language's literal table.
    pub fn new(kind: K) -> Self {
        Self {
            kind,
            identifier: None,
            span: None,
        }
    }

    /// A symbol token carrying the given identifier text.
    pub fn symbol(identifier: impl Into<String>) -> Self {
        Self {
            kind: K::symbol(),
            identifier: Some(identifier.into()),
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// The same token with its span cleared. Handy for comparing token
    /// sequences against hand-written expectations.
    pub fn without_span(mut self) -> Self {
        self.span = None;
        self
    }

    pub fn kind(&self) -> K {
        self.kind
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Consumes the token, yielding the identifier text of a symbol token.
    pub fn into_identifier(self) -> Option<String> {
        self.identifier
    }
}
