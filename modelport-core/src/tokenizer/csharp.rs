//! C# language definition for the tokenizer engine.
//!
//! Covers the declaration subset the model parser consumes: using
//! directives, namespaces, class/record declarations, member modifiers,
//! accessor keywords, and the punctuation around them. Everything else in a
//! source file is free-form text that the expected-symbol budget either
//! captures (type and member names) or skips (method bodies, initializers).

use strum::{Display, EnumIter};

use super::engine::Language;
use super::token::LanguageToken;

/// Token kinds of the C# declaration subset.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CSharpToken {
    Using,
    Namespace,
    Class,
    Record,
    Public,
    Private,
    Readonly,
    Virtual,
    Get,
    Set,
    Init,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    LambdaArrow,
    QuestionMark,
    Colon,
    Semicolon,
    Comma,
    Symbol,
}

impl LanguageToken for CSharpToken {
    fn symbol() -> Self {
        Self::Symbol
    }
}

const TOKEN_TABLE: &[(&str, CSharpToken)] = &[
    ("using", CSharpToken::Using),
    ("namespace", CSharpToken::Namespace),
    ("class", CSharpToken::Class),
    ("record", CSharpToken::Record),
    ("public", CSharpToken::Public),
    ("private", CSharpToken::Private),
    ("readonly", CSharpToken::Readonly),
    ("virtual", CSharpToken::Virtual),
    ("get", CSharpToken::Get),
    ("set", CSharpToken::Set),
    ("init", CSharpToken::Init),
    ("{", CSharpToken::OpenBrace),
    ("}", CSharpToken::CloseBrace),
    ("[", CSharpToken::OpenBracket),
    ("]", CSharpToken::CloseBracket),
    ("(", CSharpToken::OpenParen),
    (")", CSharpToken::CloseParen),
    ("=>", CSharpToken::LambdaArrow),
    ("?", CSharpToken::QuestionMark),
    (":", CSharpToken::Colon),
    (";", CSharpToken::Semicolon),
    (",", CSharpToken::Comma),
];

/// The C# declaration subset.
pub struct CSharp;

impl Language for CSharp {
    type Kind = CSharpToken;

    fn token_table(&self) -> &'static [(&'static str, CSharpToken)] {
        TOKEN_TABLE
    }

    fn expected_symbol_count(&self, kind: CSharpToken) -> Option<usize> {
        match kind {
            // visibility modifiers announce a type name and a member name
            CSharpToken::Public | CSharpToken::Private | CSharpToken::Readonly => Some(2),
            CSharpToken::Using
            | CSharpToken::Namespace
            | CSharpToken::Class
            | CSharpToken::Record
            | CSharpToken::Colon
            | CSharpToken::Comma
            | CSharpToken::LambdaArrow => Some(1),
            // entering a body; symbols are noise until a modifier reopens them
            CSharpToken::OpenBrace => Some(0),
            _ => None,
        }
    }

    fn is_termination_char(&self, c: char) -> bool {
        matches!(c, '(' | ')' | '[' | ']' | '?' | ';' | ',') || c.is_whitespace()
    }
}
