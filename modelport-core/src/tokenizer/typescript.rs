//! TypeScript language definition for the tokenizer engine.
//!
//! A smaller table than the C# one: it exists to lex declaration files of
//! the shape the generator emits, which is what the CLI token dump inspects.

use strum::{Display, EnumIter};

use super::engine::Language;
use super::token::LanguageToken;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum TypeScriptToken {
    Import,
    Export,
    Namespace,
    Class,
    Public,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Colon,
    Symbol,
}

impl LanguageToken for TypeScriptToken {
    fn symbol() -> Self {
        Self::Symbol
    }
}

const TOKEN_TABLE: &[(&str, TypeScriptToken)] = &[
    ("import", TypeScriptToken::Import),
    ("export", TypeScriptToken::Export),
    ("namespace", TypeScriptToken::Namespace),
    ("class", TypeScriptToken::Class),
    ("public", TypeScriptToken::Public),
    ("{", TypeScriptToken::OpenBrace),
    ("}", TypeScriptToken::CloseBrace),
    ("[", TypeScriptToken::OpenBracket),
    ("]", TypeScriptToken::CloseBracket),
    (":", TypeScriptToken::Colon),
];

/// The TypeScript declaration subset.
pub struct TypeScript;

impl Language for TypeScript {
    type Kind = TypeScriptToken;

    fn token_table(&self) -> &'static [(&'static str, TypeScriptToken)] {
        TOKEN_TABLE
    }

    fn expected_symbol_count(&self, kind: TypeScriptToken) -> Option<usize> {
        match kind {
            TypeScriptToken::Import
            | TypeScriptToken::Namespace
            | TypeScriptToken::Class
            | TypeScriptToken::Public
            | TypeScriptToken::Colon => Some(1),
            _ => None,
        }
    }

    fn is_termination_char(&self, c: char) -> bool {
        // `:` terminates so that `name: string` splits without spaces
        matches!(c, '(' | ')' | '[' | ']' | ';' | ',' | ':') || c.is_whitespace()
    }
}
