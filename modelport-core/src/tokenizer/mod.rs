//! Streaming tokenization.
//!
//! The [`engine`] module holds the language-independent machinery; the
//! [`csharp`] and [`typescript`] modules plug concrete languages into it.

pub mod csharp;
pub mod engine;
pub mod token;
pub mod typescript;


pub use engine::{Language, TokenizeError, Tokenizer};
pub use token::{LanguageToken, Span, Token};
