//! Top-level error type for the translation pipeline.

use thiserror::Error;

use crate::analyzer::error::ParseError;
use crate::tokenizer::csharp::CSharpToken;
use crate::tokenizer::engine::TokenizeError;

/// Any failure of the C# analysis pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("tokenization failed: {0}")]
    Tokenize(#[from] TokenizeError),
    #[error("parsing failed: {0}")]
    Parse(#[from] ParseError<CSharpToken>),
}
