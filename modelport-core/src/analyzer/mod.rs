//! Token-stream analysis.
//!
//! [`consumer::TokenConsumer`] is the lookahead cursor shared by all
//! parsers; [`csharp::CSharpModelParser`] turns a C# token sequence into a
//! model tree.

pub mod consumer;
pub mod csharp;
pub mod error;

pub use consumer::TokenConsumer;
pub use csharp::CSharpModelParser;
pub use error::ParseError;
