//! Source-model analysis and translation.
//!
//! A pipeline in three stages:
//!
//! ```text
//! bytes --tokenizer--> tokens --analyzer--> model tree --codegen--> text
//! ```
//!
//! The [`tokenizer`] is a generic table-driven engine with per-language
//! definitions plugged in through [`tokenizer::Language`]. The [`analyzer`]
//! parses the C# declaration subset into a [`ast::ModelAnalysisUnit`], and
//! [`codegen`] renders that tree, today as TypeScript declarations.
//!
//! The two convenience functions below wire the stages together:
//!
//! ```no_run
//! # fn demo() -> Result<(), modelport_core::Error> {
//! let source = std::fs::File::open("Person.cs").map_err(
//!     modelport_core::tokenizer::TokenizeError::from,
//! )?;
//! let typescript = modelport_core::translate_csharp_to_typescript(source)?;
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod ast;
pub mod codegen;
pub mod error;
pub mod tokenizer;

use std::io::Read;

pub use analyzer::{CSharpModelParser, ParseError, TokenConsumer};
pub use ast::{ModelAnalysisUnit, ModelDeclaration, PropertyDeclaration};
pub use codegen::{ModelGenerator, TypeScriptGenerator};
pub use error::Error;
pub use tokenizer::{
    csharp::CSharp, typescript::TypeScript, Language, LanguageToken, Span, Token, TokenizeError,
    Tokenizer,
};

/// Tokenizes and parses one C# source unit.
#[tracing::instrument(level = "debug", skip(reader))]
pub fn parse_csharp<R: Read>(reader: R) -> Result<ModelAnalysisUnit, Error> {
    let tokens = Tokenizer::new(CSharp, reader).tokenize()?;
    let unit = CSharpModelParser::new(tokens).parse()?;
    Ok(unit)
}

/// Full pipeline: C# source in, TypeScript declarations out.
pub fn translate_csharp_to_typescript<R: Read>(reader: R) -> Result<String, Error> {
    let unit = parse_csharp(reader)?;
    Ok(TypeScriptGenerator.generate(&unit))
}
