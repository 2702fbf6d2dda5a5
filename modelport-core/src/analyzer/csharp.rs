//! Recursive-descent parser for C# model declarations.
//!
//! Consumes the token sequence the C# tokenizer produces and builds a
//! [`ModelAnalysisUnit`]. The grammar covers what data models need: using
//! directives, an optional namespace (file- or block-scoped), and public
//! class/record declarations whose members are properties, nested model
//! declarations, or methods. Methods and constructors are recognized and
//! discarded; properties and nested models land in the tree.

use std::collections::HashSet;

use tracing::debug;

use super::consumer::TokenConsumer;
use super::error::ParseError;
use crate::ast::{ModelAnalysisUnit, ModelDeclaration, PropertyDeclaration};
use crate::tokenizer::csharp::CSharpToken;
use crate::tokenizer::token::Token;

type ParseResult<T> = Result<T, ParseError<CSharpToken>>;

/// Which namespace form the unit declared, if any. Decides whether a
/// closing brace is owed at the end of the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NamespaceForm {
    None,
    FileScoped,
    BlockScoped,
}

pub struct CSharpModelParser {
    consumer: TokenConsumer<CSharpToken>,
}

impl CSharpModelParser {
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token<CSharpToken>>,
    {
        Self {
            consumer: TokenConsumer::new(tokens),
        }
    }

    /// Parses the whole unit, consuming the parser.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse(mut self) -> ParseResult<ModelAnalysisUnit> {
        while self.consumer.try_consume(CSharpToken::Using) {
            self.consumer.consume_symbol()?;
            self.consumer.consume(CSharpToken::Semicolon)?;
        }

        let mut scope = None;
        let mut namespace = NamespaceForm::None;
        if self.consumer.try_consume(CSharpToken::Namespace) {
            scope = Some(self.consumer.consume_symbol()?);
            namespace = if self.consumer.try_consume(CSharpToken::Semicolon) {
                NamespaceForm::FileScoped
            } else {
                self.consumer.consume(CSharpToken::OpenBrace)?;
                NamespaceForm::BlockScoped
            };
        }

        let mut names = HashSet::new();
        let mut models = Vec::new();
        while self.consumer.is_consumable(CSharpToken::Public) {
            let model = self.parse_model_declaration()?;
            if !names.insert(model.name.clone()) {
                return Err(ParseError::DuplicateIdentifier(model.name));
            }
            models.push(model);
        }

        if namespace == NamespaceForm::BlockScoped {
            self.consumer.consume(CSharpToken::CloseBrace)?;
        }

        debug!(models = models.len(), scope = ?scope, "parsed model unit");
        Ok(ModelAnalysisUnit { scope, models })
    }

    fn parse_model_declaration(&mut self) -> ParseResult<ModelDeclaration> {
        self.consumer.consume(CSharpToken::Public)?;
        // skip modifiers such as sealed or partial, which lex as symbols
        while !self
            .consumer
            .is_any_consumable(&[CSharpToken::Class, CSharpToken::Record])
        {
            self.consumer.advance()?;
        }
        self.consumer
            .consume_any(&[CSharpToken::Class, CSharpToken::Record])?;
        let name = self.consumer.consume_symbol()?;
        debug!(model = %name, "parsing model declaration");

        if self.consumer.try_consume(CSharpToken::Colon) {
            // base types and interfaces carry no model data
            self.consumer.consume_until(CSharpToken::OpenBrace)?;
        }
        self.consumer.consume(CSharpToken::OpenBrace)?;

        let mut property_names = HashSet::new();
        let mut properties = Vec::new();
        let mut child_names = HashSet::new();
        let mut children = Vec::new();

        while self
            .consumer
            .is_any_consumable(&[CSharpToken::Public, CSharpToken::Private])
        {
            if self
                .consumer
                .is_any_consumable_ahead(1, &[CSharpToken::Class, CSharpToken::Record])
            {
                let child = self.parse_model_declaration()?;
                if !child_names.insert(child.name.clone()) {
                    return Err(ParseError::DuplicateIdentifier(child.name));
                }
                children.push(child);
            } else if self.is_method_ahead() {
                self.parse_and_discard_method()?;
            } else {
                let property = self.parse_property_declaration()?;
                if !property_names.insert(property.name.clone()) {
                    return Err(ParseError::DuplicateIdentifier(property.name));
                }
                properties.push(property);
            }
        }

        self.consumer.consume(CSharpToken::CloseBrace)?;
        Ok(ModelDeclaration {
            name,
            properties,
            children,
        })
    }

    /// A constructor looks like `public Name(`, a method like
    /// `public Type Name(`. Properties never put a parenthesis there.
    fn is_method_ahead(&self) -> bool {
        self.consumer
            .is_consumable_ahead(1, &[CSharpToken::Symbol, CSharpToken::OpenParen])
            || self.consumer.is_consumable_ahead(
                1,
                &[
                    CSharpToken::Symbol,
                    CSharpToken::Symbol,
                    CSharpToken::OpenParen,
                ],
            )
    }

    fn parse_and_discard_method(&mut self) -> ParseResult<()> {
        self.consumer
            .consume_any(&[CSharpToken::Public, CSharpToken::Private])?;
        self.consumer.consume_until(CSharpToken::OpenParen)?;
        self.consumer.consume(CSharpToken::OpenParen)?;
        self.consumer.consume_until(CSharpToken::CloseParen)?;
        self.consumer.consume(CSharpToken::CloseParen)?;

        self.consumer.consume(CSharpToken::OpenBrace)?;
        let mut depth = 1usize;
        while depth > 0 {
            if self.consumer.try_consume(CSharpToken::OpenBrace) {
                depth += 1;
            } else if self.consumer.try_consume(CSharpToken::CloseBrace) {
                depth -= 1;
            } else {
                self.consumer.advance()?;
            }
        }
        Ok(())
    }

    fn parse_property_declaration(&mut self) -> ParseResult<PropertyDeclaration> {
        self.consumer
            .consume_any(&[CSharpToken::Public, CSharpToken::Private])?;
        // remaining modifiers (readonly, virtual, ...) precede the type name
        self.consumer.consume_until(CSharpToken::Symbol)?;
        let type_name = self.consumer.consume_symbol()?;

        let is_array = self.consumer.try_consume(CSharpToken::OpenBracket);
        if is_array {
            self.consumer.consume(CSharpToken::CloseBracket)?;
        }
        let is_nullable = self.consumer.try_consume(CSharpToken::QuestionMark);
        let name = self.consumer.consume_symbol()?;

        if self.consumer.try_consume(CSharpToken::LambdaArrow) {
            // expression body; the value is not model data
            self.consumer.consume_until(CSharpToken::Semicolon)?;
            self.consumer.consume(CSharpToken::Semicolon)?;
        }

        if self.consumer.try_consume(CSharpToken::OpenBrace) {
            self.consumer.consume(CSharpToken::Get)?;
            self.consumer.consume(CSharpToken::Semicolon)?;
            if self.consumer.try_consume(CSharpToken::Set) {
                self.consumer.consume(CSharpToken::Semicolon)?;
            } else if self.consumer.try_consume(CSharpToken::Init) {
                self.consumer.consume(CSharpToken::Semicolon)?;
            }
            self.consumer.consume(CSharpToken::CloseBrace)?;
        }

        // fields end with a semicolon instead of an accessor block
        self.consumer.try_consume(CSharpToken::Semicolon);

        Ok(PropertyDeclaration {
            name,
            type_name,
            is_array,
            is_nullable,
        })
    }
}
