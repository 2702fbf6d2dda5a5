//! The model tree produced by analysis.
//!
//! Plain data, built bottom-up by a parser and read by generators. Sibling
//! collections keep declaration order; the parser guarantees sibling names
//! are unique before a node is constructed.

use serde::Serialize;

/// Analysis result for one source unit: the declared namespace, if any,
/// and the models found at the top level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelAnalysisUnit {
    /// Namespace name, shared by file-scoped and block-scoped forms.
    pub scope: Option<String>,
    pub models: Vec<ModelDeclaration>,
}

/// One class or record declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelDeclaration {
    pub name: String,
    pub properties: Vec<PropertyDeclaration>,
    /// Model declarations nested inside this one.
    pub children: Vec<ModelDeclaration>,
}

/// One data-carrying member of a model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertyDeclaration {
    pub name: String,
    /// Type name as written in the source, without array or nullable marks.
    #[serde(rename = "type")]
    pub type_name: String,
    pub is_array: bool,
    pub is_nullable: bool,
}
