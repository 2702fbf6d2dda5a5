//! Code generation from a model tree.

pub mod typescript;

use crate::ast::ModelAnalysisUnit;

/// Renders a model tree into target-language source text.
///
/// Rendering is infallible: any unit a parser produces is renderable, and
/// unknown type names pass through as written.
pub trait ModelGenerator {
    fn generate(&self, unit: &ModelAnalysisUnit) -> String;
}

pub use typescript::TypeScriptGenerator;
