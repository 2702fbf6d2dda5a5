//! TypeScript declaration rendering.
//!
//! Each model becomes an `export class` of public properties; nested models
//! are grouped under an `export namespace` carrying the parent's name, so a
//! reference to a nested type reads `Parent.Child` exactly as it does at the
//! use site. Models without properties render nothing.

use std::collections::HashMap;

use super::ModelGenerator;
use crate::ast::{ModelAnalysisUnit, ModelDeclaration, PropertyDeclaration};

const INDENT: &str = "    ";

pub struct TypeScriptGenerator;

impl ModelGenerator for TypeScriptGenerator {
    fn generate(&self, unit: &ModelAnalysisUnit) -> String {
        let mut emitter = Emitter::default();
        for model in &unit.models {
            emitter.resolve_declared_types(model, &[]);
        }
        for model in &unit.models {
            emitter.emit_model(model);
        }
        emitter.output
    }
}

#[derive(Default)]
struct Emitter {
    depth: usize,
    output: String,
    /// Model name to its nesting path from the top level.
    declared_types: HashMap<String, Vec<String>>,
}

impl Emitter {
    /// First pass: record where every declared model lives, so property
    /// types can be rewritten as dotted paths relative to the use site.
    fn resolve_declared_types(&mut self, model: &ModelDeclaration, scope: &[String]) {
        let mut path = scope.to_vec();
        path.push(model.name.clone());
        self.declared_types.insert(model.name.clone(), path.clone());
        for child in &model.children {
            self.resolve_declared_types(child, &path);
        }
    }

    fn resolve_type_name(&self, symbol: &str, scope_depth: usize) -> String {
        if let Some(path) = self.declared_types.get(symbol) {
            // keep at least the type's own name when the use site sits
            // deeper than the declaration
            let from = scope_depth.min(path.len() - 1);
            return path[from..].join(".");
        }
        match symbol {
            "Guid" | "string" | "DateTime" | "DateTimeOffset" => "string".to_owned(),
            "int" | "float" | "double" | "decimal" => "number".to_owned(),
            "bool" => "boolean".to_owned(),
            other => other.to_owned(),
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.output.push_str(INDENT);
        }
    }

    fn emit_property(&mut self, property: &PropertyDeclaration) {
        let nullable_suffix = if property.is_nullable { " | null" } else { "" };
        let array_suffix = if property.is_array { "[]" } else { "" };
        let name = camel_case(&property.name);
        let type_name = self.resolve_type_name(&property.type_name, self.depth.saturating_sub(1));

        self.write_indent();
        self.output.push_str(&format!(
            "public {}: {}{}{};\n",
            name, type_name, array_suffix, nullable_suffix
        ));
    }

    fn emit_model(&mut self, model: &ModelDeclaration) {
        if model.properties.is_empty() {
            return;
        }

        self.write_indent();
        self.output
            .push_str(&format!("export class {} {{\n", model.name));
        self.depth += 1;
        for property in &model.properties {
            self.emit_property(property);
        }
        self.depth -= 1;
        self.write_indent();
        self.output.push_str("}\n\n");

        if !model.children.is_empty() {
            self.write_indent();
            self.output
                .push_str(&format!("export namespace {} {{\n", model.name));
            self.depth += 1;
            for child in &model.children {
                self.emit_model(child);
            }
            self.depth -= 1;
            self.write_indent();
            self.output.push_str("}\n\n");
        }
    }
}

fn camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
