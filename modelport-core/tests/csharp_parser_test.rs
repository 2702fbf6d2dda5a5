use modelport_core::tokenizer::csharp::CSharpToken;
use modelport_core::{parse_csharp, Error, ModelAnalysisUnit, ParseError, PropertyDeclaration};
use pretty_assertions::assert_eq;

fn parse(code: &str) -> ModelAnalysisUnit {
    parse_csharp(code.as_bytes()).expect("source should parse")
}

fn parse_error(code: &str) -> ParseError<CSharpToken> {
    match parse_csharp(code.as_bytes()) {
        Err(Error::Parse(error)) => error,
        Err(other) => panic!("expected a parse error, got {other}"),
        Ok(unit) => panic!("expected a parse error, got {unit:?}"),
    }
}

fn property(name: &str, type_name: &str, is_array: bool, is_nullable: bool) -> PropertyDeclaration {
    PropertyDeclaration {
        name: name.to_owned(),
        type_name: type_name.to_owned(),
        is_array,
        is_nullable,
    }
}

#[test]
fn parses_simple_model() {
    let unit = parse(
        r#"
        using System;

        namespace Corp.Testing
        {
            public class TestModel
            {
                public int TestProperty { get; set; }
            }
        }
    "#,
    );

    assert_eq!(unit.scope.as_deref(), Some("Corp.Testing"));
    assert_eq!(unit.models.len(), 1);

    let model = &unit.models[0];
    assert_eq!(model.name, "TestModel");
    assert_eq!(model.children.len(), 0);
    assert_eq!(
        model.properties,
        vec![property("TestProperty", "int", false, false)]
    );
}

#[test]
fn parses_model_with_constructor() {
    let unit = parse(
        r#"
        using System;

        namespace Corp.Testing
        {
            public class TestModel
            {
                public TestModel()
                {
                    TestProperty = 7;
                }

                public int TestProperty { get; set; }
            }
        }
    "#,
    );

    let model = &unit.models[0];
    assert_eq!(model.name, "TestModel");
    assert_eq!(model.children.len(), 0);
    assert_eq!(
        model.properties,
        vec![property("TestProperty", "int", false, false)]
    );
}

#[test]
fn parses_model_with_virtual_property() {
    let unit = parse(
        r#"
        using System;

        namespace Corp.Testing
        {
            public class TestModel
            {
                public virtual int TestProperty { get; set; }
            }
        }
    "#,
    );

    assert_eq!(
        unit.models[0].properties,
        vec![property("TestProperty", "int", false, false)]
    );
}

#[test]
fn parses_simple_record() {
    let unit = parse(
        r#"
        using System;

        namespace Corp.Testing;

        public record TestModel
        {
            public int TestProperty { get; init; }
            public string TestString { get; init; }
        }
    "#,
    );

    assert_eq!(unit.scope.as_deref(), Some("Corp.Testing"));
    assert_eq!(
        unit.models[0].properties,
        vec![
            property("TestProperty", "int", false, false),
            property("TestString", "string", false, false),
        ]
    );
}

#[test]
fn parses_nullable_property() {
    let unit = parse(
        r#"
        using System;

        namespace Corp.Testing;

        public record TestModel
        {
            public int TestProperty { get; init; }
            public string? NullableString { get; init; }
        }
    "#,
    );

    assert_eq!(
        unit.models[0].properties,
        vec![
            property("TestProperty", "int", false, false),
            property("NullableString", "string", false, true),
        ]
    );
}

#[test]
fn parses_array_property() {
    let unit = parse(
        r#"
        using System;

        namespace Corp.Testing;

        public record TestModel
        {
            public int[] TestArray { get; init; }
        }
    "#,
    );

    assert_eq!(
        unit.models[0].properties,
        vec![property("TestArray", "int", true, false)]
    );
}

#[test]
fn parses_nullable_array_property() {
    let unit = parse(
        r#"
        using System;

        namespace Corp.Testing;

        public record TestModel
        {
            public int[]? TestNullableArray { get; init; }
        }
    "#,
    );

    assert_eq!(
        unit.models[0].properties,
        vec![property("TestNullableArray", "int", true, true)]
    );
}

#[test]
fn parses_nested_model() {
    let unit = parse(
        r#"
        using System;

        namespace Corp.Testing;

        public class TestModel
        {
            public int[] TestArray { get; init; }
            public NestedModel[]? TestNestedModel { get; }

            public class NestedModel
            {
                public int _testField;
            }
        }
    "#,
    );

    let model = &unit.models[0];
    assert_eq!(model.name, "TestModel");
    assert_eq!(
        model.properties,
        vec![
            property("TestArray", "int", true, false),
            property("TestNestedModel", "NestedModel", true, true),
        ]
    );
    assert_eq!(model.children.len(), 1);

    let child = &model.children[0];
    assert_eq!(child.name, "NestedModel");
    assert_eq!(
        child.properties,
        vec![property("_testField", "int", false, false)]
    );
}

#[test]
fn parses_interface_list_without_recording_it() {
    let unit = parse(
        r#"
        public class ComplexModel : IComplexModel, ComplexBase
        {
            public DateTime? Property { get; init; }
        }
    "#,
    );

    assert_eq!(unit.scope, None);
    assert_eq!(unit.models[0].name, "ComplexModel");
    assert_eq!(
        unit.models[0].properties,
        vec![property("Property", "DateTime", false, true)]
    );
}

#[test]
fn parses_get_only_property() {
    let unit = parse(
        r#"
        using System;

        namespace Corp.Testing;

        public class TestModel
        {
            public int TestProperty { get; }
        }
    "#,
    );

    assert_eq!(
        unit.models[0].properties,
        vec![property("TestProperty", "int", false, false)]
    );
}

// Both namespace spellings must produce the same tree.
#[test]
fn file_and_block_scoped_namespaces_are_equivalent() {
    let file_scoped = parse(
        r#"
        namespace Corp.Testing;

        public class TestModel
        {
            public int TestProperty { get; set; }
        }
    "#,
    );
    let block_scoped = parse(
        r#"
        namespace Corp.Testing
        {
            public class TestModel
            {
                public int TestProperty { get; set; }
            }
        }
    "#,
    );

    assert_eq!(file_scoped, block_scoped);
}

#[test]
fn parses_unit_without_namespace() {
    let unit = parse(
        r#"
        public class TestModel
        {
            public int TestProperty { get; set; }
        }
    "#,
    );

    assert_eq!(unit.scope, None);
    assert_eq!(unit.models.len(), 1);
}

#[test]
fn parses_multiple_top_level_models_in_order() {
    let unit = parse(
        r#"
        namespace Corp.Testing;

        public class Alpha
        {
            public int A { get; set; }
        }

        public class Beta
        {
            public int B { get; set; }
        }
    "#,
    );

    let names: Vec<&str> = unit.models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
}

#[test]
fn methods_contribute_nothing_to_the_tree() {
    let unit = parse(
        r#"
        public class TestModel
        {
            public int TestProperty { get; set; }

            public int Compute(int value)
            {
                if (value > 0)
                {
                    return value;
                }
                return 0;
            }
        }
    "#,
    );

    assert_eq!(
        unit.models[0].properties,
        vec![property("TestProperty", "int", false, false)]
    );
    assert_eq!(unit.models[0].children.len(), 0);
}

#[test]
fn rejects_property_without_getter() {
    let error = parse_error(
        r#"
        using System;

        public class TestModel
        {
            public int TestProperty { set; }
        }
    "#,
    );

    assert_eq!(
        error,
        ParseError::Syntax {
            expected: vec![CSharpToken::Get],
            actual: Some(CSharpToken::Set),
        }
    );
}

#[test]
fn rejects_missing_open_brace() {
    let error = parse_error(
        r#"
        using System;

        public class TestModel

            public int TestProperty { get; set; }
        }
    "#,
    );

    assert_eq!(
        error,
        ParseError::Syntax {
            expected: vec![CSharpToken::OpenBrace],
            actual: Some(CSharpToken::Public),
        }
    );
}

// `init` lexes as the accessor keyword, so it cannot name a property.
#[test]
fn rejects_reserved_word_as_property_name() {
    let error = parse_error(
        r#"
        using System;

        public class TestModel
        {
            public int init { get; set; }
        }
    "#,
    );

    assert_eq!(
        error,
        ParseError::Syntax {
            expected: vec![CSharpToken::Symbol],
            actual: Some(CSharpToken::Init),
        }
    );
}

#[test]
fn rejects_duplicate_property_names() {
    let error = parse_error(
        r#"
        using System;

        public class TestModel
        {
            public int TestProperty { get; set; }
            public string TestProperty;
        }
    "#,
    );

    assert_eq!(
        error,
        ParseError::DuplicateIdentifier("TestProperty".to_owned())
    );
}

#[test]
fn rejects_duplicate_nested_models() {
    let error = parse_error(
        r#"
        public class TestModel
        {
            public int TestProperty { get; set; }

            public class Nested
            {
                public int A { get; set; }
            }

            public class Nested
            {
                public int B { get; set; }
            }
        }
    "#,
    );

    assert_eq!(error, ParseError::DuplicateIdentifier("Nested".to_owned()));
}

#[test]
fn rejects_duplicate_top_level_models() {
    let error = parse_error(
        r#"
        namespace Corp.Testing;

        public class TestModel
        {
            public int A { get; set; }
        }

        public class TestModel
        {
            public int B { get; set; }
        }
    "#,
    );

    assert_eq!(
        error,
        ParseError::DuplicateIdentifier("TestModel".to_owned())
    );
}

#[test]
fn rejects_unclosed_block_namespace() {
    let error = parse_error(
        r#"
        namespace Corp.Testing
        {
            public class TestModel
            {
                public int TestProperty { get; set; }
            }
    "#,
    );

    assert_eq!(
        error,
        ParseError::Syntax {
            expected: vec![CSharpToken::CloseBrace],
            actual: None,
        }
    );
}
