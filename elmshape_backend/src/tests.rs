use super::*;

#[test]
fn scenarios() {
    assert_eq!(
        parse("type alias Id = String"),
        Ok(vec![ValidType::TypeAlias {
            name: "Id".into(),
            generics: Vec::new(),
            annotation: TypeAnnotation::base(BaseType::TString),
        }])
    );

    let res = parse("type Maybe a = Just a | Nothing").expect("Expected a successful parse");
    assert_eq!(res.len(), 1);
    assert_eq!(res[0].to_string(), "type Maybe a = Just a | Nothing");
}

#[test]
fn empty_source() {
    assert_eq!(parse(""), Ok(Vec::new()));
    assert_eq!(parse("module Main exposing (..)\n\nimport Html\n"), Ok(Vec::new()));
}

#[test]
fn wrong_arity_is_reported_with_position() {
    assert_eq!(
        parse("type alias Bad = List Int String"),
        Err("1:18: invalid arity: `List` expects 1 type argument, but was given 2".to_owned())
    );
}

#[test]
fn unit_type_is_named() {
    let message = parse("type alias U = ()").expect_err("Expected a failed parse");

    assert_eq!(
        message,
        "1:16: unsupported construct: the unit type `()`"
    );
}

#[test]
fn one_line_per_error() {
    let source = r#"type alias A =
    { first : ()
    , second : ()
    }

type alias B = { third : () }

type C = C ()
"#;

    let message = parse(source).expect_err("Expected a failed parse");
    let lines: Vec<_> = message.lines().collect();

    assert_eq!(
        lines,
        vec![
            "2:15: unsupported construct: the unit type `()`",
            "3:16: unsupported construct: the unit type `()`",
            "6:26: unsupported construct: the unit type `()`",
            "8:12: unsupported construct: the unit type `()`",
        ]
    );
}

#[test]
fn syntax_errors_fail_fast() {
    // `()` would be a validation error, but the broken declaration below
    // means validation never runs
    let failure = check("type alias U = ()\n\ntype alias V =\n").expect_err("Expected a failed check");

    match &failure {
        Failure::Syntax(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].message, "unexpected end of file");
        },

        other => panic!("expected syntax errors, got {:?}", other),
    }

    assert!(failure.render("type alias U = ()\n\ntype alias V =\n").starts_with("3:14: unexpected end of file"));
}

#[test]
fn lex_errors_are_syntax_errors() {
    let failure = check("type alias S = \"unterminated").expect_err("Expected a failed check");
    assert!(matches!(failure, Failure::Syntax(ref errors) if errors.len() == 1));
}

#[test]
fn every_syntax_error_is_reported() {
    let failure = check("type alias A =\ntype alias B = Int\ntype C = D |\n").expect_err("Expected a failed check");
    assert_eq!(failure.len(), 2);
    assert_eq!(failure.render("type alias A =\ntype alias B = Int\ntype C = D |\n").lines().count(), 2);
}

#[test]
fn diagnostics_render_with_help() {
    let source = "type alias Pair = Dict Int";
    let failure = check(source).expect_err("Expected a failed check");
    let ctx = DiagnosticsContext::new(source, Some("Pair.elm".to_owned())).with_colour(false);

    let rendered: Vec<String> = failure
        .diagnostics(&ctx)
        .into_iter()
        .map(DiagnosticBuilder::render)
        .collect();

    assert_eq!(rendered.len(), 1);
    assert!(rendered[0].contains("error: invalid arity: `Dict` expects 2 type arguments, but was given 1"));
    assert!(rendered[0].contains("Pair.elm"));
    assert!(rendered[0].contains("help: write `Dict` followed by 2 type arguments"));
    assert!(rendered[0].contains("given 1 type argument"));
}

#[test]
fn diagnostics_for_syntax_errors() {
    let source = "type alias A =\n";
    let failure = check(source).expect_err("Expected a failed check");
    let ctx = DiagnosticsContext::new(source, None).with_colour(false);

    let rendered = failure
        .diagnostics(&ctx)
        .into_iter()
        .map(DiagnosticBuilder::render)
        .collect::<Vec<_>>()
        .join("\n");

    assert!(rendered.contains("error: unexpected end of file"));
    assert!(rendered.contains("note: expected"));
    assert!(rendered.contains("type annotation"));
}

#[test]
fn contextual_keywords_and_unicode_in_records() {
    let rendered: Vec<String> = parse("type alias L = { alias : Int }\n\ntype alias Person = { näme : String }")
        .expect("Expected a successful parse")
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        rendered,
        vec![
            "type alias L = { alias : Int }",
            "type alias Person = { näme : String }",
        ]
    );
}

#[test]
fn full_module() {
    let source = r#"module Api.Types exposing (User, Role(..), Page)

import Dict exposing (Dict)
import Time


type alias User =
    { id : Int
    , name : String
    , email : Maybe String
    , roles : List Role
    , meta : Dict String String
    , createdAt : Time.Posix
    }


type Role
    = Admin
    | Member Int
    | Guest ( String, Float )


{-| A page of results.
-}
type alias Page a =
    { items : List a
    , next : Result String Int
    }
"#;

    let rendered: Vec<String> = parse(source)
        .expect("Expected a successful parse")
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        rendered,
        vec![
            "type alias User = { id : Int, name : String, email : Maybe String, roles : List Role, meta : Dict String String, createdAt : Posix }",
            "type Role = Admin | Member Int | Guest ( String, Float )",
            "type alias Page a = { items : List a, next : Result String Int }",
        ]
    );
}
