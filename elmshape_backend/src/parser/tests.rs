use proptest::prelude::*;

use super::{ast::*, keyword::Keyword, parse, Expected, Parser};
use crate::lexer::lex;

/// Lexes a source stream
/// and creates a parser using the resulting tokens.
macro_rules! parser {
    ($src:expr) => {{
        let tokens = lex($src).expect("Expected a successful lex");
        Parser::new(tokens)
    }};
}

fn parse_str(source: &str) -> File {
    let tokens = lex(source).expect("Expected a successful lex");
    parse(tokens).expect("Expected a successful parse")
}

/// Annotations never start a line in a real file, so indent them.
fn parse_annotation(source: &str) -> TypeAnnotation {
    parser!(&format!(" {}", source))
        .parse_type_annotation()
        .expect("Expected a successful parse")
}

#[test]
fn eat_keyword() {
    let mut parser = parser!("x type");

    parser.bump();
    // Alias isn't here
    assert!(!parser.eat(Expected::Keyword(Keyword::Alias)));
    // Shouldn't have eaten our token
    assert_eq!(parser.remaining(), 1);
    // Type should be here
    assert!(parser.eat(Expected::Keyword(Keyword::Type)));
    // Should've eaten our token
    assert_eq!(parser.remaining(), 0);
    // No longer here
    assert!(!parser.eat(Expected::Keyword(Keyword::Type)));
}

#[test]
fn eat_refuses_declaration_start() {
    let mut parser = parser!("type");

    assert!(!parser.eat(Expected::Keyword(Keyword::Type)));
    assert_eq!(parser.remaining(), 1);
}

#[test]
fn unexpected_token() {
    let mut parser = parser!("type alias 12345");

    parser.bump();
    parser.bump();
    parser.expect_later(Expected::UpperIdent);
    let error = parser.unexpected();

    assert_eq!(error.message, "unexpected token `12345`");
    assert_eq!(error.notes, vec!["expected capitalized name".to_owned()]);
    // The token is left for recovery
    assert_eq!(parser.remaining(), 1);
}

#[test]
fn unexpected_eof() {
    let mut parser = parser!("type alias");

    parser.bump();
    parser.bump();
    let error = parser.unexpected();

    assert_eq!(error.message, "unexpected end of file");
    assert!(error.notes.is_empty());
}

#[test]
fn generic_and_named_types() {
    let res = parse_annotation("Dict.Dict String (List a)");

    let (name, args) = match res.kind {
        TypeAnnotationKind::Typed(name, args) => (name, args),
        other => panic!("expected a typed annotation, got {:?}", other),
    };

    assert_eq!(name.module.as_deref(), Some("Dict"));
    assert_eq!(name.name, "Dict");
    assert_eq!(args.len(), 2);
    assert!(matches!(args[1].kind, TypeAnnotationKind::Typed(_, ref inner) if inner.len() == 1));
}

#[test]
fn function_types_are_right_associative() {
    let res = parse_annotation("a -> b -> c");
    assert_eq!(res.to_string(), "a -> b -> c");

    match res.kind {
        TypeAnnotationKind::FunctionType(from, to) => {
            assert!(matches!(from.kind, TypeAnnotationKind::GenericType(_)));
            assert!(matches!(to.kind, TypeAnnotationKind::FunctionType(_, _)));
        },

        other => panic!("expected a function type, got {:?}", other),
    }

    assert_eq!(parse_annotation("(a -> b) -> c").to_string(), "(a -> b) -> c");
}

#[test]
fn unit_tuples_and_grouping() {
    assert_eq!(parse_annotation("()").kind, TypeAnnotationKind::Unit);
    assert!(matches!(parse_annotation("( Int )").kind, TypeAnnotationKind::Typed(_, _)));

    match parse_annotation("( Int, String, Bool )").kind {
        TypeAnnotationKind::Tupled(elements) => assert_eq!(elements.len(), 3),
        other => panic!("expected a tuple, got {:?}", other),
    }
}

#[test]
fn records() {
    let res = parse_annotation("{ name : String, tags : List String }");
    assert_eq!(res.to_string(), "{ name : String, tags : List String }");

    match res.kind {
        TypeAnnotationKind::Record(fields) => {
            let names: Vec<_> = fields.iter().map(|field| field.name.as_str()).collect();
            assert_eq!(names, vec!["name", "tags"]);
        },

        other => panic!("expected a record, got {:?}", other),
    }

    let res = parse_annotation("{ r | name : String }");
    assert!(matches!(res.kind, TypeAnnotationKind::GenericRecord(ref base, _) if base == "r"));
    assert_eq!(parse_annotation("{}").kind, TypeAnnotationKind::Record(Vec::new()));
}

#[test]
fn module_header_and_imports() {
    let file = parse_str(
        r#"port module Ports.Main exposing (Model, Msg(..), main, (|>))

import Dict as D exposing (Dict)
import Html
import Json.Decode as Decode exposing (..)
"#,
    );

    let header = file.module.expect("Expected a module header");
    assert_eq!(header.kind, ModuleKind::Port);
    assert_eq!(header.name, "Ports.Main");
    assert_eq!(
        header.exposing,
        Exposing::Explicit(vec![
            ExposedItem::Type {
                name: "Model".into(),
                open: false
            },
            ExposedItem::Type {
                name: "Msg".into(),
                open: true
            },
            ExposedItem::Value("main".into()),
            ExposedItem::Operator("|>".into()),
        ])
    );

    assert_eq!(file.imports.len(), 3);
    assert_eq!(file.imports[0].alias.as_deref(), Some("D"));
    assert!(file.imports[0].exposing.as_ref().map_or(false, |e| e.exposes_type("Dict")));
    assert_eq!(file.imports[1].exposing, None);
    assert_eq!(file.imports[2].exposing, Some(Exposing::All));
}

#[test]
fn effect_module_header() {
    let file = parse_str("effect module Task where { command = MyCmd } exposing (Task)\n");
    assert_eq!(file.module.map(|header| header.kind), Some(ModuleKind::Effect));
}

#[test]
fn declarations() {
    let file = parse_str(
        r#"module Main exposing (..)

type alias Model =
    { count : Int }

type Msg
    = Increment
    | Set Int

port save : String -> Cmd msg

infix left 0 (|>) = apR

update : Msg -> Model -> Model
update msg model =
    case msg of
        Increment ->
            { model | count = model.count + 1 }

        Set n ->
            { model | count = n }

main =
    text "hello"
"#,
    );

    let kinds: Vec<_> = file
        .declarations
        .iter()
        .map(|declaration| declaration.kind.describe())
        .collect();

    assert_eq!(
        kinds,
        vec![
            "type alias",
            "custom type",
            "port declaration",
            "infix declaration",
            "function declaration",
            "function declaration",
        ]
    );

    match &file.declarations[1].kind {
        DeclarationKind::CustomType(custom) => {
            let names: Vec<_> = custom.constructors.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, vec!["Increment", "Set"]);
            assert_eq!(custom.constructors[1].arguments.len(), 1);
        },

        other => panic!("expected a custom type, got {:?}", other),
    }

    match &file.declarations[4].kind {
        DeclarationKind::Function(function) => {
            assert_eq!(function.name, "update");
            assert!(function.signature.is_some());
        },

        other => panic!("expected a function, got {:?}", other),
    }

    match &file.declarations[3].kind {
        DeclarationKind::Infix(infix) => {
            assert_eq!(infix.direction, InfixDirection::Left);
            assert_eq!(infix.operator, "|>");
            assert_eq!(infix.function, "apR");
        },

        other => panic!("expected an infix declaration, got {:?}", other),
    }
}

#[test]
fn contextual_keywords_are_names_elsewhere() {
    let file = parse_str(
        r#"module Words exposing (alias, infix)

type alias Words =
    { alias : String
    , effect : Int
    , infix : Bool
    }

infix : Int
infix =
    1

effect alias =
    alias
"#,
    );

    let kinds: Vec<_> = file
        .declarations
        .iter()
        .map(|declaration| declaration.kind.describe())
        .collect();
    assert_eq!(kinds, vec!["type alias", "function declaration", "function declaration"]);

    match &file.declarations[0].kind {
        DeclarationKind::TypeAlias(alias) => {
            assert_eq!(alias.annotation.to_string(), "{ alias : String, effect : Int, infix : Bool }");
        },

        other => panic!("expected a type alias, got {:?}", other),
    }

    match &file.declarations[1].kind {
        DeclarationKind::Function(function) => assert_eq!(function.name, "infix"),
        other => panic!("expected a function, got {:?}", other),
    }

    // Still keywords where the grammar uses them
    let file = parse_str("effect module Task where { command = MyCmd } exposing (Task)

infix right 5 (++) = append
");
    assert_eq!(file.module.map(|header| header.kind), Some(ModuleKind::Effect));
    assert!(matches!(file.declarations[0].kind, DeclarationKind::Infix(_)));
}

#[test]
fn custom_type_without_constructors() {
    let file = parse_str("type Never_");

    match &file.declarations[0].kind {
        DeclarationKind::CustomType(custom) => assert!(custom.constructors.is_empty()),
        other => panic!("expected a custom type, got {:?}", other),
    }
}

#[test]
fn errors_are_collected_per_declaration() {
    let tokens = lex("type alias A =\ntype alias B = Int\ntype C = D |\nx : Int\n").unwrap();
    let errors = parse(tokens).expect_err("Expected a failed parse");

    // `A` has no annotation, `C` has a dangling pipe, `x` has no definition
    assert_eq!(errors.len(), 3);
    assert!(errors[0].notes.iter().any(|note| note.contains("type annotation")));
    assert!(errors[2].message.contains("`x`"));
}

#[test]
fn indented_declaration_is_an_error() {
    let tokens = lex("  type alias A = Int").unwrap();
    let errors = parse(tokens).expect_err("Expected a failed parse");

    assert_eq!(errors.len(), 1);
    assert!(errors[0].notes[0].contains("beginning of a line"));
}

#[test]
fn qualified_declaration_name_is_an_error() {
    let tokens = lex("type alias Foo.Bar = Int").unwrap();
    let errors = parse(tokens).expect_err("Expected a failed parse");

    assert!(errors[0].message.contains("unqualified"));
}

proptest! {
    #[test]
    fn fuzz(src in "[a-zA-Z(){}|:,=\\-> \n]{0,512}") {
        if let Ok(tokens) = lex(&src) {
            let _ = parse(tokens);
        }
    }

    #[test]
    fn record_field_order_is_kept(names in prop::collection::btree_set("[a-z][a-z0-9]{0,6}", 1..12)) {
        let names: Vec<String> = names
            .into_iter()
            .filter(|name| Keyword::from_str(name).is_none())
            .collect();
        prop_assume!(!names.is_empty());

        let fields = names
            .iter()
            .map(|name| format!("{} : Int", name))
            .collect::<Vec<_>>()
            .join(", ");

        match parse_annotation(&format!("{{ {} }}", fields)).kind {
            TypeAnnotationKind::Record(parsed) => {
                let parsed: Vec<_> = parsed.into_iter().map(|field| field.name).collect();
                prop_assert_eq!(parsed, names);
            },

            other => prop_assert!(false, "expected a record, got {:?}", other),
        }
    }
}
