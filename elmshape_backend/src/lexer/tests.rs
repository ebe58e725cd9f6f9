use proptest::prelude::*;

use super::{lex, LexError};
use crate::{
    errors::Span,
    lexer::token::{DelimKind, LiteralKind, Symbol, TokenKind},
};

macro_rules! assert_lex_result {
    ($_res:expr,) => {};

    ($res:expr, $token:expr) => {
        assert_eq!($res.next().unwrap().kind, $token);
    };

    ($res:expr, $token:expr, $($rest:tt)*) => {
        assert_lex_result!($res, $token);
        assert_lex_result!($res, $($rest)*)
    };
}

fn ident(s: &str) -> TokenKind {
    TokenKind::IdentOrKeyword(s.into())
}

#[test]
fn lexing_works() {
    let mut res = lex("type alias Pair a = ( a, Dict.Dict String a )")
        .expect("Expected a successful lex")
        .into_iter();

    assert_lex_result!(
        res,
        ident("type"),
        ident("alias"),
        ident("Pair"),
        ident("a"),
        TokenKind::Symbol(Symbol::SingleEquals),
        TokenKind::OpenDelim(DelimKind::Paren),
        ident("a"),
        TokenKind::Symbol(Symbol::Comma),
        ident("Dict.Dict"),
        ident("String"),
        ident("a"),
        TokenKind::CloseDelim(DelimKind::Paren),
    );

    assert!(res.next().is_none());
}

#[test]
fn lex_failure_works() {
    let res = lex("type alias A = ∅").expect_err("Expected a failed lex");
    assert!(matches!(res, LexError::UnexpectedChar('∅', _)));
    assert_eq!(res.span(), Span::new(15, 1));
}

#[test]
fn unicode_identifiers() {
    let mut res = lex("{ näme : Straße.Größe, _x2 : Ünit }")
        .expect("Expected a successful lex")
        .into_iter();

    assert_lex_result!(
        res,
        TokenKind::OpenDelim(DelimKind::Brace),
        ident("näme"),
        TokenKind::Symbol(Symbol::Colon),
        ident("Straße.Größe"),
        TokenKind::Symbol(Symbol::Comma),
        ident("_x2"),
        TokenKind::Symbol(Symbol::Colon),
        ident("Ünit"),
        TokenKind::CloseDelim(DelimKind::Brace),
    );

    assert!(res.next().is_none());
}

#[test]
fn columns() {
    let res = lex("type Msg\n    = Click\n    | Reset\nupdate = 1").expect("Expected a successful lex");
    let starts: Vec<_> = res
        .iter()
        .filter(|token| token.starts_declaration())
        .map(|token| token.kind.clone())
        .collect();

    assert_eq!(starts, vec![ident("type"), ident("update")]);
    assert_eq!(res[2].column, 4);
}

#[test]
fn qualified_names() {
    let mut res = lex("Html.Attributes.class model.field Json.Decode.Value")
        .expect("Expected a successful lex")
        .into_iter();

    assert_lex_result!(
        res,
        ident("Html.Attributes.class"),
        ident("model"),
        TokenKind::Operator(".".into()),
        ident("field"),
        ident("Json.Decode.Value"),
    );
}

#[test]
fn lex_string() {
    let mut res = lex(r#"name = "fujiwara no mokou""#)
        .expect("Expected a successful lex")
        .into_iter();

    assert_lex_result!(
        res,
        ident("name"),
        TokenKind::Symbol(Symbol::SingleEquals),
        TokenKind::Literal(LiteralKind::String("fujiwara no mokou".into())),
    );
}

#[test]
fn lex_string_escape() {
    let mut res = lex(r#""hina\nkagiyama\u{1F600}""#)
        .expect("Expected a successful lex")
        .into_iter();

    assert_lex_result!(
        res,
        TokenKind::Literal(LiteralKind::String("hina\nkagiyama\u{1F600}".into()))
    );
}

#[test]
fn lex_triple_quoted_string() {
    let mut res = lex("\"\"\"one\n\"two\"\n\"\"\" x")
        .expect("Expected a successful lex")
        .into_iter();

    assert_lex_result!(
        res,
        TokenKind::Literal(LiteralKind::String("one\n\"two\"\n".into())),
        ident("x"),
    );
}

#[test]
fn lex_string_no_eof() {
    let res = lex("\"hello");
    assert!(matches!(res, Err(LexError::UnexpectedEOF("a string literal", _))));
}

#[test]
fn lex_chars() {
    let mut res = lex(r"'a' '\n' '\''").expect("Expected a successful lex").into_iter();

    assert_lex_result!(
        res,
        TokenKind::Literal(LiteralKind::Char('a')),
        TokenKind::Literal(LiteralKind::Char('\n')),
        TokenKind::Literal(LiteralKind::Char('\'')),
    );

    assert!(matches!(lex("'ab'"), Err(LexError::BadCharLiteral(_))));
}

#[test]
fn lex_numbers() {
    let mut res = lex("12345 1.5 1e6 0x1F").expect("Expected a successful lex").into_iter();

    assert_lex_result!(
        res,
        TokenKind::Literal(LiteralKind::Integer(12345)),
        TokenKind::Literal(LiteralKind::Float(1.5)),
        TokenKind::Literal(LiteralKind::Float(1e6)),
        TokenKind::Literal(LiteralKind::Integer(31)),
    );
}

#[test]
fn lex_operators() {
    let mut res = lex("-> = | : .. |> ++ \\x").expect("Expected a successful lex").into_iter();

    assert_lex_result!(
        res,
        TokenKind::Symbol(Symbol::Arrow),
        TokenKind::Symbol(Symbol::SingleEquals),
        TokenKind::Symbol(Symbol::Pipe),
        TokenKind::Symbol(Symbol::Colon),
        TokenKind::Symbol(Symbol::DotDot),
        TokenKind::Operator("|>".into()),
        TokenKind::Operator("++".into()),
        TokenKind::Operator("\\".into()),
        ident("x"),
    );
}

#[test]
fn lex_comment() {
    let mut res = lex("--").expect("Expected a successful lex").into_iter();
    let mut res_2 = lex("{- outer {- inner -} still outer -}")
        .expect("Expected a successful lex")
        .into_iter();
    let mut res_3 = lex(r#"
{-| Documentation for `Model`.
-}
type alias Model = -- the whole state
    { count : Int }
"#)
    .expect("Expected a successful lex")
    .into_iter();

    assert!(res.next().is_none());
    assert!(res_2.next().is_none());

    assert_lex_result!(
        res_3,
        ident("type"),
        ident("alias"),
        ident("Model"),
        TokenKind::Symbol(Symbol::SingleEquals),
        TokenKind::OpenDelim(DelimKind::Brace),
        ident("count"),
        TokenKind::Symbol(Symbol::Colon),
        ident("Int"),
        TokenKind::CloseDelim(DelimKind::Brace),
    );
}

#[test]
fn unterminated_comment() {
    let res = lex("{- never closed");
    assert!(matches!(res, Err(LexError::UnexpectedEOF("a block comment", _))));
}

#[test]
fn lex_shader() {
    let mut res = lex("[glsl| void main () {} |]").expect("Expected a successful lex").into_iter();

    assert_lex_result!(
        res,
        TokenKind::Literal(LiteralKind::String(" void main () {} ".into()))
    );
}

proptest! {
    // Inspired by proptest's README
    #[test]
    fn fuzz(src in ".{0,4096}") {
        let _ = lex(&src);
    }

    // Tries filling a string with random characters (except for \ and ")
    #[test]
    fn string_stress(src in "\"[^\\\\\"\n]{0,4096}\"") {
        let mut res = lex(&src).expect("Expected a successful lex").into_iter();

        prop_assert!(matches!(
            res.next().unwrap().kind,
            TokenKind::Literal(LiteralKind::String(_))
        ));
    }

    #[test]
    fn number_stress(src in "[0-9]{1,8}(\\.[0-9]{1,8})?") {
        let mut res = lex(&src).expect("Expected a successful lex").into_iter();

        prop_assert!(matches!(
            res.next().unwrap().kind,
            TokenKind::Literal(LiteralKind::Integer(_) | LiteralKind::Float(_))
        ));
    }
}
