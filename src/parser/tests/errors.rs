//! Tests for lexer and parser failures.

use crate::test_util::{assert_lex_error, assert_parse_error, parse_err};
use crate::{Expected, LexErrorKind, SyntaxKind, TelError, parse, parse_with_max_depth};
use rstest::rstest;

#[rstest]
#[case("", Expected::Expression, SyntaxKind::T_EOF, 0)]
#[case("   ", Expected::Expression, SyntaxKind::T_EOF, 3)]
#[case("1 +", Expected::Expression, SyntaxKind::T_EOF, 3)]
#[case("not", Expected::Expression, SyntaxKind::T_EOF, 3)]
#[case(")", Expected::Expression, SyntaxKind::T_RPAREN, 0)]
#[case("a + and", Expected::Expression, SyntaxKind::K_AND, 4)]
#[case("is null", Expected::Expression, SyntaxKind::K_IS, 0)]
#[case("(a", Expected::ClosingBracket, SyntaxKind::T_EOF, 2)]
#[case("(a, b)", Expected::ClosingBracket, SyntaxKind::T_COMMA, 2)]
#[case("f(1,)", Expected::Expression, SyntaxKind::T_RPAREN, 4)]
#[case("f(,)", Expected::Expression, SyntaxKind::T_COMMA, 2)]
#[case("f(1 2)", Expected::CommaOrClosingBracket, SyntaxKind::T_INT, 4)]
#[case("f(1", Expected::CommaOrClosingBracket, SyntaxKind::T_EOF, 3)]
#[case("?", Expected::TaxonName, SyntaxKind::T_EOF, 1)]
#[case("?1", Expected::TaxonName, SyntaxKind::T_INT, 1)]
#[case("a|", Expected::TaxonName, SyntaxKind::T_EOF, 2)]
#[case("a | 1", Expected::TaxonName, SyntaxKind::T_INT, 4)]
#[case("a:null", Expected::TaxonName, SyntaxKind::K_NULL, 2)]
#[case("a is 1", Expected::Null, SyntaxKind::T_INT, 5)]
#[case("a is not", Expected::Null, SyntaxKind::T_EOF, 8)]
#[case("a is true", Expected::Null, SyntaxKind::K_TRUE, 5)]
fn syntax_errors(
    #[case] src: &str,
    #[case] expected: Expected,
    #[case] found: SyntaxKind,
    #[case] offset: usize,
) {
    assert_parse_error(src, expected, found, offset);
}

#[rstest]
#[case(r#""abc"#, LexErrorKind::UnterminatedLiteral('"'), 0)]
#[case("'abc", LexErrorKind::UnterminatedLiteral('\''), 0)]
#[case(r#"a + "x"#, LexErrorKind::UnterminatedLiteral('"'), 4)]
#[case("1.", LexErrorKind::UnexpectedCharacter('.'), 1)]
#[case("a $ b", LexErrorKind::UnexpectedCharacter('$'), 2)]
#[case("!a", LexErrorKind::UnexpectedCharacter('!'), 0)]
#[case("é", LexErrorKind::UnexpectedCharacter('é'), 0)]
fn lexical_errors(#[case] src: &str, #[case] kind: LexErrorKind, #[case] offset: usize) {
    assert_lex_error(src, kind, offset);
}

#[rstest]
#[case("a b", SyntaxKind::T_WORD, "b", 2)]
#[case("1-2", SyntaxKind::T_INT, "-2", 1)]
#[case("1 -2", SyntaxKind::T_INT, "-2", 2)]
#[case("(a))", SyntaxKind::T_RPAREN, ")", 3)]
#[case("f(1) g(2)", SyntaxKind::T_WORD, "g", 5)]
#[case("a ,", SyntaxKind::T_COMMA, ",", 2)]
fn trailing_input(
    #[case] src: &str,
    #[case] found: SyntaxKind,
    #[case] text: &str,
    #[case] offset: usize,
) {
    match parse_err(src) {
        TelError::TrailingInput {
            position,
            found: kind,
            text: got,
        } => {
            assert_eq!(kind, found);
            assert_eq!(got, text);
            assert_eq!(position.offset, offset);
        }
        other => panic!("{src:?}: expected trailing input, got {other:?}"),
    }
}

#[test]
fn spaced_minus_is_subtraction() {
    assert!(parse("1 - 2").is_ok());
}

#[test]
fn error_positions_are_line_and_column() {
    let err = parse_err("a +\n  )");
    let pos = err.position();
    assert_eq!((pos.line, pos.column, pos.offset), (2, 3, 6));
    assert_eq!(
        err.to_string(),
        "expected expression, found \")\" on line 2, position 3"
    );
}

#[test]
fn deep_brackets_hit_the_default_limit() {
    let src = format!("{}a{}", "(".repeat(300), ")".repeat(300));
    assert!(matches!(
        parse_err(&src),
        TelError::NestingTooDeep { limit: 256, .. }
    ));
}

#[test]
fn deep_not_chain_hits_the_default_limit() {
    let src = format!("{}a", "not ".repeat(300));
    assert!(matches!(
        parse_err(&src),
        TelError::NestingTooDeep { limit: 256, .. }
    ));
}

#[test]
fn moderate_nesting_parses() {
    let src = format!("{}a{}", "(".repeat(100), ")".repeat(100));
    assert!(parse(&src).is_ok());
}

#[test]
fn pathological_nesting_fails_without_overflowing() {
    let src = format!("{}1", "f(".repeat(50_000));
    assert!(matches!(
        parse_with_max_depth(&src, 64),
        Err(TelError::NestingTooDeep { limit: 64, .. })
    ));
}
