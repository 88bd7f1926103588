//! Behavioural tests for `tokenize` and `tokenize_with_trivia`.

mod test_util;

use rstest::{fixture, rstest};
use tel::{LexErrorKind, SyntaxKind, TelError, tokenize, tokenize_with_trivia};
use test_util::{kinds, tokens};

#[fixture]
fn simple_input() -> &'static str {
    "?spend|fb:daily + 1.5 >= f('x', \"y\")"
}

#[rstest]
#[case("42", SyntaxKind::T_INT)]
#[case("-42", SyntaxKind::T_INT)]
#[case("4.2", SyntaxKind::T_REAL)]
#[case("-0.25", SyntaxKind::T_REAL)]
#[case("name_1$", SyntaxKind::T_WORD)]
#[case("_x", SyntaxKind::T_WORD)]
#[case(r#""a b""#, SyntaxKind::T_STRING)]
#[case(r#""esc\"aped""#, SyntaxKind::T_STRING)]
#[case("'a b'", SyntaxKind::T_SINGLE_QUOTED)]
#[case("(", SyntaxKind::T_LPAREN)]
#[case(")", SyntaxKind::T_RPAREN)]
#[case("|", SyntaxKind::T_PIPE)]
#[case(":", SyntaxKind::T_COLON)]
#[case(",", SyntaxKind::T_COMMA)]
#[case("==", SyntaxKind::T_EQEQ)]
#[case("!=", SyntaxKind::T_NEQ)]
#[case(">", SyntaxKind::T_GT)]
#[case("<", SyntaxKind::T_LT)]
#[case(">=", SyntaxKind::T_GTE)]
#[case("<=", SyntaxKind::T_LTE)]
#[case("+", SyntaxKind::T_PLUS)]
#[case("-", SyntaxKind::T_MINUS)]
#[case("*", SyntaxKind::T_STAR)]
#[case("/", SyntaxKind::T_SLASH)]
#[case("?", SyntaxKind::T_QUESTION)]
#[case("&&", SyntaxKind::K_AND)]
#[case("||", SyntaxKind::K_OR)]
fn single_tokens(#[case] source: &str, #[case] expected: SyntaxKind) {
    assert_eq!(kinds(source), vec![expected, SyntaxKind::T_EOF]);
}

#[rstest]
#[case("true", SyntaxKind::K_TRUE)]
#[case("TRUE", SyntaxKind::K_TRUE)]
#[case("false", SyntaxKind::K_FALSE)]
#[case("FALSE", SyntaxKind::K_FALSE)]
#[case("not", SyntaxKind::K_NOT)]
#[case("NOT", SyntaxKind::K_NOT)]
#[case("is", SyntaxKind::K_IS)]
#[case("IS", SyntaxKind::K_IS)]
#[case("null", SyntaxKind::K_NULL)]
#[case("NULL", SyntaxKind::K_NULL)]
#[case("and", SyntaxKind::K_AND)]
#[case("AND", SyntaxKind::K_AND)]
#[case("or", SyntaxKind::K_OR)]
#[case("OR", SyntaxKind::K_OR)]
#[case("True", SyntaxKind::T_WORD)]
#[case("nULL", SyntaxKind::T_WORD)]
#[case("android", SyntaxKind::T_WORD)]
#[case("order", SyntaxKind::T_WORD)]
#[case("nothing", SyntaxKind::T_WORD)]
fn keywords_match_exact_casings(#[case] source: &str, #[case] expected: SyntaxKind) {
    assert_eq!(kinds(source), vec![expected, SyntaxKind::T_EOF]);
    assert_eq!(expected.is_keyword(), expected != SyntaxKind::T_WORD);
}

#[rstest]
#[case("1-2", vec![SyntaxKind::T_INT, SyntaxKind::T_INT])]
#[case("1 - 2", vec![SyntaxKind::T_INT, SyntaxKind::T_MINUS, SyntaxKind::T_INT])]
#[case("a-b", vec![SyntaxKind::T_WORD, SyntaxKind::T_MINUS, SyntaxKind::T_WORD])]
#[case("a>=b", vec![SyntaxKind::T_WORD, SyntaxKind::T_GTE, SyntaxKind::T_WORD])]
#[case("a|b", vec![SyntaxKind::T_WORD, SyntaxKind::T_PIPE, SyntaxKind::T_WORD])]
#[case("a||b", vec![SyntaxKind::T_WORD, SyntaxKind::K_OR, SyntaxKind::T_WORD])]
#[case("f(x)", vec![SyntaxKind::T_WORD, SyntaxKind::T_LPAREN, SyntaxKind::T_WORD, SyntaxKind::T_RPAREN])]
fn longest_match_wins(#[case] source: &str, #[case] expected: Vec<SyntaxKind>) {
    let mut expected = expected;
    expected.push(SyntaxKind::T_EOF);
    assert_eq!(kinds(source), expected);
}

#[rstest]
fn token_texts_match_spans(simple_input: &str) {
    for tok in tokens(simple_input) {
        assert_eq!(simple_input.get(tok.span.clone()), Some(tok.text));
        assert_eq!(tok.position.offset, tok.span.start);
    }
}

#[rstest]
fn trivia_tokens_reproduce_source(simple_input: &str) {
    let all = tokenize_with_trivia(simple_input).unwrap_or_else(|e| panic!("{e}"));
    let joined: String = all.iter().map(|t| t.text).collect();
    assert_eq!(joined, simple_input);
    assert!(all.iter().any(|t| t.kind == SyntaxKind::T_WHITESPACE));
}

#[rstest]
#[case("")]
#[case(" \t\r\n ")]
fn blank_source_yields_only_eof(#[case] source: &str) {
    assert_eq!(kinds(source), vec![SyntaxKind::T_EOF]);
}

#[rstest]
#[case("#", LexErrorKind::UnexpectedCharacter('#'), 0)]
#[case("a = b", LexErrorKind::UnexpectedCharacter('='), 2)]
#[case("a & b", LexErrorKind::UnexpectedCharacter('&'), 2)]
#[case("x\n\"open", LexErrorKind::UnterminatedLiteral('"'), 2)]
#[case("'open", LexErrorKind::UnterminatedLiteral('\''), 0)]
fn lexical_errors(#[case] source: &str, #[case] kind: LexErrorKind, #[case] offset: usize) {
    match tokenize(source) {
        Err(TelError::Lex(err)) => {
            assert_eq!(err.kind, kind);
            assert_eq!(err.position.offset, offset);
        }
        other => panic!("{source:?}: expected lex error, got {other:?}"),
    }
}

#[test]
fn lex_error_reports_line_and_column() {
    let Err(err) = tokenize("a +\n  \"never closed") else {
        panic!("expected lex error");
    };
    assert_eq!(
        err.to_string(),
        "unterminated string constant on line 2, position 3"
    );
}
