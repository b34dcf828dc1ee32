// tests/lexer_tests.rs

use databreaks::ast::Token;
use databreaks::lexer::{Lexer, Span};

fn word(s: &str) -> Token {
    Token::Word(s.to_string())
}

fn tokens(input: &str) -> Vec<Token> {
    Lexer::new(input)
        .tokenize()
        .into_iter()
        .map(|spanned| spanned.token)
        .collect()
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("(", Token::LParen),
        (")", Token::RParen),
        (",", Token::Comma),
        ("+", Token::Plus),
        ("-", Token::Minus),
        ("*", Token::Star),
        ("/", Token::Slash),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token(), Token::Eof);
    }
}

#[test]
fn test_operator_classification() {
    assert!(Token::Plus.is_operator());
    assert!(Token::Slash.is_operator());
    assert!(!Token::Comma.is_operator());
    assert!(!word("x").is_operator());
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_keywords_any_case() {
    let test_cases = vec![
        ("SELECT", Token::Select),
        ("select", Token::Select),
        ("SeLeCt", Token::Select),
        ("FROM", Token::From),
        ("from", Token::From),
        ("AS", Token::As),
        ("as", Token::As),
        ("aS", Token::As),
    ];

    for (input, expected) in test_cases {
        assert_eq!(tokens(input), vec![expected, Token::Eof], "Failed for input: {}", input);
    }
}

#[test]
fn test_keyword_prefix_is_a_word() {
    assert_eq!(tokens("SELECTED"), vec![word("SELECTED"), Token::Eof]);
    assert_eq!(tokens("fromage"), vec![word("fromage"), Token::Eof]);
    assert_eq!(tokens("ASSET"), vec![word("ASSET"), Token::Eof]);
}

// ============================================================================
// Words
// ============================================================================

#[test]
fn test_word_stops_at_delimiters() {
    assert_eq!(
        tokens("a,b(c)d"),
        vec![
            word("a"),
            Token::Comma,
            word("b"),
            Token::LParen,
            word("c"),
            Token::RParen,
            word("d"),
            Token::Eof,
        ]
    );
}

#[test]
fn test_word_splits_on_operator_chars() {
    assert_eq!(
        tokens("cpu-load"),
        vec![word("cpu"), Token::Minus, word("load"), Token::Eof]
    );
}

#[test]
fn test_word_keeps_punctuation() {
    assert_eq!(
        tokens(r#""telegraf"."autogen".cpu"#),
        vec![word(r#""telegraf"."autogen".cpu"#), Token::Eof]
    );
    assert_eq!(tokens("extra_Es"), vec![word("extra_Es"), Token::Eof]);
}

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(
        tokens("  MEAN \t(\n x )  "),
        vec![word("MEAN"), Token::LParen, word("x"), Token::RParen, Token::Eof]
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(tokens(""), vec![Token::Eof]);
    assert_eq!(tokens("   "), vec![Token::Eof]);
}

// ============================================================================
// Spans
// ============================================================================

#[test]
fn test_spans_cover_tokens() {
    let spanned = Lexer::new("SELECT MEAN(x) FROM m").tokenize();
    let spans: Vec<Span> = spanned.iter().map(|s| s.span).collect();

    assert_eq!(
        spans,
        vec![
            Span { start: 0, end: 6 },
            Span { start: 7, end: 11 },
            Span { start: 11, end: 12 },
            Span { start: 12, end: 13 },
            Span { start: 13, end: 14 },
            Span { start: 15, end: 19 },
            Span { start: 20, end: 21 },
            Span { start: 21, end: 21 },
        ]
    );
}

#[test]
fn test_eof_span_after_trailing_whitespace() {
    let mut lexer = Lexer::new("x   ");
    lexer.next_token();
    let eof = lexer.next_spanned();
    assert_eq!(eof.token, Token::Eof);
    assert_eq!(eof.span, Span { start: 4, end: 4 });
}

#[test]
fn test_eof_is_repeated() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token(), word("x"));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_token_display() {
    assert_eq!(Token::Select.to_string(), "SELECT");
    assert_eq!(Token::Star.to_string(), "*");
    assert_eq!(word("MEAN").to_string(), "MEAN");
    assert_eq!(Token::Eof.to_string(), "end of input");
}
