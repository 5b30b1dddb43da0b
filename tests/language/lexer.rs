//! Integration tests for the lexer
//!
//! Tests tokenization of command lines.

use ams_foundation::ErrorKind;
use ams_language::{Keyword, Lexer, TokenClass, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .expect("lexing failed")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// =============================================================================
// Token Kinds
// =============================================================================

#[test]
fn tokenize_command_line() {
    assert_eq!(
        kinds("clear @s minecraft:stone 128"),
        vec![
            TokenKind::Command(Keyword::Clear),
            TokenKind::Selector("@s".into()),
            TokenKind::Identifier("minecraft:stone".into()),
            TokenKind::Int {
                value: 128,
                raw: "128".into()
            },
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenize_numbers_and_ranges() {
    assert_eq!(
        kinds("-17 2.50 1..5 ..-5 10.."),
        vec![
            TokenKind::Int {
                value: -17,
                raw: "-17".into()
            },
            TokenKind::Float {
                value: 2.5,
                raw: "2.50".into()
            },
            TokenKind::Range("1..5".into()),
            TokenKind::Range("..-5".into()),
            TokenKind::Range("10..".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenize_nbt_blob_is_raw() {
    let source = r#"{CustomName:"\"}\"",Items:[{id:"a"}]}"#;
    assert_eq!(kinds(source), vec![TokenKind::Nbt(source.into()), TokenKind::Eof]);
}

#[test]
fn tokenize_attribute_punctuation() {
    let classes: Vec<_> = Lexer::tokenize_all("@e[type=!player,limit=1]")
        .unwrap()
        .iter()
        .map(|t| t.class())
        .collect();
    assert_eq!(
        classes,
        vec![
            TokenClass::Selector,
            TokenClass::AttrBegin,
            TokenClass::Identifier,
            TokenClass::Assign,
            TokenClass::Not,
            TokenClass::Identifier,
            TokenClass::Comma,
            TokenClass::Identifier,
            TokenClass::Assign,
            TokenClass::Int,
            TokenClass::AttrEnd,
            TokenClass::Eof,
        ]
    );
}

#[test]
fn tokenize_newlines_separate_commands() {
    assert_eq!(
        kinds("stop\nstop"),
        vec![
            TokenKind::Command(Keyword::Stop),
            TokenKind::Newline,
            TokenKind::Command(Keyword::Stop),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenize_comment_is_skipped() {
    assert_eq!(kinds("# whole line"), vec![TokenKind::Eof]);
}

// =============================================================================
// Whitespace
// =============================================================================

#[test]
fn interior_whitespace_length_is_irrelevant() {
    assert_eq!(kinds("say  hello"), kinds("say hello"));
    assert_eq!(kinds("give\t@p   stone  \t 5"), kinds("give @p stone 5"));
}

#[test]
fn trailing_whitespace_flag_marks_attribute_gap() {
    let tight = Lexer::tokenize_all("@s[tag=admin]").unwrap();
    let spaced = Lexer::tokenize_all("@s [tag=admin]").unwrap();
    assert!(!tight[0].trailing_whitespace);
    assert!(spaced[0].trailing_whitespace);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unrecognized_character_reports_column_and_line() {
    let err = Lexer::tokenize_all("say a\nsay b\ntp @s ~ ~ ~").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Lexical {
            character: '~',
            line: 3,
            column: 6
        }
    ));
}

#[test]
fn too_many_dots_is_invalid_number() {
    let err = Lexer::tokenize_all("1...2").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidNumber { .. }));
}

#[test]
fn open_nbt_is_unterminated() {
    let err = Lexer::tokenize_all("data merge entity @s {a:1").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnterminatedNbt { line: 1, column: 21 }));
}

#[test]
fn lexer_starting_line_offsets_errors() {
    let mut lexer = Lexer::starting_at_line("$", 40);
    assert_eq!(lexer.next_token().unwrap_err().line(), Some(40));
}
