//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use ams_foundation::{Error, ErrorContext, ErrorKind, Result};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_lexical_positions() {
    let err = Error::lexical('~', 12, 3);
    assert_eq!(err.line(), Some(12));
    assert!(err.is_syntax_error());
    assert_eq!(
        err.to_string(),
        "invalid character '~' at column 3 in line 12"
    );
}

#[test]
fn error_grammar_mismatch_message() {
    let err = Error::grammar_mismatch(vec!["newline", "end of input"], "integer", "64", 1, 9);
    let msg = err.to_string();
    assert!(msg.starts_with("line 1: expected newline or end of input"));
    assert!(msg.contains("found integer '64' at column 9"));
}

#[test]
fn error_unexpected_word_lists_choices() {
    let err = Error::new(ErrorKind::UnexpectedWord {
        expected: vec!["add", "remove"],
        found: "delete".to_string(),
        line: 4,
        column: 4,
    });
    assert_eq!(
        err.to_string(),
        "line 4: expected one of add, remove, found 'delete' at column 4"
    );
}

#[test]
fn error_invalid_number_and_nbt() {
    let number = Error::new(ErrorKind::InvalidNumber {
        text: "1...2".to_string(),
        line: 2,
        column: 0,
    });
    assert!(number.to_string().contains("1...2"));
    assert_eq!(number.line(), Some(2));

    let nbt = Error::new(ErrorKind::UnterminatedNbt { line: 5, column: 20 });
    assert!(nbt.to_string().contains("unterminated"));
    assert_eq!(nbt.line(), Some(5));
}

#[test]
fn error_driver_kinds_have_no_line() {
    let config = Error::config("extension must not be empty");
    assert_eq!(config.line(), None);
    assert!(!config.is_syntax_error());
    assert!(config.to_string().contains("extension"));

    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = Error::io("out.mcfunction", &io);
    assert!(err.to_string().contains("out.mcfunction"));
    assert!(err.to_string().contains("denied"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display_forms() {
    assert_eq!(ErrorContext::new().to_string(), "");
    assert_eq!(ErrorContext::new().with_line(3).to_string(), "line 3");
    assert_eq!(ErrorContext::new().with_source("a.ams").to_string(), "a.ams");
    assert_eq!(
        ErrorContext::new()
            .with_source("a.ams")
            .with_line(3)
            .with_text("kill 5")
            .to_string(),
        "a.ams:3\n    kill 5"
    );
}

#[test]
fn context_does_not_change_message() {
    let err = Error::unknown_command("loot", 2);
    let plain = err.to_string();
    let with = Error::unknown_command("loot", 2).with_context(ErrorContext::new().with_source("x"));
    assert_eq!(with.to_string(), plain);
    assert!(with.context.is_some());
}

#[test]
fn result_alias_propagates() {
    fn inner() -> Result<u32> {
        Err(Error::config("nope"))
    }
    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }
    assert!(matches!(outer().unwrap_err().kind, ErrorKind::Config(_)));
}
