//! Field tokenization for table lines
//!
//! This module provides the raw tokenization using the logos lexer library.
//! A line is split into alternating runs of whitespace and non-whitespace;
//! the non-whitespace runs are the fields of the row.
//!
//! Input lines must already have their trailing newline stripped, so the
//! lexer defines no newline token.

use logos::Logos;

/// Tokens produced when lexing a single newline-stripped line.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// A run of whitespace separating fields.
    #[regex(r"\s+")]
    Whitespace,

    /// A run of non-whitespace characters (one field).
    #[regex(r"\S+", |lex| lex.slice().to_string())]
    Field(String),
}

impl Token {
    /// Check if this token is a field.
    pub fn is_field(&self) -> bool {
        matches!(self, Token::Field(_))
    }

    /// Check if this token is separating whitespace.
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }
}

/// Split a newline-stripped line into its whitespace-separated fields.
///
/// Whitespace tokens are dropped and the fields keep their source order. An
/// empty or all-whitespace line yields no fields.
pub fn fields(line: &str) -> Vec<String> {
    let mut lexer = Token::lexer(line);
    let mut fields = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(Token::Field(field)) = result {
            fields.push(field);
        }
    }

    fields
}
