// SPDX-License-Identifier: Apache-2.0

//! Rebuilds the nesting of a parsed document purely from span containment.
//!
//! The token list is flat; a token belongs to every container whose span
//! encloses its start offset. Counting those containers gives the
//! indentation level without any parent/child links.

use flatjson::{Parser, Token, TokenKind};

fn label(token: &Token) -> String {
    match &token.kind {
        TokenKind::Object => "{}".to_string(),
        TokenKind::Array => "[]".to_string(),
        TokenKind::String(text) => format!("\"{text}\""),
        TokenKind::Number(value) => format!("{value}"),
        TokenKind::True => "true".to_string(),
        TokenKind::False => "false".to_string(),
        TokenKind::Null => "null".to_string(),
        TokenKind::Invalid => "<invalid>".to_string(),
    }
}

fn is_container(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Object | TokenKind::Array)
}

fn main() {
    let json = r#"{
        "metadata": {"version": "1.0", "author": "AutoGen"},
        "entries": [
            {"id": 1, "price": 9.99},
            {"id": 2, "price": 24.5}
        ],
        "active": true
    }"#;

    let mut parser = Parser::new(json);
    if let Err(error) = parser.parse() {
        eprintln!("Error: {} (at byte {})", error.message(), parser.position());
        std::process::exit(1);
    }

    let tokens = parser.tokens();
    for (i, token) in tokens.iter().enumerate() {
        let depth = tokens[..i]
            .iter()
            .filter(|enclosing| {
                is_container(enclosing)
                    && enclosing.start < token.start
                    && token.start < enclosing.end
            })
            .count();
        println!(
            "{:indent$}{}  [{}..{})",
            "",
            label(token),
            token.start,
            token.end,
            indent = depth * 2
        );
    }
}
