// SPDX-License-Identifier: Apache-2.0

//! Parses a small document and prints every decoded token with its span.

use flatjson::{Parser, TokenKind};

fn main() {
    let json = r#"{"name":"John\u00D0e","age":30,"scores":[90.5,80.0]}"#;
    let mut parser = Parser::new(json);

    if let Err(error) = parser.parse() {
        eprintln!("Error: {}", error.message());
        std::process::exit(1);
    }

    for (i, token) in parser.tokens().iter().enumerate() {
        print!("Token {i}: ");
        match &token.kind {
            TokenKind::Object => print!("Object"),
            TokenKind::Array => print!("Array"),
            TokenKind::String(text) => print!("String: {text}"),
            TokenKind::Number(value) => print!("Number: {value}"),
            TokenKind::True => print!("Boolean: true"),
            TokenKind::False => print!("Boolean: false"),
            TokenKind::Null => print!("Null"),
            TokenKind::Invalid => print!("Invalid"),
        }
        println!("  [{}..{})", token.start, token.end);
    }
}
