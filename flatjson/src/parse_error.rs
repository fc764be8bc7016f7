// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur while decoding JSON into tokens.
///
/// A parse reports at most one of these: the first failure encountered in
/// document order is latched and every later handler short-circuits.
/// Success is represented by `Ok(())` from [`crate::Parser::parse`], so
/// there is no "no error" variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A value started with a byte no JSON value can start with.
    InvalidToken,
    /// Structurally unexpected byte, or the input ended inside a value.
    UnexpectedChar,
    /// A configured token-count ceiling was reached.
    ///
    /// The default store grows dynamically and never reports this.
    MaxTokens,
    /// Decoded string content exceeded the configured maximum length.
    StringTooLong,
    /// A backslash escape other than `" \ / b f n r t u`.
    InvalidEscape,
    /// A malformed `\uXXXX` escape or an unpaired surrogate.
    InvalidUnicode,
    /// Containers nested deeper than the configured maximum.
    NestingDepth,
    /// A number violating the JSON grammar, or one the trusted
    /// floating-point conversion disagreed with.
    InvalidNumber,
    /// Non-whitespace input after the top-level value.
    TrailingChars,
    /// Growing the token store or string scratch buffer failed.
    AllocationFailed,
}

impl ParseError {
    /// Fixed human-readable message for this code.
    pub const fn message(self) -> &'static str {
        match self {
            ParseError::InvalidToken => "Invalid token",
            ParseError::UnexpectedChar => "Unexpected character",
            ParseError::MaxTokens => "Max tokens exceeded",
            ParseError::StringTooLong => "String too long",
            ParseError::InvalidEscape => "Invalid escape sequence",
            ParseError::InvalidUnicode => "Invalid Unicode escape",
            ParseError::NestingDepth => "Nesting depth exceeded",
            ParseError::InvalidNumber => "Invalid number format",
            ParseError::TrailingChars => "Trailing characters",
            ParseError::AllocationFailed => "Memory allocation failed",
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}
