// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// Validates and converts the number at the start of `bytes`.
///
/// Returns the converted value and the number of bytes it occupies.
///
/// The grammar is enforced by a manual scan matching the JSON number
/// production exactly; the value then comes from the trusted conversion
/// ([`fast_float::parse_partial`], which consumes the longest valid prefix
/// like `strtod`). If the conversion does not consume exactly the span the
/// scan validated, the number is rejected. That cross-check guards against
/// grammar/converter divergence, and is what rejects inputs like `0123`
/// where the converter reads past the single `0` the grammar permits.
pub fn parse(bytes: &[u8]) -> Result<(f64, usize), ParseError> {
    let validated = scan(bytes)?;
    match fast_float::parse_partial::<f64, _>(bytes) {
        Ok((value, consumed)) if consumed == validated => Ok((value, validated)),
        _ => Err(ParseError::InvalidNumber),
    }
}

/// Manual scan of the JSON number grammar. Returns the validated length.
fn scan(bytes: &[u8]) -> Result<usize, ParseError> {
    let mut i = 0;

    if bytes.first() == Some(&b'-') {
        i += 1;
    }

    // Integer part: a single `0`, or a nonzero digit followed by more
    // digits. Leading zeros are left for the cross-check to reject.
    match bytes.get(i).copied() {
        Some(b'0') => i += 1,
        Some(b) if b.is_ascii_digit() => {
            i += 1;
            while bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
                i += 1;
            }
        }
        _ => return Err(ParseError::InvalidNumber),
    }

    // Fractional part: `.` must be followed by at least one digit.
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if !bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidNumber);
        }
        while bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
            i += 1;
        }
    }

    // Exponent part: `e`/`E`, optional sign, at least one digit.
    if matches!(bytes.get(i).copied(), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i).copied(), Some(b'+' | b'-')) {
            i += 1;
        }
        if !bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidNumber);
        }
        while bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
            i += 1;
        }
    }

    Ok(i)
}
