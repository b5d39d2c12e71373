//! Hex color codes.
//!
//! A code is `#` followed by 3, 4, 6 or 8 hex digits in either case.
//! The short forms are expanded by doubling each digit, so `#abc` reads
//! as `#aabbcc` and `#abcd` as `#aabbccdd`.

use crate::error::ColorError;

/// Parse a hex code into `[red, green, blue, alpha]`.
///
/// `alpha` is used for the 3 and 6 digit forms, which carry no alpha of
/// their own.
pub fn parse_hex(code: &str, alpha: i32) -> Result<[i32; 4], ColorError> {
    let invalid = || ColorError::InvalidFormat(code.to_string());

    let digits = code.strip_prefix('#').ok_or_else(invalid)?.as_bytes();

    let mut expanded = [0u8; 8];
    let len = match digits.len() {
        3 | 4 => {
            for (i, &c) in digits.iter().enumerate() {
                expanded[2 * i] = c;
                expanded[2 * i + 1] = c;
            }
            digits.len() * 2
        }
        6 | 8 => {
            expanded[..digits.len()].copy_from_slice(digits);
            digits.len()
        }
        _ => return Err(invalid()),
    };

    let mut out = [0, 0, 0, alpha];
    for (slot, pair) in out.iter_mut().zip(expanded[..len].chunks_exact(2)) {
        let hi = nibble(pair[0]).ok_or_else(invalid)?;
        let lo = nibble(pair[1]).ok_or_else(invalid)?;
        *slot = i32::from(hi << 4 | lo);
    }

    Ok(out)
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
