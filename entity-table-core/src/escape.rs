//! Literal Escaping - Target String Syntax
//!
//! Turns an entity's `characters` into the body of a double-quoted literal.
//! Each character is handled on its own:
//!
//! - `\` and `"` are backslash-escaped
//! - newline, carriage return and tab use `\n`, `\r`, `\t`
//! - printable characters (including `'`) pass through
//! - non-printable characters up to U+00FF use the braced form `\u{NN}`
//! - non-printable BMP characters use `\uNNNN`
//! - non-printable characters beyond the BMP use `\u{NNNNN}`
//!
//! Hex digits are lowercase. Output is stable for a given input.

use std::cmp::Ordering;

/// Inclusive ranges of non-printable code points, sorted.
///
/// Controls, format characters, space separators other than U+0020,
/// line and paragraph separators, private use, and unassigned blocks
/// adjacent to those.
const NON_PRINTABLE: &[(u32, u32)] = &[
    (0x0000, 0x001F),
    (0x007F, 0x00A0),
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x1680, 0x1680),
    (0x180E, 0x180E),
    (0x2000, 0x200F),
    (0x2028, 0x202F),
    (0x205F, 0x206F),
    (0x3000, 0x3000),
    (0xE000, 0xF8FF),
    (0xFDD0, 0xFDEF),
    (0xFEFF, 0xFEFF),
    (0xFFF0, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x1343F),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0000, 0xE00FF),
    (0xE01F0, 0x10FFFF),
];

/// Escape `s` for embedding between double quotes.
pub fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '"' => out.push_str("\\\""),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        c if is_printable(c) => out.push(c),
        c => {
            let cp = u32::from(c);
            let escaped = match cp {
                0..=0xFF => format!("\\u{{{cp:02x}}}"),
                0x100..=0xFFFF => format!("\\u{cp:04x}"),
                _ => format!("\\u{{{cp:x}}}"),
            };
            out.push_str(&escaped);
        }
    }
}

/// Whether `c` can appear unescaped in the emitted literal.
pub fn is_printable(c: char) -> bool {
    let cp = u32::from(c);
    // U+xFFFE and U+xFFFF are noncharacters in every plane
    if cp & 0xFFFE == 0xFFFE {
        return false;
    }
    NON_PRINTABLE
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_err()
}
