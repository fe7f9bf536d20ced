//! Roman numeral conversion.
//!
//! Reading is lenient: any symbol followed by a larger one is subtracted,
//! everything else is added, so non-canonical forms such as `MXMIX` still
//! read as 1999. Writing always produces the canonical form.

use thiserror::Error;

/// Errors from [`roman_to_int`] and [`int_to_roman`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomanError {
    #[error("empty roman numeral")]
    Empty,
    #[error("invalid roman symbol '{ch}' at position {pos}")]
    InvalidSymbol { ch: char, pos: usize },
    #[error("roman numeral value does not fit in 32 bits")]
    TooLarge,
    #[error("{0} cannot be written as a roman numeral (expected 1..=3999)")]
    OutOfRange(u32),
}

/// Largest value with a canonical roman form.
pub const MAX_ROMAN: u32 = 3999;

const CANONICAL: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Value of a single roman symbol.
pub fn symbol_value(ch: char) -> Option<u32> {
    Some(match ch {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => return None,
    })
}

/// Convert a roman numeral to its integer value.
pub fn roman_to_int(s: &str) -> Result<u32, RomanError> {
    let values = s
        .chars()
        .enumerate()
        .map(|(pos, ch)| symbol_value(ch).ok_or(RomanError::InvalidSymbol { ch, pos }))
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(RomanError::Empty);
    }

    let mut total: i64 = 0;
    for (i, &v) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if v < next => total -= i64::from(v),
            _ => total += i64::from(v),
        }
    }
    u32::try_from(total).map_err(|_| RomanError::TooLarge)
}

/// Write `n` in canonical roman form.
pub fn int_to_roman(n: u32) -> Result<String, RomanError> {
    if !(1..=MAX_ROMAN).contains(&n) {
        return Err(RomanError::OutOfRange(n));
    }
    let mut rest = n;
    let mut out = String::new();
    for (value, glyph) in CANONICAL {
        while rest >= value {
            out.push_str(glyph);
            rest -= value;
        }
    }
    Ok(out)
}
