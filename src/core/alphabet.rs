//! The RFC 4648 standard alphabet and its reverse lookup table.
//!
//! Both tables are compile-time constants. Encoding indexes [`ALPHABET`] with a
//! 6-bit value; decoding indexes [`DECODE_TABLE`] with a raw input byte and gets
//! back either the 6-bit value or one of the two sentinels.

/// The 64 symbols of standard Base64, in index order.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: u8 = b'=';

/// Table value for a byte outside the alphabet (including NUL).
pub const NOT_BASE64: u8 = 64;

/// Table value for the padding character.
pub const PADDING: u8 = 65;

/// Byte → 6-bit value, [`NOT_BASE64`] or [`PADDING`], for all 256 byte values.
pub static DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [NOT_BASE64; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table[PAD as usize] = PADDING;
    table
}

/// Classification of a single input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// An alphabet character carrying this 6-bit value.
    Digit(u8),
    /// The `=` padding character.
    Padding,
    /// Anything else, the NUL terminator included.
    Invalid,
}

impl Symbol {
    /// Looks `byte` up in [`DECODE_TABLE`].
    #[inline]
    pub fn classify(byte: u8) -> Self {
        match DECODE_TABLE[byte as usize] {
            NOT_BASE64 => Symbol::Invalid,
            PADDING => Symbol::Padding,
            value => Symbol::Digit(value),
        }
    }
}

/// Maps the low 6 bits of `index` to its alphabet character.
#[inline]
pub fn encode_digit(index: u8) -> u8 {
    ALPHABET[(index & 0x3f) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_exhaustive() {
        let digits = DECODE_TABLE.iter().filter(|&&v| v < 64).count();
        let padding = DECODE_TABLE.iter().filter(|&&v| v == PADDING).count();
        let invalid = DECODE_TABLE.iter().filter(|&&v| v == NOT_BASE64).count();

        assert_eq!(digits, 64);
        assert_eq!(padding, 1);
        assert_eq!(invalid, 256 - 64 - 1);
    }

    #[test]
    fn test_table_inverts_alphabet() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(DECODE_TABLE[c as usize], i as u8);
            assert_eq!(encode_digit(i as u8), c);
        }
    }

    #[test]
    fn test_classify_special_bytes() {
        assert_eq!(Symbol::classify(0), Symbol::Invalid);
        assert_eq!(Symbol::classify(b'='), Symbol::Padding);
        assert_eq!(Symbol::classify(b'A'), Symbol::Digit(0));
        assert_eq!(Symbol::classify(b'/'), Symbol::Digit(63));
        assert_eq!(Symbol::classify(b'-'), Symbol::Invalid);
        assert_eq!(Symbol::classify(b'_'), Symbol::Invalid);
        assert_eq!(Symbol::classify(b' '), Symbol::Invalid);
        assert_eq!(Symbol::classify(0xff), Symbol::Invalid);
    }

    #[test]
    fn test_encode_digit_masks_high_bits() {
        assert_eq!(encode_digit(0b0100_0001), b'B');
        assert_eq!(encode_digit(0xff), b'/');
    }
}
