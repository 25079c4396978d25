//! NUL-terminated Base64 text → bytes.
//!
//! The decoder walks the input four characters at a time and stops at the
//! first NUL byte, at the end of the slice, or after a padding group. It never
//! reads past whichever of those comes first.

use std::ffi::CStr;

use crate::core::alphabet::Symbol;
use crate::encoders::errors::DecodeError;

/// Upper bound on the bytes decoded from `n` input characters.
#[inline]
pub const fn decoded_capacity(n: usize) -> usize {
    n.div_ceil(4) * 3
}

/// Length of `src` up to, not including, its first NUL byte.
#[inline]
pub fn terminated_len(src: &[u8]) -> usize {
    src.iter().position(|&b| b == 0).unwrap_or(src.len())
}

/// Byte at `i`, with everything past the end of `src` reading as NUL.
#[inline]
fn byte_at(src: &[u8], i: usize) -> u8 {
    src.get(i).copied().unwrap_or(0)
}

/// Error for a non-alphabet byte where a character is required.
#[inline]
fn missing(byte: u8, position: usize) -> DecodeError {
    if byte == 0 {
        DecodeError::Truncated { position }
    } else {
        DecodeError::InvalidCharacter { byte, position }
    }
}

/// Decodes the NUL-terminated Base64 text in `src` into `dest`.
///
/// Input ends at the first NUL byte or at the end of the slice. Returns the
/// number of bytes written. On error the contents of `dest` are unspecified.
///
/// # Panics
///
/// Panics if `dest` is shorter than the decoded output. A destination of
/// `decoded_capacity(terminated_len(src))` bytes is always enough.
///
/// # Example
///
/// ```
/// use base64_rfc::decode_into;
///
/// let mut dest = [0u8; 3];
/// let n = decode_into(&mut dest, b"TWE=\0").unwrap();
/// assert_eq!(&dest[..n], b"Ma");
/// ```
pub fn decode_into(dest: &mut [u8], src: &[u8]) -> Result<usize, DecodeError> {
    let mut s = 0;
    let mut p = 0;

    loop {
        let first = byte_at(src, s);
        let a = match Symbol::classify(first) {
            Symbol::Digit(v) => v,
            Symbol::Padding => return Ok(p),
            Symbol::Invalid if first == 0 => return Ok(p),
            Symbol::Invalid => {
                return Err(DecodeError::InvalidCharacter {
                    byte: first,
                    position: s,
                });
            }
        };

        let second = byte_at(src, s + 1);
        let b = match Symbol::classify(second) {
            Symbol::Digit(v) => v,
            Symbol::Padding => return Err(DecodeError::InvalidPadding { position: s + 1 }),
            Symbol::Invalid => return Err(missing(second, s + 1)),
        };

        dest[p] = (a << 2) | (b >> 4);
        p += 1;

        let third = byte_at(src, s + 2);
        let c = Symbol::classify(third);
        if c == Symbol::Invalid {
            return Err(missing(third, s + 2));
        }

        let fourth = byte_at(src, s + 3);
        let d = Symbol::classify(fourth);
        if d == Symbol::Invalid {
            return Err(missing(fourth, s + 3));
        }

        let c = match c {
            Symbol::Digit(v) => v,
            _ => {
                return match d {
                    Symbol::Padding => Ok(p),
                    _ => Err(DecodeError::InvalidPadding { position: s + 3 }),
                };
            }
        };

        dest[p] = (b << 4) | (c >> 2);
        p += 1;

        let d = match d {
            Symbol::Digit(v) => v,
            _ => return Ok(p),
        };

        dest[p] = (c << 6) | d;
        p += 1;
        s += 4;
    }
}

/// Decodes `src` into a newly allocated vector sized to the decoded length.
///
/// Accepts anything byte-like; a NUL byte inside `src` terminates the input.
///
/// # Example
///
/// ```
/// assert_eq!(base64_rfc::decode("TWFu").unwrap(), b"Man");
/// assert!(base64_rfc::decode("TW=E").is_err());
/// ```
pub fn decode(src: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let src = src.as_ref();
    let mut buf = vec![0u8; decoded_capacity(terminated_len(src))];
    let n = decode_into(&mut buf, src)?;
    buf.truncate(n);
    Ok(buf)
}

/// Decodes a C string.
pub fn decode_cstr(src: &CStr) -> Result<Vec<u8>, DecodeError> {
    decode(src.to_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_boundaries() {
        assert_eq!(decode("TQ==").unwrap(), [0x4d]);
        assert_eq!(decode("TWE=").unwrap(), [0x4d, 0x61]);
        assert_eq!(decode("TWFu").unwrap(), [0x4d, 0x61, 0x6e]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode("").unwrap(), b"");
        assert_eq!(decode(b"\0").unwrap(), b"");

        let mut dest: [u8; 0] = [];
        assert_eq!(decode_into(&mut dest, b"").unwrap(), 0);
    }

    #[test]
    fn test_malformed_inputs() {
        assert_eq!(decode("TWE"), Err(DecodeError::Truncated { position: 3 }));
        assert_eq!(
            decode("T=WE"),
            Err(DecodeError::InvalidPadding { position: 1 })
        );
        assert_eq!(
            decode("TW=E"),
            Err(DecodeError::InvalidPadding { position: 3 })
        );
        assert_eq!(
            decode("!WE="),
            Err(DecodeError::InvalidCharacter {
                byte: b'!',
                position: 0
            })
        );
    }

    #[test]
    fn test_truncated_groups() {
        assert_eq!(decode("T"), Err(DecodeError::Truncated { position: 1 }));
        assert_eq!(decode("TW"), Err(DecodeError::Truncated { position: 2 }));
        assert_eq!(decode("TW="), Err(DecodeError::Truncated { position: 3 }));
        assert_eq!(
            decode("TWFuT"),
            Err(DecodeError::Truncated { position: 5 })
        );
    }

    #[test]
    fn test_invalid_character_positions() {
        assert_eq!(
            decode("TWFu TWFu"),
            Err(DecodeError::InvalidCharacter {
                byte: b' ',
                position: 4
            })
        );
        assert_eq!(
            decode("TW-u"),
            Err(DecodeError::InvalidCharacter {
                byte: b'-',
                position: 2
            })
        );
        assert_eq!(
            decode("TWF_"),
            Err(DecodeError::InvalidCharacter {
                byte: b'_',
                position: 3
            })
        );
    }

    #[test]
    fn test_stops_at_nul() {
        assert_eq!(decode(b"TWFu\0TWFu").unwrap(), b"Man");
        assert_eq!(
            decode(b"TW\0u"),
            Err(DecodeError::Truncated { position: 2 })
        );
    }

    #[test]
    fn test_stops_after_padding_group() {
        assert_eq!(decode("TQ==TWFu").unwrap(), b"M");
        assert_eq!(decode("TWE=!!!!").unwrap(), b"Ma");
        assert_eq!(decode("TWFu=").unwrap(), b"Man");
        assert_eq!(decode("=").unwrap(), b"");
    }

    #[test]
    fn test_decode_into_reports_written_length() {
        let mut dest = [0xaau8; 6];
        let n = decode_into(&mut dest, b"TWFuTQ==").unwrap();
        assert_eq!(n, 4);
        assert_eq!(&dest[..n], b"ManM");
        assert_eq!(&dest[n..], [0xaa, 0xaa]);
    }

    #[test]
    fn test_capacity_helpers() {
        assert_eq!(decoded_capacity(0), 0);
        assert_eq!(decoded_capacity(1), 3);
        assert_eq!(decoded_capacity(4), 3);
        assert_eq!(decoded_capacity(8), 6);
        assert_eq!(terminated_len(b"abc\0def"), 3);
        assert_eq!(terminated_len(b"abc"), 3);
    }

    #[test]
    fn test_decode_cstr() {
        let src = CStr::from_bytes_with_nul(b"TWE=\0").unwrap();
        assert_eq!(decode_cstr(src).unwrap(), b"Ma");
    }
}
