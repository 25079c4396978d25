//! Bytes → NUL-terminated Base64 text.

use std::ffi::CString;

use crate::core::alphabet::{PAD, encode_digit};

/// Number of Base64 characters produced for `size` input bytes, excluding the
/// terminator.
#[inline]
pub const fn encoded_len(size: usize) -> usize {
    size.div_ceil(3) * 4
}

#[inline]
fn sextet0(a: u8) -> u8 {
    encode_digit(a >> 2)
}

#[inline]
fn sextet1(a: u8, b: u8) -> u8 {
    encode_digit(((a & 0b11) << 4) | (b >> 4))
}

#[inline]
fn sextet2(b: u8, c: u8) -> u8 {
    encode_digit(((b & 0b1111) << 2) | (c >> 6))
}

#[inline]
fn sextet3(c: u8) -> u8 {
    encode_digit(c & 0x3f)
}

/// Encodes `src` into `dest` and NUL-terminates the result.
///
/// Writes exactly `encoded_len(src.len())` characters followed by one `0`
/// byte, and returns the index of that terminator, which is also the length
/// of the text. Nothing is allocated.
///
/// # Panics
///
/// Panics if `dest` is shorter than `encoded_len(src.len()) + 1`. Sizing the
/// destination is the caller's responsibility.
///
/// # Example
///
/// ```
/// use base64_rfc::encode_into;
///
/// let mut dest = [0xffu8; 5];
/// let end = encode_into(&mut dest, b"Man");
/// assert_eq!(end, 4);
/// assert_eq!(&dest, b"TWFu\0");
/// ```
pub fn encode_into(dest: &mut [u8], src: &[u8]) -> usize {
    let mut p = 0;

    let blocks = src.chunks_exact(3);
    let tail = blocks.remainder();

    for block in blocks {
        let (a, b, c) = (block[0], block[1], block[2]);
        dest[p] = sextet0(a);
        dest[p + 1] = sextet1(a, b);
        dest[p + 2] = sextet2(b, c);
        dest[p + 3] = sextet3(c);
        p += 4;
    }

    match *tail {
        [a] => {
            dest[p] = sextet0(a);
            dest[p + 1] = sextet1(a, 0);
            dest[p + 2] = PAD;
            dest[p + 3] = PAD;
            p += 4;
        }
        [a, b] => {
            dest[p] = sextet0(a);
            dest[p + 1] = sextet1(a, b);
            dest[p + 2] = sextet2(b, 0);
            dest[p + 3] = PAD;
            p += 4;
        }
        _ => {}
    }

    dest[p] = 0;
    p
}

/// Encodes `src` into a newly allocated `String` of exactly
/// `encoded_len(src.len())` characters.
///
/// # Example
///
/// ```
/// assert_eq!(base64_rfc::encode(b"Ma"), "TWE=");
/// ```
pub fn encode(src: &[u8]) -> String {
    let mut buf = vec![0u8; encoded_len(src.len()) + 1];
    let end = encode_into(&mut buf, src);
    buf.truncate(end);
    buf.into_iter().map(char::from).collect()
}

/// Encodes `src` into a NUL-terminated `CString`.
pub fn encode_to_cstring(src: &[u8]) -> CString {
    let mut buf = vec![0u8; encoded_len(src.len()) + 1];
    let end = encode_into(&mut buf, src);
    buf.truncate(end);
    CString::new(buf).expect("base64 text never contains NUL")
}
