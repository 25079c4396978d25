//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base64_rfc::prelude::*;
//!
//! let mut dest = [0u8; 9];
//! let end = encode_into(&mut dest, b"hello");
//! assert_eq!(decode(&dest[..end]).unwrap(), b"hello");
//! ```

pub use crate::{
    DecodeError,
    // Caller-buffer API
    decode_into,
    decoded_capacity,
    encode_into,
    encoded_len,
    // Allocating wrappers
    decode,
    decode_cstr,
    encode,
    encode_to_cstring,
};
