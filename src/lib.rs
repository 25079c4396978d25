//! Standard Base64 (RFC 4648, `+/` alphabet, `=` padding) over caller-owned
//! buffers.
//!
//! The low-level pair works without allocating: [`encode_into`] writes
//! NUL-terminated text into a destination the caller sized with
//! [`encoded_len`], and [`decode_into`] reads NUL-terminated text and writes
//! bytes into a destination sized with [`decoded_capacity`]. [`encode`],
//! [`encode_to_cstring`], [`decode`] and [`decode_cstr`] wrap them and return
//! owned buffers sized exactly to the result.
//!
//! The library is pure computation: it performs no I/O, reads no environment
//! variables or files, keeps no state between calls and never logs.
//!
//! # Example
//!
//! ```
//! use base64_rfc::{decode, encode};
//!
//! let encoded = encode(b"Man");
//! assert_eq!(encoded, "TWFu");
//! assert_eq!(decode(&encoded).unwrap(), b"Man");
//! ```

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::alphabet::{ALPHABET, DECODE_TABLE, NOT_BASE64, PAD, PADDING, Symbol};
pub use crate::encoders::decode::{
    decode, decode_cstr, decode_into, decoded_capacity, terminated_len,
};
pub use crate::encoders::encode::{encode, encode_into, encode_to_cstring, encoded_len};
pub use crate::encoders::errors::DecodeError;
