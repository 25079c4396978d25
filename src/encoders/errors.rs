use std::fmt;

/// Errors that can occur during decoding.
///
/// Every variant means the input is malformed; they differ only in what was
/// found and where. `position` is the byte offset into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte outside the alphabet appeared where a data character is required
    InvalidCharacter { byte: u8, position: usize },
    /// Padding appeared too early in a group, or data followed padding
    InvalidPadding { position: usize },
    /// The input ended in the middle of a 4-character group
    Truncated { position: usize },
}

impl DecodeError {
    /// Byte offset of the offending input character.
    pub fn position(&self) -> usize {
        match *self {
            DecodeError::InvalidCharacter { position, .. }
            | DecodeError::InvalidPadding { position }
            | DecodeError::Truncated { position } => position,
        }
    }

    /// A one-line suggestion for fixing the input.
    pub fn hint(&self) -> &'static str {
        match self {
            DecodeError::InvalidCharacter { .. } => {
                "valid characters: A-Z a-z 0-9 + / and trailing '='"
            }
            DecodeError::InvalidPadding { .. } => {
                "'=' may only close a group as \"xx==\" or \"xxx=\""
            }
            DecodeError::Truncated { .. } => {
                "input length must be a multiple of 4, check for missing '=' characters"
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidCharacter { byte, position } => write!(
                f,
                "invalid character '{}' at position {}",
                std::ascii::escape_default(*byte),
                position
            ),
            DecodeError::InvalidPadding { position } => {
                write!(f, "invalid padding at position {}", position)
            }
            DecodeError::Truncated { position } => {
                write!(f, "incomplete group: input ends at position {}", position)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
