use thiserror::Error;

/// Failure to decode an untrusted datagram.
///
/// Every variant carries enough context to log the rejection; none of them
/// are fatal to the listener.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ended before a fixed-size field could be read.
    #[error("packet too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },

    /// A name was missing its terminator, overran the buffer or exceeded 255 octets.
    #[error("malformed name at offset {offset}: {reason}")]
    MalformedName { offset: usize, reason: &'static str },

    /// Compression pointers and extended label types are not decoded.
    #[error("unsupported label encoding {marker:#04x} at offset {offset}")]
    UnsupportedEncoding { offset: usize, marker: u8 },

    /// The header promised more questions than the buffer holds.
    #[error("truncated question section: decoded {decoded} of {expected} questions")]
    Truncated { decoded: u16, expected: u16 },
}
