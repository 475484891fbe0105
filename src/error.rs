use std::fmt;

/// The error type used throughout this crate's decoding pipeline.
///
/// This never crosses the public `Decompressor` / `XpkSubDecompressor` boundary directly;
/// those traits collapse it to `bool` or `Result<(), Error>` per their contracts, but it is
/// useful internally to distinguish *why* a read or decode failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A read went past the end of a buffer, including a truncated header.
    OutOfBounds,

    /// A structural violation: bad magic, bad flags, unknown chunk type, missing
    /// terminator, bad Huffman code, or an out-of-range sentinel value.
    InvalidFormat,

    /// A header XOR checksum, chunk XOR checksum, or preview comparison failed.
    ChecksumMismatch,

    /// The stream requires a feature this crate does not implement (password
    /// protection, or a sub-codec whose bit-level grammar is out of scope).
    UnsupportedFeature,

    /// A buffer resize could not be satisfied.
    OutOfMemory,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            OutOfBounds => write!(f, "read past the end of the buffer"),
            InvalidFormat => write!(f, "structural violation in compressed data"),
            ChecksumMismatch => write!(f, "checksum or preview verification failed"),
            UnsupportedFeature => write!(f, "unsupported feature (password protection or unimplemented codec)"),
            OutOfMemory => write!(f, "buffer resize failed"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
