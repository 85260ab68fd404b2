use core::fmt;

/// Failures surfaced by the decode entry points.
///
/// Every decode in this crate is fallible and returns one of these; the only
/// non-recoverable condition is the digit-buffer sizing assert inside the
/// base conversion core, which indicates a bug rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Character outside the Base58 alphabet.
    InvalidCharacter(char),
    /// Non-whitespace input left over after the Base58 run.
    TrailingGarbage,
    /// The trailing 4 checksum bytes do not match the payload digest.
    ChecksumMismatch,
    /// Decoded payload shorter than the 4-byte checksum.
    TooShortForChecksum(usize),
    /// Decoded payload shorter than the expected version prefix.
    TooShortForVersion(usize),
    /// Secret key payload is not 32 bytes, or 33 with a 0x01 marker.
    InvalidLength(usize),
    /// Version prefix does not match the network parameter.
    VersionMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter(c) => write!(f, "invalid base58 character: {:?}", c),
            Error::TrailingGarbage => write!(f, "trailing data after base58 string"),
            Error::ChecksumMismatch => write!(f, "base58check checksum mismatch"),
            Error::TooShortForChecksum(len) => {
                write!(f, "decoded payload too short for checksum: {} bytes", len)
            }
            Error::TooShortForVersion(len) => {
                write!(f, "decoded payload too short for version prefix: {} bytes", len)
            }
            Error::InvalidLength(len) => {
                write!(f, "invalid secret key payload length: {} bytes", len)
            }
            Error::VersionMismatch => write!(f, "version prefix does not match network"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
