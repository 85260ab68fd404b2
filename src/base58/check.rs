//! Base58Check: Base58 with a 4-byte checksum guarding the payload.

use bitcoin_hashes::{sha256d, Hash};

use super::{decode, encode};
use crate::error::{Error, Result};

/// Checksum digest collaborator.
///
/// The codec only consumes the first four bytes of the digest; the function
/// is assumed deterministic and preimage-resistant.
pub trait ChecksumDigest {
    /// 32-byte digest of `data`.
    fn digest(data: &[u8]) -> [u8; 32];
}

/// Double SHA-256, the payload digest used by the Bitcoin family of chains.
#[derive(Debug, Clone, Copy)]
pub struct DoubleSha256;

impl ChecksumDigest for DoubleSha256 {
    fn digest(data: &[u8]) -> [u8; 32] {
        sha256d::Hash::hash(data).to_byte_array()
    }
}

/// Encode `data` with a trailing 4-byte checksum from `D`.
pub fn encode_check_with<D: ChecksumDigest>(data: &[u8]) -> String {
    let digest = D::digest(data);
    let mut buf = Vec::with_capacity(data.len() + 4);
    buf.extend_from_slice(data);
    buf.extend_from_slice(&digest[..4]);
    encode(&buf)
}

/// Encode `data` with a trailing double SHA-256 checksum.
pub fn encode_check(data: &[u8]) -> String {
    encode_check_with::<DoubleSha256>(data)
}

/// Decode Base58Check text, verifying the trailing checksum against `D`.
///
/// Returns the payload with the checksum stripped. Fails with the underlying
/// Base58 error, [`Error::TooShortForChecksum`] if fewer than four bytes
/// decode, or [`Error::ChecksumMismatch`].
pub fn decode_check_with<D: ChecksumDigest>(text: &str) -> Result<Vec<u8>> {
    let mut decoded = decode(text)?;
    if decoded.len() < 4 {
        return Err(Error::TooShortForChecksum(decoded.len()));
    }
    let split = decoded.len() - 4;
    let digest = D::digest(&decoded[..split]);
    if digest[..4] != decoded[split..] {
        return Err(Error::ChecksumMismatch);
    }
    decoded.truncate(split);
    Ok(decoded)
}

/// Decode Base58Check text with a double SHA-256 checksum.
pub fn decode_check(text: &str) -> Result<Vec<u8>> {
    decode_check_with::<DoubleSha256>(text)
}
