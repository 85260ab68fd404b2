//! Versioned payload framing over Base58Check.

use zeroize::Zeroize;

use crate::base58::{decode_check, encode_check};
use crate::error::{Error, Result};

/// A Base58Check payload split into a version prefix and its data.
///
/// The version width is fixed by each consumer (one byte for Bitcoin-family
/// addresses and secret keys, two for Zcash transparent addresses); the
/// container itself is agnostic. Ordering compares the version first, then
/// the data, both byte-lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionedPayload {
    // Field order drives the derived ordering: version before data.
    version: Vec<u8>,
    data: Vec<u8>,
}

impl VersionedPayload {
    /// Assemble a payload from explicit parts. No validation is applied.
    pub fn new(version: Vec<u8>, data: Vec<u8>) -> Self {
        VersionedPayload { version, data }
    }

    pub fn version(&self) -> &[u8] {
        &self.version
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Surrender the parts, for consumers that must scrub them.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.version, self.data)
    }

    /// Base58Check text of `version ++ data`.
    pub fn to_text(&self) -> String {
        let mut buf = Vec::with_capacity(self.version.len() + self.data.len());
        buf.extend_from_slice(&self.version);
        buf.extend_from_slice(&self.data);
        let text = encode_check(&buf);
        buf.zeroize();
        text
    }

    /// Decode Base58Check text and split off a `version_len`-byte prefix.
    ///
    /// Fails with the underlying Base58Check error, or
    /// [`Error::TooShortForVersion`] if fewer than `version_len` bytes
    /// decode. The intermediate buffer is scrubbed: on the secret key path
    /// it transiently holds unencrypted key material.
    pub fn from_text(text: &str, version_len: usize) -> Result<Self> {
        let mut decoded = decode_check(text)?;
        if decoded.len() < version_len {
            let len = decoded.len();
            decoded.zeroize();
            return Err(Error::TooShortForVersion(len));
        }
        let version = decoded[..version_len].to_vec();
        let data = decoded[version_len..].to_vec();
        decoded.zeroize();
        Ok(VersionedPayload { version, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_roundtrip() {
        let payload = VersionedPayload::new(vec![0x6f], vec![0xde, 0xad, 0xbe, 0xef]);
        let text = payload.to_text();
        assert_eq!(VersionedPayload::from_text(&text, 1).unwrap(), payload);
    }

    #[test]
    fn test_two_byte_version_roundtrip() {
        let payload = VersionedPayload::new(vec![0x1c, 0xb8], vec![0x42; 20]);
        let text = payload.to_text();
        let decoded = VersionedPayload::from_text(&text, 2).unwrap();
        assert_eq!(decoded.version(), &[0x1c, 0xb8]);
        assert_eq!(decoded.data(), &[0x42; 20]);
    }

    #[test]
    fn test_split_is_positional() {
        // The same text splits differently under a different version width.
        let payload = VersionedPayload::new(vec![0x01], vec![0x02, 0x03]);
        let text = payload.to_text();
        let wide = VersionedPayload::from_text(&text, 2).unwrap();
        assert_eq!(wide.version(), &[0x01, 0x02]);
        assert_eq!(wide.data(), &[0x03]);
    }

    #[test]
    fn test_too_short_for_version() {
        let text = encode_check(&[0xaa, 0xbb]);
        assert_eq!(
            VersionedPayload::from_text(&text, 3),
            Err(Error::TooShortForVersion(2))
        );
        // An exact fit leaves empty data.
        let exact = VersionedPayload::from_text(&text, 2).unwrap();
        assert_eq!(exact.version(), &[0xaa, 0xbb]);
        assert!(exact.data().is_empty());
    }

    #[test]
    fn test_checksum_failure_propagates() {
        let mut text = VersionedPayload::new(vec![0x00], vec![0x11; 20]).to_text();
        let last = text.pop().unwrap();
        text.push(if last == '1' { '2' } else { '1' });
        assert!(matches!(
            VersionedPayload::from_text(&text, 1),
            Err(Error::ChecksumMismatch) | Err(Error::TooShortForChecksum(_))
        ));
    }

    #[test]
    fn test_ordering_version_then_data() {
        let a = VersionedPayload::new(vec![0x00], vec![0xff]);
        let b = VersionedPayload::new(vec![0x01], vec![0x00]);
        let c = VersionedPayload::new(vec![0x01], vec![0x01]);
        assert!(a < b);
        assert!(b < c);

        let mut sorted = vec![c.clone(), a.clone(), b.clone()];
        sorted.sort();
        assert_eq!(sorted, vec![a, b, c]);
    }
}
