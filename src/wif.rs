//! Wallet import format: Base58Check text for raw private keys.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::networks::ChainParams;
use crate::payload::VersionedPayload;

/// Marker byte appended to the key when the corresponding public key is
/// compressed. No other trailing value is valid.
const COMPRESSED_MARKER: u8 = 0x01;

/// A raw 32-byte private key and its compression flag.
///
/// Key bytes are scrubbed on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    key: [u8; 32],
    compressed: bool,
}

impl SecretKey {
    pub fn new(key: [u8; 32], compressed: bool) -> Self {
        SecretKey { key, compressed }
    }

    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Encode as WIF text under the chain's secret-key prefix.
    pub fn to_text(&self, params: &ChainParams) -> String {
        let mut data = Vec::with_capacity(33);
        data.extend_from_slice(&self.key);
        if self.compressed {
            data.push(COMPRESSED_MARKER);
        }
        let payload = VersionedPayload::new(params.secret_key.to_vec(), data);
        let text = payload.to_text();
        let (_, mut data) = payload.into_parts();
        data.zeroize();
        text
    }

    /// Decode WIF text under the chain's secret-key prefix.
    ///
    /// The payload must be 32 bytes, or 33 with a trailing `0x01` marker
    /// ([`Error::InvalidLength`] otherwise), and carry the chain's
    /// secret-key version ([`Error::VersionMismatch`]). Intermediate buffers
    /// are scrubbed on every path.
    pub fn from_text(text: &str, params: &ChainParams) -> Result<SecretKey> {
        let payload = VersionedPayload::from_text(text, params.secret_key.len())?;
        let (version, mut data) = payload.into_parts();

        let expected_shape =
            data.len() == 32 || (data.len() == 33 && data[32] == COMPRESSED_MARKER);
        if !expected_shape {
            let len = data.len();
            data.zeroize();
            return Err(Error::InvalidLength(len));
        }
        if version != params.secret_key {
            data.zeroize();
            return Err(Error::VersionMismatch);
        }

        let compressed = data.len() == 33;
        let mut key = [0u8; 32];
        key.copy_from_slice(&data[..32]);
        data.zeroize();
        Ok(SecretKey { key, compressed })
    }
}

// Key bytes stay out of debug output.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("key", &"[redacted]")
            .field("compressed", &self.compressed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base58::encode_check;
    use crate::networks::{BITCOIN, BITCOIN_TESTNET, DOGECOIN};

    fn wiki_key() -> [u8; 32] {
        hex::decode("0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d")
            .unwrap()
            .try_into()
            .unwrap()
    }

    #[test]
    fn test_wiki_vectors() {
        let uncompressed = SecretKey::new(wiki_key(), false);
        assert_eq!(
            uncompressed.to_text(&BITCOIN),
            "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ"
        );

        let compressed = SecretKey::new(wiki_key(), true);
        assert_eq!(
            compressed.to_text(&BITCOIN),
            "KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617"
        );
    }

    #[test]
    fn test_roundtrip_both_flags() {
        for compressed in [false, true] {
            let key = SecretKey::new(wiki_key(), compressed);
            let text = key.to_text(&BITCOIN);
            let decoded = SecretKey::from_text(&text, &BITCOIN).unwrap();
            assert_eq!(decoded, key);
            assert_eq!(decoded.is_compressed(), compressed);
            assert_eq!(decoded.key(), &wiki_key());
        }
    }

    #[test]
    fn test_uncompressed_payload_is_32_bytes() {
        let text = SecretKey::new(wiki_key(), false).to_text(&BITCOIN);
        let payload = VersionedPayload::from_text(&text, 1).unwrap();
        assert_eq!(payload.data().len(), 32);

        let text = SecretKey::new(wiki_key(), true).to_text(&BITCOIN);
        let payload = VersionedPayload::from_text(&text, 1).unwrap();
        assert_eq!(payload.data().len(), 33);
        assert_eq!(payload.data()[32], 0x01);
    }

    #[test]
    fn test_testnet_prefix_characters() {
        // Testnet WIF begins with '9' uncompressed, 'c' compressed.
        let key = SecretKey::new(wiki_key(), false);
        assert!(key.to_text(&BITCOIN_TESTNET).starts_with('9'));
        let key = SecretKey::new(wiki_key(), true);
        assert!(key.to_text(&BITCOIN_TESTNET).starts_with('c'));
    }

    #[test]
    fn test_invalid_length() {
        // 31-byte key body.
        let text = encode_check(&[&[0x80u8] as &[u8], &[0x33; 31]].concat());
        assert_eq!(
            SecretKey::from_text(&text, &BITCOIN),
            Err(Error::InvalidLength(31))
        );

        // 33 bytes with a trailing marker other than 0x01.
        let mut body = vec![0x80u8];
        body.extend_from_slice(&[0x33; 32]);
        body.push(0x02);
        let text = encode_check(&body);
        assert_eq!(
            SecretKey::from_text(&text, &BITCOIN),
            Err(Error::InvalidLength(33))
        );

        // 34 bytes is never valid, marker or not.
        let mut body = vec![0x80u8];
        body.extend_from_slice(&[0x33; 33]);
        body.push(0x01);
        let text = encode_check(&body);
        assert_eq!(
            SecretKey::from_text(&text, &BITCOIN),
            Err(Error::InvalidLength(34))
        );
    }

    #[test]
    fn test_version_mismatch() {
        let text = SecretKey::new(wiki_key(), true).to_text(&BITCOIN);
        assert_eq!(
            SecretKey::from_text(&text, &BITCOIN_TESTNET),
            Err(Error::VersionMismatch)
        );
        assert_eq!(
            SecretKey::from_text(&text, &DOGECOIN),
            Err(Error::VersionMismatch)
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = SecretKey::new(wiki_key(), true);
        let printed = format!("{:?}", key);
        assert!(printed.contains("redacted"));
        assert!(!printed.contains("0c28"));
    }
}
