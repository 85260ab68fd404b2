//! Base58Check address encoding and decoding (P2PKH, P2SH).

use core::fmt;

use crate::error::Result;
use crate::networks::ChainParams;
use crate::payload::VersionedPayload;

/// Where a decoded address directs payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Pay-to-pubkey-hash.
    PubkeyHash([u8; 20]),
    /// Pay-to-script-hash.
    ScriptHash([u8; 20]),
}

/// A Base58Check address: a version prefix over a 20-byte hash.
///
/// Construction never validates; [`Address::is_valid`] and
/// [`Address::destination`] interpret the payload against a chain's
/// parameters. Deny-listing of specific known-bad strings is caller policy
/// (see [`crate::DenyList`]) and is consulted after validity, not here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address(VersionedPayload);

impl Address {
    /// Address for a pay-to-pubkey-hash destination.
    pub fn from_pubkey_hash(hash: &[u8; 20], params: &ChainParams) -> Address {
        Address(VersionedPayload::new(
            params.pubkey_address.to_vec(),
            hash.to_vec(),
        ))
    }

    /// Address for a pay-to-script-hash destination.
    pub fn from_script_hash(hash: &[u8; 20], params: &ChainParams) -> Address {
        Address(VersionedPayload::new(
            params.script_address.to_vec(),
            hash.to_vec(),
        ))
    }

    /// Parse Base58Check text using the chain's address version width.
    ///
    /// A checksum-valid payload parses even when its version or hash length
    /// is not recognized; use [`Address::is_valid`] to interpret it.
    pub fn from_text(text: &str, params: &ChainParams) -> Result<Address> {
        let payload = VersionedPayload::from_text(text, params.address_version_len())?;
        Ok(Address(payload))
    }

    /// Base58Check text of this address.
    pub fn to_text(&self) -> String {
        self.0.to_text()
    }

    pub fn version(&self) -> &[u8] {
        self.0.version()
    }

    /// True iff the hash is exactly 20 bytes and the version matches the
    /// chain's pubkey-address or script-address prefix.
    pub fn is_valid(&self, params: &ChainParams) -> bool {
        let correct_size = self.0.data().len() == 20;
        let known_version = self.0.version() == params.pubkey_address
            || self.0.version() == params.script_address;
        correct_size && known_version
    }

    /// True iff this is a valid pay-to-script-hash address for the chain.
    pub fn is_script_hash(&self, params: &ChainParams) -> bool {
        self.is_valid(params) && self.0.version() == params.script_address
    }

    /// The destination this address pays to, or `None` if it is not valid
    /// for the chain.
    pub fn destination(&self, params: &ChainParams) -> Option<Destination> {
        if !self.is_valid(params) {
            return None;
        }
        let mut hash = [0u8; 20];
        hash.copy_from_slice(self.0.data());
        if self.0.version() == params.pubkey_address {
            Some(Destination::PubkeyHash(hash))
        } else {
            Some(Destination::ScriptHash(hash))
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
