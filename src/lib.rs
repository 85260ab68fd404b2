//! Base58Check engine for UTXO-chain address and secret key text formats.
//!
//! Turns raw binary identifiers (pubkey hashes, script hashes, private key
//! material) into human-transcribable, checksum-protected text and back:
//!
//! - [`base58`]: raw Base58 plus the checksummed Base58Check layer
//! - [`VersionedPayload`]: the `version ++ data` framing under both text
//!   formats
//! - [`Address`] / [`SecretKey`]: the two concrete payload shapes, keyed by
//!   a chain's [`ChainParams`]
//! - [`DenyList`]: caller-side policy over decoded address strings
//!
//! # Examples
//!
//! ```
//! use utxo_base58::{networks::BITCOIN, Address, Destination};
//!
//! let address = Address::from_text("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", &BITCOIN)?;
//! assert!(matches!(
//!     address.destination(&BITCOIN),
//!     Some(Destination::PubkeyHash(_))
//! ));
//! # Ok::<(), utxo_base58::Error>(())
//! ```

mod address;
pub mod base58;
mod denylist;
mod error;
pub mod networks;
mod payload;
pub mod wasm;
mod wif;

pub use address::{Address, Destination};
pub use denylist::DenyList;
pub use error::{Error, Result};
pub use networks::{ChainParams, Network, PrefixRole};
pub use payload::VersionedPayload;
pub use wif::SecretKey;
