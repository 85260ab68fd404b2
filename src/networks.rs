//! Definitions of various bitcoin-like networks and their Base58 prefixes.

use std::fmt;
use std::str::FromStr;

/// Symbolic roles a version prefix can play.
///
/// Mirrors the `base58Prefixes` table indices of the upstream chainparams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRole {
    /// Pay-to-pubkey-hash address prefix.
    PubkeyAddress,
    /// Pay-to-script-hash address prefix.
    ScriptAddress,
    /// Secret key (WIF) prefix.
    SecretKey,
}

/// Base58 version prefixes of a chain.
///
/// Prefixes are opaque-length byte strings: most chains use a single byte,
/// Zcash transparent addresses use two. The two address prefixes of a chain
/// share one width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainParams {
    pub pubkey_address: &'static [u8],
    pub script_address: &'static [u8],
    pub secret_key: &'static [u8],
}

impl ChainParams {
    pub const fn new(
        pubkey_address: &'static [u8],
        script_address: &'static [u8],
        secret_key: &'static [u8],
    ) -> Self {
        ChainParams {
            pubkey_address,
            script_address,
            secret_key,
        }
    }

    /// Look up the prefix for a symbolic role.
    pub fn base58_prefix(&self, role: PrefixRole) -> &'static [u8] {
        match role {
            PrefixRole::PubkeyAddress => self.pubkey_address,
            PrefixRole::ScriptAddress => self.script_address,
            PrefixRole::SecretKey => self.secret_key,
        }
    }

    /// Width of the address version prefix for this chain.
    pub fn address_version_len(&self) -> usize {
        self.pubkey_address.len()
    }
}

// Version prefixes from src/chainparams.cpp of each coin implementation.

// https://github.com/bitcoin/bitcoin/blob/master/src/chainparams.cpp
pub const BITCOIN: ChainParams = ChainParams::new(&[0x00], &[0x05], &[0x80]);
pub const BITCOIN_TESTNET: ChainParams = ChainParams::new(&[0x6f], &[0xc4], &[0xef]);

// https://github.com/litecoin-project/litecoin/blob/master/src/chainparams.cpp
pub const LITECOIN: ChainParams = ChainParams::new(&[0x30], &[0x32], &[0xb0]);
pub const LITECOIN_TESTNET: ChainParams = ChainParams::new(&[0x6f], &[0x3a], &[0xef]);

// https://github.com/dogecoin/dogecoin/blob/master/src/chainparams.cpp
pub const DOGECOIN: ChainParams = ChainParams::new(&[0x1e], &[0x16], &[0x9e]);
pub const DOGECOIN_TESTNET: ChainParams = ChainParams::new(&[0x71], &[0xc4], &[0xf1]);

// https://github.com/dashpay/dash/blob/master/src/chainparams.cpp
pub const DASH: ChainParams = ChainParams::new(&[0x4c], &[0x10], &[0xcc]);
pub const DASH_TESTNET: ChainParams = ChainParams::new(&[0x8c], &[0x13], &[0xef]);

// Zcash transparent addresses use two-byte versions.
// https://github.com/zcash/zcash/blob/master/src/chainparams.cpp
pub const ZCASH: ChainParams = ChainParams::new(&[0x1c, 0xb8], &[0x1c, 0xbd], &[0x80]);
pub const ZCASH_TESTNET: ChainParams = ChainParams::new(&[0x1d, 0x25], &[0x1c, 0xba], &[0xef]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Bitcoin,
    BitcoinTestnet3,
    Litecoin,
    LitecoinTestnet,
    Dogecoin,
    DogecoinTestnet,
    Dash,
    DashTestnet,
    Zcash,
    ZcashTestnet,
}

impl Network {
    /// Array containing all network variants
    pub const ALL: &'static [Network] = &[
        Network::Bitcoin,
        Network::BitcoinTestnet3,
        Network::Litecoin,
        Network::LitecoinTestnet,
        Network::Dogecoin,
        Network::DogecoinTestnet,
        Network::Dash,
        Network::DashTestnet,
        Network::Zcash,
        Network::ZcashTestnet,
    ];

    /// Returns the canonical string name of this network
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Bitcoin => "Bitcoin",
            Network::BitcoinTestnet3 => "BitcoinTestnet3",
            Network::Litecoin => "Litecoin",
            Network::LitecoinTestnet => "LitecoinTestnet",
            Network::Dogecoin => "Dogecoin",
            Network::DogecoinTestnet => "DogecoinTestnet",
            Network::Dash => "Dash",
            Network::DashTestnet => "DashTestnet",
            Network::Zcash => "Zcash",
            Network::ZcashTestnet => "ZcashTestnet",
        }
    }

    pub fn from_name_exact(name: &str) -> Option<Network> {
        match name {
            "Bitcoin" => Some(Network::Bitcoin),
            "BitcoinTestnet3" => Some(Network::BitcoinTestnet3),
            "Litecoin" => Some(Network::Litecoin),
            "LitecoinTestnet" => Some(Network::LitecoinTestnet),
            "Dogecoin" => Some(Network::Dogecoin),
            "DogecoinTestnet" => Some(Network::DogecoinTestnet),
            "Dash" => Some(Network::Dash),
            "DashTestnet" => Some(Network::DashTestnet),
            "Zcash" => Some(Network::Zcash),
            "ZcashTestnet" => Some(Network::ZcashTestnet),
            _ => None,
        }
    }

    /// The chain's Base58 version prefixes.
    pub fn params(&self) -> &'static ChainParams {
        match self {
            Network::Bitcoin => &BITCOIN,
            Network::BitcoinTestnet3 => &BITCOIN_TESTNET,
            Network::Litecoin => &LITECOIN,
            Network::LitecoinTestnet => &LITECOIN_TESTNET,
            Network::Dogecoin => &DOGECOIN,
            Network::DogecoinTestnet => &DOGECOIN_TESTNET,
            Network::Dash => &DASH,
            Network::DashTestnet => &DASH_TESTNET,
            Network::Zcash => &ZCASH,
            Network::ZcashTestnet => &ZCASH_TESTNET,
        }
    }

    pub fn mainnet(self) -> Network {
        match self {
            Network::Bitcoin | Network::BitcoinTestnet3 => Network::Bitcoin,
            Network::Litecoin | Network::LitecoinTestnet => Network::Litecoin,
            Network::Dogecoin | Network::DogecoinTestnet => Network::Dogecoin,
            Network::Dash | Network::DashTestnet => Network::Dash,
            Network::Zcash | Network::ZcashTestnet => Network::Zcash,
        }
    }

    pub fn is_mainnet(self) -> bool {
        self == self.mainnet()
    }

    pub fn is_testnet(self) -> bool {
        !self.is_mainnet()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::from_name_exact(s).ok_or_else(|| format!("Unknown network: {}", s))
    }
}
