use crate::address::{Address, Destination};
use crate::networks::Network;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

fn parse_network(network: &str) -> std::result::Result<Network, JsValue> {
    network.parse::<Network>().map_err(|e| JsValue::from_str(&e))
}

fn parse_hash(hash: &[u8]) -> std::result::Result<[u8; 20], JsValue> {
    hash.try_into()
        .map_err(|_| JsValue::from_str("hash must be exactly 20 bytes"))
}

#[wasm_bindgen]
pub struct AddressNamespace;

#[wasm_bindgen]
impl AddressNamespace {
    /// Encode a 20-byte pubkey hash as an address for the named network.
    #[wasm_bindgen]
    pub fn from_pubkey_hash(
        hash: &[u8],
        network: &str,
    ) -> std::result::Result<String, JsValue> {
        let params = parse_network(network)?.params();
        Ok(Address::from_pubkey_hash(&parse_hash(hash)?, params).to_text())
    }

    /// Encode a 20-byte script hash as an address for the named network.
    #[wasm_bindgen]
    pub fn from_script_hash(
        hash: &[u8],
        network: &str,
    ) -> std::result::Result<String, JsValue> {
        let params = parse_network(network)?.params();
        Ok(Address::from_script_hash(&parse_hash(hash)?, params).to_text())
    }

    /// Decode an address to its 20-byte hash; errors if the text is not a
    /// valid address for the named network.
    #[wasm_bindgen]
    pub fn to_hash(address: &str, network: &str) -> std::result::Result<Vec<u8>, JsValue> {
        let params = parse_network(network)?.params();
        let parsed = Address::from_text(address, params)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        match parsed.destination(params) {
            Some(Destination::PubkeyHash(hash)) | Some(Destination::ScriptHash(hash)) => {
                Ok(hash.to_vec())
            }
            None => Err(JsValue::from_str("address is not valid for network")),
        }
    }

    /// True if the text is a valid pay-to-script-hash address for the
    /// named network.
    #[wasm_bindgen]
    pub fn is_script_hash(address: &str, network: &str) -> std::result::Result<bool, JsValue> {
        let params = parse_network(network)?.params();
        let parsed = Address::from_text(address, params)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(parsed.is_script_hash(params))
    }
}
