//! JS-facing report types for classification results and chain constants.

use bitcore_chain::{DecodedAddress, Network};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Classification report for a single address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressInfo {
    /// Address kind name ("P2PKH", "P2WPKH", ...).
    pub kind: String,
    /// Network the address was validated against.
    pub network: String,
    /// Payload as hex: pubkey hash, script hash or witness program.
    pub payload: String,
    /// Witness version for segwit forms.
    pub witness_version: Option<u8>,
    /// Human-readable part for segwit forms.
    pub hrp: Option<String>,
    /// scriptPubKey template as hex.
    pub script_pubkey: String,
    /// The address as accepted.
    pub address: String,
}

impl AddressInfo {
    /// Build a report from a classified address.
    pub fn from_decoded(decoded: &DecodedAddress) -> Self {
        AddressInfo {
            kind: decoded.address_type.name().to_string(),
            network: decoded.network.name().to_string(),
            payload: hex::encode(&decoded.payload),
            witness_version: decoded.witness_version,
            hrp: decoded.hrp.clone(),
            script_pubkey: hex::encode(decoded.script_pubkey()),
            address: decoded.display.clone(),
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Chain constants for a network, for display in the wallet UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub name: String,
    pub display_name: String,
    pub p2pkh_version: u8,
    pub p2sh_version: u8,
    pub bech32_hrp: String,
    pub wif_version: u8,
    pub dust_threshold: u64,
    pub default_fee_per_kb: u64,
    pub max_op_return_size: usize,
}

impl NetworkInfo {
    /// Build the report for a network's constant table.
    pub fn for_network(network: Network) -> Self {
        let params = network.params();
        NetworkInfo {
            name: network.name().to_string(),
            display_name: network.display_name().to_string(),
            p2pkh_version: params.p2pkh_version,
            p2sh_version: params.p2sh_version,
            bech32_hrp: params.bech32_hrp.to_string(),
            wif_version: params.wif_version,
            dust_threshold: params.dust_threshold,
            default_fee_per_kb: params.default_fee_per_kb,
            max_op_return_size: params.max_op_return_size,
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcore_chain::classify;

    #[test]
    fn test_address_info_fields() {
        let decoded = classify(
            "btx1qatswv5uv7qetzz4n8u9u2x2ckmaxvc8qng5s7r",
            Network::Bitcore,
        )
        .unwrap();
        let info = AddressInfo::from_decoded(&decoded);

        assert_eq!(info.kind, "P2WPKH");
        assert_eq!(info.network, "bitcore");
        assert_eq!(info.witness_version, Some(0));
        assert_eq!(info.hrp.as_deref(), Some("btx"));
        assert_eq!(info.payload.len(), 40); // 20 bytes as hex
        assert!(info.script_pubkey.starts_with("0014"));
    }

    #[test]
    fn test_address_info_json() {
        let decoded = classify("3HGcqQwKsJqgdzC1dmRQLhE3XGvXKxjPGC", Network::Bitcore).unwrap();
        let info = AddressInfo::from_decoded(&decoded);
        let json = serde_json::to_string(&info).unwrap();

        assert!(json.contains("\"kind\":\"P2PKH\""));
        assert!(json.contains("\"witness_version\":null"));

        let back: AddressInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, info.kind);
        assert_eq!(back.payload, info.payload);
    }

    #[test]
    fn test_network_info() {
        let info = NetworkInfo::for_network(Network::Bitcore);
        assert_eq!(info.name, "bitcore");
        assert_eq!(info.p2pkh_version, 0x03);
        assert_eq!(info.p2sh_version, 0x7d);
        assert_eq!(info.bech32_hrp, "btx");
        assert_eq!(info.max_op_return_size, 220);
    }
}
