//! Address validation entry points for the wallet.

use bitcore_chain::{classify, is_valid_address, Network};
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::info::{AddressInfo, NetworkInfo};

/// Errors raised at the JS boundary, before the codec is consulted.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<ValidatorError> for JsValue {
    fn from(err: ValidatorError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Address validator bound to one network.
#[wasm_bindgen]
pub struct AddressValidator {
    network: Network,
}

#[wasm_bindgen]
impl AddressValidator {
    /// Create a validator for the named network.
    ///
    /// # Arguments
    /// * `network` - "bitcore", "bitcoin" or "testnet"
    #[wasm_bindgen(constructor)]
    pub fn new(network: &str) -> Result<AddressValidator, JsValue> {
        let net = Network::from_str(network)
            .ok_or_else(|| ValidatorError::UnknownNetwork(network.to_string()))?;
        Ok(AddressValidator { network: net })
    }

    /// Check whether a string is a well-formed address for this network.
    ///
    /// `null` and `undefined` are ordinary negative results, matching how
    /// the wallet calls this from form input handlers.
    #[wasm_bindgen]
    pub fn is_valid(&self, address: Option<String>) -> bool {
        match address {
            Some(addr) => is_valid_address(&addr, self.network),
            None => false,
        }
    }

    /// Classify an address, returning a structured report.
    #[wasm_bindgen]
    pub fn classify(&self, address: &str) -> Result<JsValue, JsValue> {
        match classify(address, self.network) {
            Ok(decoded) => AddressInfo::from_decoded(&decoded).to_js(),
            Err(e) => Err(JsValue::from_str(&format!("{}", e))),
        }
    }

    /// Classify an address, returning the report as a JSON string for
    /// bridges that cannot pass structured values.
    #[wasm_bindgen]
    pub fn classify_json(&self, address: &str) -> Result<String, JsValue> {
        let decoded =
            classify(address, self.network).map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        let info = AddressInfo::from_decoded(&decoded);
        serde_json::to_string(&info)
            .map_err(|e| JsValue::from(ValidatorError::Serialization(e.to_string())))
    }

    /// Get the chain constants for this validator's network.
    #[wasm_bindgen]
    pub fn network_info(&self) -> Result<JsValue, JsValue> {
        NetworkInfo::for_network(self.network).to_js()
    }

    /// Get the validator's network name.
    #[wasm_bindgen(getter)]
    pub fn network(&self) -> String {
        self.network.name().to_string()
    }
}

/// Validate an address for a named network without building a validator.
#[wasm_bindgen]
pub fn validate_address(address: &str, network: &str) -> Result<bool, JsValue> {
    let net = Network::from_str(network)
        .ok_or_else(|| ValidatorError::UnknownNetwork(network.to_string()))?;
    Ok(is_valid_address(address, net))
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
