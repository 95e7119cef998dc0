//! WebAssembly bindings for the Bitcore wallet's chain layer.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Validating and classifying Bitcore (BTX) addresses
//! - Inspecting the chain constants of the supported networks
//! - Building scriptPubKey templates for validated addresses

use wasm_bindgen::prelude::*;

pub mod info;
pub mod validator;

// Re-export main types for JS access
pub use validator::AddressValidator;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
