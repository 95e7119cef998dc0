//! Chain-parameter layer for the Bitcore (BTX) network.
//!
//! This crate provides pure Rust implementations of:
//! - Constant tables for Bitcore and the Bitcoin chains it forked from
//! - Base58Check decoding and encoding with double-SHA256 checksums
//! - Bech32/Bech32m decoding and encoding for segwit witness addresses
//! - Address classification against a chosen network's version bytes and HRP

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod base58;
pub mod bech32;
pub mod hash;
pub mod network;

pub use address::{
    classify, is_valid_address, p2pkh_address, p2sh_address, segwit_address, AddressError,
    AddressType, DecodedAddress,
};
pub use hash::{double_sha256, sha256};
pub use network::{Network, NetworkParameters};
