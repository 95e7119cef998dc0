//! Address classification against a chosen network's constants.
//!
//! Supports:
//! - P2PKH (Pay to Public Key Hash) - Legacy addresses, version byte 0x03 on Bitcore
//! - P2SH (Pay to Script Hash) - Legacy addresses, version byte 0x7d on Bitcore
//! - P2WPKH (Pay to Witness Public Key Hash) - Native SegWit v0, btx1q...
//! - P2WSH (Pay to Witness Script Hash) - Native SegWit v0, btx1q... (32-byte program)
//! - P2TR (Pay to Taproot) - SegWit v1, btx1p...
//!
//! A candidate string is tried as a witness address first and as a
//! Base58Check address second. Either way, the decoded payload is only
//! accepted when its version byte or human-readable part belongs to the
//! requested network: a well-formed Bitcoin address is not a Bitcore
//! address even though both chains share the same grammar.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::base58;
use crate::bech32;
use crate::network::Network;

/// Longest candidate string examined before giving up.
///
/// Witness addresses are bounded at 90 characters by BIP173 and
/// Base58Check addresses are far shorter, so anything longer is rejected
/// before any decoding work.
pub const MAX_ADDRESS_LENGTH: usize = bech32::MAX_LENGTH;

/// Address decoding and classification errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Empty input
    Empty,
    /// Input longer than any well-formed address
    TooLong(usize),
    /// Character outside the encoding's alphabet
    InvalidCharacter(char),
    /// Decoded Base58 data shorter than a version byte plus checksum
    TooShort(usize),
    /// Structurally broken witness address
    MalformedAddress,
    /// Witness address mixing upper and lower case
    MixedCase,
    /// Checksum did not match the decoded data
    ChecksumMismatch,
    /// Witness program or legacy payload with an impossible length
    InvalidProgramLength(usize),
    /// Well-formed address that belongs to a different network
    NetworkMismatch { expected: String, got: String },
}

impl core::fmt::Display for AddressError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AddressError::Empty => write!(f, "Empty address"),
            AddressError::TooLong(len) => write!(f, "Address too long: {} characters", len),
            AddressError::InvalidCharacter(c) => write!(f, "Invalid character: {}", c),
            AddressError::TooShort(len) => write!(f, "Decoded data too short: {} bytes", len),
            AddressError::MalformedAddress => write!(f, "Malformed witness address"),
            AddressError::MixedCase => write!(f, "Mixed-case witness address"),
            AddressError::ChecksumMismatch => write!(f, "Invalid checksum"),
            AddressError::InvalidProgramLength(len) => {
                write!(f, "Invalid payload length: {} bytes", len)
            }
            AddressError::NetworkMismatch { expected, got } => {
                write!(f, "Address network mismatch: expected {}, got {}", expected, got)
            }
        }
    }
}

/// The address kinds a Bitcore-family network can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    /// Legacy P2PKH: OP_DUP OP_HASH160 <20-byte-hash> OP_EQUALVERIFY OP_CHECKSIG
    P2PKH,
    /// P2SH: OP_HASH160 <20-byte-hash> OP_EQUAL
    P2SH,
    /// Native SegWit v0 P2WPKH: OP_0 <20-byte-hash>
    P2WPKH,
    /// Native SegWit v0 P2WSH: OP_0 <32-byte-hash>
    P2WSH,
    /// Taproot P2TR: OP_1 <32-byte-x-only-pubkey>
    P2TR,
    /// Witness versions 1-16 outside the forms above, accepted for forward
    /// compatibility with a 2-40 byte program
    FutureWitness,
}

impl AddressType {
    /// Get the display name for this address type.
    pub fn name(&self) -> &'static str {
        match self {
            AddressType::P2PKH => "P2PKH",
            AddressType::P2SH => "P2SH",
            AddressType::P2WPKH => "P2WPKH",
            AddressType::P2WSH => "P2WSH",
            AddressType::P2TR => "P2TR",
            AddressType::FutureWitness => "witness",
        }
    }
}

/// A successfully classified address.
///
/// Only produced after checksum verification and network matching; there is
/// no partially decoded state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAddress {
    /// The kind of address.
    pub address_type: AddressType,
    /// The network the string was classified under.
    pub network: Network,
    /// The 20- or 32-byte hash for legacy and v0 forms, or the witness
    /// program for later versions.
    pub payload: Vec<u8>,
    /// Witness version, for Bech32 forms.
    pub witness_version: Option<u8>,
    /// Human-readable part as read from the string, lowercased.
    pub hrp: Option<String>,
    /// The address as accepted.
    pub display: String,
}

impl DecodedAddress {
    /// Payload bytes as hex, for display and logging.
    pub fn payload_hex(&self) -> String {
        hex::encode(&self.payload)
    }

    /// Build the scriptPubKey template for this address, used in
    /// transaction outputs.
    pub fn script_pubkey(&self) -> Vec<u8> {
        match self.address_type {
            AddressType::P2PKH => {
                // OP_DUP OP_HASH160 <20-byte-hash> OP_EQUALVERIFY OP_CHECKSIG
                let mut script = Vec::with_capacity(25);
                script.push(0x76); // OP_DUP
                script.push(0xa9); // OP_HASH160
                script.push(self.payload.len() as u8);
                script.extend_from_slice(&self.payload);
                script.push(0x88); // OP_EQUALVERIFY
                script.push(0xac); // OP_CHECKSIG
                script
            }
            AddressType::P2SH => {
                // OP_HASH160 <20-byte-hash> OP_EQUAL
                let mut script = Vec::with_capacity(23);
                script.push(0xa9); // OP_HASH160
                script.push(self.payload.len() as u8);
                script.extend_from_slice(&self.payload);
                script.push(0x87); // OP_EQUAL
                script
            }
            _ => {
                // OP_n <program>; OP_0 = 0x00, OP_1 = 0x51 and so on.
                let version = self.witness_version.unwrap_or(0);
                let opcode = if version == 0 { 0x00 } else { 0x50 + version };
                let mut script = Vec::with_capacity(2 + self.payload.len());
                script.push(opcode);
                script.push(self.payload.len() as u8);
                script.extend_from_slice(&self.payload);
                script
            }
        }
    }
}

/// Classify a candidate address string against a network.
///
/// Witness decoding is attempted first; any witness failure falls back to
/// Base58Check. A structurally valid address whose HRP or version byte
/// belongs to another network is reported as
/// [`AddressError::NetworkMismatch`], never a panic: invalid addresses are
/// expected input here, not exceptional conditions.
pub fn classify(address: &str, network: Network) -> Result<DecodedAddress, AddressError> {
    if address.is_empty() {
        return Err(AddressError::Empty);
    }
    if address.len() > MAX_ADDRESS_LENGTH {
        return Err(AddressError::TooLong(address.len()));
    }

    let bech_err = match classify_bech32(address, network) {
        Ok(decoded) => return Ok(decoded),
        Err(e) => e,
    };
    match classify_base58(address, network) {
        Ok(decoded) => Ok(decoded),
        // Both decoders failed. Report the witness error when the string
        // carries the network's own HRP, the Base58 error otherwise.
        Err(base_err) => {
            if has_hrp_prefix(address, network.bech32_hrp()) {
                Err(bech_err)
            } else {
                Err(base_err)
            }
        }
    }
}

/// Check whether a string is a well-formed address for the network.
pub fn is_valid_address(address: &str, network: Network) -> bool {
    classify(address, network).is_ok()
}

/// Encode a 20-byte public key hash as a legacy P2PKH address.
pub fn p2pkh_address(hash: &[u8; 20], network: Network) -> String {
    base58::encode_check(network.p2pkh_version(), hash)
}

/// Encode a 20-byte script hash as a legacy P2SH address.
pub fn p2sh_address(hash: &[u8; 20], network: Network) -> String {
    base58::encode_check(network.p2sh_version(), hash)
}

/// Encode a witness program as a Bech32 or Bech32m address for the network.
pub fn segwit_address(
    version: u8,
    program: &[u8],
    network: Network,
) -> Result<String, AddressError> {
    bech32::encode(network.bech32_hrp(), version, program)
}

fn classify_bech32(address: &str, network: Network) -> Result<DecodedAddress, AddressError> {
    let (hrp, version, program) = bech32::decode(address)?;

    if hrp != network.bech32_hrp() {
        return Err(AddressError::NetworkMismatch {
            expected: network.bech32_hrp().to_string(),
            got: hrp,
        });
    }

    let address_type = match (version, program.len()) {
        (0, 20) => AddressType::P2WPKH,
        (0, 32) => AddressType::P2WSH,
        (1, 32) => AddressType::P2TR,
        _ => AddressType::FutureWitness,
    };

    Ok(DecodedAddress {
        address_type,
        network,
        payload: program,
        witness_version: Some(version),
        hrp: Some(hrp),
        display: address.to_string(),
    })
}

fn classify_base58(address: &str, network: Network) -> Result<DecodedAddress, AddressError> {
    let (version, payload) = base58::decode_check(address)?;

    let address_type = if version == network.p2pkh_version() {
        AddressType::P2PKH
    } else if version == network.p2sh_version() {
        AddressType::P2SH
    } else {
        return Err(AddressError::NetworkMismatch {
            expected: network.name().to_string(),
            got: format!("version byte 0x{:02x}", version),
        });
    };

    if payload.len() != 20 {
        return Err(AddressError::InvalidProgramLength(payload.len()));
    }

    Ok(DecodedAddress {
        address_type,
        network,
        payload,
        witness_version: None,
        hrp: None,
        display: address.to_string(),
    })
}

// Case-insensitive "<hrp>1" prefix test, used only to pick which decoder's
// error to surface once both have failed.
fn has_hrp_prefix(address: &str, hrp: &str) -> bool {
    let bytes = address.as_bytes();
    let hrp_bytes = hrp.as_bytes();
    if bytes.len() <= hrp_bytes.len() {
        return false;
    }
    bytes
        .iter()
        .zip(hrp_bytes.iter())
        .all(|(a, b)| a.eq_ignore_ascii_case(b))
        && bytes[hrp_bytes.len()] == b'1'
}
