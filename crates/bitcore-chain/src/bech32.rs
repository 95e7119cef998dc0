//! Bech32 and Bech32m encoding for segwit witness addresses.
//!
//! A witness address is `hrp || '1' || data || checksum`, where the data
//! part carries the witness version in its first 5-bit group followed by
//! the witness program regrouped into 5-bit values. The 6-character
//! checksum is a BCH code over GF(32). Witness version 0 uses the original
//! Bech32 constant; versions 1 through 16 use the Bech32m constant, and
//! pairing a version with the other constant is a checksum failure.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::address::AddressError;

/// The 32-character data charset, in value order.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Checksum residue required for witness version 0.
const BECH32_CONST: u32 = 1;

/// Checksum residue required for witness versions 1 through 16.
const BECH32M_CONST: u32 = 0x2bc830a3;

/// Longest address string allowed by BIP173.
pub const MAX_LENGTH: usize = 90;

/// Checksum characters at the end of the data part.
const CHECKSUM_LEN: usize = 6;

const GEN: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

fn polymod(hrp: &[u8], data: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &value in hrp.iter().chain(data.iter()) {
        let top = chk >> 25;
        chk = ((chk & 0x1ffffff) << 5) ^ (value as u32);
        for (i, &g) in GEN.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

/// Expand the human-readable part into the values covered by the checksum.
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(hrp.len() * 2 + 1);
    for b in hrp.bytes() {
        out.push(b >> 5);
    }
    out.push(0);
    for b in hrp.bytes() {
        out.push(b & 31);
    }
    out
}

fn checksum(hrp: &str, data: &[u8], constant: u32) -> [u8; CHECKSUM_LEN] {
    let mut tail = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    tail.extend_from_slice(data);
    tail.extend_from_slice(&[0u8; CHECKSUM_LEN]);
    let residue = polymod(&hrp_expand(hrp), &tail) ^ constant;
    let mut out = [0u8; CHECKSUM_LEN];
    for (i, word) in out.iter_mut().enumerate() {
        *word = ((residue >> (5 * (5 - i))) & 31) as u8;
    }
    out
}

/// Regroup values between bit widths, used for the 5-bit/8-bit conversion
/// on both the encode and decode paths.
fn regroup_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, AddressError> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max = (1u32 << to) - 1;
    let mut out = Vec::new();

    for &value in data {
        if (value as u32) >> from != 0 {
            return Err(AddressError::MalformedAddress);
        }
        acc = (acc << from) | value as u32;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & max) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & max) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & max) != 0 {
        return Err(AddressError::MalformedAddress);
    }

    Ok(out)
}

/// Decode a witness address into its HRP, witness version and program.
///
/// The string must be uniformly upper- or lowercase; a mixed-case string is
/// rejected before any normalization, even when its lowercase form would
/// carry a valid checksum.
pub fn decode(input: &str) -> Result<(String, u8, Vec<u8>), AddressError> {
    if input.is_empty() {
        return Err(AddressError::Empty);
    }
    if input.len() > MAX_LENGTH {
        return Err(AddressError::TooLong(input.len()));
    }

    let has_lower = input.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = input.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(AddressError::MixedCase);
    }

    for c in input.chars() {
        if !('!'..='~').contains(&c) {
            return Err(AddressError::InvalidCharacter(c));
        }
    }

    let lowered = input.to_lowercase();
    let sep = match lowered.rfind('1') {
        Some(pos) => pos,
        None => return Err(AddressError::MalformedAddress),
    };
    if sep == 0 {
        return Err(AddressError::MalformedAddress);
    }

    let hrp = &lowered[..sep];
    let data_part = &lowered[sep + 1..];
    if data_part.len() < CHECKSUM_LEN {
        return Err(AddressError::MalformedAddress);
    }

    let mut data = Vec::with_capacity(data_part.len());
    for c in data_part.chars() {
        match CHARSET.iter().position(|&x| x == c as u8) {
            Some(value) => data.push(value as u8),
            None => return Err(AddressError::InvalidCharacter(c)),
        }
    }

    let residue = polymod(&hrp_expand(hrp), &data);
    if residue != BECH32_CONST && residue != BECH32M_CONST {
        return Err(AddressError::ChecksumMismatch);
    }

    data.truncate(data.len() - CHECKSUM_LEN);
    let (&version, program_words) = match data.split_first() {
        Some(split) => split,
        None => return Err(AddressError::MalformedAddress),
    };
    if version > 16 {
        return Err(AddressError::MalformedAddress);
    }

    // BIP350 binds the checksum constant to the witness version. A v0
    // address checksummed as Bech32m, or a v1+ address checksummed as plain
    // Bech32, is a checksum failure rather than a different variant.
    let required = if version == 0 { BECH32_CONST } else { BECH32M_CONST };
    if residue != required {
        return Err(AddressError::ChecksumMismatch);
    }

    let program = regroup_bits(program_words, 5, 8, false)?;
    if program.len() < 2 || program.len() > 40 {
        return Err(AddressError::InvalidProgramLength(program.len()));
    }
    if version == 0 && program.len() != 20 && program.len() != 32 {
        return Err(AddressError::InvalidProgramLength(program.len()));
    }

    Ok((hrp.to_string(), version, program))
}

/// Encode a witness version and program as an address under the given HRP.
pub fn encode(hrp: &str, version: u8, program: &[u8]) -> Result<String, AddressError> {
    if hrp.is_empty() || !hrp.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(AddressError::MalformedAddress);
    }
    if version > 16 {
        return Err(AddressError::MalformedAddress);
    }
    if program.len() < 2 || program.len() > 40 {
        return Err(AddressError::InvalidProgramLength(program.len()));
    }
    if version == 0 && program.len() != 20 && program.len() != 32 {
        return Err(AddressError::InvalidProgramLength(program.len()));
    }

    let mut data = Vec::with_capacity(1 + (program.len() * 8 + 4) / 5);
    data.push(version);
    data.extend(regroup_bits(program, 8, 5, true)?);

    let constant = if version == 0 { BECH32_CONST } else { BECH32M_CONST };
    let check = checksum(hrp, &data, constant);

    let mut out = String::with_capacity(hrp.len() + 1 + data.len() + CHECKSUM_LEN);
    out.push_str(hrp);
    out.push('1');
    for &value in data.iter().chain(check.iter()) {
        out.push(CHARSET[value as usize] as char);
    }
    if out.len() > MAX_LENGTH {
        return Err(AddressError::TooLong(out.len()));
    }
    Ok(out)
}
