//! Base58Check encoding and decoding for legacy addresses.
//!
//! Base58 drops the easily confused characters `0`, `O`, `I` and `l` from
//! its alphabet and treats the remaining string as a big-endian numeral.
//! The check variant appends the first four bytes of the double-SHA256 of
//! the data before encoding, so a mistyped character is detected rather
//! than silently accepted.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::address::AddressError;
use crate::hash::double_sha256;

/// The 58-character alphabet, in value order.
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Checksum bytes appended by the check encoding.
const CHECKSUM_LEN: usize = 4;

/// Decode a base-58 string into bytes.
///
/// Each leading `1` maps to one leading zero byte; the rest of the string
/// is converted as a base-58 big-endian numeral.
pub fn decode(input: &str) -> Result<Vec<u8>, AddressError> {
    if input.is_empty() {
        return Err(AddressError::Empty);
    }

    let leading_zeros = input.chars().take_while(|&c| c == '1').count();

    let mut result: Vec<u8> = Vec::new();
    for c in input.chars() {
        if !c.is_ascii() {
            return Err(AddressError::InvalidCharacter(c));
        }
        let value = ALPHABET
            .iter()
            .position(|&x| x == c as u8)
            .ok_or(AddressError::InvalidCharacter(c))? as u32;

        // Multiply the accumulated number by 58 and add the digit.
        let mut carry = value;
        for byte in result.iter_mut().rev() {
            let temp = (*byte as u32) * 58 + carry;
            *byte = (temp & 0xff) as u8;
            carry = temp >> 8;
        }
        while carry > 0 {
            result.insert(0, (carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut decoded = vec![0u8; leading_zeros];
    decoded.extend(result);
    Ok(decoded)
}

/// Decode a Base58Check string and verify its checksum.
///
/// Returns the version byte and the payload that follows it. Payload length
/// is not enforced here; the classifier decides which lengths it accepts.
pub fn decode_check(input: &str) -> Result<(u8, Vec<u8>), AddressError> {
    let decoded = decode(input)?;

    // At minimum one version byte plus the checksum.
    if decoded.len() < 1 + CHECKSUM_LEN {
        return Err(AddressError::TooShort(decoded.len()));
    }

    let (body, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected = &double_sha256(body)[..CHECKSUM_LEN];
    if checksum != expected {
        return Err(AddressError::ChecksumMismatch);
    }

    Ok((body[0], body[1..].to_vec()))
}

/// Encode bytes as base-58.
pub fn encode(input: &[u8]) -> String {
    let leading_zeros = input.iter().take_while(|&&b| b == 0).count();

    // Base-58 digits, least significant first.
    let mut digits: Vec<u8> = Vec::new();
    for &byte in input {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            let temp = ((*digit as u32) << 8) + carry;
            *digit = (temp % 58) as u8;
            carry = temp / 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut out = String::with_capacity(leading_zeros + digits.len());
    for _ in 0..leading_zeros {
        out.push('1');
    }
    for &digit in digits.iter().rev() {
        out.push(ALPHABET[digit as usize] as char);
    }
    out
}

/// Encode a version byte plus payload with the trailing 4-byte checksum.
pub fn encode_check(version: u8, payload: &[u8]) -> String {
    let mut body = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    body.push(version);
    body.extend_from_slice(payload);
    let checksum = double_sha256(&body);
    body.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    encode(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_decode_check_bitcore_p2pkh() {
        // Bitcore P2PKH addresses carry version byte 0x03.
        let (version, payload) = decode_check("3HGcqQwKsJqgdzC1dmRQLhE3XGvXKxjPGC").unwrap();
        assert_eq!(version, 0x03);
        assert_eq!(payload.len(), 20);
    }

    #[test]
    fn test_decode_check_bitcore_p2sh() {
        // Bitcore P2SH addresses carry version byte 0x7d (125).
        let (version, payload) = decode_check("H8QWjzzEHmYtZqpV2GQPFTGXztjKrfGBWs").unwrap();
        assert_eq!(version, 0x7d);
        assert_eq!(payload.len(), 20);
    }

    #[test]
    fn test_roundtrip() {
        let addr = "3HGcqQwKsJqgdzC1dmRQLhE3XGvXKxjPGC";
        let (version, payload) = decode_check(addr).unwrap();
        assert_eq!(encode_check(version, &payload), addr);
    }

    #[test]
    fn test_leading_zero_rule() {
        assert_eq!(encode(&[0, 0, 1]), "112");
        assert_eq!(decode("112").unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(decode("0abc"), Err(AddressError::InvalidCharacter('0')));
        assert_eq!(decode("abcO"), Err(AddressError::InvalidCharacter('O')));
        assert_eq!(decode("aIbc"), Err(AddressError::InvalidCharacter('I')));
        assert_eq!(decode("albc"), Err(AddressError::InvalidCharacter('l')));
        assert_eq!(decode("añbc"), Err(AddressError::InvalidCharacter('ñ')));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode(""), Err(AddressError::Empty));
        assert_eq!(decode_check(""), Err(AddressError::Empty));
    }

    #[test]
    fn test_too_short() {
        // "2g" decodes to fewer than the 5 bytes a checked payload needs.
        assert!(matches!(decode_check("2g"), Err(AddressError::TooShort(_))));
    }

    #[test]
    fn test_checksum_mismatch() {
        let mut addr = "3HGcqQwKsJqgdzC1dmRQLhE3XGvXKxjPGC".to_string();
        addr.pop();
        addr.push('D');
        assert_eq!(decode_check(&addr), Err(AddressError::ChecksumMismatch));
    }
}
