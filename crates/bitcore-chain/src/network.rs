//! Network definitions and chain constants for Bitcore and its reference chains.

use core::fmt;

/// Address-encoding and protocol constants that distinguish one
/// Bitcoin-family chain from another.
///
/// Instances are plain data with no behavior. The constant tables below are
/// checked by [`is_well_formed`] in a compile-time assertion: a table whose
/// P2PKH and P2SH version bytes collide would make the two legacy address
/// kinds indistinguishable, and an empty or non-lowercase HRP can never
/// match a decoded witness address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParameters {
    /// Leading byte of a decoded Base58Check payload for P2PKH addresses.
    pub p2pkh_version: u8,
    /// Leading byte of a decoded Base58Check payload for P2SH addresses.
    pub p2sh_version: u8,
    /// Human-readable part of segwit witness addresses.
    pub bech32_hrp: &'static str,
    /// Prefix prepended to signed text messages.
    pub message_prefix: &'static str,
    /// BIP32 extended public key version bytes.
    pub bip32_xpub: [u8; 4],
    /// BIP32 extended private key version bytes.
    pub bip32_xprv: [u8; 4],
    /// WIF private key version byte.
    pub wif_version: u8,
    /// P2P message magic.
    pub magic: u32,
    /// Smallest output value relayed by default, in satoshis.
    pub dust_threshold: u64,
    /// Default fee rate in satoshis per kilobyte.
    pub default_fee_per_kb: u64,
    /// Largest OP_RETURN payload the network relays.
    pub max_op_return_size: usize,
}

/// Bitcore (BTX) mainnet.
///
/// Forked from Bitcoin with its own legacy version bytes and HRP, so a
/// Bitcore address is never byte-compatible with a Bitcoin one. Bitcore
/// relays 220-byte OP_RETURN outputs where Bitcoin stops at 80.
pub const BITCORE: NetworkParameters = NetworkParameters {
    p2pkh_version: 0x03,
    p2sh_version: 0x7d,
    bech32_hrp: "btx",
    message_prefix: "\x18Bitcore Signed Message:\n",
    bip32_xpub: [0x04, 0x88, 0xb2, 0x1e],
    bip32_xprv: [0x04, 0x88, 0xad, 0xe4],
    wif_version: 0x80,
    magic: 0x5b1f2b83,
    dust_threshold: 546,
    default_fee_per_kb: 1000,
    max_op_return_size: 220,
};

/// Bitcoin mainnet, the chain Bitcore diverged from.
pub const BITCOIN: NetworkParameters = NetworkParameters {
    p2pkh_version: 0x00,
    p2sh_version: 0x05,
    bech32_hrp: "bc",
    message_prefix: "\x18Bitcoin Signed Message:\n",
    bip32_xpub: [0x04, 0x88, 0xb2, 0x1e],
    bip32_xprv: [0x04, 0x88, 0xad, 0xe4],
    wif_version: 0x80,
    magic: 0xd9b4bef9,
    dust_threshold: 546,
    default_fee_per_kb: 1000,
    max_op_return_size: 80,
};

/// Bitcoin testnet3.
pub const BITCOIN_TESTNET: NetworkParameters = NetworkParameters {
    p2pkh_version: 0x6f,
    p2sh_version: 0xc4,
    bech32_hrp: "tb",
    message_prefix: "\x18Bitcoin Signed Message:\n",
    bip32_xpub: [0x04, 0x35, 0x87, 0xcf],
    bip32_xprv: [0x04, 0x35, 0x83, 0x94],
    wif_version: 0xef,
    magic: 0x0709110b,
    dust_threshold: 546,
    default_fee_per_kb: 1000,
    max_op_return_size: 80,
};

/// Check the invariants a parameter table must uphold.
const fn is_well_formed(params: &NetworkParameters) -> bool {
    if params.p2pkh_version == params.p2sh_version {
        return false;
    }
    let hrp = params.bech32_hrp.as_bytes();
    if hrp.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < hrp.len() {
        if hrp[i] < b'a' || hrp[i] > b'z' {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = {
    assert!(is_well_formed(&BITCORE));
    assert!(is_well_formed(&BITCOIN));
    assert!(is_well_formed(&BITCOIN_TESTNET));
};

/// The networks this layer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    /// Bitcore mainnet (BTX)
    Bitcore,
    /// Bitcoin mainnet
    Bitcoin,
    /// Bitcoin testnet3
    BitcoinTestnet,
}

impl Network {
    /// Get the constant table for this network.
    pub fn params(&self) -> &'static NetworkParameters {
        match self {
            Network::Bitcore => &BITCORE,
            Network::Bitcoin => &BITCOIN,
            Network::BitcoinTestnet => &BITCOIN_TESTNET,
        }
    }

    /// Get the Bech32 human-readable part for this network.
    pub fn bech32_hrp(&self) -> &'static str {
        self.params().bech32_hrp
    }

    /// Get the version byte for P2PKH addresses.
    pub fn p2pkh_version(&self) -> u8 {
        self.params().p2pkh_version
    }

    /// Get the version byte for P2SH addresses.
    pub fn p2sh_version(&self) -> u8 {
        self.params().p2sh_version
    }

    /// Parse network from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bitcore" | "btx" | "main" | "mainnet" => Some(Network::Bitcore),
            "bitcoin" | "btc" => Some(Network::Bitcoin),
            "testnet" | "bitcoin-testnet" => Some(Network::BitcoinTestnet),
            _ => None,
        }
    }

    /// Get network name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Bitcore => "bitcore",
            Network::Bitcoin => "bitcoin",
            Network::BitcoinTestnet => "testnet",
        }
    }

    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Bitcore => "Bitcore Mainnet",
            Network::Bitcoin => "Bitcoin Mainnet",
            Network::BitcoinTestnet => "Bitcoin Testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Bitcore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitcore_params() {
        assert_eq!(BITCORE.p2pkh_version, 0x03);
        assert_eq!(BITCORE.p2sh_version, 0x7d);
        assert_eq!(BITCORE.bech32_hrp, "btx");
        assert_eq!(BITCORE.message_prefix, "\x18Bitcore Signed Message:\n");
        assert_eq!(BITCORE.bip32_xpub, [0x04, 0x88, 0xb2, 0x1e]);
        assert_eq!(BITCORE.bip32_xprv, [0x04, 0x88, 0xad, 0xe4]);
        assert_eq!(BITCORE.wif_version, 0x80);
        assert_eq!(BITCORE.magic, 0x5b1f2b83);
        assert_eq!(BITCORE.dust_threshold, 546);
        assert_eq!(BITCORE.max_op_return_size, 220);
    }

    #[test]
    fn test_bitcoin_params() {
        assert_eq!(BITCOIN.p2pkh_version, 0x00);
        assert_eq!(BITCOIN.p2sh_version, 0x05);
        assert_eq!(BITCOIN.bech32_hrp, "bc");
        assert_eq!(BITCOIN.max_op_return_size, 80);
    }

    #[test]
    fn test_testnet_params() {
        assert_eq!(BITCOIN_TESTNET.p2pkh_version, 0x6f);
        assert_eq!(BITCOIN_TESTNET.p2sh_version, 0xc4);
        assert_eq!(BITCOIN_TESTNET.bech32_hrp, "tb");
        assert_eq!(BITCOIN_TESTNET.wif_version, 0xef);
        assert_eq!(BITCOIN_TESTNET.bip32_xpub, [0x04, 0x35, 0x87, 0xcf]);
    }

    #[test]
    fn test_tables_well_formed() {
        for network in [Network::Bitcore, Network::Bitcoin, Network::BitcoinTestnet] {
            let params = network.params();
            assert_ne!(params.p2pkh_version, params.p2sh_version);
            assert!(!params.bech32_hrp.is_empty());
            assert!(params.bech32_hrp.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!(Network::from_str("bitcore"), Some(Network::Bitcore));
        assert_eq!(Network::from_str("BTX"), Some(Network::Bitcore));
        assert_eq!(Network::from_str("mainnet"), Some(Network::Bitcore));
        assert_eq!(Network::from_str("bitcoin"), Some(Network::Bitcoin));
        assert_eq!(Network::from_str("testnet"), Some(Network::BitcoinTestnet));
        assert_eq!(Network::from_str("dogecoin"), None);
    }

    #[test]
    fn test_default_network() {
        assert_eq!(Network::default(), Network::Bitcore);
    }
}
