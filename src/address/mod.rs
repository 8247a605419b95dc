//! Address and extended-key codecs
//!
//! Encodes and decodes payment addresses, WIF private keys, and BIP32
//! extended keys using a network's configured version bytes. Decoding is
//! fail-closed: every failure is a typed error the caller can act on, and
//! cross-network confusion is always distinguishable from corruption.

mod segwit;

pub use segwit::{decode_segwit, encode_segwit};

use thiserror::Error;

use crate::constants::{
    ADDRESS_PAYLOAD_SIZE, CHECKSUM_SIZE, HD_KEY_PAYLOAD_SIZE, HD_KEY_PREFIX_SIZE,
};
use crate::crypto::address_checksum;
use crate::params::Params;

/// Address and key decode failures
///
/// Never fatal; returned to the immediate caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("not a valid encoding for this format")]
    InvalidFormat,
    #[error("checksum mismatch")]
    ChecksumMismatch,
    #[error("no configured prefix matches")]
    UnknownPrefix,
    #[error("address belongs to network {found:?}, expected {expected:?}")]
    WrongNetwork { expected: String, found: String },
    #[error("unsupported witness program length {0}")]
    InvalidProgramLength(usize),
}

/// What a decoded legacy address pays to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    PubKeyHash,
    ScriptHash,
}

/// Visibility of a decoded extended key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HdKeyKind {
    Private,
    Public,
}

/// Append a double-SHA256 checksum and encode as Base58
fn base58check_encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_SIZE);
    data.extend_from_slice(payload);
    data.extend_from_slice(&address_checksum(payload));
    bs58::encode(data).into_string()
}

/// Decode Base58, verify and strip the trailing checksum
fn base58check_decode(encoded: &str) -> Result<Vec<u8>, AddressError> {
    let data = bs58::decode(encoded)
        .into_vec()
        .map_err(|_| AddressError::InvalidFormat)?;
    if data.len() <= CHECKSUM_SIZE {
        return Err(AddressError::InvalidFormat);
    }

    let (payload, checksum) = data.split_at(data.len() - CHECKSUM_SIZE);
    if checksum != address_checksum(payload) {
        return Err(AddressError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}

/// Encode a pubkey hash as a legacy address for the given network
pub fn encode_pubkey_hash(params: &Params, hash160: &[u8; ADDRESS_PAYLOAD_SIZE]) -> String {
    encode_with_version(params.pubkey_hash_addr_id, hash160)
}

/// Encode a script hash as a legacy address for the given network
pub fn encode_script_hash(params: &Params, hash160: &[u8; ADDRESS_PAYLOAD_SIZE]) -> String {
    encode_with_version(params.script_hash_addr_id, hash160)
}

fn encode_with_version(version: u8, hash160: &[u8; ADDRESS_PAYLOAD_SIZE]) -> String {
    let mut payload = Vec::with_capacity(1 + ADDRESS_PAYLOAD_SIZE);
    payload.push(version);
    payload.extend_from_slice(hash160);
    base58check_encode(&payload)
}

/// Decode a legacy address and classify it by the network's version bytes
pub fn decode_address(
    params: &Params,
    encoded: &str,
) -> Result<(AddressKind, [u8; ADDRESS_PAYLOAD_SIZE]), AddressError> {
    let payload = base58check_decode(encoded)?;
    if payload.len() != 1 + ADDRESS_PAYLOAD_SIZE {
        return Err(AddressError::InvalidFormat);
    }

    let kind = if payload[0] == params.pubkey_hash_addr_id {
        AddressKind::PubKeyHash
    } else if payload[0] == params.script_hash_addr_id {
        AddressKind::ScriptHash
    } else {
        return Err(AddressError::UnknownPrefix);
    };

    let mut hash160 = [0u8; ADDRESS_PAYLOAD_SIZE];
    hash160.copy_from_slice(&payload[1..]);
    Ok((kind, hash160))
}

/// Encode a private key in wallet import format
pub fn encode_wif(params: &Params, key: &[u8; 32], compressed: bool) -> String {
    let mut payload = Vec::with_capacity(34);
    payload.push(params.private_key_id);
    payload.extend_from_slice(key);
    if compressed {
        payload.push(0x01);
    }
    base58check_encode(&payload)
}

/// Decode a WIF private key; returns the key and its compression flag
pub fn decode_wif(params: &Params, encoded: &str) -> Result<([u8; 32], bool), AddressError> {
    let payload = base58check_decode(encoded)?;

    let compressed = match payload.len() {
        33 => false,
        34 if payload[33] == 0x01 => true,
        34 => return Err(AddressError::InvalidFormat),
        _ => return Err(AddressError::InvalidFormat),
    };
    if payload[0] != params.private_key_id {
        return Err(AddressError::UnknownPrefix);
    }

    let mut key = [0u8; 32];
    key.copy_from_slice(&payload[1..33]);
    Ok((key, compressed))
}

/// Encode a BIP32 extended key under the network's 4-byte prefix
pub fn encode_hd_key(
    params: &Params,
    kind: HdKeyKind,
    payload: &[u8; HD_KEY_PAYLOAD_SIZE],
) -> String {
    let prefix = match kind {
        HdKeyKind::Private => params.hd_private_key_id,
        HdKeyKind::Public => params.hd_public_key_id,
    };

    let mut data = Vec::with_capacity(HD_KEY_PREFIX_SIZE + HD_KEY_PAYLOAD_SIZE);
    data.extend_from_slice(&prefix);
    data.extend_from_slice(payload);
    base58check_encode(&data)
}

/// Decode a BIP32 extended key and classify it by the network's prefixes
pub fn decode_hd_key(
    params: &Params,
    encoded: &str,
) -> Result<(HdKeyKind, [u8; HD_KEY_PAYLOAD_SIZE]), AddressError> {
    let data = base58check_decode(encoded)?;
    if data.len() != HD_KEY_PREFIX_SIZE + HD_KEY_PAYLOAD_SIZE {
        return Err(AddressError::InvalidFormat);
    }

    let kind = if data[..HD_KEY_PREFIX_SIZE] == params.hd_private_key_id {
        HdKeyKind::Private
    } else if data[..HD_KEY_PREFIX_SIZE] == params.hd_public_key_id {
        HdKeyKind::Public
    } else {
        return Err(AddressError::UnknownPrefix);
    };

    let mut payload = [0u8; HD_KEY_PAYLOAD_SIZE];
    payload.copy_from_slice(&data[HD_KEY_PREFIX_SIZE..]);
    Ok((kind, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::networks;

    fn hash160() -> [u8; ADDRESS_PAYLOAD_SIZE] {
        let mut payload = [0u8; ADDRESS_PAYLOAD_SIZE];
        for (i, byte) in payload.iter_mut().enumerate() {
            *byte = i as u8;
        }
        payload
    }

    #[test]
    fn test_pubkey_hash_roundtrip() {
        let params = networks::mainnet().unwrap();
        let encoded = encode_pubkey_hash(&params, &hash160());
        let (kind, decoded) = decode_address(&params, &encoded).unwrap();
        assert_eq!(kind, AddressKind::PubKeyHash);
        assert_eq!(decoded, hash160());
    }

    #[test]
    fn test_script_hash_roundtrip() {
        let params = networks::mainnet().unwrap();
        let encoded = encode_script_hash(&params, &hash160());
        let (kind, decoded) = decode_address(&params, &encoded).unwrap();
        assert_eq!(kind, AddressKind::ScriptHash);
        assert_eq!(decoded, hash160());
    }

    #[test]
    fn test_cross_network_address_is_unknown_prefix() {
        let mainnet = networks::mainnet().unwrap();
        let testnet = networks::testnet().unwrap();

        let encoded = encode_pubkey_hash(&mainnet, &hash160());
        assert_eq!(
            decode_address(&testnet, &encoded),
            Err(AddressError::UnknownPrefix)
        );
    }

    #[test]
    fn test_corrupted_checksum_detected() {
        let params = networks::mainnet().unwrap();
        let encoded = encode_pubkey_hash(&params, &hash160());

        // Re-encode with one bit flipped in the checksum
        let mut raw = bs58::decode(&encoded).into_vec().unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let corrupted = bs58::encode(raw).into_string();

        assert_eq!(
            decode_address(&params, &corrupted),
            Err(AddressError::ChecksumMismatch)
        );
    }

    #[test]
    fn test_garbage_is_invalid_format() {
        let params = networks::mainnet().unwrap();
        assert_eq!(
            decode_address(&params, "not/base58/0OIl"),
            Err(AddressError::InvalidFormat)
        );
        assert_eq!(decode_address(&params, "1"), Err(AddressError::InvalidFormat));
    }

    #[test]
    fn test_wif_roundtrip_both_flags() {
        let params = networks::mainnet().unwrap();
        let key = [0x42u8; 32];

        for compressed in [false, true] {
            let encoded = encode_wif(&params, &key, compressed);
            let (decoded, flag) = decode_wif(&params, &encoded).unwrap();
            assert_eq!(decoded, key);
            assert_eq!(flag, compressed);
        }
    }

    #[test]
    fn test_wif_wrong_network_is_unknown_prefix() {
        let mainnet = networks::mainnet().unwrap();
        let testnet = networks::testnet().unwrap();

        let encoded = encode_wif(&mainnet, &[7u8; 32], true);
        assert_eq!(
            decode_wif(&testnet, &encoded),
            Err(AddressError::UnknownPrefix)
        );
    }

    #[test]
    fn test_hd_key_roundtrip() {
        let params = networks::mainnet().unwrap();
        let payload = [0xabu8; HD_KEY_PAYLOAD_SIZE];

        for kind in [HdKeyKind::Private, HdKeyKind::Public] {
            let encoded = encode_hd_key(&params, kind, &payload);
            let (decoded_kind, decoded) = decode_hd_key(&params, &encoded).unwrap();
            assert_eq!(decoded_kind, kind);
            assert_eq!(decoded, payload);
        }
    }

    #[test]
    fn test_hd_key_cross_network_is_unknown_prefix() {
        let mainnet = networks::mainnet().unwrap();
        let testnet = networks::testnet().unwrap();

        let encoded = encode_hd_key(&mainnet, HdKeyKind::Private, &[1u8; HD_KEY_PAYLOAD_SIZE]);
        assert_eq!(
            decode_hd_key(&testnet, &encoded),
            Err(AddressError::UnknownPrefix)
        );
    }
}
