//! Genesis block construction
//!
//! Builds the canonical first block for each network. The coinbase
//! transaction is fixed: one input with a null previous-output reference
//! carrying the historic commentary bytes, one output paying a fixed value
//! to a key nobody holds. Construction is deterministic so a parameter
//! set's stored genesis hash can always be recomputed and cross-checked.

use crate::consensus::{Block, BlockHeader, OutPoint, Transaction, TxInput, TxOutput};
use crate::crypto::{compute_merkle_root, Hash};

/// Genesis block version on both shipped networks
const GENESIS_VERSION: u32 = 1;

/// Genesis header difficulty bits on both shipped networks
const GENESIS_BITS: u32 = 0x1d00ffff;

/// Value of the genesis coinbase output in base units
const GENESIS_OUTPUT_VALUE: u64 = 5_000_000_000;

/// Signature script of the genesis coinbase input
///
/// Difficulty push, height push, and the newspaper headline:
/// "The Times 03/Jan/2009 Chancellor on brink of second bailout for banks"
const GENESIS_SIG_SCRIPT: [u8; 77] = [
    0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04, 0x45, //
    0x54, 0x68, 0x65, 0x20, 0x54, 0x69, 0x6d, 0x65, // |The Time|
    0x73, 0x20, 0x30, 0x33, 0x2f, 0x4a, 0x61, 0x6e, // |s 03/Jan|
    0x2f, 0x32, 0x30, 0x30, 0x39, 0x20, 0x43, 0x68, // |/2009 Ch|
    0x61, 0x6e, 0x63, 0x65, 0x6c, 0x6c, 0x6f, 0x72, // |ancellor|
    0x20, 0x6f, 0x6e, 0x20, 0x62, 0x72, 0x69, 0x6e, // | on brin|
    0x6b, 0x20, 0x6f, 0x66, 0x20, 0x73, 0x65, 0x63, // |k of sec|
    0x6f, 0x6e, 0x64, 0x20, 0x62, 0x61, 0x69, 0x6c, // |ond bail|
    0x6f, 0x75, 0x74, 0x20, 0x66, 0x6f, 0x72, 0x20, // |out for |
    0x62, 0x61, 0x6e, 0x6b, 0x73, //                    |banks|
];

/// Output script of the genesis coinbase: pay-to-pubkey to the historic
/// uncompressed key, non-spendable by design (nobody holds the key)
const GENESIS_PK_SCRIPT: [u8; 67] = [
    0x41, 0x04, 0x67, 0x8a, 0xfd, 0xb0, 0xfe, 0x55, //
    0x48, 0x27, 0x19, 0x67, 0xf1, 0xa6, 0x71, 0x30, //
    0xb7, 0x10, 0x5c, 0xd6, 0xa8, 0x28, 0xe0, 0x39, //
    0x09, 0xa6, 0x79, 0x62, 0xe0, 0xea, 0x1f, 0x61, //
    0xde, 0xb6, 0x49, 0xf6, 0xbc, 0x3f, 0x4c, 0xef, //
    0x38, 0xc4, 0xf3, 0x55, 0x04, 0xe5, 0x1e, 0xc1, //
    0x12, 0xde, 0x5c, 0x38, 0x4d, 0xf7, 0xba, 0x0b, //
    0x8d, 0x57, 0x8a, 0x4c, 0x70, 0x2b, 0x6b, 0xf1, //
    0x1d, 0x5f, 0xac, //
];

/// The fixed coinbase transaction shared by all genesis blocks
pub fn coinbase_transaction() -> Transaction {
    Transaction {
        version: 1,
        inputs: vec![TxInput {
            previous_output: OutPoint::null(),
            signature_script: GENESIS_SIG_SCRIPT.to_vec(),
            sequence: 0xffffffff,
        }],
        outputs: vec![TxOutput {
            value: GENESIS_OUTPUT_VALUE,
            pk_script: GENESIS_PK_SCRIPT.to_vec(),
        }],
        lock_time: 0,
    }
}

/// Build a genesis block from header fields
///
/// Deterministic: identical inputs always yield the identical block and
/// hash. The committed merkle root is the one-leaf root over the fixed
/// coinbase transaction.
pub fn build_genesis_block(version: u32, timestamp: u64, bits: u32, nonce: u32) -> Block {
    let coinbase = coinbase_transaction();
    let merkle_root = compute_merkle_root(&[coinbase.hash()]);

    let header = BlockHeader::new(version, Hash::zero(), merkle_root, timestamp, bits, nonce);
    Block::new(header, vec![coinbase])
}

/// Genesis block of the Junkcoin main network
pub fn mainnet_genesis_block() -> Block {
    build_genesis_block(GENESIS_VERSION, 1231006505, GENESIS_BITS, 2083236893)
}

/// Genesis block of the Junkcoin test network
pub fn testnet_genesis_block() -> Block {
    build_genesis_block(GENESIS_VERSION, 1296688602, GENESIS_BITS, 414098458)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_is_deterministic() {
        assert_eq!(mainnet_genesis_block().hash(), mainnet_genesis_block().hash());
        assert_eq!(testnet_genesis_block().hash(), testnet_genesis_block().hash());
    }

    #[test]
    fn test_networks_share_coinbase_but_not_hash() {
        let mainnet = mainnet_genesis_block();
        let testnet = testnet_genesis_block();

        assert_eq!(mainnet.transactions, testnet.transactions);
        assert_ne!(mainnet.hash(), testnet.hash());
    }

    #[test]
    fn test_merkle_root_is_coinbase_hash() {
        let block = mainnet_genesis_block();
        assert_eq!(block.transactions.len(), 1);
        assert_eq!(block.header.merkle_root, block.transactions[0].hash());
    }

    #[test]
    fn test_genesis_block_is_genesis() {
        let block = mainnet_genesis_block();
        assert!(block.is_genesis());
        assert!(block.transactions[0].is_coinbase());
    }

    #[test]
    fn test_nonce_changes_hash() {
        let a = build_genesis_block(1, 0, GENESIS_BITS, 0);
        let b = build_genesis_block(1, 0, GENESIS_BITS, 1);
        assert_ne!(a.hash(), b.hash());
    }
}
