//! Shipped network definitions
//!
//! The literal tables for the Junkcoin main and test networks. Values are
//! data, not code: adding a network means adding a constructor here and a
//! `register` call at startup, no new code paths.

use super::{Checkpoint, DnsSeed, Params, ParamsError};
use crate::consensus::difficulty::target_from_bits;
use crate::crypto::Hash;
use crate::genesis;

/// Compact form of the easiest allowed target on both shipped networks
const POW_LIMIT_BITS: u32 = 0x1e0ffff0;

/// Parse a historic checkpoint anchor from its display string
fn checkpoint(height: u64, hash_hex: &str) -> Result<Checkpoint, ParamsError> {
    let hash = Hash::from_hex(hash_hex)
        .map_err(|_| ParamsError::MalformedCheckpointHash { height })?;
    Ok(Checkpoint { height, hash })
}

/// Parameters for the Junkcoin main network
pub fn mainnet() -> Result<Params, ParamsError> {
    let genesis_block = genesis::mainnet_genesis_block();
    let genesis_hash = genesis_block.hash();

    let params = Params {
        name: "junkcoin-mainnet".to_string(),
        net: 0x6a756e6b, // "junk" in ASCII
        default_port: 9771,
        dns_seeds: vec![
            DnsSeed {
                host: "mainnet.junk-coin.com".to_string(),
                filtering: true,
            },
            DnsSeed {
                host: "junk-seed.s3na.xyz".to_string(),
                filtering: true,
            },
            DnsSeed {
                host: "jkc-seed.junkiewally.xyz".to_string(),
                filtering: true,
            },
        ],

        genesis_block,
        genesis_hash,
        // The limit is defined by its compact form; the decoded value is
        // what retarget clamping compares against
        pow_limit: target_from_bits(POW_LIMIT_BITS),
        pow_limit_bits: POW_LIMIT_BITS,

        // Always active
        bip34_height: 0,
        bip65_height: 0,
        bip66_height: 0,

        coinbase_maturity: 70,
        subsidy_reduction_interval: 518_400, // halving every 2 years

        target_timespan: 24 * 60 * 60, // 24 hours
        target_time_per_block: 60,     // 1 minute blocks
        retarget_adjustment_factor: 4, // 25% less, 400% more
        reduce_min_difficulty: false,
        min_diff_reduction_time: 0,
        generate_supported: false,

        // Ordered from oldest to newest; the height-0 anchor is the
        // genesis hash itself
        checkpoints: vec![
            Checkpoint {
                height: 0,
                hash: genesis_hash,
            },
            checkpoint(1, "ca55073a54775a1ef78294f53f38a3e02d0654d7417f3cbbe4d28d17d50e07d0")?,
            checkpoint(53, "b623a39a5a0534990a59916d5803fa2bd6a6d52d8e594546936a42a2cc9b0441")?,
            checkpoint(117, "6cab49bd69fcce2bb48793cc064bb49e75f068e7029b5173db83654fbcb5953d")?,
            checkpoint(200, "45257b0f2ee6d5c55ac16a76817d7151b776d6452ae6f21426eaa42345b831f8")?,
            checkpoint(6452, "506562c2172d9f10e86d2b467ed3bb7b9eba40148d18d1e660c1ff692604f3fc")?,
            checkpoint(10978, "1c9f7f7a4702f8225df430b259ac58c387de99439be8a8789841a1c011ead7fc")?,
            checkpoint(17954, "6036051659e92a17cb7488040e05a94483b7a7f88b184156c136d51ff0390a7d")?,
            checkpoint(23978, "7924154aa896363ec9be3ca5f939602f72cf4a5396e6e1cd9139335dd1819487")?,
            checkpoint(33212, "448040ac454da8654d9c58ad79386aa1a88fd113be0fcc5ca39ecd3eae8c8618")?,
            checkpoint(45527, "f2420d964001d4d2c8bc0d9283f3f684d4d91a509a50985888458a68e08e1c82")?,
            checkpoint(57484, "c3e95c6fb35f4b39006c89538415b4f50a253a3ac1cad0e583fb287f6bd91be1")?,
            checkpoint(69240, "c34f5d113fe92f3206ef8855caf51cd6252286e3381b253bbc1237211198c22b")?,
            checkpoint(73892, "d05129c2d9f3e99565bf84fbceabbc61728e4d644173e194823b639f7c406b04")?,
            checkpoint(168312, "deea2bcecb1146ae9cd74d67b29b4d0161e9bb63beb9022ca10f3625dda6c0e6")?,
        ],

        rule_change_activation_threshold: 9576, // 95% of the window
        miner_confirmation_window: 10080,       // 24 hours worth of blocks (1440 * 7)

        relay_non_std_txs: false,

        bech32_hrp_segwit: "jc".to_string(),

        pubkey_hash_addr_id: 0x10,         // starts with 7
        script_hash_addr_id: 0x05,         // starts with 3
        private_key_id: 0x90,              // starts with N (WIF)
        witness_pubkey_hash_addr_id: 0x06, // starts with p2
        witness_script_hash_addr_id: 0x0a, // starts with 7Xh

        hd_private_key_id: [0x04, 0x88, 0xad, 0xe4], // starts with xprv
        hd_public_key_id: [0x04, 0x88, 0xb2, 0x1e],  // starts with xpub

        hd_coin_type: 2013,
    };

    params.validate()?;
    Ok(params)
}

/// Parameters for the Junkcoin test network
pub fn testnet() -> Result<Params, ParamsError> {
    let genesis_block = genesis::testnet_genesis_block();
    let genesis_hash = genesis_block.hash();

    let params = Params {
        name: "junkcoin-testnet".to_string(),
        net: 0x6a756e6c, // "junk" + 1
        default_port: 19771,
        dns_seeds: vec![
            DnsSeed {
                host: "testnet.junk-coin.com".to_string(),
                filtering: true,
            },
            DnsSeed {
                host: "junk-testnet.s3na.xyz".to_string(),
                filtering: true,
            },
        ],

        genesis_block,
        genesis_hash,
        pow_limit: target_from_bits(POW_LIMIT_BITS),
        pow_limit_bits: POW_LIMIT_BITS,

        bip34_height: 0,
        bip65_height: 0,
        bip66_height: 0,

        coinbase_maturity: 30,
        subsidy_reduction_interval: 518_400,

        target_timespan: 4 * 60 * 60, // 4 hours
        target_time_per_block: 60,
        retarget_adjustment_factor: 4,
        reduce_min_difficulty: true,
        min_diff_reduction_time: 2 * 60, // twice the block spacing
        generate_supported: true,

        checkpoints: vec![Checkpoint {
            height: 0,
            hash: genesis_hash,
        }],

        rule_change_activation_threshold: 1512, // 75% of the window
        // The upstream table documents this as "4 hours worth of blocks
        // (240 * 8.4)", which does not match 2016; the configured literal
        // is authoritative and kept as-is
        miner_confirmation_window: 2016,

        relay_non_std_txs: true,

        bech32_hrp_segwit: "tj".to_string(),

        pubkey_hash_addr_id: 0x6f,         // starts with m or n
        script_hash_addr_id: 0xc4,         // starts with 2
        private_key_id: 0xef,              // starts with 9 or c (WIF)
        witness_pubkey_hash_addr_id: 0x03, // starts with QW
        witness_script_hash_addr_id: 0x28, // starts with T7n

        hd_private_key_id: [0x04, 0x35, 0x83, 0x94], // starts with tprv
        hd_public_key_id: [0x04, 0x35, 0x87, 0xcf],  // starts with tpub

        hd_coin_type: 11337,
    };

    params.validate()?;
    Ok(params)
}
