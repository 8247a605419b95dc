//! Per-network consensus parameters
//!
//! A [`Params`] value is the single source of truth for one network's
//! consensus constants. It is plain immutable data validated once at
//! construction; every policy in this crate is a pure function of a
//! resolved `Params` plus call-specific inputs.

pub mod networks;
mod registry;

pub use registry::{Registry, RegistryError};

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consensus::{difficulty, Block};
use crate::crypto::Hash;

/// Construction-time invariant violation
///
/// Fatal: a network whose parameters fail validation must never be
/// registered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("network name must not be empty")]
    EmptyName,
    #[error("bech32 human-readable part must not be empty")]
    EmptyBech32Hrp,
    #[error("target time per block must not be zero")]
    ZeroBlockSpacing,
    #[error("target timespan {timespan}s is not a multiple of block spacing {spacing}s")]
    UnevenRetargetWindow { timespan: u64, spacing: u64 },
    #[error("retarget adjustment factor {0} must be at least 2")]
    AdjustmentFactorTooSmall(u64),
    #[error("proof of work limit must not be zero")]
    ZeroPowLimit,
    #[error("pow limit bits 0x{bits:08x} decode above the configured pow limit")]
    PowLimitBitsTooEasy { bits: u32 },
    #[error("activation threshold {threshold} exceeds confirmation window {window}")]
    ThresholdExceedsWindow { threshold: u32, window: u32 },
    #[error("stored genesis hash {stored} does not match computed {computed}")]
    GenesisHashMismatch { stored: Hash, computed: Hash },
    #[error("genesis merkle root {committed} does not match transactions ({computed})")]
    GenesisMerkleRootMismatch { committed: Hash, computed: Hash },
    #[error("checkpoints not strictly increasing at height {height}")]
    UnorderedCheckpoints { height: u64 },
    #[error("malformed checkpoint hash at height {height}")]
    MalformedCheckpointHash { height: u64 },
    #[error("checkpoint at height 0 does not match the genesis hash")]
    GenesisCheckpointMismatch,
    #[error("pubkey-hash and script-hash address prefixes collide on 0x{0:02x}")]
    AmbiguousAddressPrefix(u8),
    #[error("HD private and public key prefixes must differ")]
    HdPrefixCollision,
}

/// Hardcoded (height, hash) anchor used to reject alternate histories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub height: u64,
    pub hash: Hash,
}

/// DNS seed for initial peer discovery; passive data for the P2P layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    /// Hostname of the seed
    pub host: String,
    /// Whether the seed supports connection-bloom-filtered peers
    pub filtering: bool,
}

/// Consensus parameters for one network
///
/// Immutable once registered. Field groups follow the wire/consensus
/// split: identity, chain anchors, difficulty, checkpoints, soft-fork
/// voting, mempool policy, and address encoding magics.
#[derive(Debug, Clone)]
pub struct Params {
    /// Unique human-readable network identifier
    pub name: String,
    /// Network magic identifying this chain on the wire
    pub net: u32,
    /// Default P2P listening port
    pub default_port: u16,
    /// Seed hosts for peer discovery
    pub dns_seeds: Vec<DnsSeed>,

    /// The network's anchor block
    pub genesis_block: Block,
    /// Content hash of `genesis_block`; must match the recomputed value
    pub genesis_hash: Hash,

    /// Highest (easiest) allowed proof-of-work target
    pub pow_limit: U256,
    /// Compact encoding of the easiest allowed target
    pub pow_limit_bits: u32,

    /// Soft-fork activation heights; 0 means always active
    pub bip34_height: u64,
    pub bip65_height: u64,
    pub bip66_height: u64,

    /// Confirmations before a coinbase output is spendable
    pub coinbase_maturity: u16,
    /// Blocks between block-reward halvings
    pub subsidy_reduction_interval: u64,

    /// Retarget window duration in seconds
    pub target_timespan: u64,
    /// Desired block spacing in seconds
    pub target_time_per_block: u64,
    /// Maximum multiplicative target change per retarget
    pub retarget_adjustment_factor: u64,
    /// Allow minimum-difficulty blocks after an idle gap (testnet rule)
    pub reduce_min_difficulty: bool,
    /// Idle gap in seconds before the minimum-difficulty rule applies
    pub min_diff_reduction_time: u64,
    /// Whether CPU block generation is supported on this network
    pub generate_supported: bool,

    /// Anchors ordered from oldest to newest, strictly increasing by height
    pub checkpoints: Vec<Checkpoint>,

    /// Blocks that must signal within a window to lock in a rule change
    pub rule_change_activation_threshold: u32,
    /// Window length in blocks for rule-change signalling
    pub miner_confirmation_window: u32,

    /// Relay non-standard transactions (mempool policy, carried here
    /// for convenience)
    pub relay_non_std_txs: bool,

    /// Human-readable part for bech32 segwit-style addresses
    pub bech32_hrp_segwit: String,

    /// Address encoding magics
    pub pubkey_hash_addr_id: u8,
    pub script_hash_addr_id: u8,
    pub private_key_id: u8,
    pub witness_pubkey_hash_addr_id: u8,
    pub witness_script_hash_addr_id: u8,

    /// BIP32 hierarchical deterministic extended key magics
    pub hd_private_key_id: [u8; 4],
    pub hd_public_key_id: [u8; 4],

    /// BIP44 coin type used in the derivation path
    pub hd_coin_type: u32,
}

impl Params {
    /// Number of blocks in one retarget window
    ///
    /// Exact by construction; `validate` rejects parameter sets where the
    /// timespan does not divide evenly.
    pub fn blocks_per_retarget(&self) -> u64 {
        self.target_timespan / self.target_time_per_block
    }

    /// Check every internal-consistency invariant
    ///
    /// Must pass before the parameter set is considered well-formed;
    /// [`Registry::register`] refuses sets that fail.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.name.is_empty() {
            return Err(ParamsError::EmptyName);
        }
        if self.bech32_hrp_segwit.is_empty() {
            return Err(ParamsError::EmptyBech32Hrp);
        }

        if self.target_time_per_block == 0 {
            return Err(ParamsError::ZeroBlockSpacing);
        }
        if self.target_timespan % self.target_time_per_block != 0 {
            return Err(ParamsError::UnevenRetargetWindow {
                timespan: self.target_timespan,
                spacing: self.target_time_per_block,
            });
        }
        if self.retarget_adjustment_factor < 2 {
            return Err(ParamsError::AdjustmentFactorTooSmall(
                self.retarget_adjustment_factor,
            ));
        }

        if self.pow_limit.is_zero() {
            return Err(ParamsError::ZeroPowLimit);
        }
        if difficulty::target_from_bits(self.pow_limit_bits) > self.pow_limit {
            return Err(ParamsError::PowLimitBitsTooEasy {
                bits: self.pow_limit_bits,
            });
        }

        if self.rule_change_activation_threshold > self.miner_confirmation_window {
            return Err(ParamsError::ThresholdExceedsWindow {
                threshold: self.rule_change_activation_threshold,
                window: self.miner_confirmation_window,
            });
        }

        let computed = self.genesis_block.hash();
        if self.genesis_hash != computed {
            return Err(ParamsError::GenesisHashMismatch {
                stored: self.genesis_hash,
                computed,
            });
        }
        let merkle = self.genesis_block.merkle_root();
        if self.genesis_block.header.merkle_root != merkle {
            return Err(ParamsError::GenesisMerkleRootMismatch {
                committed: self.genesis_block.header.merkle_root,
                computed: merkle,
            });
        }

        for pair in self.checkpoints.windows(2) {
            if pair[1].height <= pair[0].height {
                return Err(ParamsError::UnorderedCheckpoints {
                    height: pair[1].height,
                });
            }
        }
        if let Some(first) = self.checkpoints.first() {
            if first.height == 0 && first.hash != self.genesis_hash {
                return Err(ParamsError::GenesisCheckpointMismatch);
            }
        }

        if self.pubkey_hash_addr_id == self.script_hash_addr_id {
            return Err(ParamsError::AmbiguousAddressPrefix(self.pubkey_hash_addr_id));
        }
        if self.hd_private_key_id == self.hd_public_key_id {
            return Err(ParamsError::HdPrefixCollision);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash_bytes;

    fn base_params() -> Params {
        networks::mainnet().unwrap()
    }

    #[test]
    fn test_shipped_networks_validate() {
        assert!(networks::mainnet().unwrap().validate().is_ok());
        assert!(networks::testnet().unwrap().validate().is_ok());
    }

    #[test]
    fn test_blocks_per_retarget() {
        assert_eq!(networks::mainnet().unwrap().blocks_per_retarget(), 1440);
        assert_eq!(networks::testnet().unwrap().blocks_per_retarget(), 240);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut params = base_params();
        params.name.clear();
        assert_eq!(params.validate(), Err(ParamsError::EmptyName));
    }

    #[test]
    fn test_threshold_above_window_rejected() {
        let mut params = base_params();
        params.rule_change_activation_threshold = params.miner_confirmation_window + 1;
        assert!(matches!(
            params.validate(),
            Err(ParamsError::ThresholdExceedsWindow { .. })
        ));
    }

    #[test]
    fn test_tampered_genesis_hash_rejected() {
        let mut params = base_params();
        params.genesis_hash = hash_bytes(b"tampered");
        assert!(matches!(
            params.validate(),
            Err(ParamsError::GenesisHashMismatch { .. })
        ));
    }

    #[test]
    fn test_tampered_merkle_root_rejected() {
        let mut params = base_params();
        params.genesis_block.header.merkle_root = hash_bytes(b"tampered");
        params.genesis_hash = params.genesis_block.hash();
        assert!(matches!(
            params.validate(),
            Err(ParamsError::GenesisMerkleRootMismatch { .. })
        ));
    }

    #[test]
    fn test_duplicate_checkpoint_height_rejected() {
        let mut params = base_params();
        let dup = params.checkpoints[1];
        params.checkpoints.insert(2, dup);
        assert_eq!(
            params.validate(),
            Err(ParamsError::UnorderedCheckpoints { height: dup.height })
        );
    }

    #[test]
    fn test_genesis_checkpoint_must_match() {
        let mut params = base_params();
        params.checkpoints[0].hash = hash_bytes(b"wrong anchor");
        assert_eq!(
            params.validate(),
            Err(ParamsError::GenesisCheckpointMismatch)
        );
    }

    #[test]
    fn test_uneven_retarget_window_rejected() {
        let mut params = base_params();
        params.target_timespan += 1;
        assert!(matches!(
            params.validate(),
            Err(ParamsError::UnevenRetargetWindow { .. })
        ));
    }

    #[test]
    fn test_pow_limit_bits_above_limit_rejected() {
        let mut params = base_params();
        params.pow_limit = params.pow_limit >> 8;
        assert!(matches!(
            params.validate(),
            Err(ParamsError::PowLimitBitsTooEasy { .. })
        ));
    }

    #[test]
    fn test_colliding_address_prefixes_rejected() {
        let mut params = base_params();
        params.script_hash_addr_id = params.pubkey_hash_addr_id;
        assert!(matches!(
            params.validate(),
            Err(ParamsError::AmbiguousAddressPrefix(_))
        ));
    }

    #[test]
    fn test_colliding_hd_prefixes_rejected() {
        let mut params = base_params();
        params.hd_public_key_id = params.hd_private_key_id;
        assert_eq!(params.validate(), Err(ParamsError::HdPrefixCollision));
    }
}
