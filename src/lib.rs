//! Junkcoin (JKC) chain configuration core
//!
//! Holds the per-network consensus constants (genesis identity, difficulty
//! bounds, checkpoints, soft-fork heights, address version bytes), a
//! process-wide registry that resolves them by network magic or name, and
//! the pure policy functions driven by them: difficulty retargeting,
//! checkpoint verification, and the address/extended-key codecs.
//!
//! JKC is the short form used in tickers and derivation paths.

pub mod address;
pub mod consensus;
pub mod crypto;
pub mod genesis;
pub mod params;

/// Codec sizes - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Size of a content hash in bytes
    pub const HASH_SIZE: usize = 32;

    /// Size of a Base58Check checksum in bytes
    pub const CHECKSUM_SIZE: usize = 4;

    /// Size of a legacy address payload (HASH160) in bytes
    pub const ADDRESS_PAYLOAD_SIZE: usize = 20;

    /// Size of an extended key payload (everything after the 4-byte
    /// version prefix) in bytes
    pub const HD_KEY_PAYLOAD_SIZE: usize = 74;

    /// Size of an extended-key version prefix in bytes
    pub const HD_KEY_PREFIX_SIZE: usize = 4;
}
