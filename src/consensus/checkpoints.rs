//! Checkpoint verification policy
//!
//! Checkpoints are hardcoded (height, hash) anchors carried by a network's
//! parameters. This policy only reports disagreement; rejecting a chain or
//! refusing a reorganization below the last checkpoint is the validator's
//! responsibility.

use thiserror::Error;

use crate::crypto::Hash;
use crate::params::{Checkpoint, Params};

/// Candidate chain disagrees with a hardcoded anchor
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("checkpoint mismatch at height {height}: expected {expected}, found {found}")]
    Mismatch {
        height: u64,
        expected: Hash,
        found: Hash,
    },
}

/// Find the checkpoint at an exact height, if any
///
/// Checkpoints are validated to be strictly increasing at construction,
/// so a binary search applies.
pub fn checkpoint_at(params: &Params, height: u64) -> Option<&Checkpoint> {
    params
        .checkpoints
        .binary_search_by_key(&height, |cp| cp.height)
        .ok()
        .map(|idx| &params.checkpoints[idx])
}

/// Verify a candidate (height, hash) pair against the hardcoded anchors
///
/// Heights without a checkpoint always pass.
pub fn verify_checkpoint(params: &Params, height: u64, hash: &Hash) -> Result<(), CheckpointError> {
    match checkpoint_at(params, height) {
        Some(checkpoint) if checkpoint.hash != *hash => Err(CheckpointError::Mismatch {
            height,
            expected: checkpoint.hash,
            found: *hash,
        }),
        _ => Ok(()),
    }
}

/// Height of the highest known checkpoint
///
/// Callers use this to refuse reorganizations at or below it.
pub fn last_checkpoint_height(params: &Params) -> Option<u64> {
    params.checkpoints.last().map(|cp| cp.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash_bytes;
    use crate::params::networks;

    #[test]
    fn test_genesis_checkpoint_matches_genesis_hash() {
        let params = networks::mainnet().unwrap();
        assert!(verify_checkpoint(&params, 0, &params.genesis_hash).is_ok());
    }

    #[test]
    fn test_mismatched_hash_is_rejected() {
        let params = networks::mainnet().unwrap();
        let wrong = hash_bytes(b"not the genesis block");
        let err = verify_checkpoint(&params, 0, &wrong).unwrap_err();
        assert!(matches!(err, CheckpointError::Mismatch { height: 0, .. }));
    }

    #[test]
    fn test_unanchored_height_passes() {
        let params = networks::mainnet().unwrap();
        let anything = hash_bytes(b"some block");
        assert!(verify_checkpoint(&params, 2, &anything).is_ok());
    }

    #[test]
    fn test_last_checkpoint_height() {
        let mainnet = networks::mainnet().unwrap();
        assert_eq!(last_checkpoint_height(&mainnet), Some(168312));

        let testnet = networks::testnet().unwrap();
        assert_eq!(last_checkpoint_height(&testnet), Some(0));
    }

    #[test]
    fn test_checkpoint_at_exact_heights() {
        let params = networks::mainnet().unwrap();
        assert!(checkpoint_at(&params, 53).is_some());
        assert!(checkpoint_at(&params, 54).is_none());
    }
}
