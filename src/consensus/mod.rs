//! Consensus structures and policies
//!
//! The block/transaction types needed to anchor a chain, plus the pure
//! policy functions (difficulty retargeting, checkpoint verification) that
//! consume a resolved [`crate::params::Params`].

mod block;
pub mod checkpoints;
pub mod difficulty;
mod transaction;

pub use block::{Block, BlockHeader};
pub use checkpoints::{last_checkpoint_height, verify_checkpoint, CheckpointError};
pub use difficulty::{
    bits_from_target, next_required_bits, target_from_bits, DifficultyError, HeaderView,
};
pub use transaction::{OutPoint, Transaction, TxInput, TxOutput};
