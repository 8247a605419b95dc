//! Transaction structure
//!
//! Just enough of a transaction to express the genesis coinbase and commit
//! to it in a merkle root. Script execution, signing, and UTXO accounting
//! are external collaborators and never happen in this crate.

use serde::{Deserialize, Serialize};

use crate::crypto::{hash_bytes, Hash};

/// Reference to a previous transaction output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
}

impl OutPoint {
    /// The null reference used by coinbase inputs
    pub fn null() -> Self {
        Self {
            hash: Hash::zero(),
            index: 0xffffffff,
        }
    }

    /// Check whether this is the null coinbase reference
    pub fn is_null(&self) -> bool {
        self.hash == Hash::zero() && self.index == 0xffffffff
    }
}

/// Transaction input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TxInput {
    pub previous_output: OutPoint,
    /// Arbitrary script payload; for the genesis coinbase this carries
    /// the historic commentary bytes
    pub signature_script: Vec<u8>,
    pub sequence: u32,
}

/// Transaction output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TxOutput {
    /// Value in base units
    pub value: u64,
    pub pk_script: Vec<u8>,
}

/// A transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub version: u32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u32,
}

impl Transaction {
    /// Serialize for hashing (fixed-width little-endian fields,
    /// length-prefixed variable parts)
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.version.to_le_bytes());

        bytes.extend_from_slice(&(self.inputs.len() as u32).to_le_bytes());
        for input in &self.inputs {
            bytes.extend_from_slice(&input.previous_output.hash.0);
            bytes.extend_from_slice(&input.previous_output.index.to_le_bytes());
            bytes.extend_from_slice(&(input.signature_script.len() as u32).to_le_bytes());
            bytes.extend_from_slice(&input.signature_script);
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        bytes.extend_from_slice(&(self.outputs.len() as u32).to_le_bytes());
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            bytes.extend_from_slice(&(output.pk_script.len() as u32).to_le_bytes());
            bytes.extend_from_slice(&output.pk_script);
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    /// Calculate the transaction hash
    pub fn hash(&self) -> Hash {
        hash_bytes(&self.to_bytes())
    }

    /// Check whether this is a coinbase transaction (single null input)
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }
}
