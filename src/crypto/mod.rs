//! Cryptographic primitives - Content hashing and merkle commitments

mod hash;
mod merkle;

pub use hash::{address_checksum, hash_bytes, hash_pair, Hash};
pub use merkle::compute_merkle_root;
