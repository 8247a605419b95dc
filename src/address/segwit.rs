//! Segwit-style address codec
//!
//! Bech32 encoding of witness programs under the network's configured
//! human-readable part. Decoding rejects addresses from other networks as
//! [`AddressError::WrongNetwork`], which callers must be able to tell
//! apart from plain corruption.

use bech32::{Bech32, Hrp};

use super::AddressError;
use crate::params::Params;

fn valid_program_length(len: usize) -> bool {
    len == 20 || len == 32
}

/// Encode a witness program under the network's HRP
pub fn encode_segwit(params: &Params, program: &[u8]) -> Result<String, AddressError> {
    if !valid_program_length(program.len()) {
        return Err(AddressError::InvalidProgramLength(program.len()));
    }

    let hrp = Hrp::parse(&params.bech32_hrp_segwit).map_err(|_| AddressError::InvalidFormat)?;
    bech32::encode::<Bech32>(hrp, program).map_err(|_| AddressError::InvalidFormat)
}

/// Decode a segwit-style address for the given network
///
/// Returns the witness program. An address carrying a different HRP is a
/// `WrongNetwork` error even when its checksum is intact.
pub fn decode_segwit(params: &Params, encoded: &str) -> Result<Vec<u8>, AddressError> {
    match bech32::decode(encoded) {
        Ok((hrp, program)) => {
            if hrp.as_str() != params.bech32_hrp_segwit {
                return Err(AddressError::WrongNetwork {
                    expected: params.bech32_hrp_segwit.clone(),
                    found: hrp.as_str().to_string(),
                });
            }
            if !valid_program_length(program.len()) {
                return Err(AddressError::InvalidProgramLength(program.len()));
            }
            Ok(program)
        }
        Err(_) => {
            // A well-formed string under the right HRP that still fails to
            // decode failed its checksum; anything else is malformed.
            match encoded.rfind('1') {
                Some(pos) if encoded[..pos].eq_ignore_ascii_case(&params.bech32_hrp_segwit) => {
                    Err(AddressError::ChecksumMismatch)
                }
                _ => Err(AddressError::InvalidFormat),
            }
        }
    }
}
