//! Difficulty retarget policy
//!
//! Pure functions of a resolved [`Params`] plus caller-supplied header
//! history. The compact "bits" codec is the standard 4-byte
//! exponent+mantissa encoding of a 256-bit target and must stay bit-exact;
//! the retarget itself is the classic clamped timespan adjustment.

use primitive_types::U256;
use thiserror::Error;

use crate::params::Params;

/// Difficulty policy errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DifficultyError {
    #[error("insufficient history for retarget: need {needed} headers, have {have}")]
    InsufficientHistory { needed: u64, have: usize },
}

/// Caller-supplied snapshot of a block header, ordered oldest to newest
/// with the chain tip last
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderView {
    pub height: u64,
    pub timestamp: u64,
    pub bits: u32,
}

/// Decode a compact difficulty value to its 256-bit target
///
/// Negative or zero-mantissa compacts decode to a zero target.
pub fn target_from_bits(bits: u32) -> U256 {
    let mantissa = bits & 0x007fffff;
    let negative = bits & 0x00800000 != 0;
    let exponent = (bits >> 24) as usize;

    if mantissa == 0 || negative {
        return U256::zero();
    }

    if exponent <= 3 {
        U256::from(mantissa >> (8 * (3 - exponent)))
    } else {
        let shift = 8 * (exponent - 3);
        // An exponent this large cannot be represented in 256 bits
        if shift >= 233 {
            return U256::MAX;
        }
        U256::from(mantissa) << shift
    }
}

/// Encode a 256-bit target back to compact form
pub fn bits_from_target(target: U256) -> u32 {
    if target.is_zero() {
        return 0;
    }

    let mut size = (target.bits() + 7) / 8;
    let mut mantissa: u32 = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        ((target >> (8 * (size - 3))).low_u64()) as u32
    };

    // The mantissa sign bit is not available for magnitude
    if mantissa & 0x00800000 != 0 {
        mantissa >>= 8;
        size += 1;
    }

    ((size as u32) << 24) | mantissa
}

/// Compute the required difficulty bits for the block following `recent`
///
/// `recent` is ordered oldest to newest with the chain tip last and must
/// cover a full retarget window when the next height is a retarget
/// boundary. An empty history yields the easiest allowed difficulty.
/// `new_block_time` is the candidate block's timestamp and only matters
/// for the testnet minimum-difficulty rule.
pub fn next_required_bits(
    params: &Params,
    recent: &[HeaderView],
    new_block_time: u64,
) -> Result<u32, DifficultyError> {
    let tip = match recent.last() {
        Some(tip) => tip,
        None => return Ok(params.pow_limit_bits),
    };

    let interval = params.blocks_per_retarget();
    let next_height = tip.height + 1;

    if next_height % interval != 0 {
        // Networks that reduce minimum difficulty allow an easiest-target
        // block once spacing has stalled past the reduction window; the
        // reduction applies to this block only.
        if params.reduce_min_difficulty
            && params.min_diff_reduction_time > 0
            && new_block_time > tip.timestamp + params.min_diff_reduction_time
        {
            return Ok(params.pow_limit_bits);
        }
        return Ok(tip.bits);
    }

    let needed = interval as usize;
    if recent.len() < needed {
        return Err(DifficultyError::InsufficientHistory {
            needed: interval,
            have: recent.len(),
        });
    }

    let first = &recent[recent.len() - needed];
    let actual_timespan = tip.timestamp.saturating_sub(first.timestamp).clamp(
        params.target_timespan / params.retarget_adjustment_factor,
        params.target_timespan * params.retarget_adjustment_factor,
    );

    let old_target = target_from_bits(tip.bits);
    let new_target = match old_target.checked_mul(U256::from(actual_timespan)) {
        Some(scaled) => scaled / U256::from(params.target_timespan),
        // Divide first when the product would overflow 256 bits
        None => (old_target / U256::from(params.target_timespan))
            .saturating_mul(U256::from(actual_timespan)),
    };

    let new_target = if new_target > params.pow_limit {
        params.pow_limit
    } else {
        new_target
    };

    Ok(bits_from_target(new_target))
}
