//! Reward accrual math.
//!
//! Rewards accrue linearly: `reward = principal * reward_rate * elapsed / REWARD_RATE_SCALE`.
//! Division floors, so rounding always favours the reward pool.

use anchor_lang::prelude::*;

use crate::constants::REWARD_RATE_SCALE;
use crate::error::StakingError;

/// Seconds between a checkpoint and `now`.
///
/// A clock reading earlier than the checkpoint counts as no time elapsed.
pub fn elapsed_seconds(checkpoint: i64, now: i64) -> u64 {
    now.saturating_sub(checkpoint).max(0) as u64
}

/// Reward owed for holding `principal` over `elapsed` seconds at `reward_rate`.
///
/// # Arguments
/// * `principal` - Staked lamports
/// * `reward_rate` - Reward units per lamport per second, scaled by `REWARD_RATE_SCALE`
/// * `elapsed` - Seconds since the last checkpoint
///
/// # Errors
/// `MathOverflow` if the intermediate product or the result does not fit.
pub fn accrue(principal: u64, reward_rate: u64, elapsed: u64) -> Result<u64> {
    if principal == 0 || reward_rate == 0 || elapsed == 0 {
        return Ok(0);
    }

    // u64 * u64 always fits in u128; only the time factor can overflow.
    let reward = (principal as u128)
        .checked_mul(reward_rate as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(elapsed as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(REWARD_RATE_SCALE)
        .ok_or(StakingError::MathOverflow)?;

    let reward = u64::try_from(reward).map_err(|_| StakingError::MathOverflow)?;

    Ok(reward)
}
