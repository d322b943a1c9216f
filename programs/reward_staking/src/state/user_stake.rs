use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::math::{accrue, elapsed_seconds};

#[account]
#[derive(Default, Debug, PartialEq)]
pub struct UserStake {
    pub owner: Pubkey,
    pub stake_pool: Pubkey,

    /// Lamports currently staked.
    pub principal: u64,
    /// Reward owed but not yet paid, folded in at each checkpoint.
    pub accrued_unclaimed: u64,
    pub total_claimed: u64,

    /// Time of the most recent deposit; the lockup runs from here.
    pub staked_at: i64,
    pub last_accrual_time: i64,

    pub bump: u8,
}

impl UserStake {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 8 + 8 + 1;

    pub fn is_lockup_elapsed(&self, now: i64, lockup_period: i64) -> bool {
        now.saturating_sub(self.staked_at) >= lockup_period
    }

    /// Reward accrued since the last checkpoint, not yet folded in.
    pub fn pending_reward(&self, reward_rate: u64, now: i64) -> Result<u64> {
        accrue(
            self.principal,
            reward_rate,
            elapsed_seconds(self.last_accrual_time, now),
        )
    }

    /// Stored plus pending reward as of `now`.
    pub fn claimable_reward(&self, reward_rate: u64, now: i64) -> Result<u64> {
        let reward = self
            .accrued_unclaimed
            .checked_add(self.pending_reward(reward_rate, now)?)
            .ok_or(StakingError::MathOverflow)?;
        Ok(reward)
    }

    pub fn staked_amount(&self) -> u64 {
        self.principal
    }
}
