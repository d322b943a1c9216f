use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::state::RewardPool;

#[account]
#[derive(Default, Debug, PartialEq)]
pub struct StakePool {
    pub owner: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_vault: Pubkey,
    pub stake_vault: Pubkey,

    /// Reward units per staked lamport per second, scaled by `REWARD_RATE_SCALE`.
    pub reward_rate: u64,
    /// Seconds a deposit stays locked before `unstake` is allowed.
    pub lockup_period: i64,

    pub total_staked: u64,
    pub staker_count: u64,
    pub reward_pool: RewardPool,

    pub last_updated: i64,
    pub created_at: i64,

    pub stake_vault_bump: u8,
    pub reward_vault_bump: u8,
    pub bump: u8,
}

impl StakePool {
    pub const LEN: usize = 8
        + (32 * 4)
        + 8
        + 8
        + (8 * 2)
        + RewardPool::LEN
        + (8 * 2)
        + 3;

    /// Set the immutable pool parameters.
    ///
    /// Validates every argument before writing anything.
    pub fn configure(
        &mut self,
        owner: Pubkey,
        reward_mint: Pubkey,
        reward_rate: u64,
        lockup_period: i64,
        now: i64,
    ) -> Result<()> {
        require!(reward_mint != Pubkey::default(), StakingError::ZeroAddress);
        require!(owner != Pubkey::default(), StakingError::ZeroAddress);
        require!(lockup_period >= 0, StakingError::InvalidLockupPeriod);

        self.owner = owner;
        self.reward_mint = reward_mint;
        self.reward_rate = reward_rate;
        self.lockup_period = lockup_period;
        self.total_staked = 0;
        self.staker_count = 0;
        self.reward_pool = RewardPool::default();
        self.created_at = now;
        self.last_updated = now;

        Ok(())
    }

    /// Capability check for privileged operations.
    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, StakingError::Unauthorized);
        Ok(())
    }

    /// Hand ownership to `new_owner`, returning the previous owner.
    pub fn set_owner(&mut self, caller: &Pubkey, new_owner: Pubkey, now: i64) -> Result<Pubkey> {
        self.require_owner(caller)?;
        require!(new_owner != Pubkey::default(), StakingError::ZeroAddress);

        let previous = std::mem::replace(&mut self.owner, new_owner);
        self.last_updated = now;

        Ok(previous)
    }

    pub fn total_staked(&self) -> u64 {
        self.total_staked
    }

    pub fn reward_pool_balance(&self) -> u64 {
        self.reward_pool.balance()
    }

    pub fn reward_token(&self) -> Pubkey {
        self.reward_mint
    }
}
