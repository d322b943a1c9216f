//! Read-only reward projection.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::ledger;
use crate::state::{StakePool, UserStake};

/// Accounts required to query a staker's available reward.
#[derive(Accounts)]
pub struct AvailableReward<'info> {
    #[account(
        seeds = [STAKE_POOL_SEED, stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    #[account(
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user_stake.owner.as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.stake_pool == stake_pool.key() @ StakingError::PoolMismatch
    )]
    pub user_stake: Account<'info, UserStake>,
}

/// Stored plus newly accrued reward as of the current clock. Mutates nothing.
pub fn handler(ctx: Context<AvailableReward>) -> Result<u64> {
    let clock = Clock::get()?;
    let reward = ledger::available_reward(
        &ctx.accounts.stake_pool,
        &ctx.accounts.user_stake,
        clock.unix_timestamp,
    )?;

    msg!("Available reward for {}: {}", ctx.accounts.user_stake.owner, reward);

    Ok(reward)
}
