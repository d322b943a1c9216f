//! Stake instruction handler.
//!
//! Handles depositing lamports into the pool.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Staked;
use crate::ledger;
use crate::state::{StakePool, UserStake};
use crate::utils::deposit_lamports;

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The user staking lamports.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = stake_vault @ StakingError::VaultMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// User's stake account (created if first time staking).
    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::LEN,
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    /// Pool's lamport vault.
    #[account(
        mut,
        seeds = [STAKE_VAULT_SEED, stake_pool.key().as_ref()],
        bump = stake_pool.stake_vault_bump
    )]
    pub stake_vault: SystemAccount<'info>,

    /// System program.
    pub system_program: Program<'info, System>,
}

/// Stake lamports into the pool.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `amount` - Lamports to stake
pub fn handler(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let user_key = ctx.accounts.user.key();
    let stake_pool_key = ctx.accounts.stake_pool.key();

    let user_stake = &mut ctx.accounts.user_stake;
    let stake_pool = &mut ctx.accounts.stake_pool;

    // Bind a freshly created record to its owner and pool
    if user_stake.owner == Pubkey::default() {
        user_stake.owner = user_key;
        user_stake.stake_pool = stake_pool_key;
        user_stake.bump = ctx.bumps.user_stake;
    }
    require_keys_eq!(user_stake.owner, user_key, StakingError::InvalidStakeOwner);

    ledger::stake(stake_pool, user_stake, amount, clock.unix_timestamp)?;

    let principal = user_stake.principal;
    let total_staked = stake_pool.total_staked;

    deposit_lamports(
        ctx.accounts.user.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount,
    )?;

    emit!(Staked {
        account: user_key,
        amount,
        timestamp: clock.unix_timestamp,
    });

    msg!("Staked {} lamports", amount);
    msg!("Total staked by user: {}", principal);
    msg!("Total staked in pool: {}", total_staked);

    Ok(())
}
