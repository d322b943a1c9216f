//! Unstake instruction handler.
//!
//! Handles withdrawing staked lamports once the lockup has passed.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Unstaked;
use crate::ledger;
use crate::state::{StakePool, UserStake};
use crate::utils::release_lamports;

/// Accounts required for unstaking and emergency withdrawal.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// The staker receiving lamports back.
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

    /// User's stake account.
    #[account(
        mut,
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ StakingError::InvalidStakeOwner,
        constraint = user_stake.stake_pool == stake_pool.key() @ StakingError::PoolMismatch
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

impl<'info> Unstake<'info> {
    /// Send `amount` lamports from the stake vault back to the user.
    pub fn release(&self, amount: u64) -> Result<()> {
        let stake_pool_key = self.stake_pool.key();
        let seeds = &[
            STAKE_VAULT_SEED,
            stake_pool_key.as_ref(),
            &[self.stake_pool.stake_vault_bump],
        ];
        let signer_seeds = &[&seeds[..]];

        release_lamports(
            self.stake_vault.to_account_info(),
            self.user.to_account_info(),
            self.system_program.to_account_info(),
            signer_seeds,
            amount,
        )
    }
}

/// Unstake lamports from the pool.
///
/// Accrued reward is checkpointed and stays claimable.
///
/// # Arguments
/// * `ctx` - Unstake accounts context
/// * `amount` - Lamports to withdraw
pub fn handler(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;

    let accounts = ctx.accounts;
    let released = ledger::unstake(
        &mut accounts.stake_pool,
        &mut accounts.user_stake,
        amount,
        clock.unix_timestamp,
    )?;

    accounts.release(released)?;

    emit!(Unstaked {
        account: accounts.user.key(),
        amount: released,
        timestamp: clock.unix_timestamp,
    });

    msg!("Unstaked {} lamports", released);
    msg!("Remaining staked: {}", accounts.user_stake.principal);
    msg!("Unclaimed rewards: {}", accounts.user_stake.accrued_unclaimed);

    Ok(())
}
