//! Claim reward instruction handler.
//!
//! Pays out everything accrued so far without touching the principal.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardClaimed;
use crate::ledger;
use crate::state::{StakePool, UserStake};
use crate::utils::transfer_as_pool;

/// Accounts required for claiming rewards.
#[derive(Accounts)]
pub struct ClaimReward<'info> {
    /// The user claiming rewards.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = reward_vault @ StakingError::VaultMismatch,
        has_one = reward_mint @ StakingError::MintMismatch
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

    /// The reward token mint.
    pub reward_mint: Account<'info, Mint>,

    /// User's token account receiving the reward.
    #[account(
        mut,
        constraint = user_reward_account.mint == reward_mint.key() @ StakingError::MintMismatch
    )]
    pub user_reward_account: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, stake_pool.key().as_ref()],
        bump = stake_pool.reward_vault_bump
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim accumulated rewards.
///
/// Fails as a whole with `InsufficientPool` when the pool cannot cover the
/// full claim; nothing is paid and nothing is checkpointed.
pub fn handler(ctx: Context<ClaimReward>) -> Result<()> {
    let clock = Clock::get()?;
    let accounts = ctx.accounts;

    // Vault must actually hold what the books say it does
    let claimable =
        ledger::available_reward(&accounts.stake_pool, &accounts.user_stake, clock.unix_timestamp)?;
    require!(
        accounts.reward_vault.amount >= claimable,
        StakingError::InsufficientPool
    );

    let reward = ledger::claim_reward(
        &mut accounts.stake_pool,
        &mut accounts.user_stake,
        clock.unix_timestamp,
    )?;

    let reward_mint_key = accounts.stake_pool.reward_mint;
    let seeds = &[
        STAKE_POOL_SEED,
        reward_mint_key.as_ref(),
        &[accounts.stake_pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    transfer_as_pool(
        accounts.reward_vault.to_account_info(),
        accounts.user_reward_account.to_account_info(),
        accounts.stake_pool.to_account_info(),
        accounts.token_program.to_account_info(),
        signer_seeds,
        reward,
    )?;

    emit!(RewardClaimed {
        account: accounts.user.key(),
        amount: reward,
        timestamp: clock.unix_timestamp,
    });

    msg!("Claimed {} reward tokens", reward);
    msg!("Total rewards claimed by user: {}", accounts.user_stake.total_claimed);
    msg!("Reward pool balance: {}", accounts.stake_pool.reward_pool_balance());

    Ok(())
}
