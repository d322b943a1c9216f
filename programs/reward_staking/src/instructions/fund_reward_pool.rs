/// Fund reward pool instruction handler.
///
/// Moves reward tokens from the owner's token account into the reward vault.
///
/// ## Security Guarantees
/// - Only the pool owner can fund
/// - The funder must have approved the stake pool PDA as delegate beforehand;
///   the pool pulls the tokens itself
/// - Mint and vault validation prevents wrong token deposits

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardPoolFunded;
use crate::ledger;
use crate::state::StakePool;
use crate::utils::transfer_as_pool;

/// Accounts required for funding the reward pool.
#[derive(Accounts)]
pub struct FundRewardPool<'info> {
    /// The pool owner.
    #[account(mut)]
    pub funder: Signer<'info>,

    /// The stake pool.
    /// SECURITY: PDA + has_one validations.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = reward_vault @ StakingError::VaultMismatch,
        has_one = reward_mint @ StakingError::MintMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The reward token mint.
    pub reward_mint: Account<'info, Mint>,

    /// Funder's token account, with the stake pool approved as delegate.
    #[account(
        mut,
        constraint = funder_token_account.mint == reward_mint.key() @ StakingError::MintMismatch
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

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

/// Fund the reward pool.
///
/// # Arguments
/// * `ctx` - FundRewardPool accounts context
/// * `amount` - Reward token base units to pull in
pub fn handler(ctx: Context<FundRewardPool>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let accounts = ctx.accounts;
    let funder_key = accounts.funder.key();
    let stake_pool_key = accounts.stake_pool.key();

    // === AUTHORIZATION & ALLOWANCE ===

    accounts.stake_pool.require_owner(&funder_key)?;
    require!(amount > 0, StakingError::InvalidAmount);

    let source = &accounts.funder_token_account;
    require!(
        source.delegate == COption::Some(stake_pool_key) && source.delegated_amount >= amount,
        StakingError::InsufficientAllowance
    );

    // === STATE UPDATE ===

    let resulting_balance = ledger::fund_reward_pool(
        &mut accounts.stake_pool,
        &funder_key,
        amount,
        clock.unix_timestamp,
    )?;

    // === TOKEN TRANSFER ===

    let reward_mint_key = accounts.stake_pool.reward_mint;
    let seeds = &[
        STAKE_POOL_SEED,
        reward_mint_key.as_ref(),
        &[accounts.stake_pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    transfer_as_pool(
        accounts.funder_token_account.to_account_info(),
        accounts.reward_vault.to_account_info(),
        accounts.stake_pool.to_account_info(),
        accounts.token_program.to_account_info(),
        signer_seeds,
        amount,
    )?;

    emit!(RewardPoolFunded {
        amount,
        resulting_balance,
    });

    msg!("Reward pool funded with {} tokens", amount);
    msg!("New reward pool balance: {}", resulting_balance);
    msg!("Funder: {}", funder_key);

    Ok(())
}
