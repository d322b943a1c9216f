/// Initialize instruction handler.
///
/// Creates the stake pool for a reward mint, its reward token vault and its
/// lamport stake vault.
///
/// ## Security Guarantees
/// - Both vaults are PDAs controlled by the stake pool
/// - Reward mint, rate and lockup are fixed for the life of the pool
/// - All parameters validated before storage

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::state::StakePool;
use crate::utils::deposit_lamports;

/// Accounts required for pool initialization.
///
/// ## Security Notes
/// - `reward_vault` is a token account PDA with `stake_pool` as authority
/// - `stake_vault` is a system-owned PDA only the program can sign for
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for account creation and the stake vault's rent reserve.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The stake pool account to be created.
    /// SECURITY: PDA derived from STAKE_POOL_SEED + reward mint, one pool per token.
    #[account(
        init,
        payer = payer,
        space = StakePool::LEN,
        seeds = [STAKE_POOL_SEED, reward_mint.key().as_ref()],
        bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The reward token mint.
    pub reward_mint: Account<'info, Mint>,

    /// Vault holding reward tokens earmarked for payouts.
    #[account(
        init,
        payer = payer,
        seeds = [REWARD_VAULT_SEED, stake_pool.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = stake_pool
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Lamport vault holding staked principal.
    #[account(
        mut,
        seeds = [STAKE_VAULT_SEED, stake_pool.key().as_ref()],
        bump
    )]
    pub stake_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Program<'info, Token>,

    pub rent: Sysvar<'info, Rent>,
}

/// Initialize a new staking pool.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `owner` - Key allowed to fund the reward pool and transfer ownership
/// * `reward_rate` - Reward units per lamport per second, scaled by 10^18
/// * `lockup_period` - Seconds before staked lamports can be unstaked
pub fn handler(
    ctx: Context<Initialize>,
    owner: Pubkey,
    reward_rate: u64,
    lockup_period: i64,
) -> Result<()> {
    let clock = Clock::get()?;
    let reward_mint = ctx.accounts.reward_mint.key();

    let stake_pool = &mut ctx.accounts.stake_pool;
    stake_pool.configure(owner, reward_mint, reward_rate, lockup_period, clock.unix_timestamp)?;

    stake_pool.reward_vault = ctx.accounts.reward_vault.key();
    stake_pool.stake_vault = ctx.accounts.stake_vault.key();
    stake_pool.bump = ctx.bumps.stake_pool;
    stake_pool.reward_vault_bump = ctx.bumps.reward_vault;
    stake_pool.stake_vault_bump = ctx.bumps.stake_vault;

    // The vault must stay rent exempt independent of staked principal.
    let reserve = ctx.accounts.rent.minimum_balance(0);
    let missing = reserve.saturating_sub(ctx.accounts.stake_vault.lamports());
    if missing > 0 {
        deposit_lamports(
            ctx.accounts.payer.to_account_info(),
            ctx.accounts.stake_vault.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            missing,
        )?;
    }

    msg!("Reward staking pool initialized");
    msg!("Owner: {}", owner);
    msg!("Reward mint: {}", reward_mint);
    msg!("Reward rate: {} (1e18 scale), lockup: {}s", reward_rate, lockup_period);

    Ok(())
}
