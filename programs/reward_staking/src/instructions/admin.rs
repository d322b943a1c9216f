/// Admin instruction handlers.
///
/// ## Security Guarantees
/// - Signer must match pool.owner, checked through `StakePool::require_owner`
/// - PDA validation ensures correct pool

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::OwnershipTransferred;
use crate::state::StakePool;

/// Accounts required for owner operations.
#[derive(Accounts)]
pub struct OwnerControl<'info> {
    /// Current owner.
    pub owner: Signer<'info>,

    /// The stake pool to modify.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,
}

/// Transfer pool ownership to a new address.
///
/// # Security
/// - Only the current owner can call this
/// - New owner must not be the zero address
pub fn transfer_ownership_handler(ctx: Context<OwnerControl>, new_owner: Pubkey) -> Result<()> {
    let clock = Clock::get()?;
    let caller = ctx.accounts.owner.key();

    let previous_owner =
        ctx.accounts
            .stake_pool
            .set_owner(&caller, new_owner, clock.unix_timestamp)?;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });

    msg!("Ownership transferred: {} -> {}", previous_owner, new_owner);

    Ok(())
}
