//! Emergency withdraw instruction handler.
//!
//! Returns the whole principal immediately, ignoring the lockup. Any
//! unclaimed reward is forfeited.

use anchor_lang::prelude::*;

use crate::events::EmergencyWithdrawn;
use crate::instructions::unstake::Unstake;
use crate::ledger;

pub fn handler(ctx: Context<Unstake>) -> Result<()> {
    let clock = Clock::get()?;

    let accounts = ctx.accounts;
    let exit = ledger::emergency_withdraw(
        &mut accounts.stake_pool,
        &mut accounts.user_stake,
        clock.unix_timestamp,
    )?;

    accounts.release(exit.principal)?;

    emit!(EmergencyWithdrawn {
        account: accounts.user.key(),
        amount: exit.principal,
        forfeited_reward: exit.forfeited_reward,
        timestamp: clock.unix_timestamp,
    });

    msg!("Emergency withdrawal of {} lamports", exit.principal);
    msg!("Forfeited rewards: {}", exit.forfeited_reward);

    Ok(())
}
