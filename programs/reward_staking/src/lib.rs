//! # Reward Staking Program
//!
//! Stake native SOL, earn an SPL reward token proportional to stake and time.
//!
//! - Rewards accrue linearly at a fixed `reward_rate` (scaled by 10^18) per
//!   staked lamport per second, rounded down
//! - Principal is locked for `lockup_period` seconds after each deposit
//! - Emergency withdrawal skips the lockup and forfeits unclaimed reward
//! - Claims are paid from an owner-funded reward pool and are rejected in
//!   full when the pool cannot cover them
//!
//! ## Ordering
//! Every handler validates, updates pool and stake records through [`ledger`],
//! and only then moves lamports or tokens.

use anchor_lang::prelude::*;

declare_id!("4FALDr6DSubqiB93T2xUBmUwXWQ3hm7DU91MWSkhnt3D");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod state;
pub mod utils;

use instructions::*;

#[program]
pub mod reward_staking {
    use super::*;

    /// Creates the pool for a reward mint.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `owner` - Key allowed to fund the reward pool
    /// * `reward_rate` - Reward units per lamport per second, scaled by 10^18
    /// * `lockup_period` - Seconds a deposit stays locked
    ///
    /// # Errors
    /// `ZeroAddress` for a null owner or reward mint, `InvalidLockupPeriod`
    /// for a negative lockup.
    pub fn initialize(
        ctx: Context<Initialize>,
        owner: Pubkey,
        reward_rate: u64,
        lockup_period: i64,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, owner, reward_rate, lockup_period)
    }

    /// Stakes lamports. Restarts the lockup for the whole position.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - Insufficient lamports
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    /// Withdraws staked lamports after the lockup.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Lockup period has not elapsed
    /// - Amount is zero or exceeds the staked balance
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake::handler(ctx, amount)
    }

    /// Claims all accrued rewards without unstaking.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No rewards available
    /// - Reward pool cannot cover the full claim
    pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
        instructions::claim_reward::handler(ctx)
    }

    /// Withdraws the full principal immediately, forfeiting unclaimed rewards.
    ///
    /// # Errors
    /// Returns an error if nothing is staked.
    pub fn emergency_withdraw(ctx: Context<Unstake>) -> Result<()> {
        instructions::emergency_withdraw::handler(ctx)
    }

    /// Owner function pulling reward tokens into the pool.
    ///
    /// The funder's token account must have approved the stake pool PDA for
    /// at least `amount`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the owner
    /// - Amount is zero
    /// - Allowance is missing or too small
    pub fn fund_reward_pool(ctx: Context<FundRewardPool>, amount: u64) -> Result<()> {
        instructions::fund_reward_pool::handler(ctx, amount)
    }

    /// Owner function handing ownership to a new address.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the current owner
    /// - New owner is the zero address
    pub fn transfer_ownership(ctx: Context<OwnerControl>, new_owner: Pubkey) -> Result<()> {
        instructions::admin::transfer_ownership_handler(ctx, new_owner)
    }

    /// Returns the reward a staker could claim right now.
    pub fn available_reward(ctx: Context<AvailableReward>) -> Result<u64> {
        instructions::available_reward::handler(ctx)
    }
}
