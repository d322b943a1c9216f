//! Error types for the Reward Staking program.
//!
//! Every rejection leaves program state untouched: the core validates before
//! it mutates, and a failed instruction rolls back any CPI it issued.
//!
//! ## Error Code Ranges
//! - 6000-6009: Input validation errors
//! - 6010-6019: State/balance errors
//! - 6020-6029: Time/lock errors
//! - 6030-6039: Math/overflow errors
//! - 6040-6049: Authorization errors
//! - 6050-6059: Account validation errors

use anchor_lang::prelude::*;

/// Custom error codes for the Reward Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors (6000-6009) ==========

    /// [6000] Amount is zero or otherwise out of range.
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    /// [6001] A required address (owner, reward token) is the null pubkey.
    #[msg("Address must not be the zero address")]
    ZeroAddress,

    /// [6002] Lockup period supplied at construction is negative.
    #[msg("Lockup period must not be negative")]
    InvalidLockupPeriod,

    // ========== State/Balance Errors (6010-6019) ==========

    /// [6010] Unstake amount exceeds the account's principal.
    #[msg("Insufficient staked balance for this operation")]
    InsufficientStake,

    /// [6011] Emergency withdrawal on an account with no principal.
    #[msg("Nothing staked")]
    NothingStaked,

    /// [6012] Claim exceeds the reward pool balance.
    #[msg("Insufficient reward pool")]
    InsufficientPool,

    /// [6013] Claim with nothing accrued.
    #[msg("No reward available to claim")]
    NoRewardAvailable,

    /// [6014] Funder has not approved the pool for the funding amount.
    #[msg("Reward pool is not approved to move the funding amount")]
    InsufficientAllowance,

    // ========== Time/Lock Errors (6020-6029) ==========

    /// [6020] The lockup period has not yet elapsed since the last deposit.
    #[msg("Lockup period not passed")]
    LockupNotElapsed,

    // ========== Math/Overflow Errors (6030-6039) ==========

    /// [6030] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors (6040-6049) ==========

    /// [6040] Caller is not the pool owner.
    #[msg("Unauthorized: caller is not the pool owner")]
    Unauthorized,

    /// [6041] Signer does not match the stake record's owner.
    #[msg("Unauthorized: signer does not match stake owner")]
    InvalidStakeOwner,

    // ========== Account Validation Errors (6050-6059) ==========

    /// [6050] Token mint does not match the pool's reward mint.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch,

    /// [6051] Vault address does not match the pool's vault.
    #[msg("Vault address mismatch")]
    VaultMismatch,

    /// [6052] User stake account does not belong to this pool.
    #[msg("User stake account does not belong to this pool")]
    PoolMismatch,
}
