//! Program constants for the Reward Staking program.
//!
//! Seeds for every PDA the program owns, the fixed-point scale used by the
//! reward math, and the deployment defaults.

/// Seed for deriving the stake pool PDA
pub const STAKE_POOL_SEED: &[u8] = b"stake_pool";

/// Seed for deriving user stake account PDAs
pub const USER_STAKE_SEED: &[u8] = b"user_stake";

/// Seed for deriving the lamport vault holding staked principal
pub const STAKE_VAULT_SEED: &[u8] = b"stake_vault";

/// Seed for deriving the reward token vault PDA
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Fixed-point scale of `reward_rate`.
///
/// A rate of `REWARD_RATE_SCALE` pays one reward unit per staked lamport per second.
pub const REWARD_RATE_SCALE: u128 = 1_000_000_000_000_000_000; // 10^18

/// Default lockup before ordinary withdrawal (30 days)
pub const DEFAULT_LOCKUP_PERIOD: i64 = 30 * SECONDS_PER_DAY;

/// Default reward rate: ~0.01 reward token per staked SOL per day
/// (both sides with 9 decimals).
pub const DEFAULT_REWARD_RATE: u64 = 115_700_000_000;
