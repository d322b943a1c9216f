//! State structures for the Reward Staking program.
//!
//! This module defines all account structures used to store program state.

pub mod reward_pool;
pub mod stake_pool;
pub mod user_stake;

pub use reward_pool::*;
pub use stake_pool::*;
pub use user_stake::*;
