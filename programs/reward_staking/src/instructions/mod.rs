//! Instruction handlers for the Reward Staking program.
//!
//! This module contains all instruction implementations.

pub mod admin;
pub mod available_reward;
pub mod claim_reward;
pub mod emergency_withdraw;
pub mod fund_reward_pool;
pub mod initialize;
pub mod stake;
pub mod unstake;

pub use admin::*;
pub use available_reward::*;
pub use claim_reward::*;
pub use emergency_withdraw::*;
pub use fund_reward_pool::*;
pub use initialize::*;
pub use stake::*;
pub use unstake::*;
