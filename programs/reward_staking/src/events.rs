use anchor_lang::prelude::*;

//
// Events emitted for off-chain indexers tracking stakes, payouts and funding.
//

/// Emitted when principal is deposited.
#[event]
pub struct Staked {
    pub account: Pubkey,
    /// Lamports added by this deposit.
    pub amount: u64,
    pub timestamp: i64,
}

/// Emitted on ordinary withdrawal after the lockup.
#[event]
pub struct Unstaked {
    pub account: Pubkey,
    /// Lamports returned.
    pub amount: u64,
    pub timestamp: i64,
}

/// Emitted when accrued reward is paid out.
#[event]
pub struct RewardClaimed {
    pub account: Pubkey,
    /// Reward token base units transferred.
    pub amount: u64,
    pub timestamp: i64,
}

/// Emitted when the owner tops up the reward pool.
#[event]
pub struct RewardPoolFunded {
    pub amount: u64,
    /// Pool balance after funding.
    pub resulting_balance: u64,
}

/// Emitted when a staker exits early, forfeiting unclaimed reward.
#[event]
pub struct EmergencyWithdrawn {
    pub account: Pubkey,
    /// Lamports returned (full principal).
    pub amount: u64,
    /// Unclaimed reward given up by the exit.
    pub forfeited_reward: u64,
    pub timestamp: i64,
}

/// Emitted when pool ownership moves to a new key.
#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
