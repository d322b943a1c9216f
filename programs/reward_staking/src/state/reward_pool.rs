use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Reward-token units earmarked for payouts.
///
/// Embedded in `StakePool`. The balance only grows through `fund` and only
/// shrinks through `disburse`; the token transfer that backs either call is
/// issued by the instruction handler afterwards.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewardPool {
    pub balance: u64,
    pub total_funded: u64,
    pub total_disbursed: u64,
}

impl RewardPool {
    pub const LEN: usize = 8 * 3;

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Credit `amount` to the pool and return the resulting balance.
    pub fn fund(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, StakingError::InvalidAmount);

        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        let total_funded = self
            .total_funded
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        self.balance = balance;
        self.total_funded = total_funded;

        Ok(balance)
    }

    /// Reserve `amount` for payout. Rejects the whole amount when the pool is short.
    pub fn disburse(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.balance, StakingError::InsufficientPool);

        self.balance -= amount;
        self.total_disbursed = self.total_disbursed.saturating_add(amount);

        Ok(())
    }
}
