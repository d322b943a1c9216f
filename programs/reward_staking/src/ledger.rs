//! Staking ledger and reward settlement.
//!
//! Every operation here works on the pool and one stake record with an explicit
//! `now`, computes all new values first and writes them only once nothing can
//! fail anymore. Handlers call into this module before moving any lamports or
//! tokens, so a reentrant call always observes settled state.

use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::state::{StakePool, UserStake};

/// Outcome of an emergency exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmergencyExit {
    /// Lamports to return to the staker.
    pub principal: u64,
    /// Unclaimed reward wiped by the exit.
    pub forfeited_reward: u64,
}

/// Deposit `amount` lamports into `user`'s position.
///
/// Pending reward is checkpointed at the old principal and the lockup clock
/// restarts from `now`.
pub fn stake(pool: &mut StakePool, user: &mut UserStake, amount: u64, now: i64) -> Result<()> {
    require!(amount > 0, StakingError::InvalidAmount);

    let accrued_unclaimed = user.claimable_reward(pool.reward_rate, now)?;
    let principal = user
        .principal
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    let total_staked = pool
        .total_staked
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;

    if user.principal == 0 {
        pool.staker_count = pool.staker_count.saturating_add(1);
    }

    user.accrued_unclaimed = accrued_unclaimed;
    user.principal = principal;
    user.staked_at = now;
    user.last_accrual_time = now;

    pool.total_staked = total_staked;
    pool.last_updated = now;

    Ok(())
}

/// Withdraw `amount` lamports after the lockup. Accrued reward stays claimable.
///
/// Returns the lamports the caller must send back to the staker.
pub fn unstake(pool: &mut StakePool, user: &mut UserStake, amount: u64, now: i64) -> Result<u64> {
    require!(
        user.is_lockup_elapsed(now, pool.lockup_period),
        StakingError::LockupNotElapsed
    );
    require!(amount > 0, StakingError::InvalidAmount);
    require!(amount <= user.principal, StakingError::InsufficientStake);

    let accrued_unclaimed = user.claimable_reward(pool.reward_rate, now)?;
    let total_staked = pool
        .total_staked
        .checked_sub(amount)
        .ok_or(StakingError::MathOverflow)?;

    user.accrued_unclaimed = accrued_unclaimed;
    user.principal -= amount;
    user.last_accrual_time = now;

    if user.principal == 0 {
        pool.staker_count = pool.staker_count.saturating_sub(1);
    }
    pool.total_staked = total_staked;
    pool.last_updated = now;

    Ok(amount)
}

/// Withdraw the whole principal regardless of lockup, forfeiting all reward.
pub fn emergency_withdraw(
    pool: &mut StakePool,
    user: &mut UserStake,
    now: i64,
) -> Result<EmergencyExit> {
    let principal = user.principal;
    require!(principal > 0, StakingError::NothingStaked);

    let total_staked = pool
        .total_staked
        .checked_sub(principal)
        .ok_or(StakingError::MathOverflow)?;
    // Only reported; an unrepresentable amount must not block the exit.
    let forfeited_reward = user
        .claimable_reward(pool.reward_rate, now)
        .unwrap_or(u64::MAX);

    user.principal = 0;
    user.accrued_unclaimed = 0;
    user.last_accrual_time = now;

    pool.staker_count = pool.staker_count.saturating_sub(1);
    pool.total_staked = total_staked;
    pool.last_updated = now;

    Ok(EmergencyExit {
        principal,
        forfeited_reward,
    })
}

/// Settle everything `user` has accrued against the reward pool.
///
/// All or nothing: when the pool cannot cover the full amount the record is
/// left exactly as it was. Returns the reward units to transfer.
pub fn claim_reward(pool: &mut StakePool, user: &mut UserStake, now: i64) -> Result<u64> {
    let reward = user.claimable_reward(pool.reward_rate, now)?;
    require!(reward > 0, StakingError::NoRewardAvailable);

    let total_claimed = user
        .total_claimed
        .checked_add(reward)
        .ok_or(StakingError::MathOverflow)?;

    pool.reward_pool.disburse(reward)?;
    pool.last_updated = now;

    user.accrued_unclaimed = 0;
    user.last_accrual_time = now;
    user.total_claimed = total_claimed;

    Ok(reward)
}

/// Owner-only top-up of the reward pool. Returns the resulting pool balance.
pub fn fund_reward_pool(pool: &mut StakePool, caller: &Pubkey, amount: u64, now: i64) -> Result<u64> {
    pool.require_owner(caller)?;

    let balance = pool.reward_pool.fund(amount)?;
    pool.last_updated = now;

    Ok(balance)
}

/// Reward `user` could claim at `now`, without checkpointing.
pub fn available_reward(pool: &StakePool, user: &UserStake, now: i64) -> Result<u64> {
    user.claimable_reward(pool.reward_rate, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_LOCKUP_PERIOD, DEFAULT_REWARD_RATE, SECONDS_PER_DAY};
    use proptest::prelude::*;

    const ONE_SOL: u64 = 1_000_000_000;
    const ONE_TOKEN: u64 = 1_000_000_000;
    const T0: i64 = 1_700_000_000;

    fn new_pool(owner: Pubkey) -> StakePool {
        let mut pool = StakePool::default();
        pool.configure(
            owner,
            Pubkey::new_unique(),
            DEFAULT_REWARD_RATE,
            DEFAULT_LOCKUP_PERIOD,
            T0,
        )
        .unwrap();
        pool
    }

    #[test]
    fn stake_records_principal_and_totals() {
        let mut pool = new_pool(Pubkey::new_unique());
        let mut user = UserStake::default();

        stake(&mut pool, &mut user, ONE_SOL, T0).unwrap();

        assert_eq!(user.staked_amount(), ONE_SOL);
        assert_eq!(user.staked_at, T0);
        assert_eq!(user.last_accrual_time, T0);
        assert_eq!(pool.total_staked(), ONE_SOL);
        assert_eq!(pool.staker_count, 1);
    }

    #[test]
    fn zero_stake_is_rejected() {
        let mut pool = new_pool(Pubkey::new_unique());
        let mut user = UserStake::default();

        let err = stake(&mut pool, &mut user, 0, T0).unwrap_err();
        assert_eq!(err, StakingError::InvalidAmount.into());
        assert_eq!(user, UserStake::default());
        assert_eq!(pool.total_staked(), 0);
    }

    #[test]
    fn top_up_checkpoints_and_restarts_lockup() {
        let mut pool = new_pool(Pubkey::new_unique());
        let mut user = UserStake::default();

        stake(&mut pool, &mut user, ONE_SOL, T0).unwrap();
        let day_one = T0 + SECONDS_PER_DAY;
        let expected = user.pending_reward(pool.reward_rate, day_one).unwrap();
        stake(&mut pool, &mut user, ONE_SOL, day_one).unwrap();

        assert_eq!(user.accrued_unclaimed, expected);
        assert_eq!(user.staked_at, day_one);
        assert_eq!(user.principal, 2 * ONE_SOL);
        assert_eq!(pool.staker_count, 1);

        // Lockup now runs from the top-up.
        let err = unstake(&mut pool, &mut user, 1, T0 + DEFAULT_LOCKUP_PERIOD).unwrap_err();
        assert_eq!(err, StakingError::LockupNotElapsed.into());
        unstake(&mut pool, &mut user, 1, day_one + DEFAULT_LOCKUP_PERIOD).unwrap();
    }

    #[test]
    fn unstake_is_blocked_until_lockup_elapses() {
        let mut pool = new_pool(Pubkey::new_unique());
        let mut user = UserStake::default();
        stake(&mut pool, &mut user, ONE_SOL, T0).unwrap();

        let err = unstake(&mut pool, &mut user, ONE_SOL, T0).unwrap_err();
        assert_eq!(err, StakingError::LockupNotElapsed.into());
        assert_eq!(user.principal, ONE_SOL);

        let now = T0 + DEFAULT_LOCKUP_PERIOD + 1;
        assert_eq!(unstake(&mut pool, &mut user, ONE_SOL, now).unwrap(), ONE_SOL);
        assert_eq!(user.staked_amount(), 0);
        assert_eq!(pool.total_staked(), 0);
        assert_eq!(pool.staker_count, 0);
        // Reward earned while staked survives the withdrawal.
        assert!(user.accrued_unclaimed > 0);
    }

    #[test]
    fn unstake_amount_validation() {
        let mut pool = new_pool(Pubkey::new_unique());
        let mut user = UserStake::default();
        stake(&mut pool, &mut user, ONE_SOL, T0).unwrap();
        let now = T0 + DEFAULT_LOCKUP_PERIOD;

        assert_eq!(
            unstake(&mut pool, &mut user, 0, now).unwrap_err(),
            StakingError::InvalidAmount.into()
        );
        assert_eq!(
            unstake(&mut pool, &mut user, ONE_SOL + 1, now).unwrap_err(),
            StakingError::InsufficientStake.into()
        );

        unstake(&mut pool, &mut user, ONE_SOL / 4, now).unwrap();
        assert_eq!(user.principal, ONE_SOL - ONE_SOL / 4);
        assert_eq!(pool.staker_count, 1);
    }

    #[test]
    fn unstake_without_stake_is_insufficient() {
        let mut pool = new_pool(Pubkey::new_unique());
        let mut user = UserStake::default();
        assert_eq!(
            unstake(&mut pool, &mut user, 1, T0 + DEFAULT_LOCKUP_PERIOD).unwrap_err(),
            StakingError::InsufficientStake.into()
        );
    }

    #[test]
    fn funded_claim_pays_a_days_reward() {
        let owner = Pubkey::new_unique();
        let mut pool = new_pool(owner);
        let mut user = UserStake::default();

        fund_reward_pool(&mut pool, &owner, 1_000_000 * ONE_TOKEN, T0).unwrap();
        stake(&mut pool, &mut user, ONE_SOL, T0).unwrap();

        let now = T0 + SECONDS_PER_DAY;
        let available = available_reward(&pool, &user, now).unwrap();
        assert!(available.abs_diff(ONE_TOKEN / 100) <= ONE_TOKEN / 1_000);
        // Reading does not checkpoint.
        assert_eq!(user.last_accrual_time, T0);

        let paid = claim_reward(&mut pool, &mut user, now).unwrap();
        assert_eq!(paid, available);
        assert_eq!(user.accrued_unclaimed, 0);
        assert_eq!(user.total_claimed, paid);
        assert_eq!(pool.reward_pool_balance(), 1_000_000 * ONE_TOKEN - paid);
        assert_eq!(available_reward(&pool, &user, now).unwrap(), 0);
    }

    #[test]
    fn claim_against_empty_pool_changes_nothing() {
        let mut pool = new_pool(Pubkey::new_unique());
        let mut user = UserStake::default();
        stake(&mut pool, &mut user, ONE_SOL, T0).unwrap();
        let user_before = user.clone();
        let pool_before = pool.clone();

        let err = claim_reward(&mut pool, &mut user, T0 + SECONDS_PER_DAY).unwrap_err();
        assert_eq!(err, StakingError::InsufficientPool.into());
        assert_eq!(user, user_before);
        assert_eq!(pool, pool_before);
    }

    #[test]
    fn claim_with_nothing_accrued_is_rejected() {
        let owner = Pubkey::new_unique();
        let mut pool = new_pool(owner);
        fund_reward_pool(&mut pool, &owner, ONE_TOKEN, T0).unwrap();
        let mut user = UserStake::default();

        assert_eq!(
            claim_reward(&mut pool, &mut user, T0).unwrap_err(),
            StakingError::NoRewardAvailable.into()
        );
    }

    #[test]
    fn funding_is_owner_only() {
        let owner = Pubkey::new_unique();
        let mut pool = new_pool(owner);

        assert_eq!(
            fund_reward_pool(&mut pool, &Pubkey::new_unique(), 10, T0).unwrap_err(),
            StakingError::Unauthorized.into()
        );
        assert_eq!(
            fund_reward_pool(&mut pool, &owner, 0, T0).unwrap_err(),
            StakingError::InvalidAmount.into()
        );
        assert_eq!(pool.reward_pool_balance(), 0);

        assert_eq!(fund_reward_pool(&mut pool, &owner, 10, T0).unwrap(), 10);
        assert_eq!(fund_reward_pool(&mut pool, &owner, 5, T0).unwrap(), 15);
    }

    #[test]
    fn emergency_exit_ignores_lockup_and_forfeits_reward() {
        let mut pool = new_pool(Pubkey::new_unique());
        let mut user = UserStake::default();
        stake(&mut pool, &mut user, ONE_SOL, T0).unwrap();
        stake(&mut pool, &mut user, ONE_SOL, T0 + SECONDS_PER_DAY).unwrap();
        let now = T0 + 2 * SECONDS_PER_DAY;
        let owed = available_reward(&pool, &user, now).unwrap();
        assert!(owed > 0);

        let exit = emergency_withdraw(&mut pool, &mut user, now).unwrap();
        assert_eq!(
            exit,
            EmergencyExit {
                principal: 2 * ONE_SOL,
                forfeited_reward: owed,
            }
        );
        assert_eq!(user.principal, 0);
        assert_eq!(user.accrued_unclaimed, 0);
        assert_eq!(pool.total_staked(), 0);
        assert_eq!(pool.staker_count, 0);
        assert_eq!(available_reward(&pool, &user, now + SECONDS_PER_DAY).unwrap(), 0);

        assert_eq!(
            emergency_withdraw(&mut pool, &mut user, now).unwrap_err(),
            StakingError::NothingStaked.into()
        );
    }

    #[test]
    fn record_is_reusable_after_full_exit() {
        let mut pool = new_pool(Pubkey::new_unique());
        let mut user = UserStake::default();
        stake(&mut pool, &mut user, ONE_SOL, T0).unwrap();
        emergency_withdraw(&mut pool, &mut user, T0 + 10).unwrap();

        let later = T0 + SECONDS_PER_DAY;
        stake(&mut pool, &mut user, ONE_SOL, later).unwrap();
        // Nothing accrued while the principal was zero.
        assert_eq!(user.accrued_unclaimed, 0);
        assert_eq!(user.staked_at, later);
        assert_eq!(pool.staker_count, 1);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Stake(usize, u64),
        Unstake(usize, u64),
        Emergency(usize),
        Claim(usize),
        Fund(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..3usize, 0..=10 * ONE_SOL).prop_map(|(i, a)| Op::Stake(i, a)),
            (0..3usize, 0..=10 * ONE_SOL).prop_map(|(i, a)| Op::Unstake(i, a)),
            (0..3usize).prop_map(Op::Emergency),
            (0..3usize).prop_map(Op::Claim),
            (0..=ONE_TOKEN).prop_map(Op::Fund),
        ]
    }

    proptest! {
        #[test]
        fn ledger_conserves_and_rolls_back(
            steps in prop::collection::vec((op(), 0..2 * DEFAULT_LOCKUP_PERIOD), 1..40)
        ) {
            let owner = Pubkey::new_unique();
            let mut pool = new_pool(owner);
            let mut users = vec![UserStake::default(); 3];
            let mut now = T0;

            for (op, dt) in steps {
                now += dt;
                let pool_before = pool.clone();
                let users_before = users.clone();

                let outcome = match op {
                    Op::Stake(i, amount) => stake(&mut pool, &mut users[i], amount, now),
                    Op::Unstake(i, amount) => {
                        let unlocked = users[i].is_lockup_elapsed(now, pool.lockup_period);
                        let result = unstake(&mut pool, &mut users[i], amount, now).map(|_| ());
                        if !unlocked {
                            prop_assert!(matches!(
                                &result,
                                Err(e) if *e == StakingError::LockupNotElapsed.into()
                            ));
                        }
                        result
                    }
                    Op::Emergency(i) => {
                        let principal = users[i].principal;
                        emergency_withdraw(&mut pool, &mut users[i], now).map(|exit| {
                            assert_eq!(exit.principal, principal);
                        })
                    }
                    Op::Claim(i) => claim_reward(&mut pool, &mut users[i], now).map(|_| ()),
                    Op::Fund(amount) => fund_reward_pool(&mut pool, &owner, amount, now).map(|_| ()),
                };

                if outcome.is_err() {
                    prop_assert_eq!(&pool, &pool_before);
                    prop_assert_eq!(&users, &users_before);
                }

                let sum: u64 = users.iter().map(|u| u.principal).sum();
                prop_assert_eq!(pool.total_staked(), sum);
                let active = users.iter().filter(|u| u.principal > 0).count() as u64;
                prop_assert_eq!(pool.staker_count, active);
                prop_assert_eq!(
                    pool.reward_pool.total_funded,
                    pool.reward_pool.balance() + pool.reward_pool.total_disbursed
                );
            }
        }

        #[test]
        fn emergency_always_returns_principal_and_zeroes_reward(
            amount in 1..=100 * ONE_SOL,
            held in 0..3 * DEFAULT_LOCKUP_PERIOD,
        ) {
            let mut pool = new_pool(Pubkey::new_unique());
            let mut user = UserStake::default();
            stake(&mut pool, &mut user, amount, T0).unwrap();

            let exit = emergency_withdraw(&mut pool, &mut user, T0 + held).unwrap();
            prop_assert_eq!(exit.principal, amount);
            prop_assert_eq!(user.accrued_unclaimed, 0);
            prop_assert_eq!(user.principal, 0);
        }

        #[test]
        fn unstake_succeeds_iff_lockup_elapsed(
            amount in 1..=100 * ONE_SOL,
            fraction in 1u64..=100,
            held in 0..2 * DEFAULT_LOCKUP_PERIOD,
        ) {
            let mut pool = new_pool(Pubkey::new_unique());
            let mut user = UserStake::default();
            stake(&mut pool, &mut user, amount, T0).unwrap();
            let withdraw = (amount * fraction / 100).max(1);

            let result = unstake(&mut pool, &mut user, withdraw, T0 + held);
            if held >= DEFAULT_LOCKUP_PERIOD {
                prop_assert_eq!(result.unwrap(), withdraw);
            } else {
                prop_assert_eq!(result.unwrap_err(), StakingError::LockupNotElapsed.into());
            }
        }
    }
}
