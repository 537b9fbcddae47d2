// src/schedule.rs
//! Off-chain mirror of the `TokenVesting` release curve: zero before the
//! cliff, linear between start and start + duration, the full amount after
//! (or immediately on revocation). Evaluating the curve locally lets a caller
//! answer "how much is releasable right now" without a transaction.

use anyhow::{Context, Result};
use ethers::providers::Middleware;
use ethers::types::{BlockNumber, U256};

use crate::payment::token_vesting::TokenVesting;
use crate::query::new_multicall;
use crate::token::erc20::ERC20;

#[derive(Debug, Clone, Copy)]
pub struct VestingSchedule {
    pub start: U256,
    pub cliff: U256,
    pub duration: U256,
    pub revoked: bool,
}

/// On-chain state of a vesting position plus the locally evaluated curve.
#[derive(Debug, Clone)]
pub struct VestingStatus {
    pub schedule: VestingSchedule,
    /// Tokens still held by the vesting contract.
    pub balance: U256,
    /// Tokens already released to the beneficiary.
    pub released: U256,
    pub vested: U256,
    pub releasable: U256,
    /// Block timestamp the curve was evaluated at.
    pub timestamp: U256,
}

/// Portion of `total` vested at `now`. `total` is the originally vested
/// amount, i.e. current balance plus everything already released.
pub fn vested_amount(total: U256, schedule: &VestingSchedule, now: U256) -> U256 {
    if now < schedule.cliff {
        return U256::zero();
    }
    let end = schedule.start.saturating_add(schedule.duration);
    if schedule.revoked || now >= end {
        return total;
    }
    if schedule.duration.is_zero() {
        return total;
    }
    let elapsed = now.saturating_sub(schedule.start);
    total * elapsed / schedule.duration
}

/// Vested amount not yet released.
pub fn releasable_amount(
    balance: U256,
    released: U256,
    schedule: &VestingSchedule,
    now: U256,
) -> U256 {
    let total = balance.saturating_add(released);
    let vested = vested_amount(total, schedule, now);
    vested.saturating_sub(released)
}

/// Gathers the schedule parameters and the held balance in one multicall,
/// then evaluates the curve at the latest block timestamp.
pub async fn vesting_status<M: Middleware + 'static>(
    vesting: &TokenVesting<M>,
    token: &ERC20<M>,
) -> Result<VestingStatus> {
    let token_address = token.address();
    let mut multicall = new_multicall(vesting.client()).await?;
    multicall
        .add_call(vesting.start(), false)
        .add_call(vesting.cliff(), false)
        .add_call(vesting.duration(), false)
        .add_call(vesting.released(token_address), false)
        .add_call(vesting.revoked(token_address), false)
        .add_call(token.balance_of(vesting.address()), false);
    let (start, cliff, duration, released, revoked, balance): (U256, U256, U256, U256, bool, U256) =
        multicall.call().await?;

    let block = vesting
        .client()
        .get_block(BlockNumber::Latest)
        .await?
        .context("latest block unavailable")?;
    let timestamp = block.timestamp;

    let schedule = VestingSchedule {
        start,
        cliff,
        duration,
        revoked,
    };
    let total = balance.saturating_add(released);
    let vested = vested_amount(total, &schedule, timestamp);
    Ok(VestingStatus {
        schedule,
        balance,
        released,
        vested,
        releasable: vested.saturating_sub(released),
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(start: u64, cliff: u64, duration: u64) -> VestingSchedule {
        VestingSchedule {
            start: U256::from(start),
            cliff: U256::from(cliff),
            duration: U256::from(duration),
            revoked: false,
        }
    }

    #[test]
    fn nothing_vests_before_the_cliff() {
        let s = schedule(1_000, 1_500, 2_000);
        assert_eq!(
            vested_amount(U256::from(10_000u64), &s, U256::from(1_499u64)),
            U256::zero()
        );
    }

    #[test]
    fn vests_linearly_between_start_and_end() {
        let s = schedule(1_000, 1_000, 2_000);
        // Halfway through the duration, half the total has vested.
        assert_eq!(
            vested_amount(U256::from(10_000u64), &s, U256::from(2_000u64)),
            U256::from(5_000u64)
        );
        // Three quarters through.
        assert_eq!(
            vested_amount(U256::from(10_000u64), &s, U256::from(2_500u64)),
            U256::from(7_500u64)
        );
    }

    #[test]
    fn everything_vests_at_the_end() {
        let s = schedule(1_000, 1_000, 2_000);
        assert_eq!(
            vested_amount(U256::from(10_000u64), &s, U256::from(3_000u64)),
            U256::from(10_000u64)
        );
        assert_eq!(
            vested_amount(U256::from(10_000u64), &s, U256::from(1_000_000u64)),
            U256::from(10_000u64)
        );
    }

    #[test]
    fn revocation_vests_the_remainder_immediately() {
        let mut s = schedule(1_000, 1_000, 2_000);
        s.revoked = true;
        assert_eq!(
            vested_amount(U256::from(10_000u64), &s, U256::from(1_001u64)),
            U256::from(10_000u64)
        );
        // The cliff still gates a revoked schedule.
        assert_eq!(
            vested_amount(U256::from(10_000u64), &s, U256::from(999u64)),
            U256::zero()
        );
    }

    #[test]
    fn zero_duration_releases_everything_at_start() {
        let s = schedule(1_000, 1_000, 0);
        assert_eq!(
            vested_amount(U256::from(10_000u64), &s, U256::from(1_000u64)),
            U256::from(10_000u64)
        );
    }

    #[test]
    fn releasable_accounts_for_prior_releases() {
        let s = schedule(1_000, 1_000, 2_000);
        // Balance 7_000 with 3_000 already released: total 10_000, half
        // vested at t=2_000, minus the 3_000 out the door.
        assert_eq!(
            releasable_amount(
                U256::from(7_000u64),
                U256::from(3_000u64),
                &s,
                U256::from(2_000u64)
            ),
            U256::from(2_000u64)
        );
        // More released than vested (possible right after a revoke on-chain
        // rounding) clamps to zero.
        assert_eq!(
            releasable_amount(
                U256::from(1_000u64),
                U256::from(9_000u64),
                &s,
                U256::from(1_999u64)
            ),
            U256::zero()
        );
    }
}
