use anchor_lang::prelude::*;

use crate::error::{VestingError, VestingResult};
use crate::utils::vesting_math;

/// One vesting commitment to a single beneficiary.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    /// Ledger this schedule is reserved against.
    pub ledger: Pubkey,
    /// `blake3(beneficiary || index)` at creation time.
    pub schedule_id: [u8; 32],
    /// Receiver of released tokens. Immutable.
    pub beneficiary: Pubkey,
    /// `start + cliff_duration` (Unix seconds).
    pub cliff: i64,
    /// Vesting start (Unix seconds).
    pub start: i64,
    /// Total vesting span in seconds.
    pub duration: u64,
    /// Vesting granularity in seconds; partial slices do not vest.
    pub slice_period_seconds: u64,
    pub revocable: bool,
    /// Total amount this schedule will ever release.
    pub amount_total: u64,
    /// Cumulative amount released so far.
    pub released: u64,
    pub revoked: bool,
    pub bump: u8,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // ledger
        32 + // schedule_id
        32 + // beneficiary
        8 +  // cliff
        8 +  // start
        8 +  // duration
        8 +  // slice_period_seconds
        1 +  // revocable
        8 +  // amount_total
        8 +  // released
        1 +  // revoked
        1;   // bump

    /// Vested amount at `now`, regardless of the revoked flag.
    pub fn vested_amount(&self, now: i64) -> VestingResult<u64> {
        vesting_math::vested_amount(
            self.amount_total,
            self.start,
            self.cliff,
            self.duration,
            self.slice_period_seconds,
            now,
        )
    }

    /// Vested but not yet released. Always zero once revoked.
    pub fn releasable_amount(&self, now: i64) -> VestingResult<u64> {
        if self.revoked {
            return Ok(0);
        }
        self.vested_amount(now)?
            .checked_sub(self.released)
            .ok_or(VestingError::MathOverflow)
    }

    /// Amount still owed over the life of the schedule.
    pub fn unreleased(&self) -> VestingResult<u64> {
        self.amount_total
            .checked_sub(self.released)
            .ok_or(VestingError::MathOverflow)
    }
}

/// Parameters of a new schedule, as submitted by the admin.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleParams {
    pub beneficiary: Pubkey,
    pub start: i64,
    pub cliff_duration: u64,
    pub duration: u64,
    pub slice_period_seconds: u64,
    pub revocable: bool,
    pub amount: u64,
}

impl ScheduleParams {
    /// Shape checks that do not depend on ledger state.
    pub fn validate(&self) -> VestingResult<()> {
        if self.beneficiary == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        if self.duration == 0 {
            return Err(VestingError::InvalidDuration);
        }
        if self.amount == 0 {
            return Err(VestingError::InvalidAmount);
        }
        if self.slice_period_seconds < 1 {
            return Err(VestingError::InvalidSlicePeriod);
        }
        if self.duration < self.cliff_duration {
            return Err(VestingError::CliffExceedsDuration);
        }
        // Reject schedules whose end does not fit in a timestamp.
        vesting_math::vesting_end_ts(self.start, self.duration)?;
        Ok(())
    }
}
