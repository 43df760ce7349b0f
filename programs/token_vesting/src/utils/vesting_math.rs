//! Sliced linear vesting.
//! - nothing vests before the cliff
//! - everything vests at or after `start + duration`
//! - in between, elapsed time is truncated to whole slices and the vested
//!   share is computed once against the full duration, in u128

use crate::error::VestingError;

/// Instant at which the cliff ends.
pub fn cliff_ts(start: i64, cliff_duration: u64) -> Result<i64, VestingError> {
    let d = i64::try_from(cliff_duration).map_err(|_| VestingError::MathOverflow)?;
    start.checked_add(d).ok_or(VestingError::MathOverflow)
}

/// Instant at which the full amount has vested.
pub fn vesting_end_ts(start: i64, duration: u64) -> Result<i64, VestingError> {
    let d = i64::try_from(duration).map_err(|_| VestingError::MathOverflow)?;
    start.checked_add(d).ok_or(VestingError::MathOverflow)
}

/// Largest multiple of `slice_period` that is <= `elapsed`.
pub fn vested_seconds(elapsed: u64, slice_period: u64) -> Result<u64, VestingError> {
    if slice_period == 0 {
        return Err(VestingError::InvalidSlicePeriod);
    }
    (elapsed / slice_period)
        .checked_mul(slice_period)
        .ok_or(VestingError::MathOverflow)
}

/// Cumulative amount vested at `now`, ignoring what was already released.
pub fn vested_amount(
    amount_total: u64,
    start: i64,
    cliff: i64,
    duration: u64,
    slice_period: u64,
    now: i64,
) -> Result<u64, VestingError> {
    if now < cliff {
        return Ok(0);
    }
    if now >= vesting_end_ts(start, duration)? {
        return Ok(amount_total);
    }
    // cliff >= start, so now >= start here.
    let elapsed = now
        .checked_sub(start)
        .and_then(|e| u64::try_from(e).ok())
        .ok_or(VestingError::MathOverflow)?;
    let seconds = vested_seconds(elapsed, slice_period)?;
    let v = (amount_total as u128)
        .checked_mul(seconds as u128)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(duration as u128)
        .ok_or(VestingError::InvalidDuration)?;
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: u64 = 86_400;
    const START: i64 = 1_700_000_000;

    fn at(days: u64) -> i64 {
        START + (days * DAY) as i64
    }

    fn yearly(now: i64) -> u64 {
        let cliff = cliff_ts(START, 30 * DAY).unwrap();
        vested_amount(1_200, START, cliff, 365 * DAY, 30 * DAY, now).unwrap()
    }

    #[test]
    fn zero_before_cliff() {
        assert_eq!(yearly(START), 0);
        assert_eq!(yearly(at(29)), 0);
        assert_eq!(yearly(at(30) - 1), 0);
    }

    #[test]
    fn first_slice_at_cliff() {
        assert_eq!(yearly(at(30)), 1_200 * 30 / 365);
        assert_eq!(yearly(at(30)), 98);
    }

    #[test]
    fn partial_slices_do_not_count() {
        assert_eq!(yearly(at(59)), 98);
        assert_eq!(yearly(at(60) - 1), 98);
        assert_eq!(yearly(at(60)), 1_200 * 60 / 365);
    }

    #[test]
    fn fully_vested_at_end() {
        assert_eq!(yearly(at(365)), 1_200);
        assert_eq!(yearly(at(5_000)), 1_200);
        // last full slice before the end is day 360
        assert_eq!(yearly(at(365) - 1), 1_200 * 360 / 365);
    }

    #[test]
    fn single_second_slices_are_linear() {
        let v = vested_amount(1_000, 0, 0, 1_000, 1, 250).unwrap();
        assert_eq!(v, 250);
    }

    #[test]
    fn no_precision_loss_on_large_amounts() {
        let total = u64::MAX;
        let v = vested_amount(total, 0, 0, 3, 1, 1).unwrap();
        assert_eq!(v, (total as u128 / 3) as u64);
    }

    #[test]
    fn zero_slice_period_rejected() {
        assert!(matches!(
            vested_seconds(10, 0),
            Err(VestingError::InvalidSlicePeriod)
        ));
    }

    #[test]
    fn overflowing_end_rejected() {
        assert!(matches!(
            vesting_end_ts(i64::MAX, 1),
            Err(VestingError::MathOverflow)
        ));
        assert!(matches!(
            cliff_ts(0, u64::MAX),
            Err(VestingError::MathOverflow)
        ));
    }
}
