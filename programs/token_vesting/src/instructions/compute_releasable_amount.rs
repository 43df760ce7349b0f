use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, SCHEDULE_SEED};
use crate::state::{VestingLedger, VestingSchedule};

/// Releasable amount at the current clock. Revoked schedules report 0.
pub fn compute_releasable_amount(ctx: Context<ScheduleQuery>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let s = &ctx.accounts.vesting_schedule;

    let vested = if s.revoked { s.released } else { s.vested_amount(now)? };
    let releasable = s.releasable_amount(now)?;

    emit!(VestingQuote {
        schedule_id: s.schedule_id,
        beneficiary: s.beneficiary,
        vested_amount: vested,
        released_amount: s.released,
        releasable,
    });

    Ok(releasable)
}

pub fn get_vesting_schedule(ctx: Context<ScheduleQuery>) -> Result<VestingSchedule> {
    Ok((*ctx.accounts.vesting_schedule).clone())
}

#[derive(Accounts)]
pub struct ScheduleQuery<'info> {
    #[account(seeds = [LEDGER_SEED, ledger.mint.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        seeds = [SCHEDULE_SEED, ledger.key().as_ref(), vesting_schedule.schedule_id.as_ref()],
        bump = vesting_schedule.bump,
        has_one = ledger,
    )]
    pub vesting_schedule: Account<'info, VestingSchedule>,
}

#[event]
pub struct VestingQuote {
    pub schedule_id: [u8; 32],
    pub beneficiary: Pubkey,
    pub vested_amount: u64,
    pub released_amount: u64,
    pub releasable: u64,
}
