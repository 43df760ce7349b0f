use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{HOLDER_SEED, LEDGER_SEED, SCHEDULE_INDEX_SEED, SCHEDULE_SEED, VAULT_SEED};
use crate::state::{HolderRecord, ScheduleIndexEntry, ScheduleParams, VestingLedger, VestingSchedule};

/// Creates a schedule against tokens already sitting in the vault.
///
/// `schedule_id` must equal `blake3(beneficiary || vesting_count)`; it is
/// taken as an argument only because it seeds the schedule PDA.
pub fn create_vesting_schedule(
    ctx: Context<CreateVestingSchedule>,
    schedule_id: [u8; 32],
    params: ScheduleParams,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let ledger_key = ctx.accounts.ledger.key();
    let vault_balance = ctx.accounts.vault.amount;
    let index = ctx.accounts.ledger.schedules_count;

    let holder = &mut ctx.accounts.holder_record;
    if holder.holder == Pubkey::default() {
        holder.ledger = ledger_key;
        holder.holder = params.beneficiary;
        holder.bump = ctx.bumps.holder_record;
    }

    let ledger = &mut ctx.accounts.ledger;
    ledger.lock()?;
    let mut schedule =
        ledger.create_schedule(&admin, ledger_key, schedule_id, holder, &params, vault_balance)?;
    ledger.unlock();

    schedule.bump = ctx.bumps.vesting_schedule;
    ctx.accounts.vesting_schedule.set_inner(schedule);
    ctx.accounts.schedule_index.set_inner(ScheduleIndexEntry {
        ledger: ledger_key,
        index,
        schedule_id,
        bump: ctx.bumps.schedule_index,
    });

    let s = &ctx.accounts.vesting_schedule;
    msg!(
        "schedule #{} created for {}: amount {}, reserved {}",
        index,
        s.beneficiary,
        s.amount_total,
        ctx.accounts.ledger.total_reserved
    );
    emit!(VestingScheduleCreated {
        schedule_id,
        beneficiary: s.beneficiary,
        start: s.start,
        cliff: s.cliff,
        duration: s.duration,
        slice_period_seconds: s.slice_period_seconds,
        amount: s.amount_total,
        revocable: s.revocable,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(schedule_id: [u8; 32], params: ScheduleParams)]
pub struct CreateVestingSchedule<'info> {
    #[account(mut, seeds = [LEDGER_SEED, ledger.mint.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,

    #[account(seeds = [VAULT_SEED, ledger.key().as_ref()], bump = ledger.vault_bump)]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + HolderRecord::INIT_SPACE,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), params.beneficiary.as_ref()],
        bump
    )]
    pub holder_record: Account<'info, HolderRecord>,

    #[account(
        init,
        payer = admin,
        space = 8 + VestingSchedule::SIZE,
        seeds = [SCHEDULE_SEED, ledger.key().as_ref(), schedule_id.as_ref()],
        bump
    )]
    pub vesting_schedule: Account<'info, VestingSchedule>,

    #[account(
        init,
        payer = admin,
        space = 8 + ScheduleIndexEntry::INIT_SPACE,
        seeds = [SCHEDULE_INDEX_SEED, ledger.key().as_ref(), &ledger.schedules_count.to_le_bytes()],
        bump
    )]
    pub schedule_index: Account<'info, ScheduleIndexEntry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingScheduleCreated {
    pub schedule_id: [u8; 32],
    pub beneficiary: Pubkey,
    pub start: i64,
    pub cliff: i64,
    pub duration: u64,
    pub slice_period_seconds: u64,
    pub amount: u64,
    pub revocable: bool,
}
