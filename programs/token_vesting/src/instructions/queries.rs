//! Read-only views. Each returns its value through the transaction return
//! data, so clients can call them by simulation.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{HOLDER_SEED, LEDGER_SEED, SCHEDULE_INDEX_SEED, SCHEDULE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{HolderRecord, ScheduleIndexEntry, VestingLedger, VestingSchedule};
use crate::utils::schedule_id::compute_schedule_id;

pub fn get_vesting_schedules_count(ctx: Context<LedgerQuery>) -> Result<u64> {
    Ok(ctx.accounts.ledger.schedules_count)
}

pub fn get_vesting_schedules_total_amount(ctx: Context<LedgerQuery>) -> Result<u64> {
    Ok(ctx.accounts.ledger.total_reserved)
}

pub fn get_token(ctx: Context<LedgerQuery>) -> Result<Pubkey> {
    Ok(ctx.accounts.ledger.mint)
}

pub fn compute_vesting_schedule_id_for_address_and_index(
    _ctx: Context<LedgerQuery>,
    holder: Pubkey,
    index: u64,
) -> Result<[u8; 32]> {
    Ok(compute_schedule_id(&holder, index))
}

pub fn get_withdrawable_amount(ctx: Context<VaultQuery>) -> Result<u64> {
    Ok(ctx.accounts.ledger.withdrawable_amount(ctx.accounts.vault.amount)?)
}

pub fn get_vesting_id_at_index(ctx: Context<IndexQuery>, index: u64) -> Result<[u8; 32]> {
    ctx.accounts.ledger.check_index(index)?;
    let entry = ctx
        .accounts
        .schedule_index
        .as_ref()
        .ok_or(VestingError::IndexOutOfBounds)?;
    Ok(entry.schedule_id)
}

pub fn get_vesting_schedules_count_by_beneficiary(
    ctx: Context<HolderQuery>,
    _holder: Pubkey,
) -> Result<u64> {
    Ok(ctx
        .accounts
        .holder_record
        .as_ref()
        .map_or(0, |r| r.vesting_count))
}

pub fn compute_next_vesting_schedule_id_for_holder(
    ctx: Context<HolderQuery>,
    holder: Pubkey,
) -> Result<[u8; 32]> {
    let count = ctx
        .accounts
        .holder_record
        .as_ref()
        .map_or(0, |r| r.vesting_count);
    Ok(compute_schedule_id(&holder, count))
}

pub fn get_vesting_schedule_by_address_and_index(
    ctx: Context<HolderScheduleQuery>,
    _holder: Pubkey,
    index: u64,
) -> Result<VestingSchedule> {
    let id = ctx.accounts.holder_record.schedule_id_at(index)?;
    let s = &ctx.accounts.vesting_schedule;
    require!(s.schedule_id == id, VestingError::InvalidScheduleId);
    Ok((**s).clone())
}

pub fn get_last_vesting_schedule_for_holder(
    ctx: Context<HolderScheduleQuery>,
    _holder: Pubkey,
) -> Result<VestingSchedule> {
    let id = ctx.accounts.holder_record.last_schedule_id()?;
    let s = &ctx.accounts.vesting_schedule;
    require!(s.schedule_id == id, VestingError::InvalidScheduleId);
    Ok((**s).clone())
}

#[derive(Accounts)]
pub struct LedgerQuery<'info> {
    #[account(seeds = [LEDGER_SEED, ledger.mint.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,
}

#[derive(Accounts)]
pub struct VaultQuery<'info> {
    #[account(seeds = [LEDGER_SEED, ledger.mint.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,

    #[account(seeds = [VAULT_SEED, ledger.key().as_ref()], bump = ledger.vault_bump)]
    pub vault: Account<'info, TokenAccount>,
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct IndexQuery<'info> {
    #[account(seeds = [LEDGER_SEED, ledger.mint.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,

    /// Absent when `index` is past the end.
    #[account(
        seeds = [SCHEDULE_INDEX_SEED, ledger.key().as_ref(), &index.to_le_bytes()],
        bump,
    )]
    pub schedule_index: Option<Account<'info, ScheduleIndexEntry>>,
}

#[derive(Accounts)]
#[instruction(holder: Pubkey)]
pub struct HolderQuery<'info> {
    #[account(seeds = [LEDGER_SEED, ledger.mint.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,

    /// Absent until the first schedule for `holder` is created.
    #[account(
        seeds = [HOLDER_SEED, ledger.key().as_ref(), holder.as_ref()],
        bump,
    )]
    pub holder_record: Option<Account<'info, HolderRecord>>,
}

#[derive(Accounts)]
#[instruction(holder: Pubkey)]
pub struct HolderScheduleQuery<'info> {
    #[account(seeds = [LEDGER_SEED, ledger.mint.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        seeds = [HOLDER_SEED, ledger.key().as_ref(), holder.as_ref()],
        bump = holder_record.bump,
    )]
    pub holder_record: Account<'info, HolderRecord>,

    #[account(
        seeds = [SCHEDULE_SEED, ledger.key().as_ref(), vesting_schedule.schedule_id.as_ref()],
        bump = vesting_schedule.bump,
        has_one = ledger,
    )]
    pub vesting_schedule: Account<'info, VestingSchedule>,
}
