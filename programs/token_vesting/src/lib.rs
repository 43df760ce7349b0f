use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;

declare_id!("9aAtfa8BnrNq7AyUKXg3FjtYyLesx4XHeigTqm8zJJBS");

#[program]
pub mod token_vesting {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize_ledger(ctx)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens(ctx, amount)
    }

    pub fn create_vesting_schedule(
        ctx: Context<CreateVestingSchedule>,
        schedule_id: [u8; 32],
        params: ScheduleParams,
    ) -> Result<()> {
        instructions::create_vesting_schedule(ctx, schedule_id, params)
    }

    pub fn release(ctx: Context<Release>, amount: u64) -> Result<()> {
        instructions::release(ctx, amount)
    }

    pub fn revoke(ctx: Context<Revoke>) -> Result<()> {
        instructions::revoke(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::transfer_admin(ctx, new_admin)
    }

    pub fn compute_releasable_amount(ctx: Context<ScheduleQuery>) -> Result<u64> {
        instructions::compute_releasable_amount(ctx)
    }

    pub fn get_vesting_schedule(ctx: Context<ScheduleQuery>) -> Result<VestingSchedule> {
        instructions::get_vesting_schedule(ctx)
    }

    pub fn get_vesting_schedules_count(ctx: Context<LedgerQuery>) -> Result<u64> {
        instructions::get_vesting_schedules_count(ctx)
    }

    pub fn get_vesting_schedules_total_amount(ctx: Context<LedgerQuery>) -> Result<u64> {
        instructions::get_vesting_schedules_total_amount(ctx)
    }

    pub fn get_token(ctx: Context<LedgerQuery>) -> Result<Pubkey> {
        instructions::get_token(ctx)
    }

    pub fn get_withdrawable_amount(ctx: Context<VaultQuery>) -> Result<u64> {
        instructions::get_withdrawable_amount(ctx)
    }

    pub fn get_vesting_id_at_index(ctx: Context<IndexQuery>, index: u64) -> Result<[u8; 32]> {
        instructions::get_vesting_id_at_index(ctx, index)
    }

    pub fn get_vesting_schedules_count_by_beneficiary(
        ctx: Context<HolderQuery>,
        holder: Pubkey,
    ) -> Result<u64> {
        instructions::get_vesting_schedules_count_by_beneficiary(ctx, holder)
    }

    pub fn compute_next_vesting_schedule_id_for_holder(
        ctx: Context<HolderQuery>,
        holder: Pubkey,
    ) -> Result<[u8; 32]> {
        instructions::compute_next_vesting_schedule_id_for_holder(ctx, holder)
    }

    pub fn compute_vesting_schedule_id_for_address_and_index(
        ctx: Context<LedgerQuery>,
        holder: Pubkey,
        index: u64,
    ) -> Result<[u8; 32]> {
        instructions::compute_vesting_schedule_id_for_address_and_index(ctx, holder, index)
    }

    pub fn get_vesting_schedule_by_address_and_index(
        ctx: Context<HolderScheduleQuery>,
        holder: Pubkey,
        index: u64,
    ) -> Result<VestingSchedule> {
        instructions::get_vesting_schedule_by_address_and_index(ctx, holder, index)
    }

    pub fn get_last_vesting_schedule_for_holder(
        ctx: Context<HolderScheduleQuery>,
        holder: Pubkey,
    ) -> Result<VestingSchedule> {
        instructions::get_last_vesting_schedule_for_holder(ctx, holder)
    }
}
