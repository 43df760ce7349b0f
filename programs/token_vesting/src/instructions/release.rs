use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_SEED, SCHEDULE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{VestingLedger, VestingSchedule};
use crate::utils::token::transfer_from_vault;

pub fn release(ctx: Context<Release>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.caller.key();
    let accounts = &mut *ctx.accounts;

    accounts.ledger.lock()?;
    accounts
        .ledger
        .release(&mut accounts.vesting_schedule, &caller, amount, now)?;

    // Commit the lock and the accounting before control leaves the program.
    accounts.ledger.exit(&crate::ID)?;
    accounts.vesting_schedule.exit(&crate::ID)?;

    transfer_from_vault(
        &accounts.ledger,
        &accounts.vault,
        &accounts.mint,
        &accounts.beneficiary_token_account,
        &accounts.token_program,
        amount,
    )?;
    accounts.ledger.unlock();

    let s = &accounts.vesting_schedule;
    msg!(
        "released {} to {} ({} of {})",
        amount,
        s.beneficiary,
        s.released,
        s.amount_total
    );
    emit!(TokensReleased {
        schedule_id: s.schedule_id,
        beneficiary: s.beneficiary,
        amount,
        released_total: s.released,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(mut, seeds = [LEDGER_SEED, ledger.mint.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        mut,
        seeds = [SCHEDULE_SEED, ledger.key().as_ref(), vesting_schedule.schedule_id.as_ref()],
        bump = vesting_schedule.bump,
        has_one = ledger,
    )]
    pub vesting_schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(address = ledger.mint @ VestingError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == ledger.mint @ VestingError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == vesting_schedule.beneficiary
            @ VestingError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    /// Beneficiary or admin; checked in the ledger.
    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensReleased {
    pub schedule_id: [u8; 32],
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub released_total: u64,
}
