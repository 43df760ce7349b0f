use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_SEED, SCHEDULE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::instructions::release::TokensReleased;
use crate::state::{VestingLedger, VestingSchedule};
use crate::utils::token::transfer_from_vault;

/// Freezes a revocable schedule, paying out whatever had vested.
pub fn revoke(ctx: Context<Revoke>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();
    let accounts = &mut *ctx.accounts;

    accounts.ledger.lock()?;
    let outcome = accounts
        .ledger
        .revoke(&mut accounts.vesting_schedule, &admin, now)?;

    accounts.ledger.exit(&crate::ID)?;
    accounts.vesting_schedule.exit(&crate::ID)?;

    let s = &accounts.vesting_schedule;
    if outcome.released > 0 {
        transfer_from_vault(
            &accounts.ledger,
            &accounts.vault,
            &accounts.mint,
            &accounts.beneficiary_token_account,
            &accounts.token_program,
            outcome.released,
        )?;
        emit!(TokensReleased {
            schedule_id: s.schedule_id,
            beneficiary: s.beneficiary,
            amount: outcome.released,
            released_total: s.released,
        });
    }
    accounts.ledger.unlock();

    msg!(
        "revoked schedule of {}: paid {}, forfeited {}",
        s.beneficiary,
        outcome.released,
        outcome.forfeited
    );
    emit!(VestingScheduleRevoked {
        schedule_id: s.schedule_id,
        beneficiary: s.beneficiary,
        released: outcome.released,
        forfeited: outcome.forfeited,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Revoke<'info> {
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

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingScheduleRevoked {
    pub schedule_id: [u8; 32],
    pub beneficiary: Pubkey,
    pub released: u64,
    pub forfeited: u64,
}
