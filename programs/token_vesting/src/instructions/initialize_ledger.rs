use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::state::VestingLedger;

pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let vault_key = ctx.accounts.vault.key();
    let ledger = &mut ctx.accounts.ledger;
    ledger.set_inner(VestingLedger {
        admin: ctx.accounts.admin.key(),
        mint: ctx.accounts.mint.key(),
        vault: vault_key,
        total_reserved: 0,
        schedules_count: 0,
        locked: false,
        bump: ctx.bumps.ledger,
        vault_bump: ctx.bumps.vault,
    });

    msg!("ledger initialized for mint {}", ledger.mint);
    emit!(LedgerInitialized {
        admin: ledger.admin,
        mint: ledger.mint,
        vault: ledger.vault,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = admin,
        space = 8 + VestingLedger::SIZE,
        seeds = [LEDGER_SEED, mint.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = ledger,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
}
