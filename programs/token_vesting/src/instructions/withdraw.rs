use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingLedger;
use crate::utils::token::transfer_from_vault;

/// Returns unreserved vault tokens to the admin.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    require_keys_eq!(
        ctx.accounts.admin_destination.owner,
        admin,
        VestingError::InvalidTokenAccount
    );

    let accounts = &mut *ctx.accounts;
    accounts.ledger.lock()?;
    accounts
        .ledger
        .check_withdraw(&admin, amount, accounts.vault.amount)?;
    accounts.ledger.exit(&crate::ID)?;

    transfer_from_vault(
        &accounts.ledger,
        &accounts.vault,
        &accounts.mint,
        &accounts.admin_destination,
        &accounts.token_program,
        amount,
    )?;
    accounts.ledger.unlock();

    msg!("admin withdrew {}", amount);
    emit!(AdminWithdrawn { admin, amount });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut, seeds = [LEDGER_SEED, ledger.mint.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,

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
        constraint = admin_destination.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub admin_destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AdminWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
}
