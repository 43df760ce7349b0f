use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::error::VestingError;
use crate::state::VestingLedger;

pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    require!(new_admin != Pubkey::default(), VestingError::InvalidPubkey);

    let ledger = &mut ctx.accounts.ledger;
    ledger.require_admin(&ctx.accounts.admin.key())?;

    let old_admin = ledger.admin;
    ledger.admin = new_admin;

    msg!("admin {} -> {}", old_admin, new_admin);
    emit!(AdminTransferred {
        old_admin,
        new_admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    #[account(mut, seeds = [LEDGER_SEED, ledger.mint.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
