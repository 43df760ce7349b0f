use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::LEDGER_SEED;
use crate::error::VestingError;
use crate::state::VestingLedger;

/// Moves `amount` out of the vault, signed by the ledger PDA.
pub fn transfer_from_vault<'info>(
    ledger: &Account<'info, VestingLedger>,
    vault: &Account<'info, TokenAccount>,
    mint: &Account<'info, Mint>,
    destination: &Account<'info, TokenAccount>,
    token_program: &Program<'info, Token>,
    amount: u64,
) -> Result<()> {
    require!(vault.amount >= amount, VestingError::InsufficientVaultBalance);

    let mint_key = ledger.mint;
    let bump = ledger.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_SEED, mint_key.as_ref(), &[bump]]];
    token::transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            TransferChecked {
                from: vault.to_account_info(),
                mint: mint.to_account_info(),
                to: destination.to_account_info(),
                authority: ledger.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        mint.decimals,
    )
    .map_err(|e| {
        msg!("vault transfer failed: {}", e);
        error!(VestingError::TransferFailed)
    })
}
