use anchor_lang::prelude::*;

/// Global insertion-order slot: `index -> schedule_id`.
#[account]
#[derive(InitSpace, Debug)]
pub struct ScheduleIndexEntry {
    pub ledger: Pubkey,
    pub index: u64,
    pub schedule_id: [u8; 32],
    pub bump: u8,
}
