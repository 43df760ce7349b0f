use anchor_lang::prelude::*;

use crate::error::{VestingError, VestingResult};
use crate::utils::schedule_id::compute_schedule_id;

/// Per-beneficiary schedule counter. Drives identifier derivation.
#[account]
#[derive(InitSpace, Debug)]
pub struct HolderRecord {
    pub ledger: Pubkey,
    pub holder: Pubkey,
    /// Number of schedules ever created for `holder`.
    pub vesting_count: u64,
    pub bump: u8,
}

impl HolderRecord {
    /// Identifier the next created schedule will receive.
    pub fn next_schedule_id(&self) -> [u8; 32] {
        compute_schedule_id(&self.holder, self.vesting_count)
    }

    /// Identifier of an already created schedule.
    pub fn schedule_id_at(&self, index: u64) -> VestingResult<[u8; 32]> {
        if index >= self.vesting_count {
            return Err(VestingError::IndexOutOfBounds);
        }
        Ok(compute_schedule_id(&self.holder, index))
    }

    pub fn last_schedule_id(&self) -> VestingResult<[u8; 32]> {
        let last = self
            .vesting_count
            .checked_sub(1)
            .ok_or(VestingError::IndexOutOfBounds)?;
        self.schedule_id_at(last)
    }
}
