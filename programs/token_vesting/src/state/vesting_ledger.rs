use anchor_lang::prelude::*;

use crate::error::{VestingError, VestingResult};
use crate::state::{HolderRecord, ScheduleParams, VestingSchedule};
use crate::utils::vesting_math;

/// Ledger PDA: one per mint, owns the token vault.
///
/// Every mutating entry point goes through the methods below, which check
/// all preconditions before writing anything. Token movement happens in the
/// instruction handlers after the accounting has been committed.
#[account]
#[derive(Debug)]
pub struct VestingLedger {
    /// Administrator authority.
    pub admin: Pubkey,
    /// Vested token mint.
    pub mint: Pubkey,
    /// Token vault PDA holding the custody balance.
    pub vault: Pubkey,
    /// Sum of `amount_total - released` over all live schedules.
    pub total_reserved: u64,
    /// Number of schedules ever created (length of the global index).
    pub schedules_count: u64,
    /// Held for the duration of a mutating instruction.
    pub locked: bool,
    pub bump: u8,
    pub vault_bump: u8,
}

/// Result of a revocation: what was paid out, what went back to the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevokeOutcome {
    pub released: u64,
    pub forfeited: u64,
}

impl VestingLedger {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        32 + // vault
        8 +  // total_reserved
        8 +  // schedules_count
        1 +  // locked
        1 +  // bump
        1;   // vault_bump

    pub fn require_admin(&self, caller: &Pubkey) -> VestingResult<()> {
        if *caller != self.admin {
            return Err(VestingError::UnauthorizedAdmin);
        }
        Ok(())
    }

    pub fn lock(&mut self) -> VestingResult<()> {
        if self.locked {
            return Err(VestingError::ReentrantCall);
        }
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Custody balance not reserved by any schedule.
    pub fn withdrawable_amount(&self, vault_balance: u64) -> VestingResult<u64> {
        vault_balance
            .checked_sub(self.total_reserved)
            .ok_or(VestingError::InsufficientVaultBalance)
    }

    /// Reserves `params.amount` for a new schedule and bumps both counters.
    ///
    /// `schedule_id` must be the holder's next slot. The returned schedule
    /// carries a zero bump; the caller stamps the PDA bump.
    pub fn create_schedule(
        &mut self,
        caller: &Pubkey,
        ledger_key: Pubkey,
        schedule_id: [u8; 32],
        holder: &mut HolderRecord,
        params: &ScheduleParams,
        vault_balance: u64,
    ) -> VestingResult<VestingSchedule> {
        self.require_admin(caller)?;
        if self.withdrawable_amount(vault_balance)? < params.amount {
            return Err(VestingError::InsufficientWithdrawableAmount);
        }
        params.validate()?;
        if holder.holder != params.beneficiary || holder.next_schedule_id() != schedule_id {
            return Err(VestingError::InvalidScheduleId);
        }

        let cliff = vesting_math::cliff_ts(params.start, params.cliff_duration)?;
        let total_reserved = self
            .total_reserved
            .checked_add(params.amount)
            .ok_or(VestingError::MathOverflow)?;
        let schedules_count = self
            .schedules_count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        let vesting_count = holder
            .vesting_count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;

        self.total_reserved = total_reserved;
        self.schedules_count = schedules_count;
        holder.vesting_count = vesting_count;

        Ok(VestingSchedule {
            ledger: ledger_key,
            schedule_id,
            beneficiary: params.beneficiary,
            cliff,
            start: params.start,
            duration: params.duration,
            slice_period_seconds: params.slice_period_seconds,
            revocable: params.revocable,
            amount_total: params.amount,
            released: 0,
            revoked: false,
            bump: 0,
        })
    }

    /// Books a release of `amount`; the handler then moves the tokens.
    pub fn release(
        &mut self,
        schedule: &mut VestingSchedule,
        caller: &Pubkey,
        amount: u64,
        now: i64,
    ) -> VestingResult<()> {
        if schedule.revoked {
            return Err(VestingError::ScheduleRevoked);
        }
        if *caller != schedule.beneficiary && *caller != self.admin {
            return Err(VestingError::UnauthorizedCaller);
        }
        if schedule.releasable_amount(now)? < amount {
            return Err(VestingError::NotEnoughVestedTokens);
        }
        self.settle(schedule, amount)
    }

    /// Freezes a revocable schedule.
    ///
    /// The vested-but-unreleased amount is captured before the flag is set
    /// and booked as one final release; the unvested remainder is returned
    /// to the withdrawable pool.
    pub fn revoke(
        &mut self,
        schedule: &mut VestingSchedule,
        caller: &Pubkey,
        now: i64,
    ) -> VestingResult<RevokeOutcome> {
        self.require_admin(caller)?;
        if schedule.revoked {
            return Err(VestingError::ScheduleRevoked);
        }
        if !schedule.revocable {
            return Err(VestingError::ScheduleNotRevocable);
        }

        let released = schedule.releasable_amount(now)?;
        let released_total = schedule
            .released
            .checked_add(released)
            .ok_or(VestingError::MathOverflow)?;
        let forfeited = schedule
            .amount_total
            .checked_sub(released_total)
            .ok_or(VestingError::MathOverflow)?;
        let total_reserved = self
            .total_reserved
            .checked_sub(released)
            .and_then(|r| r.checked_sub(forfeited))
            .ok_or(VestingError::MathOverflow)?;

        schedule.revoked = true;
        schedule.released = released_total;
        self.total_reserved = total_reserved;

        Ok(RevokeOutcome { released, forfeited })
    }

    /// Checks an admin withdrawal against the unreserved balance.
    pub fn check_withdraw(
        &self,
        caller: &Pubkey,
        amount: u64,
        vault_balance: u64,
    ) -> VestingResult<()> {
        self.require_admin(caller)?;
        if amount == 0 {
            return Err(VestingError::InvalidAmount);
        }
        if self.withdrawable_amount(vault_balance)? < amount {
            return Err(VestingError::InsufficientWithdrawableAmount);
        }
        Ok(())
    }

    /// Global enumeration bound.
    pub fn check_index(&self, index: u64) -> VestingResult<()> {
        if index >= self.schedules_count {
            return Err(VestingError::IndexOutOfBounds);
        }
        Ok(())
    }

    fn settle(&mut self, schedule: &mut VestingSchedule, amount: u64) -> VestingResult<()> {
        let released = schedule
            .released
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if released > schedule.amount_total {
            return Err(VestingError::NotEnoughVestedTokens);
        }
        let total_reserved = self
            .total_reserved
            .checked_sub(amount)
            .ok_or(VestingError::MathOverflow)?;
        schedule.released = released;
        self.total_reserved = total_reserved;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod harness {
    use std::collections::HashMap;

    use super::*;

    /// In-memory stand-in for the ledger, its accounts and its vault.
    pub struct Harness {
        pub key: Pubkey,
        pub ledger: VestingLedger,
        pub vault: u64,
        pub holders: HashMap<Pubkey, HolderRecord>,
        pub schedules: Vec<VestingSchedule>,
        pub now: i64,
    }

    impl Harness {
        pub fn new(vault: u64) -> Self {
            let key = Pubkey::new_unique();
            Self {
                key,
                ledger: VestingLedger {
                    admin: Pubkey::new_unique(),
                    mint: Pubkey::new_unique(),
                    vault: Pubkey::new_unique(),
                    total_reserved: 0,
                    schedules_count: 0,
                    locked: false,
                    bump: 255,
                    vault_bump: 254,
                },
                vault,
                holders: HashMap::new(),
                schedules: Vec::new(),
                now: 0,
            }
        }

        pub fn admin(&self) -> Pubkey {
            self.ledger.admin
        }

        pub fn create(&mut self, params: ScheduleParams) -> VestingResult<usize> {
            let admin = self.admin();
            let key = self.key;
            let holder = self
                .holders
                .entry(params.beneficiary)
                .or_insert_with(|| HolderRecord {
                    ledger: key,
                    holder: params.beneficiary,
                    vesting_count: 0,
                    bump: 253,
                });
            let id = holder.next_schedule_id();
            let schedule =
                self.ledger
                    .create_schedule(&admin, key, id, holder, &params, self.vault)?;
            self.schedules.push(schedule);
            Ok(self.schedules.len() - 1)
        }

        pub fn release(&mut self, i: usize, caller: Pubkey, amount: u64) -> VestingResult<()> {
            self.ledger
                .release(&mut self.schedules[i], &caller, amount, self.now)?;
            self.vault -= amount;
            Ok(())
        }

        pub fn revoke(&mut self, i: usize) -> VestingResult<RevokeOutcome> {
            let admin = self.admin();
            let out = self.ledger.revoke(&mut self.schedules[i], &admin, self.now)?;
            self.vault -= out.released;
            Ok(out)
        }

        pub fn withdraw(&mut self, amount: u64) -> VestingResult<()> {
            let admin = self.admin();
            self.ledger.check_withdraw(&admin, amount, self.vault)?;
            self.vault -= amount;
            Ok(())
        }

        /// Outstanding obligations of schedules not reclaimed by revocation.
        pub fn outstanding(&self) -> u64 {
            self.schedules
                .iter()
                .filter(|s| !s.revoked)
                .map(|s| s.amount_total - s.released)
                .sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::harness::Harness;
    use super::*;

    const DAY: u64 = 86_400;

    fn yearly(beneficiary: Pubkey, amount: u64) -> ScheduleParams {
        ScheduleParams {
            beneficiary,
            start: 0,
            cliff_duration: 30 * DAY,
            duration: 365 * DAY,
            slice_period_seconds: 30 * DAY,
            revocable: true,
            amount,
        }
    }

    #[test]
    fn create_reserves_and_counts() {
        let mut h = Harness::new(2_000);
        let alice = Pubkey::new_unique();
        let i = h.create(yearly(alice, 1_200)).unwrap();

        assert_eq!(h.ledger.total_reserved, 1_200);
        assert_eq!(h.ledger.schedules_count, 1);
        assert_eq!(h.holders[&alice].vesting_count, 1);
        assert_eq!(h.ledger.withdrawable_amount(h.vault).unwrap(), 800);

        let s = &h.schedules[i];
        assert_eq!(s.cliff, (30 * DAY) as i64);
        assert_eq!(s.released, 0);
        assert!(!s.revoked);
        assert_eq!(s.schedule_id, h.holders[&alice].schedule_id_at(0).unwrap());
    }

    #[test]
    fn create_beyond_withdrawable_changes_nothing() {
        let mut h = Harness::new(1_000);
        let alice = Pubkey::new_unique();
        h.create(yearly(alice, 600)).unwrap();

        let r = h.create(yearly(alice, 401));
        assert!(matches!(r, Err(VestingError::InsufficientWithdrawableAmount)));
        assert_eq!(h.ledger.total_reserved, 600);
        assert_eq!(h.ledger.schedules_count, 1);
        assert_eq!(h.holders[&alice].vesting_count, 1);
        assert_eq!(h.schedules.len(), 1);
    }

    #[test]
    fn create_requires_admin_and_next_slot() {
        let mut h = Harness::new(1_000);
        let alice = Pubkey::new_unique();
        let mut holder = HolderRecord {
            ledger: h.key,
            holder: alice,
            vesting_count: 0,
            bump: 1,
        };
        let params = yearly(alice, 100);

        let stranger = Pubkey::new_unique();
        let id = holder.next_schedule_id();
        let r = h
            .ledger
            .create_schedule(&stranger, h.key, id, &mut holder, &params, h.vault);
        assert!(matches!(r, Err(VestingError::UnauthorizedAdmin)));

        let admin = h.admin();
        let wrong = crate::utils::schedule_id::compute_schedule_id(&alice, 5);
        let r = h
            .ledger
            .create_schedule(&admin, h.key, wrong, &mut holder, &params, h.vault);
        assert!(matches!(r, Err(VestingError::InvalidScheduleId)));
        assert_eq!(holder.vesting_count, 0);
        assert_eq!(h.ledger.total_reserved, 0);
    }

    #[test]
    fn release_gated_by_cliff_and_amount() {
        let mut h = Harness::new(1_200);
        let alice = Pubkey::new_unique();
        let i = h.create(yearly(alice, 1_200)).unwrap();

        h.now = (29 * DAY) as i64;
        assert_eq!(h.schedules[i].releasable_amount(h.now).unwrap(), 0);
        assert!(matches!(
            h.release(i, alice, 1),
            Err(VestingError::NotEnoughVestedTokens)
        ));

        h.now = (30 * DAY) as i64;
        let releasable = h.schedules[i].releasable_amount(h.now).unwrap();
        assert_eq!(releasable, 1_200 * 30 / 365);

        let r = h.release(i, alice, releasable + 1);
        assert!(matches!(r, Err(VestingError::NotEnoughVestedTokens)));
        assert_eq!(h.schedules[i].released, 0);
        assert_eq!(h.ledger.total_reserved, 1_200);

        h.release(i, alice, releasable).unwrap();
        assert_eq!(h.schedules[i].released, releasable);
        assert_eq!(h.ledger.total_reserved, 1_200 - releasable);
        assert_eq!(h.schedules[i].releasable_amount(h.now).unwrap(), 0);
    }

    #[test]
    fn release_caller_must_be_beneficiary_or_admin() {
        let mut h = Harness::new(1_200);
        let alice = Pubkey::new_unique();
        let i = h.create(yearly(alice, 1_200)).unwrap();
        h.now = (365 * DAY) as i64;

        let r = h.release(i, Pubkey::new_unique(), 10);
        assert!(matches!(r, Err(VestingError::UnauthorizedCaller)));

        let admin = h.admin();
        h.release(i, admin, 10).unwrap();
        h.release(i, alice, 1_190).unwrap();
        assert_eq!(h.schedules[i].released, 1_200);
        assert_eq!(h.ledger.total_reserved, 0);
    }

    #[test]
    fn revoke_pays_vested_once_and_frees_the_rest() {
        let mut h = Harness::new(1_200);
        let alice = Pubkey::new_unique();
        let i = h.create(yearly(alice, 1_200)).unwrap();

        h.now = (60 * DAY) as i64;
        h.release(i, alice, 50).unwrap();

        let out = h.revoke(i).unwrap();
        assert_eq!(out.released, 197 - 50);
        assert_eq!(out.forfeited, 1_200 - 197);
        assert!(h.schedules[i].revoked);
        assert_eq!(h.schedules[i].released, 197);
        assert_eq!(h.ledger.total_reserved, 0);
        assert_eq!(h.ledger.withdrawable_amount(h.vault).unwrap(), 1_200 - 197);

        h.now = (400 * DAY) as i64;
        assert_eq!(h.schedules[i].releasable_amount(h.now).unwrap(), 0);
        assert!(matches!(h.release(i, alice, 1), Err(VestingError::ScheduleRevoked)));
        assert!(matches!(h.revoke(i), Err(VestingError::ScheduleRevoked)));
    }

    #[test]
    fn revoke_before_cliff_pays_nothing() {
        let mut h = Harness::new(1_200);
        let i = h.create(yearly(Pubkey::new_unique(), 1_200)).unwrap();
        h.now = DAY as i64;
        let out = h.revoke(i).unwrap();
        assert_eq!(out, RevokeOutcome { released: 0, forfeited: 1_200 });
        assert_eq!(h.vault, 1_200);
        assert_eq!(h.ledger.total_reserved, 0);
    }

    #[test]
    fn revoke_requires_admin_and_revocable() {
        let mut h = Harness::new(2_000);
        let alice = Pubkey::new_unique();
        let fixed = h
            .create(ScheduleParams { revocable: false, ..yearly(alice, 500) })
            .unwrap();
        assert!(matches!(h.revoke(fixed), Err(VestingError::ScheduleNotRevocable)));

        let i = h.create(yearly(alice, 500)).unwrap();
        let r = h
            .ledger
            .revoke(&mut h.schedules[i], &alice, h.now);
        assert!(matches!(r, Err(VestingError::UnauthorizedAdmin)));
        assert!(!h.schedules[i].revoked);
    }

    #[test]
    fn withdraw_limited_to_unreserved() {
        let mut h = Harness::new(1_000);
        h.create(yearly(Pubkey::new_unique(), 700)).unwrap();

        assert!(matches!(
            h.withdraw(301),
            Err(VestingError::InsufficientWithdrawableAmount)
        ));
        assert!(matches!(h.withdraw(0), Err(VestingError::InvalidAmount)));
        h.withdraw(300).unwrap();
        assert_eq!(h.vault, 700);

        let r = h.ledger.check_withdraw(&Pubkey::new_unique(), 1, 10_000);
        assert!(matches!(r, Err(VestingError::UnauthorizedAdmin)));
    }

    #[test]
    fn lock_rejects_reentry() {
        let mut h = Harness::new(0);
        h.ledger.lock().unwrap();
        assert!(matches!(h.ledger.lock(), Err(VestingError::ReentrantCall)));
        h.ledger.unlock();
        assert!(h.ledger.lock().is_ok());
    }

    #[test]
    fn holder_slots_enumerate_in_creation_order() {
        let mut h = Harness::new(10_000);
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        h.create(yearly(alice, 10)).unwrap();
        h.create(yearly(bob, 10)).unwrap();
        h.create(yearly(alice, 10)).unwrap();

        assert_eq!(h.ledger.schedules_count, 3);
        assert!(h.ledger.check_index(2).is_ok());
        assert!(matches!(h.ledger.check_index(3), Err(VestingError::IndexOutOfBounds)));

        let a = &h.holders[&alice];
        assert_eq!(a.vesting_count, 2);
        assert_eq!(a.schedule_id_at(0).unwrap(), h.schedules[0].schedule_id);
        assert_eq!(a.last_schedule_id().unwrap(), h.schedules[2].schedule_id);
        assert_eq!(h.holders[&bob].last_schedule_id().unwrap(), h.schedules[1].schedule_id);
    }
}
