//! Program-wide constants.

/// Seed prefix of the ledger PDA (one ledger per mint).
pub const LEDGER_SEED: &[u8] = b"vesting_ledger";

/// Seed prefix of the token vault PDA owned by the ledger.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed prefix of the per-beneficiary schedule counter.
pub const HOLDER_SEED: &[u8] = b"holder";

/// Seed prefix of a vesting schedule account.
pub const SCHEDULE_SEED: &[u8] = b"vesting_schedule";

/// Seed prefix of the global insertion-order index entries.
pub const SCHEDULE_INDEX_SEED: &[u8] = b"schedule_index";
