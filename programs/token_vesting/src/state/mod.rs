pub mod holder_record;
pub mod schedule_index;
pub mod vesting_ledger;
pub mod vesting_schedule;

pub use holder_record::*;
pub use schedule_index::*;
pub use vesting_ledger::*;
pub use vesting_schedule::*;
