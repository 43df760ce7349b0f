pub mod schedule_id;
pub mod token;
pub mod vesting_math;
