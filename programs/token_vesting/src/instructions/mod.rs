pub mod initialize_ledger;
pub mod deposit_tokens;
pub mod create_vesting_schedule;
pub mod release;
pub mod revoke;
pub mod withdraw;
pub mod transfer_admin;
pub mod compute_releasable_amount;
pub mod queries;

pub use initialize_ledger::*;
pub use deposit_tokens::*;
pub use create_vesting_schedule::*;
pub use release::*;
pub use revoke::*;
pub use withdraw::*;
pub use transfer_admin::*;
pub use compute_releasable_amount::*;
pub use queries::*;
