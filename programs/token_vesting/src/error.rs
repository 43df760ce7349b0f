use anchor_lang::prelude::*;

/// Custom error codes for the token vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: only the beneficiary or the admin can release")]
    UnauthorizedCaller,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Cannot create vesting schedule: insufficient withdrawable tokens")]
    InsufficientWithdrawableAmount,

    #[msg("Vesting duration must be > 0")]
    InvalidDuration,

    #[msg("Amount must be > 0")]
    InvalidAmount,

    #[msg("Slice period must be >= 1 second")]
    InvalidSlicePeriod,

    #[msg("Vesting duration must be >= cliff duration")]
    CliffExceedsDuration,

    #[msg("Schedule id does not match the holder's next slot")]
    InvalidScheduleId,

    #[msg("Index out of bounds")]
    IndexOutOfBounds,

    #[msg("Cannot release tokens: not enough vested tokens")]
    NotEnoughVestedTokens,

    #[msg("Vesting schedule is revoked")]
    ScheduleRevoked,

    #[msg("Vesting schedule is not revocable")]
    ScheduleNotRevocable,

    #[msg("Reentrant call rejected")]
    ReentrantCall,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Result of the pure accounting code; converts into `anchor_lang::Result` with `?`.
pub type VestingResult<T> = core::result::Result<T, VestingError>;
