use anchor_lang::prelude::*;

#[error_code]
pub enum CurveFunError {
    // Math
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("Invalid price")]
    InvalidPrice,

    #[msg("Invalid pool parameters")]
    InvalidPool,

    // Configuration
    #[msg("Fee percentage cannot exceed 100")]
    FeeTooHigh,

    #[msg("Name too long")]
    NameTooLong,

    // Lifecycle
    #[msg("Pool has already migrated")]
    PoolAlreadyMigrated,

    #[msg("Market cap has not reached the migration threshold")]
    ThresholdNotReached,

    #[msg("NFT is not for sale")]
    NftNotForSale,

    // Permissions
    #[msg("Not owner")]
    NotOwner,
}
