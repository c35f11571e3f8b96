//! Protocol constants shared with off-chain clients.

// ============================================================================
// FIXED-POINT SCALING
// ============================================================================

/// Scale for prices and market caps (9 decimal places)
pub const PRECISION: u64 = 1_000_000_000;

/// Scale for the curve growth factor (11 decimal places)
pub const GROWTH_FACTOR_PRECISION: u64 = 100_000_000_000;

// ============================================================================
// PLATFORM DEFAULTS
// ============================================================================

/// Market cap at which a pool becomes eligible for migration
pub const MIGRATION_THRESHOLD: u64 = 69_000 * PRECISION;

/// Platform fee taken on every trade, in whole percent
pub const FEE_PERCENTAGE: u64 = 2;

/// Hard cap on the configurable fee (100%)
pub const MAX_FEE_PERCENTAGE: u64 = 100;

// ============================================================================
// LIMITS
// ============================================================================

/// Maximum length of a user display name
pub const MAX_NAME_LEN: usize = 32;

/// Decimals for pool token mints
pub const TOKEN_DECIMALS: u8 = 6;

// ============================================================================
// PDA SEEDS
// ============================================================================

pub const PLATFORM_SEED: &[u8] = b"platform";

pub const USER_SEED: &[u8] = b"user";

pub const POOL_SEED: &[u8] = b"pool";

pub const POOL_SOL_ESCROW_SEED: &[u8] = b"pool_sol_escrow";

pub const NFT_LISTING_SEED: &[u8] = b"nft_listing";
