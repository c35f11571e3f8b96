use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub token_mint: Pubkey,
    pub creator: Pubkey,
    /// Price at zero market cap, PRECISION scale
    pub base_price: u64,
    /// Curve steepness, GROWTH_FACTOR_PRECISION scale
    pub growth_factor: u64,
    /// Escrow-backed market cap, PRECISION scale
    pub current_market_cap: u64,
    /// Synthetic tokens outstanding; minted on buys, burned on sells
    pub total_supply: u64,
    /// Latched once the market cap first reaches the migration threshold.
    /// Never resets, even if the market cap later falls back under it.
    pub past_threshold: bool,
    /// Set by migration; closes curve trading for good
    pub is_migrated: bool,
    pub bump: u8,
}
