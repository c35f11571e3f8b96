use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct NftListing {
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub owner: Pubkey,
    /// Asking price in lamports
    pub price: u64,
    pub for_sale: bool,
    pub bump: u8,
}
