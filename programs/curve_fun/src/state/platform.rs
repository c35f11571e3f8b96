use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Platform {
    pub owner: Pubkey,
    pub fee_recipient: Pubkey,
    pub fee_percentage: u64,
    pub migration_threshold: u64,
    pub bump: u8,
}
