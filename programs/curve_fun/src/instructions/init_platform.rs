use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::CurveFunError;
use crate::state::Platform;

#[derive(Accounts)]
pub struct InitPlatform<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(init,
    payer = payer,
    space = 8 + Platform::INIT_SPACE,
    seeds = [PLATFORM_SEED],
    bump,
    )]
    pub platform: Account<'info, Platform>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitPlatform<'info> {
    pub fn init_platform(
        &mut self,
        fee_recipient: Pubkey,
        fee_percentage: u64,
        migration_threshold: u64,
        bumps: InitPlatformBumps,
    ) -> Result<()> {
        require!(fee_percentage <= MAX_FEE_PERCENTAGE, CurveFunError::FeeTooHigh);
        require!(migration_threshold > 0, CurveFunError::InvalidAmount);

        self.platform.set_inner(Platform {
            owner: self.payer.key(),
            fee_recipient,
            fee_percentage,
            migration_threshold,
            bump: bumps.platform,
        });

        Ok(())
    }
}
