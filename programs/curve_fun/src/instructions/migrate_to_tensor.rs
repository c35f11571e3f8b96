use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::token_interface::Mint;

use crate::constants::*;
use crate::errors::CurveFunError;
use crate::state::{Platform, Pool};

/// # MigrateToTensor Instruction
///
/// Graduates a pool whose market cap has reached the migration threshold:
/// curve trading closes permanently and the escrowed SOL is withdrawn so the
/// platform owner can seed liquidity on an external marketplace.
///
/// ## Lifecycle
/// 1. Trading phase: buys and sells settle against the bonding curve
/// 2. Graduation: the market cap touches the threshold and latches
///    `past_threshold` (trading continues, the price may still fall)
/// 3. Migration: this instruction marks the pool migrated and drains the
///    escrow; from here on every buy and sell is rejected
/// 4. External phase: the token trades on the destination marketplace
#[derive(Accounts)]
pub struct MigrateToTensor<'info> {
    /// The platform owner who receives the escrowed SOL for seeding liquidity
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        seeds = [POOL_SEED, token_mint.key().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    /// The escrow holding every net lamport collected during trading
    #[account(
        mut,
        seeds = [POOL_SOL_ESCROW_SEED, pool.key().as_ref()],
        bump,
    )]
    pub pool_sol_escrow: SystemAccount<'info>,

    #[account(
        constraint = pool.token_mint == token_mint.key(),
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    pub system_program: Program<'info, System>,
}

impl<'info> MigrateToTensor<'info> {
    pub fn migrate_to_tensor(&mut self, bumps: MigrateToTensorBumps) -> Result<()> {
        require!(
            self.authority.key() == self.platform.owner,
            CurveFunError::NotOwner
        );
        // Graduation is a latch: it holds even if the market cap has since
        // fallen back under the threshold
        require!(self.pool.past_threshold, CurveFunError::ThresholdNotReached);
        require!(!self.pool.is_migrated, CurveFunError::PoolAlreadyMigrated);

        let escrow_lamports = self.pool_sol_escrow.lamports();
        if escrow_lamports > 0 {
            let pool_key = self.pool.key();
            let seeds = &[POOL_SOL_ESCROW_SEED, pool_key.as_ref(), &[bumps.pool_sol_escrow]];
            let signer_seeds = &[&seeds[..]];

            let drain_ctx = CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.pool_sol_escrow.to_account_info(),
                    to: self.authority.to_account_info(),
                },
                signer_seeds,
            );
            transfer(drain_ctx, escrow_lamports)?;
        }

        self.pool.is_migrated = true;

        msg!("Pool {} migrated, {} lamports withdrawn", self.pool.key(), escrow_lamports);

        emit!(PoolMigrated {
            pool: self.pool.key(),
            token_mint: self.token_mint.key(),
            market_cap: self.pool.current_market_cap,
            escrow_lamports,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

/// Event emitted when a pool graduates off the curve
#[event]
pub struct PoolMigrated {
    pub pool: Pubkey,
    pub token_mint: Pubkey,
    pub market_cap: u64,
    pub escrow_lamports: u64,
    pub timestamp: i64,
}
