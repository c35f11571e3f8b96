use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{burn, mint_to, Burn, Mint, MintTo, TokenAccount, TokenInterface},
};

use crate::constants::*;
use crate::curve;
use crate::errors::CurveFunError;
use crate::state::{Platform, Pool};

#[derive(Accounts)]
pub struct TradeToken<'info> {
    #[account(mut)]
    pub trader: Signer<'info>,

    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        constraint = platform.fee_recipient == fee_recipient.key(),
    )]
    pub fee_recipient: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, token_mint.key().as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [POOL_SOL_ESCROW_SEED, pool.key().as_ref()],
        bump,
    )]
    pub pool_sol_escrow: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = trader,
        associated_token::mint = token_mint,
        associated_token::authority = trader,
    )]
    pub trader_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        constraint = pool.token_mint == token_mint.key(),
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}

impl<'info> TradeToken<'info> {
    /// Buys `amount` synthetic tokens at the pre-trade spot price.
    ///
    /// The quote's net portion lands in the pool escrow, the fee goes to the
    /// platform recipient, and the tokens are minted straight to the trader.
    /// Crossing the migration threshold latches `past_threshold` for good.
    pub fn buy_token(&mut self, amount: u64) -> Result<()> {
        require!(!self.pool.is_migrated, CurveFunError::PoolAlreadyMigrated);

        let quote = curve::quote_buy(&self.pool, amount, self.platform.fee_percentage)?;

        // Net proceeds back the market cap in the escrow
        let transfer_ctx = CpiContext::new(
            self.system_program.to_account_info(),
            Transfer {
                from: self.trader.to_account_info(),
                to: self.pool_sol_escrow.to_account_info(),
            },
        );
        transfer(transfer_ctx, quote.net_amount)?;

        if quote.platform_fee > 0 {
            let fee_ctx = CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.trader.to_account_info(),
                    to: self.fee_recipient.to_account_info(),
                },
            );
            transfer(fee_ctx, quote.platform_fee)?;
        }

        // The pool PDA is the mint authority
        let token_mint_key = self.token_mint.key();
        let seeds = &[POOL_SEED, token_mint_key.as_ref(), &[self.pool.bump]];
        let signer_seeds = &[&seeds[..]];

        let mint_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            MintTo {
                mint: self.token_mint.to_account_info(),
                to: self.trader_token_account.to_account_info(),
                authority: self.pool.to_account_info(),
            },
            signer_seeds,
        );
        mint_to(mint_ctx, amount)?;

        let pool = &mut self.pool;
        pool.current_market_cap = pool
            .current_market_cap
            .checked_add(quote.net_amount)
            .ok_or(CurveFunError::MathOverflow)?;
        pool.total_supply = pool
            .total_supply
            .checked_add(amount)
            .ok_or(CurveFunError::MathOverflow)?;

        // One-way latch; a later drop below the threshold does not undo it
        if curve::is_past_threshold(pool.current_market_cap, self.platform.migration_threshold) {
            pool.past_threshold = true;
        }

        emit!(TokenTraded {
            pool: pool.key(),
            token_mint: self.token_mint.key(),
            trader: self.trader.key(),
            side: TradeSide::Buy,
            amount,
            cost: quote.cost,
            platform_fee: quote.platform_fee,
            market_cap: pool.current_market_cap,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    /// Sells `amount` synthetic tokens back to the curve.
    ///
    /// The tokens are burned, the net payout leaves the escrow for the
    /// trader and the fee for the platform recipient. The market cap drops
    /// by the gross cost, since both halves of the split leave the escrow.
    pub fn sell_token(&mut self, amount: u64, bumps: TradeTokenBumps) -> Result<()> {
        require!(!self.pool.is_migrated, CurveFunError::PoolAlreadyMigrated);

        let quote = curve::quote_sell(&self.pool, amount, self.platform.fee_percentage)?;

        require!(
            self.pool_sol_escrow.lamports() >= quote.cost,
            CurveFunError::InsufficientFunds
        );

        let burn_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Burn {
                mint: self.token_mint.to_account_info(),
                from: self.trader_token_account.to_account_info(),
                authority: self.trader.to_account_info(),
            },
        );
        burn(burn_ctx, amount)?;

        // Escrow payouts are signed by the escrow PDA itself
        let pool_key = self.pool.key();
        let seeds = &[POOL_SOL_ESCROW_SEED, pool_key.as_ref(), &[bumps.pool_sol_escrow]];
        let signer_seeds = &[&seeds[..]];

        let payout_ctx = CpiContext::new_with_signer(
            self.system_program.to_account_info(),
            Transfer {
                from: self.pool_sol_escrow.to_account_info(),
                to: self.trader.to_account_info(),
            },
            signer_seeds,
        );
        transfer(payout_ctx, quote.net_amount)?;

        if quote.platform_fee > 0 {
            let fee_ctx = CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.pool_sol_escrow.to_account_info(),
                    to: self.fee_recipient.to_account_info(),
                },
                signer_seeds,
            );
            transfer(fee_ctx, quote.platform_fee)?;
        }

        let pool = &mut self.pool;
        pool.current_market_cap = pool
            .current_market_cap
            .checked_sub(quote.cost)
            .ok_or(CurveFunError::InsufficientFunds)?;
        pool.total_supply = pool
            .total_supply
            .checked_sub(amount)
            .ok_or(CurveFunError::InsufficientFunds)?;

        emit!(TokenTraded {
            pool: pool.key(),
            token_mint: self.token_mint.key(),
            trader: self.trader.key(),
            side: TradeSide::Sell,
            amount,
            cost: quote.cost,
            platform_fee: quote.platform_fee,
            market_cap: pool.current_market_cap,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

#[event]
pub struct TokenTraded {
    pub pool: Pubkey,
    pub token_mint: Pubkey,
    pub trader: Pubkey,
    pub side: TradeSide,
    pub amount: u64,
    pub cost: u64,
    pub platform_fee: u64,
    pub market_cap: u64,
    pub timestamp: i64,
}
