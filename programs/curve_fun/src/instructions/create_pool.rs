use anchor_lang::prelude::*;
use anchor_spl::{
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2, CreateMetadataAccountsV3,
        Metadata as Metaplex,
    },
    token_interface::{Mint, TokenInterface},
};

use crate::constants::*;
use crate::errors::CurveFunError;
use crate::state::{Pool, UserAccount};

/// # CreatePool Instruction
///
/// Launches a new synthetic token priced by an exponential bonding curve.
/// It creates the SPL mint, its Metaplex metadata and the pool PDA that will
/// act as mint authority for the life of the curve.
///
/// ## Bonding Curve Mechanism
/// The pool prices every unit at `base_price * e^(growth_factor * market_cap)`:
/// - Price starts at exactly `base_price` while nothing has been bought
/// - Every buy grows the escrow-backed market cap and therefore the price
/// - Sells shrink the market cap and walk the price back down the curve
///
/// No supply is minted up front: tokens are minted on buys and burned on
/// sells, so the pool's recorded supply always equals circulation.
#[derive(Accounts)]
pub struct CreatePool<'info> {
    /// The account paying for the initialization costs and creating the pool
    #[account(mut)]
    pub creator: Signer<'info>,

    /// The creator's user record; tracks how many pools they have launched
    #[account(
        mut,
        seeds = [USER_SEED, creator.key().as_ref()],
        bump = user_account.bump,
    )]
    pub user_account: Account<'info, UserAccount>,

    /// The pool account governing price dynamics for this token
    /// PDA derived from "pool" and the token mint address
    #[account(init,
    payer = creator,
    space = 8 + Pool::INIT_SPACE,
    seeds = [POOL_SEED, token_mint.key().as_ref()],
    bump,
    )]
    pub pool: Account<'info, Pool>,

    /// SOL escrow that will back the market cap, one per pool
    #[account(
        seeds = [POOL_SOL_ESCROW_SEED, pool.key().as_ref()],
        bump,
    )]
    pub pool_sol_escrow: SystemAccount<'info>,

    /// The token mint; the pool PDA is both mint and freeze authority
    #[account(
        init,
        payer = creator,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = pool,
        mint::freeze_authority = pool,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: Validated by deriving the metadata PDA
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), token_mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub metadata_account: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    pub token_metadata_program: Program<'info, Metaplex>,

    pub system_program: Program<'info, System>,

    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreatePool<'info> {
    pub fn create_pool(
        &mut self,
        name: String,
        symbol: String,
        uri: String,
        base_price: u64,
        growth_factor: u64,
        bumps: CreatePoolBumps,
    ) -> Result<()> {
        // A curve with a zero base price or zero growth never prices anything
        require!(base_price > 0, CurveFunError::InvalidPool);
        require!(growth_factor > 0, CurveFunError::InvalidPool);

        let token_data = DataV2 {
            name,
            symbol,
            uri,
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        };

        // The pool PDA signs as mint authority for the metadata creation
        let token_mint_key = self.token_mint.key();
        let seeds = &[POOL_SEED, token_mint_key.as_ref(), &[bumps.pool]];
        let signer = &[&seeds[..]];

        let metadata_ctx = CpiContext::new_with_signer(
            self.token_metadata_program.to_account_info(),
            CreateMetadataAccountsV3 {
                metadata: self.metadata_account.to_account_info(),
                mint: self.token_mint.to_account_info(),
                mint_authority: self.pool.to_account_info(),
                update_authority: self.pool.to_account_info(),
                payer: self.creator.to_account_info(),
                system_program: self.system_program.to_account_info(),
                rent: self.rent.to_account_info(),
            },
            signer,
        );

        create_metadata_accounts_v3(metadata_ctx, token_data, false, true, None)?;

        msg!("Creating pool for mint {}", token_mint_key);

        self.pool.set_inner(Pool {
            token_mint: self.token_mint.key(),
            creator: self.creator.key(),
            base_price,
            growth_factor,
            current_market_cap: 0,
            total_supply: 0,
            past_threshold: false,
            is_migrated: false,
            bump: bumps.pool,
        });

        self.user_account.pools_created = self
            .user_account
            .pools_created
            .checked_add(1)
            .ok_or(CurveFunError::MathOverflow)?;

        emit!(PoolCreated {
            pool: self.pool.key(),
            token_mint: self.token_mint.key(),
            creator: self.creator.key(),
            base_price,
            growth_factor,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

/// Event emitted when a new pool is launched
#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub token_mint: Pubkey,
    pub creator: Pubkey,
    /// Price at zero market cap, PRECISION scale
    pub base_price: u64,
    /// Curve steepness, GROWTH_FACTOR_PRECISION scale
    pub growth_factor: u64,
    pub timestamp: i64,
}
