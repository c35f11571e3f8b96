use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2, CreateMetadataAccountsV3,
        Metadata as Metaplex,
    },
    token_interface::{mint_to, Mint, MintTo, TokenAccount, TokenInterface},
};

use crate::constants::*;
use crate::errors::CurveFunError;
use crate::state::{NftListing, UserAccount};

/// Mints a 1-of-1 NFT and lists it for sale in one shot.
///
/// The listing PDA is the mint authority and holds the token in its own
/// associated account until `buy_nft` hands it over, so a sale never needs
/// the seller to co-sign.
#[derive(Accounts)]
pub struct CreateNft<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    /// The creator's user record; tracks how many NFTs they have minted
    #[account(
        mut,
        seeds = [USER_SEED, creator.key().as_ref()],
        bump = user_account.bump,
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        init,
        payer = creator,
        mint::decimals = 0,
        mint::authority = nft_listing,
        mint::freeze_authority = nft_listing,
    )]
    pub nft_mint: InterfaceAccount<'info, Mint>,

    #[account(init,
    payer = creator,
    space = 8 + NftListing::INIT_SPACE,
    seeds = [NFT_LISTING_SEED, nft_mint.key().as_ref()],
    bump,
    )]
    pub nft_listing: Account<'info, NftListing>,

    /// Escrow token account holding the NFT while it is listed
    #[account(
        init,
        payer = creator,
        associated_token::mint = nft_mint,
        associated_token::authority = nft_listing,
    )]
    pub listing_token_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Validated by deriving the metadata PDA
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), nft_mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub metadata_account: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    pub token_metadata_program: Program<'info, Metaplex>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,

    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreateNft<'info> {
    pub fn create_nft(
        &mut self,
        name: String,
        symbol: String,
        uri: String,
        price: u64,
        bumps: CreateNftBumps,
    ) -> Result<()> {
        require!(price > 0, CurveFunError::InvalidPrice);

        let nft_mint_key = self.nft_mint.key();
        let seeds = &[NFT_LISTING_SEED, nft_mint_key.as_ref(), &[bumps.nft_listing]];
        let signer = &[&seeds[..]];

        let token_data = DataV2 {
            name,
            symbol,
            uri,
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        };

        let metadata_ctx = CpiContext::new_with_signer(
            self.token_metadata_program.to_account_info(),
            CreateMetadataAccountsV3 {
                metadata: self.metadata_account.to_account_info(),
                mint: self.nft_mint.to_account_info(),
                mint_authority: self.nft_listing.to_account_info(),
                update_authority: self.nft_listing.to_account_info(),
                payer: self.creator.to_account_info(),
                system_program: self.system_program.to_account_info(),
                rent: self.rent.to_account_info(),
            },
            signer,
        );
        create_metadata_accounts_v3(metadata_ctx, token_data, false, true, None)?;

        // The single unit goes into the listing's escrow account
        let mint_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            MintTo {
                mint: self.nft_mint.to_account_info(),
                to: self.listing_token_account.to_account_info(),
                authority: self.nft_listing.to_account_info(),
            },
            signer,
        );
        mint_to(mint_ctx, 1)?;

        self.nft_listing.set_inner(NftListing {
            mint: self.nft_mint.key(),
            creator: self.creator.key(),
            owner: self.creator.key(),
            price,
            for_sale: true,
            bump: bumps.nft_listing,
        });

        self.user_account.nfts_created = self
            .user_account
            .nfts_created
            .checked_add(1)
            .ok_or(CurveFunError::MathOverflow)?;

        emit!(NftCreated {
            nft_mint: self.nft_mint.key(),
            nft_listing: self.nft_listing.key(),
            creator: self.creator.key(),
            price,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

#[event]
pub struct NftCreated {
    pub nft_mint: Pubkey,
    pub nft_listing: Pubkey,
    pub creator: Pubkey,
    pub price: u64,
    pub timestamp: i64,
}
