use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::constants::*;
use crate::curve;
use crate::errors::CurveFunError;
use crate::state::{NftListing, Platform};

#[derive(Accounts)]
pub struct BuyNft<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// The current owner of the listing, paid the net sale proceeds
    #[account(
        mut,
        constraint = nft_listing.owner == seller.key(),
    )]
    pub seller: SystemAccount<'info>,

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
        seeds = [NFT_LISTING_SEED, nft_mint.key().as_ref()],
        bump = nft_listing.bump,
    )]
    pub nft_listing: Account<'info, NftListing>,

    /// Escrow token account holding the NFT while it is listed
    #[account(
        mut,
        associated_token::mint = nft_mint,
        associated_token::authority = nft_listing,
    )]
    pub listing_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = nft_mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        constraint = nft_listing.mint == nft_mint.key(),
    )]
    pub nft_mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}

impl<'info> BuyNft<'info> {
    /// Settles a listed NFT sale: the asking price is split between the
    /// seller and the platform with the same fee arithmetic the curve uses,
    /// and the listing PDA hands the token over to the buyer.
    pub fn buy_nft(&mut self) -> Result<()> {
        require!(self.nft_listing.for_sale, CurveFunError::NftNotForSale);

        let (platform_fee, seller_proceeds) =
            curve::split_fee(self.nft_listing.price, self.platform.fee_percentage)?;

        let pay_ctx = CpiContext::new(
            self.system_program.to_account_info(),
            Transfer {
                from: self.buyer.to_account_info(),
                to: self.seller.to_account_info(),
            },
        );
        transfer(pay_ctx, seller_proceeds)?;

        if platform_fee > 0 {
            let fee_ctx = CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.buyer.to_account_info(),
                    to: self.fee_recipient.to_account_info(),
                },
            );
            transfer(fee_ctx, platform_fee)?;
        }

        // The listing PDA releases the escrowed token
        let nft_mint_key = self.nft_mint.key();
        let seeds = &[NFT_LISTING_SEED, nft_mint_key.as_ref(), &[self.nft_listing.bump]];
        let signer_seeds = &[&seeds[..]];

        let handover_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            TransferChecked {
                from: self.listing_token_account.to_account_info(),
                to: self.buyer_token_account.to_account_info(),
                mint: self.nft_mint.to_account_info(),
                authority: self.nft_listing.to_account_info(),
            },
            signer_seeds,
        );
        transfer_checked(handover_ctx, 1, self.nft_mint.decimals)?;

        let listing = &mut self.nft_listing;
        listing.owner = self.buyer.key();
        listing.for_sale = false;

        emit!(NftSold {
            nft_mint: self.nft_mint.key(),
            nft_listing: listing.key(),
            seller: self.seller.key(),
            buyer: self.buyer.key(),
            price: listing.price,
            platform_fee,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

#[event]
pub struct NftSold {
    pub nft_mint: Pubkey,
    pub nft_listing: Pubkey,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub price: u64,
    pub platform_fee: u64,
    pub timestamp: i64,
}
