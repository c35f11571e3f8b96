/*
  ██████╗██╗   ██╗██████╗ ██╗   ██╗███████╗    ███████╗██╗   ██╗███╗   ██╗
 ██╔════╝██║   ██║██╔══██╗██║   ██║██╔════╝    ██╔════╝██║   ██║████╗  ██║
 ██║     ██║   ██║██████╔╝██║   ██║█████╗      █████╗  ██║   ██║██╔██╗ ██║
 ██║     ██║   ██║██╔══██╗╚██╗ ██╔╝██╔══╝      ██╔══╝  ██║   ██║██║╚██╗██║
 ╚██████╗╚██████╔╝██║  ██║ ╚████╔╝ ███████╗    ██║     ╚██████╔╝██║ ╚████║
  ╚═════╝ ╚═════╝ ╚═╝  ╚═╝  ╚═══╝  ╚═══════╝   ╚═╝      ╚═════╝ ╚═╝  ╚═══╝

  ✨ Exponential Bonding Curve Token & NFT Launchpad for Solana ✨

 💹 Price
   ^
   |                                 /|
   |                               /
   |                             /
   |                           /
   |                        /
   |                     /
   |                  /
   |              /
   |         _/
   |___----
   +---------------------------------> Market Cap

 🔹 Exponential Price Discovery - price = base * e^(growth * market cap)
 🔹 Synthetic Supply - tokens minted on buys, burned on sells
 🔹 Escrow-Backed Market Cap - every net lamport sits in a pool escrow
 🔹 1-of-1 NFT Listings - mint and list in a single instruction
 🔹 Marketplace Graduation - pools past 69k migrate to external liquidity

 🚀 Launch → 📈 Trade → 🎯 Graduate → 🔄 Migrate
*/

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod curve;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("8rJ3XmsycgYCGqQwgJHyLcHTwq3AVYv2fNjoQ5qotCU4");

#[program]
pub mod curve_fun {
    use super::*;

    pub fn init_platform(
        ctx: Context<InitPlatform>,
        fee_recipient: Pubkey,
        fee_percentage: u64,
        migration_threshold: u64,
    ) -> Result<()> {
        ctx.accounts
            .init_platform(fee_recipient, fee_percentage, migration_threshold, ctx.bumps)
    }

    pub fn create_user(ctx: Context<CreateUser>, name: String) -> Result<()> {
        ctx.accounts.create_user(name, ctx.bumps)
    }

    pub fn create_pool(
        ctx: Context<CreatePool>,
        name: String,
        symbol: String,
        uri: String,
        base_price: u64,
        growth_factor: u64,
    ) -> Result<()> {
        ctx.accounts
            .create_pool(name, symbol, uri, base_price, growth_factor, ctx.bumps)
    }

    pub fn buy_token(ctx: Context<TradeToken>, amount: u64) -> Result<()> {
        ctx.accounts.buy_token(amount)
    }

    pub fn sell_token(ctx: Context<TradeToken>, amount: u64) -> Result<()> {
        ctx.accounts.sell_token(amount, ctx.bumps)
    }

    pub fn create_nft(
        ctx: Context<CreateNft>,
        name: String,
        symbol: String,
        uri: String,
        price: u64,
    ) -> Result<()> {
        ctx.accounts.create_nft(name, symbol, uri, price, ctx.bumps)
    }

    pub fn buy_nft(ctx: Context<BuyNft>) -> Result<()> {
        ctx.accounts.buy_nft()
    }

    pub fn migrate_to_tensor(ctx: Context<MigrateToTensor>) -> Result<()> {
        ctx.accounts.migrate_to_tensor(ctx.bumps)
    }
}
