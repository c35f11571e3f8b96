use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::CurveFunError;
use crate::state::UserAccount;

#[derive(Accounts)]
pub struct CreateUser<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(init,
    payer = authority,
    space = 8 + UserAccount::INIT_SPACE,
    seeds = [USER_SEED, authority.key().as_ref()],
    bump,
    )]
    pub user_account: Account<'info, UserAccount>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateUser<'info> {
    pub fn create_user(&mut self, name: String, bumps: CreateUserBumps) -> Result<()> {
        require!(name.len() <= MAX_NAME_LEN, CurveFunError::NameTooLong);

        let now = Clock::get()?.unix_timestamp;

        self.user_account.set_inner(UserAccount {
            authority: self.authority.key(),
            name,
            pools_created: 0,
            nfts_created: 0,
            created_at: now,
            bump: bumps.user_account,
        });

        emit!(UserCreated {
            user_account: self.user_account.key(),
            authority: self.authority.key(),
            timestamp: now,
        });

        Ok(())
    }
}

#[event]
pub struct UserCreated {
    pub user_account: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}
