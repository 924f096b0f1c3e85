use anchor_lang::prelude::*;

use crate::state::{Config, CONFIG_SEED};

/// Creates the config with `value = 0`.
///
/// The payer only funds the account; `admin` may name anyone. A second call
/// fails because `init` cannot create an address that is already in use.
pub fn initialize_config_handler(ctx: Context<InitializeConfig>, admin: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.admin = admin;
    config.value = 0;

    msg!("Config initialized with admin: {}", admin);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = Config::LEN,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}
