use admin_gate::VerifiedSigner;
use anchor_lang::prelude::*;

use crate::state::{Config, CONFIG_SEED};

/// Sets `config.value`. The signer must be the admin already stored in the
/// config; the key of the `admin` account is only trusted once it has been
/// wrapped as a verified signer.
pub fn update_config_handler(ctx: Context<UpdateConfig>, value: u8) -> Result<()> {
    let signer = VerifiedSigner::from(&ctx.accounts.admin);
    ctx.accounts.config.authorize(&signer)?;

    let config = &mut ctx.accounts.config;
    config.value = value;

    msg!("Config value set to {}", value);
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,
}
