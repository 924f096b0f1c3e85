use admin_gate::VerifiedSigner;
use anchor_lang::prelude::*;

use crate::state::{Config, CONFIG_SEED};

/// Hands the admin role to `new_admin`. Same gate as `update_config`.
pub fn transfer_admin_handler(ctx: Context<TransferAdmin>) -> Result<()> {
    let signer = VerifiedSigner::from(&ctx.accounts.admin);
    ctx.accounts.config.authorize(&signer)?;

    let config = &mut ctx.accounts.config;
    let previous = config.admin;
    config.admin = ctx.accounts.new_admin.key();

    msg!("Admin transferred from {} to {}", previous, config.admin);
    Ok(())
}

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: only the key is recorded; the new admin does not need to sign.
    pub new_admin: UncheckedAccount<'info>,
}
