#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

declare_id!("8AVDfewpcReTNyFHYtRGdDEYkDNAR7nL7TjNoUWehexU");

pub mod error;
pub mod instructions;
pub mod state;

pub use error::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod config_admin_fix {
    use super::*;

    pub fn initialize_config(ctx: Context<InitializeConfig>, admin: Pubkey) -> Result<()> {
        instructions::initialize_config_handler(ctx, admin)
    }

    /// Only the stored admin may change the value. Passing some other signer
    /// as `admin` fails with `Unauthorized` and leaves the account untouched.
    pub fn update_config(ctx: Context<UpdateConfig>, value: u8) -> Result<()> {
        instructions::update_config_handler(ctx, value)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>) -> Result<()> {
        instructions::transfer_admin_handler(ctx)
    }
}
