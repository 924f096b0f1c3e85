use admin_gate::{admin_gate, VerifiedSigner};
use anchor_lang::prelude::*;

use crate::error::ConfigError;

/// Seed of the singleton config PDA.
pub const CONFIG_SEED: &[u8] = b"config";

#[account]
#[derive(Debug)]
pub struct Config {
    /// Set once by `initialize_config`; only `transfer_admin` moves it.
    pub admin: Pubkey,
    /// Writable by the admin alone.
    pub value: u8,
}

impl Config {
    /// discriminator + admin + value
    pub const LEN: usize = 8 + 32 + 1;

    /// Fails with `Unauthorized` unless `signer` is the stored admin.
    pub fn authorize(&self, signer: &VerifiedSigner) -> Result<()> {
        if !admin_gate(&self.admin, signer).is_authorized() {
            msg!("Rejected signer {}, admin is {}", signer.key(), self.admin);
            return err!(ConfigError::Unauthorized);
        }
        Ok(())
    }
}

/// Address and bump of the config account for this program.
pub fn config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], &crate::ID)
}

/// Reads a config account, or `NotFound` if nothing of ours lives there.
pub fn fetch_config(info: &AccountInfo) -> Result<Config> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return err!(ConfigError::NotFound);
    }

    let data = info.try_borrow_data()?;
    Config::try_deserialize(&mut &data[..])
}
