#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

declare_id!("A1vBmdqojNdKkzSJ7KGsB14Cyjv1wfvpfP1Y2bXKE6d2");

pub const CONFIG_SEED: &[u8] = b"config";

#[program]
pub mod config_admin_vuln {
    use super::*;

    pub fn initialize_config(ctx: Context<InitializeConfig>, admin: Pubkey) -> Result<()> {
        let config = &mut ctx.accounts.config;
        config.admin = admin;
        config.value = 0;

        msg!("Config initialized with admin: {}", admin);
        Ok(())
    }

    /// VULNERABILITY: the only check is that the account passed as `admin`
    /// signed. Nothing ties that account to `config.admin`, so an attacker
    /// passes their own wallet as `admin`, signs, and the write goes through.
    pub fn update_config(ctx: Context<UpdateConfig>, value: u8) -> Result<()> {
        // Mirrors the deployed program. `Signer` already rejects an unsigned
        // `admin` during validation, so this branch is never reached.
        if !ctx.accounts.admin.is_signer {
            return Err(ProgramError::MissingRequiredSignature.into());
        }

        // MISSING: ctx.accounts.admin.key() == ctx.accounts.config.admin
        let config = &mut ctx.accounts.config;
        config.value = value;

        msg!("Config value set to {} by {}", value, ctx.accounts.admin.key());
        Ok(())
    }
}

#[account]
pub struct Config {
    pub admin: Pubkey,
    pub value: u8,
}

impl Config {
    /// discriminator + admin + value
    pub const LEN: usize = 8 + 32 + 1;
}

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// Funds the account. Not required to be the admin being named.
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

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// VULNERABILITY: a signer, but whose key is treated as plain data.
    /// No `has_one = admin`, so any wallet can be supplied here.
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::ErrorCode as AnchorErrorCode;
    use anchor_lang::solana_program::account_info::AccountInfo;
    use anchor_lang::solana_program::clock::Epoch;
    use std::collections::BTreeSet;

    fn make_account(
        key: Pubkey,
        owner: Pubkey,
        is_signer: bool,
        is_writable: bool,
        data: Vec<u8>,
    ) -> AccountInfo<'static> {
        let leaked_key = Box::leak(Box::new(key));
        let leaked_owner = Box::leak(Box::new(owner));
        let lamports = Box::leak(Box::new(1_000_000_000u64));
        let data: &'static mut [u8] = Box::leak(data.into_boxed_slice());

        AccountInfo::new(
            leaked_key,
            is_signer,
            is_writable,
            lamports,
            data,
            leaked_owner,
            false,
            Epoch::default(),
        )
    }

    fn serialize_config(admin: Pubkey, value: u8) -> Vec<u8> {
        let mut data = Vec::with_capacity(Config::LEN);
        Config { admin, value }.try_serialize(&mut data).unwrap();
        data
    }

    fn config_account(admin: Pubkey, value: u8) -> &'static AccountInfo<'static> {
        let (address, _) = Pubkey::find_program_address(&[CONFIG_SEED], &crate::id());
        Box::leak(Box::new(make_account(
            address,
            crate::id(),
            false,
            true,
            serialize_config(admin, value),
        )))
    }

    #[test]
    fn any_signer_can_overwrite_value() {
        let program_id = crate::id();
        let admin = Pubkey::new_unique();
        let malicious = Pubkey::new_unique();

        let config_ai = config_account(admin, 0);
        let malicious_ai: &'static AccountInfo<'static> = Box::leak(Box::new(make_account(
            malicious,
            Pubkey::new_unique(),
            true,
            false,
            vec![],
        )));

        let infos: Vec<AccountInfo<'static>> = vec![malicious_ai.clone(), config_ai.clone()];
        let (_, bump) = Pubkey::find_program_address(&[CONFIG_SEED], &program_id);

        let mut accounts = UpdateConfig {
            admin: Signer::try_from(malicious_ai).unwrap(),
            config: Account::<Config>::try_from(config_ai).unwrap(),
        };
        let ctx = Context::new(&program_id, &mut accounts, infos.as_slice(), UpdateConfigBumps { config: bump });

        config_admin_vuln::update_config(ctx, 99).unwrap();

        // The signature of the flaw: the write landed, the admin never moved.
        assert_eq!(accounts.config.value, 99);
        assert_eq!(accounts.config.admin, admin);
    }

    #[test]
    fn validation_accepts_a_stranger_as_admin() {
        let program_id = crate::id();
        let admin = Pubkey::new_unique();

        let config_ai = config_account(admin, 7);
        let stranger_ai = make_account(Pubkey::new_unique(), Pubkey::new_unique(), true, false, vec![]);

        let infos: &'static [AccountInfo<'static>] =
            Box::leak(vec![stranger_ai, config_ai.clone()].into_boxed_slice());
        let mut infos_ref: &[AccountInfo] = infos;
        let mut bumps = UpdateConfigBumps::default();
        let mut reallocs = BTreeSet::new();

        let accounts = UpdateConfig::try_accounts(&program_id, &mut infos_ref, &[], &mut bumps, &mut reallocs);
        assert!(accounts.is_ok(), "nothing links the signer to config.admin");
    }

    #[test]
    fn unsigned_admin_is_still_rejected() {
        let program_id = crate::id();
        let admin = Pubkey::new_unique();

        // The real admin's key, passed without its signature.
        let unsigned_admin_ai = make_account(admin, Pubkey::new_unique(), false, false, vec![]);
        let infos: &'static [AccountInfo<'static>] =
            Box::leak(vec![unsigned_admin_ai, config_account(admin, 7).clone()].into_boxed_slice());
        let mut infos_ref: &[AccountInfo] = infos;
        let mut bumps = UpdateConfigBumps::default();
        let mut reallocs = BTreeSet::new();

        let Err(err) = UpdateConfig::try_accounts(&program_id, &mut infos_ref, &[], &mut bumps, &mut reallocs) else {
            panic!("an unsigned admin account must not validate");
        };
        assert_eq!(
            ProgramError::from(err),
            ProgramError::Custom(AnchorErrorCode::AccountNotSigner.into())
        );
    }
}
