use anchor_lang::prelude::*;

#[error_code]
pub enum ConfigError {
    #[msg("Unauthorized: only the config admin can perform this action")]
    Unauthorized,
    #[msg("No config account exists at this address")]
    NotFound,
}
