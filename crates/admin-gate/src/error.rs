use anchor_lang::prelude::Pubkey;

/// Reasons a ledger request is rejected. A rejected request changes nothing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("config already initialized at {0}")]
    AlreadyInitialized(Pubkey),
    #[error("signer {signer} is not the config admin")]
    Unauthorized { signer: Pubkey },
    #[error("no config stored at {0}")]
    NotFound(Pubkey),
    #[error("missing required signature from {0}")]
    SignatureMissing(Pubkey),
}
