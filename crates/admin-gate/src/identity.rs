use anchor_lang::prelude::*;

/// A key the runtime has verified as a signer of the current request.
///
/// There is no public constructor taking a raw `Pubkey`. Values come from an
/// Anchor [`Signer`] account or from a ledger transaction's signer set, so an
/// instruction argument or a deserialized field can never stand in for one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifiedSigner(Pubkey);

impl VerifiedSigner {
    #[cfg_attr(not(feature = "ledger"), allow(dead_code))]
    pub(crate) fn new_unchecked(key: Pubkey) -> Self {
        Self(key)
    }

    pub fn key(&self) -> &Pubkey {
        &self.0
    }
}

impl<'info> From<&Signer<'info>> for VerifiedSigner {
    fn from(signer: &Signer<'info>) -> Self {
        Self(signer.key())
    }
}
