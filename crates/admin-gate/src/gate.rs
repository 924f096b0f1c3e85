use anchor_lang::prelude::Pubkey;

use crate::VerifiedSigner;

/// Outcome of an authorization check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Authorized,
    Denied,
}

impl GateDecision {
    pub fn is_authorized(self) -> bool {
        matches!(self, Self::Authorized)
    }
}

/// Decides whether `signer` may mutate state administered by `stored_admin`.
///
/// `stored_admin` must be read from committed state. The decision is a plain
/// key comparison and has no side effects; callers run it before any write.
pub fn admin_gate(stored_admin: &Pubkey, signer: &VerifiedSigner) -> GateDecision {
    if stored_admin == signer.key() {
        GateDecision::Authorized
    } else {
        GateDecision::Denied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_admin_is_authorized() {
        let admin = Pubkey::new_unique();
        let decision = admin_gate(&admin, &VerifiedSigner::new_unchecked(admin));
        assert_eq!(decision, GateDecision::Authorized);
        assert!(decision.is_authorized());
    }

    #[test]
    fn any_other_signer_is_denied() {
        let admin = Pubkey::new_unique();
        let intruder = VerifiedSigner::new_unchecked(Pubkey::new_unique());
        assert_eq!(admin_gate(&admin, &intruder), GateDecision::Denied);
    }

    #[test]
    fn default_key_gets_no_special_treatment() {
        let signer = VerifiedSigner::new_unchecked(Pubkey::new_unique());
        assert!(!admin_gate(&Pubkey::default(), &signer).is_authorized());
    }
}
