//! Admin authorization shared by the config-admin programs.
//!
//! [`admin_gate`] is the only place an authorization decision is made. It takes
//! the admin already committed to storage and a [`VerifiedSigner`], never a key
//! lifted from instruction data. The `ledger` feature adds an off-chain model of
//! the config store so the state machine can be driven without a validator.

pub mod gate;
pub mod identity;

#[cfg(feature = "ledger")]
pub mod error;
#[cfg(feature = "ledger")]
pub mod ledger;

pub use gate::*;
pub use identity::*;

#[cfg(feature = "ledger")]
pub use error::*;
#[cfg(feature = "ledger")]
pub use ledger::*;
