//! Off-chain model of the config store.
//!
//! The ledger holds one keyed record per derived address. Every operation takes
//! the store lock for its whole read-modify-write, so a request either commits
//! completely or leaves the record as it was.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use anchor_lang::prelude::Pubkey;
use tracing::{debug, warn};

use crate::{admin_gate, GateDecision, StoreError, VerifiedSigner};

/// Namespace tag the config address is derived from.
pub const CONFIG_SEED: &[u8] = b"config";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigRecord {
    pub admin: Pubkey,
    pub value: u8,
}

/// The signer set the runtime verified for one request.
#[derive(Clone, Debug, Default)]
pub struct Transaction {
    signers: BTreeSet<Pubkey>,
}

impl Transaction {
    pub fn signed_by(signers: impl IntoIterator<Item = Pubkey>) -> Self {
        Self {
            signers: signers.into_iter().collect(),
        }
    }

    /// Returns `key` as a verified signer, or `SignatureMissing` when the
    /// request carries no signature for it.
    pub fn signer(&self, key: &Pubkey) -> Result<VerifiedSigner, StoreError> {
        if self.signers.contains(key) {
            Ok(VerifiedSigner::new_unchecked(*key))
        } else {
            Err(StoreError::SignatureMissing(*key))
        }
    }
}

/// How `update_config` authorizes a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// The signer must be the stored admin.
    Gated,
    /// Any signer of the claimed admin key is accepted. This is the deployed
    /// program's behavior and exists so the exploit can be reproduced.
    SignerOnly,
}

#[derive(Debug)]
pub struct Ledger {
    program_id: Pubkey,
    address: Pubkey,
    records: Mutex<HashMap<Pubkey, ConfigRecord>>,
}

impl Ledger {
    pub fn new(program_id: Pubkey) -> Self {
        let (address, _bump) = Pubkey::find_program_address(&[CONFIG_SEED], &program_id);
        Self {
            program_id,
            address,
            records: Mutex::new(HashMap::new()),
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn config_address(&self) -> Pubkey {
        self.address
    }

    /// Creates the config record with `value = 0`.
    ///
    /// `payer` must have signed. `admin` is taken as given: nothing ties it to
    /// the payer.
    pub fn initialize(
        &self,
        tx: &Transaction,
        payer: &Pubkey,
        admin: Pubkey,
    ) -> Result<Pubkey, StoreError> {
        tx.signer(payer)?;

        match self.lock().entry(self.address) {
            Entry::Occupied(_) => Err(StoreError::AlreadyInitialized(self.address)),
            Entry::Vacant(slot) => {
                slot.insert(ConfigRecord { admin, value: 0 });
                debug!(address = %self.address, %admin, %payer, "config initialized");
                Ok(self.address)
            }
        }
    }

    /// Sets `value`. `claimed_admin` must have signed the request; under
    /// [`UpdatePolicy::Gated`] it must also be the stored admin.
    pub fn update_config(
        &self,
        tx: &Transaction,
        claimed_admin: &Pubkey,
        value: u8,
        policy: UpdatePolicy,
    ) -> Result<ConfigRecord, StoreError> {
        let signer = tx.signer(claimed_admin)?;
        let mut records = self.lock();
        let record = records
            .get_mut(&self.address)
            .ok_or(StoreError::NotFound(self.address))?;

        if policy == UpdatePolicy::Gated {
            authorize(record, &signer)?;
        }

        record.value = value;
        debug!(address = %self.address, signer = %signer.key(), value, ?policy, "config updated");
        Ok(*record)
    }

    /// Hands the admin role to `new_admin`. Only the current admin may do this.
    pub fn transfer_admin(
        &self,
        tx: &Transaction,
        current_admin: &Pubkey,
        new_admin: Pubkey,
    ) -> Result<ConfigRecord, StoreError> {
        let signer = tx.signer(current_admin)?;
        let mut records = self.lock();
        let record = records
            .get_mut(&self.address)
            .ok_or(StoreError::NotFound(self.address))?;

        authorize(record, &signer)?;

        let previous = record.admin;
        record.admin = new_admin;
        debug!(address = %self.address, %previous, %new_admin, "admin transferred");
        Ok(*record)
    }

    pub fn fetch_config(&self, address: &Pubkey) -> Result<ConfigRecord, StoreError> {
        self.lock()
            .get(address)
            .copied()
            .ok_or(StoreError::NotFound(*address))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Pubkey, ConfigRecord>> {
        // A panic mid-request never leaves a partial write behind, so the map
        // is still consistent after poisoning.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn authorize(record: &ConfigRecord, signer: &VerifiedSigner) -> Result<(), StoreError> {
    match admin_gate(&record.admin, signer) {
        GateDecision::Authorized => Ok(()),
        GateDecision::Denied => {
            warn!(admin = %record.admin, signer = %signer.key(), "rejected non-admin signer");
            Err(StoreError::Unauthorized {
                signer: *signer.key(),
            })
        }
    }
}
