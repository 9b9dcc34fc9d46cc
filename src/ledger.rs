//! The account-based ledger substrate.
//!
//! A [`Ledger`] is an explicit mapping from [`Address`] to [`Account`],
//! injected into every engine operation — never a hidden singleton.
//! State transitions run through [`Ledger::transact`], which stages all
//! mutations and commits only if every precondition held: a failed
//! operation leaves the ledger byte-for-byte identical to before.
//!
//! Accounts carry a native balance (`lamports`) alongside their data.
//! Creating an account moves a storage deposit from the payer into the
//! new account; closing it refunds the deposit to a destination.

use std::collections::BTreeMap;

use crate::address::{Address, SYSTEM};
use crate::auth::SignerProof;
use crate::error::{EscrowError, EscrowResult};
use crate::math::{checked_add, checked_sub};
use crate::require;

/// A typed, owner-addressed storage slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// The program that owns (and may mutate) this account.
    pub owner: Address,
    /// Native balance, including the storage deposit.
    pub lamports: u64,
    /// Raw account data in the owning program's layout.
    pub data: Vec<u8>,
}

/// Minimum storage deposit for an account with `data_len` bytes of data.
///
/// Fixed-rate model: `(128 + data_len) * 6960` native units.
#[inline]
pub fn rent_exempt_min(data_len: usize) -> u64 {
    (128u64 + data_len as u64).saturating_mul(6960)
}

/// In-memory account store. Cheap to clone, which is what makes the
/// staged-commit transaction model below trivially correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    accounts: BTreeMap<Address, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an account, if it exists.
    pub fn account(&self, address: &Address) -> Option<&Account> {
        self.accounts.get(address)
    }

    /// Mutable lookup; `AccountNotFound` if absent.
    pub fn account_mut(&mut self, address: &Address) -> EscrowResult<&mut Account> {
        self.accounts
            .get_mut(address)
            .ok_or(EscrowError::AccountNotFound)
    }

    /// Whether any account exists at `address`.
    pub fn contains(&self, address: &Address) -> bool {
        self.accounts.contains_key(address)
    }

    /// Run `f` against a staged copy of the ledger; commit the copy only
    /// if `f` returns `Ok`.
    ///
    /// This is the substrate's atomicity guarantee: concurrent observers
    /// see either the pre-state or the post-state of an operation, never
    /// an intermediate one, and no partial writes survive a failure.
    pub fn transact<T>(
        &mut self,
        f: impl FnOnce(&mut Ledger) -> EscrowResult<T>,
    ) -> EscrowResult<T> {
        let mut staged = self.clone();
        let out = f(&mut staged)?;
        *self = staged;
        Ok(out)
    }

    /// Seed a system-owned account holding `lamports`. Harness-side setup
    /// for participant identities that pay storage deposits.
    pub fn fund(&mut self, address: Address, lamports: u64) {
        self.accounts.insert(
            address,
            Account {
                owner: SYSTEM,
                lamports,
                data: Vec::new(),
            },
        );
    }

    /// Create a zero-filled account of `space` bytes at `address`, owned
    /// by `owner_program`, funding its storage deposit from `payer`.
    ///
    /// Fails with `AddressCollision` if the slot is occupied and with
    /// `InsufficientFunds` if the payer cannot cover the deposit.
    pub fn create_account(
        &mut self,
        payer: &SignerProof,
        address: Address,
        owner_program: Address,
        space: usize,
    ) -> EscrowResult {
        require!(!self.contains(&address), EscrowError::AddressCollision);

        let deposit = rent_exempt_min(space);
        let payer_account = self
            .accounts
            .get_mut(payer.address())
            .ok_or(EscrowError::AccountNotFound)?;
        require!(
            payer_account.lamports >= deposit,
            EscrowError::InsufficientFunds
        );
        payer_account.lamports = checked_sub(payer_account.lamports, deposit)?;

        self.accounts.insert(
            address,
            Account {
                owner: owner_program,
                lamports: deposit,
                data: vec![0u8; space],
            },
        );
        Ok(())
    }

    /// Close the account at `address`, refunding its full native balance
    /// (storage deposit included) to `destination`.
    ///
    /// The slot ceases to exist: a later lookup is `AccountNotFound` and
    /// the address may be reused.
    pub fn close_account(&mut self, address: &Address, destination: &Address) -> EscrowResult {
        let closed = self
            .accounts
            .remove(address)
            .ok_or(EscrowError::AccountNotFound)?;
        let dest = match self.accounts.get_mut(destination) {
            Some(dest) => dest,
            None => {
                // Closing must not be lossy: put the account back before
                // reporting the bad destination.
                self.accounts.insert(*address, closed);
                return Err(EscrowError::AccountNotFound);
            }
        };
        dest.lamports = checked_add(dest.lamports, closed.lamports)?;
        Ok(())
    }
}
