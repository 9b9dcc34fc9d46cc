//! Small validation helpers over ledger accounts.
//!
//! Each check returns early with the matching [`EscrowError`] so handler
//! code stays linear. The combined [`check_account`] covers the common
//! case for program-owned state: ownership + minimum size +
//! discriminator in one call.

use crate::address::Address;
use crate::error::{EscrowError, EscrowResult};
use crate::ledger::{Account, Ledger};

/// Verify the account is owned by `program`.
#[inline]
pub fn check_owner(account: &Account, program: &Address) -> EscrowResult {
    if account.owner != *program {
        return Err(EscrowError::InvalidAccountData);
    }
    Ok(())
}

/// Verify account data is at least `min_len` bytes.
#[inline]
pub fn check_size(data: &[u8], min_len: usize) -> EscrowResult {
    if data.len() < min_len {
        return Err(EscrowError::AccountDataTooSmall);
    }
    Ok(())
}

/// Verify the first byte of account data matches the expected type tag.
#[inline]
pub fn check_discriminator(data: &[u8], expected: u8) -> EscrowResult {
    if data.is_empty() || data[0] != expected {
        return Err(EscrowError::InvalidAccountData);
    }
    Ok(())
}

/// Combined check: ownership + minimum size + discriminator.
#[inline]
pub fn check_account(
    account: &Account,
    program: &Address,
    discriminator: u8,
    min_len: usize,
) -> EscrowResult {
    check_owner(account, program)?;
    check_size(&account.data, min_len)?;
    check_discriminator(&account.data, discriminator)?;
    Ok(())
}

/// Verify no account exists at `address`. Prevents reinitialization:
/// a derived address may only be (re)used once its previous occupant
/// has been closed.
#[inline]
pub fn check_uninitialized(ledger: &Ledger, address: &Address) -> EscrowResult {
    if ledger.contains(address) {
        return Err(EscrowError::AddressCollision);
    }
    Ok(())
}
