//! Iterator-style consumption of caller-supplied account references.
//!
//! An instruction arrives with an ordered list of the addresses it
//! touches. [`AccountList`] consumes them positionally, replacing manual
//! index arithmetic with one call per account and a single error for
//! short lists.

use crate::address::Address;
use crate::error::EscrowError;

/// Positional accessor over the account references attached to an
/// instruction.
pub struct AccountList<'a> {
    addresses: &'a [Address],
    pos: usize,
}

impl<'a> AccountList<'a> {
    #[inline]
    pub fn new(addresses: &'a [Address]) -> Self {
        Self { addresses, pos: 0 }
    }

    /// How many references haven't been consumed yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.addresses.len().saturating_sub(self.pos)
    }

    /// Consume the next account reference.
    #[inline]
    pub fn next(&mut self) -> Result<&'a Address, EscrowError> {
        if self.pos >= self.addresses.len() {
            return Err(EscrowError::NotEnoughAccounts);
        }
        let addr = &self.addresses[self.pos];
        self.pos += 1;
        Ok(addr)
    }
}
