//! The token substrate: custody (holding) accounts and transfers.
//!
//! A holding account is a token-program-owned ledger account with a
//! fixed 72-byte layout:
//!
//! ```text
//!  0..32   mint             (Address)
//! 32..64   owner authority  (Address)
//! 64..72   amount           (u64 LE)
//! ```
//!
//! The owner authority may be a signing key or a derived address — a
//! vault is nothing more than a holding account whose authority is an
//! offer record's derived address. Transfers demand a matching
//! [`TransferAuthority`]; there is no other way to move a balance.
//!
//! Mints are bare asset identities. Issuance ([`mint_to`]) carries no
//! authority model of its own — supply setup is the harness's concern,
//! outside the escrow core.

use crate::address::{Address, TOKEN};
use crate::auth::{DerivedSigner, SignerProof};
use crate::cursor::{DataWriter, SliceCursor};
use crate::error::{EscrowError, EscrowResult};
use crate::ledger::{Account, Ledger};
use crate::math::{checked_add, checked_sub};
use crate::{require, require_keys_eq, require_keys_neq};

/// Size of a holding account's data.
pub const TOKEN_ACCOUNT_LEN: usize = 72;

/// Decoded view of a holding account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccount {
    pub mint: Address,
    pub owner: Address,
    pub amount: u64,
}

/// Authority presented for a transfer or close: either a verified
/// signature or a derived-address capability.
#[derive(Debug, Clone, Copy)]
pub enum TransferAuthority<'a> {
    Signer(&'a SignerProof),
    Derived(&'a DerivedSigner),
}

impl TransferAuthority<'_> {
    #[inline]
    pub fn address(&self) -> &Address {
        match self {
            TransferAuthority::Signer(proof) => proof.address(),
            TransferAuthority::Derived(cap) => cap.address(),
        }
    }
}

/// Read a holding account's fields from a ledger account.
pub fn read_token_account(account: &Account) -> Result<TokenAccount, EscrowError> {
    if account.owner != TOKEN {
        return Err(EscrowError::InvalidAccountData);
    }
    let mut cur = SliceCursor::new(&account.data);
    Ok(TokenAccount {
        mint: cur.read_address()?,
        owner: cur.read_address()?,
        amount: cur.read_u64()?,
    })
}

/// Balance of the holding account at `address`.
pub fn balance(ledger: &Ledger, address: &Address) -> Result<u64, EscrowError> {
    let account = ledger
        .account(address)
        .ok_or(EscrowError::AccountNotFound)?;
    Ok(read_token_account(account)?.amount)
}

/// Initialize a holding account for `mint` at `address`, controlled by
/// `authority`. The storage deposit comes from `payer`.
pub fn initialize_account(
    ledger: &mut Ledger,
    payer: &SignerProof,
    address: Address,
    mint: &Address,
    authority: &Address,
) -> EscrowResult {
    ledger.create_account(payer, address, TOKEN, TOKEN_ACCOUNT_LEN)?;

    let account = ledger.account_mut(&address)?;
    let mut w = DataWriter::new(&mut account.data);
    w.write_address(mint)?;
    w.write_address(authority)?;
    w.write_u64(0)?;
    Ok(())
}

/// Issue `amount` new units of the account's mint into `address`.
pub fn mint_to(ledger: &mut Ledger, address: &Address, amount: u64) -> EscrowResult {
    let account = ledger.account_mut(address)?;
    let state = read_token_account(account)?;
    let new_amount = checked_add(state.amount, amount)?;
    write_amount(account, new_amount)
}

/// Move `amount` units from `from` to `to`.
///
/// Both accounts must hold the same mint, the presented authority must
/// equal the source account's owner authority, and the source balance
/// must cover the amount. Any failure leaves both balances untouched.
pub fn transfer(
    ledger: &mut Ledger,
    from: &Address,
    to: &Address,
    amount: u64,
    authority: TransferAuthority<'_>,
) -> EscrowResult {
    require_keys_neq!(from, to, EscrowError::InvalidAccountData);

    let from_state = {
        let account = ledger
            .account(from)
            .ok_or(EscrowError::AccountNotFound)?;
        read_token_account(account)?
    };
    let to_state = {
        let account = ledger.account(to).ok_or(EscrowError::AccountNotFound)?;
        read_token_account(account)?
    };

    require_keys_eq!(&from_state.mint, &to_state.mint, EscrowError::InvalidTokenMint);
    require_keys_eq!(
        authority.address(),
        &from_state.owner,
        EscrowError::Unauthorized
    );
    require!(from_state.amount >= amount, EscrowError::InsufficientFunds);

    let new_from = checked_sub(from_state.amount, amount)?;
    let new_to = checked_add(to_state.amount, amount)?;

    write_amount(ledger.account_mut(from)?, new_from)?;
    write_amount(ledger.account_mut(to)?, new_to)?;
    Ok(())
}

/// Close the empty holding account at `address`, refunding its storage
/// deposit to `destination`.
///
/// The presented authority must equal the account's owner authority and
/// the balance must already be zero — closing never burns funds.
pub fn close_account(
    ledger: &mut Ledger,
    address: &Address,
    destination: &Address,
    authority: TransferAuthority<'_>,
) -> EscrowResult {
    let state = {
        let account = ledger
            .account(address)
            .ok_or(EscrowError::AccountNotFound)?;
        read_token_account(account)?
    };
    require_keys_eq!(authority.address(), &state.owner, EscrowError::Unauthorized);
    require!(state.amount == 0, EscrowError::InvalidAccountData);

    ledger.close_account(address, destination)
}

fn write_amount(account: &mut Account, amount: u64) -> EscrowResult {
    if account.data.len() < TOKEN_ACCOUNT_LEN {
        return Err(EscrowError::AccountDataTooSmall);
    }
    account.data[64..72].copy_from_slice(&amount.to_le_bytes());
    Ok(())
}
