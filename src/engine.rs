//! The escrow engine: the three state transitions over offer records
//! and vaults.
//!
//! Offer lifecycle: `Absent → Open → {Taken, Cancelled}`. Taken and
//! Cancelled are terminal and storage-absent — the record and its vault
//! are deleted, so a later operation on the same address fails with
//! `RecordNotFound`. Racing take/cancel resolve structurally: both try
//! to close the same record, exactly one commits, the loser's record is
//! already gone.
//!
//! Every operation runs inside [`Ledger::transact`]: all sub-steps
//! commit together or not at all.

use tracing::debug;

use crate::accounts::AccountList;
use crate::address::{
    derive_offer_address, find_offer_address, find_vault_address, Address, ESCROW,
};
use crate::auth::{DerivedSigner, SignerProof};
use crate::checks::{check_account, check_uninitialized};
use crate::error::{EscrowError, EscrowResult};
use crate::instruction::EscrowInstruction;
use crate::ledger::Ledger;
use crate::offer::{Offer, OFFER_DISC, OFFER_LEN};
use crate::token::{self, TransferAuthority};
use crate::{require, require_keys_eq, require_keys_neq};

/// Parameters for offer creation.
pub struct MakeOffer<'a> {
    /// Maker's signature proof; pays both storage deposits.
    pub maker: &'a SignerProof,
    /// Caller-chosen random 64-bit identifier. On `AddressCollision`
    /// the caller retries with a fresh one.
    pub id: u64,
    /// Mint of the offered asset.
    pub token_mint_a: Address,
    /// Mint of the wanted asset.
    pub token_mint_b: Address,
    /// Amount of asset A locked into the vault. Must be > 0.
    pub token_a_offered_amount: u64,
    /// Amount of asset B required in return. Must be > 0.
    pub token_b_wanted_amount: u64,
    /// Maker's holding account for asset A (transfer source).
    pub maker_token_account_a: Address,
}

/// Parameters for offer fulfillment.
pub struct TakeOffer<'a> {
    /// Taker's signature proof; authorizes the asset-B payment.
    pub taker: &'a SignerProof,
    /// Address of the offer record being taken.
    pub offer: Address,
    /// Taker's holding account for asset A (receives the vault balance).
    pub taker_token_account_a: Address,
    /// Taker's holding account for asset B (payment source).
    pub taker_token_account_b: Address,
    /// Maker's holding account for asset B (payment destination).
    pub maker_token_account_b: Address,
}

/// Parameters for offer cancellation.
pub struct CancelOffer<'a> {
    /// Maker's signature proof; must match the record's stored maker.
    pub maker: &'a SignerProof,
    /// Address of the offer record being cancelled.
    pub offer: Address,
    /// Maker's holding account for asset A (refund destination).
    pub maker_token_account_a: Address,
}

/// Create an offer: write the record, initialize the vault, and deposit
/// `token_a_offered_amount` of asset A — atomically.
///
/// Returns the offer-record and vault addresses.
pub fn make_offer(
    ledger: &mut Ledger,
    params: MakeOffer<'_>,
) -> EscrowResult<(Address, Address)> {
    require!(params.token_a_offered_amount > 0, EscrowError::InvalidAmount);
    require!(params.token_b_wanted_amount > 0, EscrowError::InvalidAmount);
    require_keys_neq!(
        &params.token_mint_a,
        &params.token_mint_b,
        EscrowError::InvalidTokenMint
    );

    let maker = *params.maker.address();
    let (offer_address, bump) = find_offer_address(&maker, params.id);
    let (vault_address, _) = find_vault_address(&offer_address, &params.token_mint_a);

    ledger.transact(|lg| {
        check_uninitialized(lg, &offer_address)?;

        // Record account first so the vault's owner authority exists as
        // a storage slot before funds land in it.
        lg.create_account(params.maker, offer_address, ESCROW, OFFER_LEN)?;
        token::initialize_account(
            lg,
            params.maker,
            vault_address,
            &params.token_mint_a,
            &offer_address,
        )?;
        token::transfer(
            lg,
            &params.maker_token_account_a,
            &vault_address,
            params.token_a_offered_amount,
            TransferAuthority::Signer(params.maker),
        )?;

        let record = Offer {
            id: params.id,
            maker,
            token_mint_a: params.token_mint_a,
            token_mint_b: params.token_mint_b,
            token_b_wanted_amount: params.token_b_wanted_amount,
            bump,
        };
        record.write(&mut lg.account_mut(&offer_address)?.data)?;
        Ok(())
    })?;

    debug!(
        offer = %offer_address,
        id = params.id,
        offered = params.token_a_offered_amount,
        wanted = params.token_b_wanted_amount,
        "offer created"
    );
    Ok((offer_address, vault_address))
}

/// Fulfill an offer: pay the maker the wanted amount of asset B, hand
/// the taker the vault's entire asset-A balance, and close record and
/// vault — atomically, all-or-nothing.
pub fn take_offer(ledger: &mut Ledger, params: TakeOffer<'_>) -> EscrowResult {
    ledger.transact(|lg| {
        let record = load_offer(lg, &params.offer)?;
        let vault_signer = vault_authority(&params.offer, &record)?;
        let (vault_address, _) = find_vault_address(&params.offer, &record.token_mint_a);

        // The payment destination must be the stored maker's holding
        // account for the wanted asset.
        let maker_b = token::read_token_account(
            lg.account(&params.maker_token_account_b)
                .ok_or(EscrowError::AccountNotFound)?,
        )?;
        require_keys_eq!(&maker_b.owner, &record.maker, EscrowError::InvalidAccountData);
        require_keys_eq!(
            &maker_b.mint,
            &record.token_mint_b,
            EscrowError::InvalidTokenMint
        );

        token::transfer(
            lg,
            &params.taker_token_account_b,
            &params.maker_token_account_b,
            record.token_b_wanted_amount,
            TransferAuthority::Signer(params.taker),
        )?;

        let vault_balance = token::balance(lg, &vault_address)?;
        token::transfer(
            lg,
            &vault_address,
            &params.taker_token_account_a,
            vault_balance,
            TransferAuthority::Derived(&vault_signer),
        )?;

        // Record and vault die together; both deposits go back to the maker.
        token::close_account(
            lg,
            &vault_address,
            &record.maker,
            TransferAuthority::Derived(&vault_signer),
        )?;
        lg.close_account(&params.offer, &record.maker)?;

        debug!(
            offer = %params.offer,
            taker = %params.taker.address(),
            released = vault_balance,
            paid = record.token_b_wanted_amount,
            "offer taken"
        );
        Ok(())
    })
}

/// Cancel an offer: refund the vault's full balance to the maker and
/// close record and vault — atomically. Only the stored maker may cancel.
pub fn cancel_offer(ledger: &mut Ledger, params: CancelOffer<'_>) -> EscrowResult {
    ledger.transact(|lg| {
        let record = load_offer(lg, &params.offer)?;
        require_keys_eq!(
            params.maker.address(),
            &record.maker,
            EscrowError::Unauthorized
        );
        let vault_signer = vault_authority(&params.offer, &record)?;
        let (vault_address, _) = find_vault_address(&params.offer, &record.token_mint_a);

        let vault_balance = token::balance(lg, &vault_address)?;
        token::transfer(
            lg,
            &vault_address,
            &params.maker_token_account_a,
            vault_balance,
            TransferAuthority::Derived(&vault_signer),
        )?;

        token::close_account(
            lg,
            &vault_address,
            &record.maker,
            TransferAuthority::Derived(&vault_signer),
        )?;
        lg.close_account(&params.offer, &record.maker)?;

        debug!(
            offer = %params.offer,
            refunded = vault_balance,
            "offer cancelled"
        );
        Ok(())
    })
}

/// Decode and dispatch a submitted instruction.
///
/// Account order per instruction:
/// - `MakeOffer`: `[token_mint_a, token_mint_b, maker_token_account_a]`
/// - `TakeOffer`: `[offer, taker_token_account_a, taker_token_account_b,
///   maker_token_account_b]`
/// - `CancelOffer`: `[offer, maker_token_account_a]`
pub fn process(
    ledger: &mut Ledger,
    signer: &SignerProof,
    accounts: &[Address],
    data: &[u8],
) -> EscrowResult {
    let ix = EscrowInstruction::unpack(data)?;
    let mut accs = AccountList::new(accounts);

    match ix {
        EscrowInstruction::MakeOffer {
            id,
            token_a_offered_amount,
            token_b_wanted_amount,
        } => {
            let token_mint_a = *accs.next()?;
            let token_mint_b = *accs.next()?;
            let maker_token_account_a = *accs.next()?;
            make_offer(
                ledger,
                MakeOffer {
                    maker: signer,
                    id,
                    token_mint_a,
                    token_mint_b,
                    token_a_offered_amount,
                    token_b_wanted_amount,
                    maker_token_account_a,
                },
            )
            .map(|_| ())
        }
        EscrowInstruction::TakeOffer => {
            let offer = *accs.next()?;
            let taker_token_account_a = *accs.next()?;
            let taker_token_account_b = *accs.next()?;
            let maker_token_account_b = *accs.next()?;
            take_offer(
                ledger,
                TakeOffer {
                    taker: signer,
                    offer,
                    taker_token_account_a,
                    taker_token_account_b,
                    maker_token_account_b,
                },
            )
        }
        EscrowInstruction::CancelOffer => {
            let offer = *accs.next()?;
            let maker_token_account_a = *accs.next()?;
            cancel_offer(
                ledger,
                CancelOffer {
                    maker: signer,
                    offer,
                    maker_token_account_a,
                },
            )
        }
    }
}

/// Load and validate the offer record at `address`.
///
/// A missing slot is `RecordNotFound` — the record was taken, cancelled,
/// or never existed.
fn load_offer(ledger: &Ledger, address: &Address) -> Result<Offer, EscrowError> {
    let account = ledger
        .account(address)
        .ok_or(EscrowError::RecordNotFound)?;
    check_account(account, &ESCROW, OFFER_DISC, OFFER_LEN)?;
    Offer::read(&account.data)
}

/// Mint the vault's transfer capability after proving the record really
/// lives at the address derived from its own stored fields.
fn vault_authority(
    address: &Address,
    record: &Offer,
) -> Result<DerivedSigner, EscrowError> {
    let expected = derive_offer_address(&record.maker, record.id, record.bump);
    require_keys_eq!(&expected, address, EscrowError::InvalidAccountData);
    Ok(DerivedSigner::new(*address))
}
