//! Convenience re-exports for the common usage pattern.
//!
//! ```rust,ignore
//! use lockbox::prelude::*;
//! ```

pub use crate::accounts::AccountList;
pub use crate::address::{
    derive_address, derive_offer_address, find_derived_address, find_offer_address,
    find_vault_address, Address, ADDRESS_LEN, ESCROW, OFFER_TAG, SYSTEM, TOKEN, VAULT_TAG,
};
pub use crate::auth::{DerivedSigner, SignerProof};
pub use crate::checks::{
    check_account, check_discriminator, check_owner, check_size, check_uninitialized,
};
pub use crate::cursor::{DataWriter, SliceCursor};
pub use crate::engine::{
    cancel_offer, make_offer, process, take_offer, CancelOffer, MakeOffer, TakeOffer,
};
pub use crate::error::{EscrowError, EscrowResult};
pub use crate::instruction::EscrowInstruction;
pub use crate::ledger::{rent_exempt_min, Account, Ledger};
pub use crate::math::{checked_add, checked_sub};
pub use crate::offer::{Offer, OFFER_DISC, OFFER_LEN};
pub use crate::token::{TokenAccount, TransferAuthority, TOKEN_ACCOUNT_LEN};

pub use crate::{require, require_keys_eq, require_keys_neq};
