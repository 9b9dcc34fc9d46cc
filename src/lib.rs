//! **lockbox** — an escrow engine for trustless two-party token swaps on
//! an account-based ledger.
//!
//! A maker locks asset A in a vault and names the amount of asset B they
//! want back; any taker can atomically fulfill the swap, or the maker can
//! cancel and reclaim. The ledger substrate is explicit — a [`Ledger`]
//! value the caller owns and injects into every operation — so the whole
//! engine runs and tests against an in-memory store.
//!
//! # Operations
//!
//! | Entry point | Transition | Authorization |
//! |---|---|---|
//! | [`engine::make_offer`] | `Absent → Open` | maker signature |
//! | [`engine::take_offer`] | `Open → Taken` (terminal) | taker signature |
//! | [`engine::cancel_offer`] | `Open → Cancelled` (terminal) | maker signature |
//!
//! Terminal transitions delete the record and its vault; a later call on
//! the same address fails with `RecordNotFound`.
//!
//! # Custody
//!
//! The vault is a holding account whose owner authority is the offer
//! record's *derived address*, not any keypair. The only way to move
//! vault funds is the engine's [`DerivedSigner`](auth::DerivedSigner)
//! capability, minted after re-deriving the record's address from its
//! stored fields — which is why take and cancel are the only paths that
//! can ever drain a vault.
//!
//! # Atomicity
//!
//! Every operation runs inside [`Ledger::transact`]: mutations are staged
//! against a copy and committed only on success. A failed operation is
//! observationally a no-op.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lockbox::prelude::*;
//!
//! let mut ledger = Ledger::new();
//! // ... fund participants, initialize holding accounts ...
//! let maker = SignerProof::attested(alice);
//! let (offer, vault) = make_offer(&mut ledger, MakeOffer {
//!     maker: &maker,
//!     id: rand::random(),
//!     token_mint_a,
//!     token_mint_b,
//!     token_a_offered_amount: 1_000_000,
//!     token_b_wanted_amount: 1_000_000,
//!     maker_token_account_a: alice_a,
//! })?;
//! ```

pub mod accounts;
pub mod address;
pub mod auth;
pub mod checks;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod instruction;
pub mod ledger;
pub mod math;
pub mod offer;
pub mod prelude;
pub mod token;

pub use address::Address;
pub use error::{EscrowError, EscrowResult};
pub use ledger::{Account, Ledger};

// ── Macros ───────────────────────────────────────────────────────────────────

/// Require a boolean condition: return `$err` (converted via `Into`) if
/// false.
///
/// ```rust,ignore
/// require!(amount > 0, EscrowError::InvalidAmount);
/// ```
#[macro_export]
macro_rules! require {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}

/// Require two [`Address`] values to be equal.
///
/// ```rust,ignore
/// require_keys_eq!(signer.address(), &record.maker, EscrowError::Unauthorized);
/// ```
#[macro_export]
macro_rules! require_keys_eq {
    ($a:expr, $b:expr, $err:expr) => {
        if *$a != *$b {
            return Err($err.into());
        }
    };
}

/// Require two [`Address`] values to be **different**.
///
/// Prevents source == destination and same-mint-for-both-assets
/// mistakes.
///
/// ```rust,ignore
/// require_keys_neq!(&mint_a, &mint_b, EscrowError::InvalidTokenMint);
/// ```
#[macro_export]
macro_rules! require_keys_neq {
    ($a:expr, $b:expr, $err:expr) => {
        if *$a == *$b {
            return Err($err.into());
        }
    };
}
