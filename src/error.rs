use thiserror::Error;

/// Errors surfaced by the escrow engine and its ledger substrate.
///
/// Every variant is detected before the staged transaction commits, so a
/// failed operation never leaves partial state behind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EscrowError {
    /// An account already exists at the derived offer-record address.
    /// The caller should retry with a fresh random id.
    #[error("an account already exists at the derived address")]
    AddressCollision,

    /// A source balance is below the required transfer amount.
    #[error("source balance below required transfer amount")]
    InsufficientFunds,

    /// The presented authorization does not match the required signer
    /// or owner authority.
    #[error("authorization does not match required signer")]
    Unauthorized,

    /// The operation targets an offer record that was already taken,
    /// cancelled, or never existed.
    #[error("offer record not found")]
    RecordNotFound,

    /// A zero amount was supplied where a positive amount is required.
    #[error("amount must be greater than zero")]
    InvalidAmount,

    /// The two mints of an offer are identical, or a holding account's
    /// mint does not match the expected asset.
    #[error("token mint mismatch")]
    InvalidTokenMint,

    /// A referenced ledger account does not exist.
    #[error("account not found")]
    AccountNotFound,

    /// Account data failed a layout, discriminator, or ownership check.
    #[error("invalid account data")]
    InvalidAccountData,

    /// Account data is shorter than the layout requires.
    #[error("account data too small")]
    AccountDataTooSmall,

    /// Instruction data could not be decoded.
    #[error("invalid instruction data")]
    InvalidInstruction,

    /// The caller supplied fewer account references than the
    /// instruction consumes.
    #[error("not enough account references")]
    NotEnoughAccounts,

    /// A checked u64 operation overflowed or underflowed.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
}

/// Shorthand result type used throughout the crate.
pub type EscrowResult<T = ()> = Result<T, EscrowError>;
