//! Wire encoding of the three escrow entry points.
//!
//! A submitted instruction is a tag byte followed by little-endian
//! fields:
//!
//! ```text
//! 0 = MakeOffer    [1..9] id   [9..17] amount_offered   [17..25] amount_wanted
//! 1 = TakeOffer    (no fields; everything is read from the record)
//! 2 = CancelOffer  (no fields)
//! ```

use crate::cursor::{DataWriter, SliceCursor};
use crate::error::EscrowError;

const IX_MAKE_OFFER: u8 = 0;
const IX_TAKE_OFFER: u8 = 1;
const IX_CANCEL_OFFER: u8 = 2;

/// A decoded escrow instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscrowInstruction {
    MakeOffer {
        /// Caller-chosen random 64-bit identifier.
        id: u64,
        /// Amount of asset A to lock into the vault.
        token_a_offered_amount: u64,
        /// Amount of asset B required to fulfill the offer.
        token_b_wanted_amount: u64,
    },
    TakeOffer,
    CancelOffer,
}

impl EscrowInstruction {
    /// Encode into instruction data.
    pub fn pack(&self) -> Vec<u8> {
        match self {
            EscrowInstruction::MakeOffer {
                id,
                token_a_offered_amount,
                token_b_wanted_amount,
            } => {
                let mut data = vec![0u8; 25];
                let mut w = DataWriter::new(&mut data);
                // Buffer is sized exactly for the fields; writes cannot fail.
                let _ = w.write_u8(IX_MAKE_OFFER);
                let _ = w.write_u64(*id);
                let _ = w.write_u64(*token_a_offered_amount);
                let _ = w.write_u64(*token_b_wanted_amount);
                data
            }
            EscrowInstruction::TakeOffer => vec![IX_TAKE_OFFER],
            EscrowInstruction::CancelOffer => vec![IX_CANCEL_OFFER],
        }
    }

    /// Decode from instruction data. Trailing bytes are ignored; missing
    /// bytes or an unknown tag fail with `InvalidInstruction`.
    pub fn unpack(data: &[u8]) -> Result<Self, EscrowError> {
        let mut cur = SliceCursor::new(data);
        let tag = cur
            .read_u8()
            .map_err(|_| EscrowError::InvalidInstruction)?;
        match tag {
            IX_MAKE_OFFER => {
                let id = cur
                    .read_u64()
                    .map_err(|_| EscrowError::InvalidInstruction)?;
                let token_a_offered_amount = cur
                    .read_u64()
                    .map_err(|_| EscrowError::InvalidInstruction)?;
                let token_b_wanted_amount = cur
                    .read_u64()
                    .map_err(|_| EscrowError::InvalidInstruction)?;
                Ok(EscrowInstruction::MakeOffer {
                    id,
                    token_a_offered_amount,
                    token_b_wanted_amount,
                })
            }
            IX_TAKE_OFFER => Ok(EscrowInstruction::TakeOffer),
            IX_CANCEL_OFFER => Ok(EscrowInstruction::CancelOffer),
            _ => Err(EscrowError::InvalidInstruction),
        }
    }
}
