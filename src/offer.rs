//! The offer record: persistent descriptor of an open escrow.
//!
//! Stored at the address derived from `(OFFER_TAG, maker, id)`, owned by
//! the escrow program. Every field is immutable after creation; the
//! record is deleted, together with its vault, by exactly one of
//! take/cancel.
//!
//! Layout (114 bytes, little-endian):
//! ```text
//! [0]        u8      discriminator  (= OFFER_DISC)
//! [1..9]     u64     id
//! [9..41]    Address maker
//! [41..73]   Address token_mint_a   (asset held in the vault)
//! [73..105]  Address token_mint_b   (asset the maker wants)
//! [105..113] u64     token_b_wanted_amount
//! [113]      u8      bump           (derivation bump, cached)
//! ```

use crate::address::Address;
use crate::cursor::{DataWriter, SliceCursor};
use crate::error::{EscrowError, EscrowResult};

/// Offer record discriminator.
pub const OFFER_DISC: u8 = 1;

/// Total size of an offer record.
pub const OFFER_LEN: usize = 1 + 8 + 32 + 32 + 32 + 8 + 1;

/// Decoded offer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
    /// Caller-chosen random identifier; part of the address derivation.
    pub id: u64,
    /// Identity that created the offer and deposited asset A.
    pub maker: Address,
    /// Mint of the asset held in the vault.
    pub token_mint_a: Address,
    /// Mint of the asset the maker wants in return.
    pub token_mint_b: Address,
    /// Amount of asset B required to fulfill the offer.
    pub token_b_wanted_amount: u64,
    /// Cached derivation bump, so re-derivation is a single hash.
    pub bump: u8,
}

impl Offer {
    /// Decode a record from raw account data.
    pub fn read(data: &[u8]) -> Result<Self, EscrowError> {
        let mut cur = SliceCursor::new(data);
        if cur.read_u8()? != OFFER_DISC {
            return Err(EscrowError::InvalidAccountData);
        }
        Ok(Self {
            id: cur.read_u64()?,
            maker: cur.read_address()?,
            token_mint_a: cur.read_address()?,
            token_mint_b: cur.read_address()?,
            token_b_wanted_amount: cur.read_u64()?,
            bump: cur.read_u8()?,
        })
    }

    /// Encode the record into freshly allocated account data.
    pub fn write(&self, data: &mut [u8]) -> EscrowResult {
        let mut w = DataWriter::new(data);
        w.write_u8(OFFER_DISC)?;
        w.write_u64(self.id)?;
        w.write_address(&self.maker)?;
        w.write_address(&self.token_mint_a)?;
        w.write_address(&self.token_mint_b)?;
        w.write_u64(self.token_b_wanted_amount)?;
        w.write_u8(self.bump)?;
        debug_assert_eq!(w.written(), OFFER_LEN);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::ADDRESS_LEN;

    #[test]
    fn record_survives_encode_decode() {
        let offer = Offer {
            id: 0xDEAD_BEEF_0042,
            maker: Address::new_from_array([1; ADDRESS_LEN]),
            token_mint_a: Address::new_from_array([2; ADDRESS_LEN]),
            token_mint_b: Address::new_from_array([3; ADDRESS_LEN]),
            token_b_wanted_amount: 1_000_000,
            bump: 255,
        };
        let mut data = vec![0u8; OFFER_LEN];
        offer.write(&mut data).unwrap();
        assert_eq!(Offer::read(&data).unwrap(), offer);
    }

    #[test]
    fn wrong_discriminator_is_rejected() {
        let mut data = vec![0u8; OFFER_LEN];
        data[0] = OFFER_DISC + 1;
        assert_eq!(Offer::read(&data), Err(EscrowError::InvalidAccountData));
    }

    #[test]
    fn truncated_record_is_rejected() {
        let mut data = vec![0u8; OFFER_LEN - 1];
        data[0] = OFFER_DISC;
        assert_eq!(Offer::read(&data), Err(EscrowError::AccountDataTooSmall));
    }
}
