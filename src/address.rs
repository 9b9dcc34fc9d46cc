//! Addresses and deterministic address derivation.
//!
//! Every storage slot in the ledger is keyed by a 32-byte [`Address`].
//! Participant identities are addresses whose signatures the substrate
//! verifies; offer records and vaults live at *derived* addresses computed
//! from fixed seeds, so any party can locate them without a lookup table.
//!
//! Derivation is SHA-256 over `seeds ‖ bump ‖ program ‖ domain marker`.
//! The domain marker keeps derived addresses disjoint from signing keys:
//! no keypair corresponds to a derived address, so the only way to
//! authorize a transfer out of a derived-address-owned account is through
//! the engine's own [`DerivedSigner`](crate::auth::DerivedSigner)
//! capability.

use core::fmt;

use sha2_const_stable::Sha256;

/// Size of an address in bytes.
pub const ADDRESS_LEN: usize = 32;

/// Seed tag for offer-record addresses.
pub const OFFER_TAG: &[u8] = b"offer";

/// Seed tag for vault addresses.
pub const VAULT_TAG: &[u8] = b"vault";

/// Domain marker mixed into every derived address. Keeps the derived
/// address space disjoint from signing keys and from other hash uses.
const DERIVED_MARKER: &[u8] = b"lockbox:derived:v1";

/// A 32-byte ledger address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    #[inline]
    pub const fn new_from_array(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_array(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Address {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    #[inline]
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ── Well-known program addresses ─────────────────────────────────────────────

/// The system program: owns plain balance-holding accounts.
pub const SYSTEM: Address = Address([0u8; ADDRESS_LEN]);

/// The token program: owns mint holding accounts and vaults.
pub const TOKEN: Address =
    Address(Sha256::new().update(b"lockbox:program:token").finalize());

/// The escrow program: owns offer records and namespaces their derivation.
pub const ESCROW: Address =
    Address(Sha256::new().update(b"lockbox:program:escrow").finalize());

// ── Derivation ───────────────────────────────────────────────────────────────

/// Derive an address from `seeds` and a known bump under `program`'s
/// namespace.
///
/// Pure and deterministic: the same inputs always produce the same
/// address. Use [`find_derived_address`] when the bump is not yet known.
pub fn derive_address(program: &Address, seeds: &[&[u8]], bump: u8) -> Address {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher = hasher.update(seed);
    }
    hasher = hasher.update(&[bump]);
    hasher = hasher.update(program.as_ref());
    hasher = hasher.update(DERIVED_MARKER);
    Address(hasher.finalize())
}

/// Derive the canonical address for `seeds` under `program`, returning the
/// address and its bump.
///
/// The substrate places no validity constraint on derived addresses (the
/// domain marker already keeps them off the signing-key space), so every
/// bump yields a usable address and the canonical bump is `u8::MAX`. The
/// bump still participates in the hash and is stored in the offer record,
/// so re-derivation with the cached bump is a single hash.
pub fn find_derived_address(program: &Address, seeds: &[&[u8]]) -> (Address, u8) {
    let bump = u8::MAX;
    (derive_address(program, seeds, bump), bump)
}

/// Canonical offer-record address for `(maker, id)`.
pub fn find_offer_address(maker: &Address, id: u64) -> (Address, u8) {
    find_derived_address(&ESCROW, &[OFFER_TAG, maker.as_ref(), &id.to_le_bytes()])
}

/// Offer-record address for `(maker, id)` with a known bump.
pub fn derive_offer_address(maker: &Address, id: u64, bump: u8) -> Address {
    derive_address(&ESCROW, &[OFFER_TAG, maker.as_ref(), &id.to_le_bytes()], bump)
}

/// Canonical vault address for an offer record and the mint it holds.
pub fn find_vault_address(offer: &Address, mint: &Address) -> (Address, u8) {
    find_derived_address(&ESCROW, &[VAULT_TAG, offer.as_ref(), mint.as_ref()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(fill: u8) -> Address {
        Address::new_from_array([fill; ADDRESS_LEN])
    }

    #[test]
    fn derivation_is_deterministic() {
        let maker = addr(7);
        let (a, bump_a) = find_offer_address(&maker, 42);
        let (b, bump_b) = find_offer_address(&maker, 42);
        assert_eq!(a, b);
        assert_eq!(bump_a, bump_b);
        assert_eq!(derive_offer_address(&maker, 42, bump_a), a);
    }

    #[test]
    fn distinct_ids_and_makers_produce_distinct_addresses() {
        let maker = addr(7);
        let other = addr(8);
        let (a, _) = find_offer_address(&maker, 1);
        let (b, _) = find_offer_address(&maker, 2);
        let (c, _) = find_offer_address(&other, 1);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn bump_participates_in_the_hash() {
        let maker = addr(9);
        let a = derive_offer_address(&maker, 5, 255);
        let b = derive_offer_address(&maker, 5, 254);
        assert_ne!(a, b);
    }

    #[test]
    fn vault_address_is_bound_to_offer_and_mint() {
        let maker = addr(1);
        let mint_a = addr(2);
        let mint_b = addr(3);
        let (offer, _) = find_offer_address(&maker, 11);
        let (v1, _) = find_vault_address(&offer, &mint_a);
        let (v2, _) = find_vault_address(&offer, &mint_b);
        assert_ne!(v1, v2);
        assert_ne!(v1, offer);
    }

    #[test]
    fn well_known_programs_are_distinct() {
        assert_ne!(TOKEN, ESCROW);
        assert_ne!(TOKEN, SYSTEM);
        assert_ne!(ESCROW, SYSTEM);
    }
}
