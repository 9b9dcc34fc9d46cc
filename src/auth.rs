//! Authorization proofs.
//!
//! Two ways to prove control of an address, and nothing else:
//!
//! - [`SignerProof`] — the substrate verified a signature from the key
//!   holder. The harness attaches these to a submitted instruction.
//! - [`DerivedSigner`] — a capability for a *derived* address. It has no
//!   public constructor; only engine code that re-derives a record's
//!   address from its stored seeds can mint one. This is what binds vault
//!   custody to the existence of the offer record.

use crate::address::Address;

/// Proof that the holder of `address` signed the submitted transaction.
///
/// Attesting a signature is the substrate's trust boundary: the harness
/// constructs one per signer when it submits an instruction, the engine
/// never forges one.
#[derive(Debug, Clone, Copy)]
pub struct SignerProof {
    address: Address,
}

impl SignerProof {
    /// Attest that `address` signed the transaction being executed.
    pub fn attested(address: Address) -> Self {
        Self { address }
    }

    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}

/// Capability to authorize transfers out of accounts owned by a derived
/// address.
///
/// Minted crate-internally after the engine has verified that the target
/// record really lives at the address derived from its stored seeds and
/// bump. No keypair corresponds to a derived address, so this capability
/// is the only authority over a vault.
#[derive(Debug, Clone, Copy)]
pub struct DerivedSigner {
    address: Address,
}

impl DerivedSigner {
    pub(crate) fn new(address: Address) -> Self {
        Self { address }
    }

    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}
