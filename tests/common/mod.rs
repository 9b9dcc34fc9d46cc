//! Shared harness for the integration suites: two funded participants,
//! two mints, and holding accounts for both assets on both sides.
//!
//! Alice starts with asset A and no B; Bob starts with asset B and no A.
//! Both carry enough native balance to cover storage deposits.

#![allow(dead_code)]

use lockbox::prelude::*;
use lockbox::token;
use rand::RngCore;

/// Token balance each side starts with in their funded asset.
pub const STARTING_TOKENS: u64 = 1_000_000_000;

/// Native balance per participant; covers the record and vault deposits
/// many times over.
pub const STARTING_LAMPORTS: u64 = 1_000_000_000;

pub struct Env {
    pub ledger: Ledger,
    pub alice: SignerProof,
    pub bob: SignerProof,
    pub token_mint_a: Address,
    pub token_mint_b: Address,
    pub alice_token_account_a: Address,
    pub alice_token_account_b: Address,
    pub bob_token_account_a: Address,
    pub bob_token_account_b: Address,
}

pub fn random_address() -> Address {
    let mut bytes = [0u8; ADDRESS_LEN];
    rand::thread_rng().fill_bytes(&mut bytes);
    Address::new_from_array(bytes)
}

/// Random 64-bit offer id, the caller-retry collision contract.
pub fn random_id() -> u64 {
    rand::random()
}

pub fn setup() -> Env {
    let mut ledger = Ledger::new();

    let alice = SignerProof::attested(random_address());
    let bob = SignerProof::attested(random_address());
    let token_mint_a = random_address();
    let token_mint_b = random_address();

    ledger.fund(*alice.address(), STARTING_LAMPORTS);
    ledger.fund(*bob.address(), STARTING_LAMPORTS);

    let alice_token_account_a = random_address();
    let alice_token_account_b = random_address();
    let bob_token_account_a = random_address();
    let bob_token_account_b = random_address();

    token::initialize_account(
        &mut ledger,
        &alice,
        alice_token_account_a,
        &token_mint_a,
        alice.address(),
    )
    .unwrap();
    token::initialize_account(
        &mut ledger,
        &alice,
        alice_token_account_b,
        &token_mint_b,
        alice.address(),
    )
    .unwrap();
    token::initialize_account(
        &mut ledger,
        &bob,
        bob_token_account_a,
        &token_mint_a,
        bob.address(),
    )
    .unwrap();
    token::initialize_account(
        &mut ledger,
        &bob,
        bob_token_account_b,
        &token_mint_b,
        bob.address(),
    )
    .unwrap();

    token::mint_to(&mut ledger, &alice_token_account_a, STARTING_TOKENS).unwrap();
    token::mint_to(&mut ledger, &bob_token_account_b, STARTING_TOKENS).unwrap();

    Env {
        ledger,
        alice,
        bob,
        token_mint_a,
        token_mint_b,
        alice_token_account_a,
        alice_token_account_b,
        bob_token_account_a,
        bob_token_account_b,
    }
}

impl Env {
    pub fn token_balance(&self, address: &Address) -> u64 {
        token::balance(&self.ledger, address).unwrap()
    }

    pub fn lamports(&self, address: &Address) -> u64 {
        self.ledger.account(address).unwrap().lamports
    }

    /// Alice makes an offer with the given amounts and a fresh random id.
    pub fn make_offer(&mut self, offered: u64, wanted: u64) -> (Address, Address) {
        make_offer(
            &mut self.ledger,
            MakeOffer {
                maker: &self.alice,
                id: random_id(),
                token_mint_a: self.token_mint_a,
                token_mint_b: self.token_mint_b,
                token_a_offered_amount: offered,
                token_b_wanted_amount: wanted,
                maker_token_account_a: self.alice_token_account_a,
            },
        )
        .unwrap()
    }

    /// Bob takes the offer at `offer`.
    pub fn take_offer(&mut self, offer: Address) -> EscrowResult {
        take_offer(
            &mut self.ledger,
            TakeOffer {
                taker: &self.bob,
                offer,
                taker_token_account_a: self.bob_token_account_a,
                taker_token_account_b: self.bob_token_account_b,
                maker_token_account_b: self.alice_token_account_b,
            },
        )
    }

    /// Cancel `offer` with an arbitrary signer (not necessarily Alice).
    pub fn cancel_offer(&mut self, signer: &SignerProof, offer: Address) -> EscrowResult {
        cancel_offer(
            &mut self.ledger,
            CancelOffer {
                maker: signer,
                offer,
                maker_token_account_a: self.alice_token_account_a,
            },
        )
    }
}
