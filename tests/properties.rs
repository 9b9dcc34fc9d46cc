//! Property checks: conservation of both asset supplies and
//! all-or-nothing execution, over randomized amounts.

mod common;

use common::{setup, STARTING_TOKENS};
use lockbox::prelude::*;
use proptest::prelude::*;

proptest! {
    /// Asset A moves only between maker, vault, and taker; asset B only
    /// between taker and maker. Totals never change across a settlement.
    #[test]
    fn settlement_conserves_both_assets(
        offered in 1u64..=STARTING_TOKENS,
        wanted in 1u64..=STARTING_TOKENS,
    ) {
        let mut env = setup();
        let (offer_address, _) = env.make_offer(offered, wanted);
        env.take_offer(offer_address).unwrap();

        let alice_a = env.token_balance(&env.alice_token_account_a);
        let bob_a = env.token_balance(&env.bob_token_account_a);
        let alice_b = env.token_balance(&env.alice_token_account_b);
        let bob_b = env.token_balance(&env.bob_token_account_b);

        prop_assert_eq!(alice_a + bob_a, STARTING_TOKENS);
        prop_assert_eq!(alice_b + bob_b, STARTING_TOKENS);
        prop_assert_eq!(bob_a, offered);
        prop_assert_eq!(alice_b, wanted);
    }

    /// Cancelling is a perfect undo of creation: token balances, native
    /// balances, and storage all return to the pre-offer state.
    #[test]
    fn cancellation_restores_the_pre_offer_state(
        offered in 1u64..=STARTING_TOKENS,
        wanted in 1u64..=STARTING_TOKENS,
    ) {
        let mut env = setup();
        let before = env.ledger.clone();

        let (offer_address, _) = env.make_offer(offered, wanted);
        let alice = env.alice;
        env.cancel_offer(&alice, offer_address).unwrap();

        prop_assert_eq!(env.ledger, before);
    }

    /// A take the taker cannot afford changes nothing at all.
    #[test]
    fn unaffordable_take_is_a_no_op(
        offered in 1u64..=STARTING_TOKENS,
        wanted in (STARTING_TOKENS + 1)..=(u64::MAX / 2),
    ) {
        let mut env = setup();
        let (offer_address, _) = env.make_offer(offered, wanted);
        let before = env.ledger.clone();

        prop_assert_eq!(
            env.take_offer(offer_address),
            Err(EscrowError::InsufficientFunds)
        );
        prop_assert_eq!(env.ledger, before);
    }
}
