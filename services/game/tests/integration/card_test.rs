use deckhand_game::error::GameServiceError;
use deckhand_game::usecase::card::{
    BuyCardInput, BuyCardUseCase, SellCardInput, SellCardUseCase, SellDuplicatesInput,
    SellDuplicatesOutcome, SellDuplicatesUseCase,
};

use deckhand_domain::market::MarketRules;

use crate::helpers::{MockActivityLog, MockUserRepo, catalog, owned_card, test_user};

#[tokio::test]
async fn should_buy_cards_at_variant_adjusted_price() {
    let user = test_user();
    let user_id = user.id;
    let users = MockUserRepo::new(vec![user]);
    let users_handle = users.users_handle();
    let activity = MockActivityLog::default();
    let entries = activity.entries_handle();

    let uc = BuyCardUseCase {
        users,
        catalog: catalog(),
        activity,
    };
    // 2 foil copies of a 100-coin card at factor 3.0 -> round(2 * 3.0 * 100) = 600.
    uc.execute(
        user_id,
        BuyCardInput {
            card: "c1".to_owned(),
            variant: "foil".to_owned(),
            quantity: 2,
        },
    )
    .await
    .unwrap();

    let users = users_handle.lock().unwrap();
    assert_eq!(users[0].coins, 4400);
    assert_eq!(users[0].cards, vec![owned_card("c1", "foil", 2)]);

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "user_buy_card");
    assert_eq!(entries[0].1, "alice");
}

#[tokio::test]
async fn should_restore_holdings_when_a_purchase_is_sold_back() {
    let user = test_user();
    let user_id = user.id;
    let users = MockUserRepo::new(vec![user]);
    let users_handle = users.users_handle();

    let buy = BuyCardUseCase {
        users,
        catalog: catalog(),
        activity: MockActivityLog::default(),
    };
    buy.execute(
        user_id,
        BuyCardInput {
            card: "c1".to_owned(),
            variant: "foil".to_owned(),
            quantity: 2,
        },
    )
    .await
    .unwrap();

    // The sale runs against the post-purchase state.
    let sell = SellCardUseCase {
        users: MockUserRepo::new(users_handle.lock().unwrap().clone()),
        catalog: catalog(),
        activity: MockActivityLog::default(),
        rules: MarketRules::default(),
    };
    let sell_handle = sell.users.users_handle();
    sell.execute(
        user_id,
        SellCardInput {
            card: "c1".to_owned(),
            variant: "foil".to_owned(),
            quantity: 2,
        },
    )
    .await
    .unwrap();

    // 5000 - round(2 * 3.0 * 100) + 2 * round(100 * 3.0 * 0.8) = 5000 - 600 + 480.
    let users = sell_handle.lock().unwrap();
    assert_eq!(users[0].coins, 4880);
    assert!(users[0].cards.is_empty());
}

#[tokio::test]
async fn should_reject_buy_when_coins_run_short() {
    let mut user = test_user();
    user.coins = 599;
    let user_id = user.id;
    let users = MockUserRepo::new(vec![user]);
    let users_handle = users.users_handle();

    let uc = BuyCardUseCase {
        users,
        catalog: catalog(),
        activity: MockActivityLog::default(),
    };
    let err = uc
        .execute(
            user_id,
            BuyCardInput {
                card: "c1".to_owned(),
                variant: "foil".to_owned(),
                quantity: 2,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, GameServiceError::NotEnoughCoins));
    // Nothing persisted.
    let users = users_handle.lock().unwrap();
    assert_eq!(users[0].coins, 599);
    assert!(users[0].cards.is_empty());
}

#[tokio::test]
async fn should_reject_buy_of_unknown_card() {
    let user = test_user();
    let user_id = user.id;
    let uc = BuyCardUseCase {
        users: MockUserRepo::new(vec![user]),
        catalog: catalog(),
        activity: MockActivityLog::default(),
    };
    let err = uc
        .execute(
            user_id,
            BuyCardInput {
                card: "nope".to_owned(),
                variant: String::new(),
                quantity: 1,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, GameServiceError::CardNotFound));
}

#[tokio::test]
async fn should_reject_trading_zero_cost_cards() {
    let user = test_user();
    let user_id = user.id;
    let uc = BuyCardUseCase {
        users: MockUserRepo::new(vec![user]),
        catalog: catalog(),
        activity: MockActivityLog::default(),
    };
    let err = uc
        .execute(
            user_id,
            BuyCardInput {
                card: "c2".to_owned(),
                variant: String::new(),
                quantity: 1,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, GameServiceError::NotTradeable));
}

#[tokio::test]
async fn should_sell_cards_and_remove_emptied_entries() {
    let mut user = test_user();
    user.cards = vec![owned_card("c1", "standard", 4)];
    let user_id = user.id;
    let users = MockUserRepo::new(vec![user]);
    let users_handle = users.users_handle();
    let activity = MockActivityLog::default();
    let entries = activity.entries_handle();

    let uc = SellCardUseCase {
        users,
        catalog: catalog(),
        activity,
        rules: MarketRules::default(),
    };
    // 4 * round(100 * 1.0 * 0.8) = 320.
    uc.execute(
        user_id,
        SellCardInput {
            card: "c1".to_owned(),
            variant: "standard".to_owned(),
            quantity: 4,
        },
    )
    .await
    .unwrap();

    let users = users_handle.lock().unwrap();
    assert_eq!(users[0].coins, 5320);
    assert!(users[0].cards.is_empty());
    assert_eq!(entries.lock().unwrap()[0].0, "user_sell_card");
}

#[tokio::test]
async fn should_reject_selling_more_copies_than_owned() {
    let mut user = test_user();
    user.cards = vec![owned_card("c1", "standard", 3)];
    let user_id = user.id;

    let uc = SellCardUseCase {
        users: MockUserRepo::new(vec![user]),
        catalog: catalog(),
        activity: MockActivityLog::default(),
        rules: MarketRules::default(),
    };
    let err = uc
        .execute(
            user_id,
            SellCardInput {
                card: "c1".to_owned(),
                variant: "standard".to_owned(),
                quantity: 4,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, GameServiceError::NotEnoughCards));
}

#[tokio::test]
async fn should_not_count_other_variants_when_selling() {
    let mut user = test_user();
    user.cards = vec![
        owned_card("c1", "standard", 1),
        owned_card("c1", "foil", 5),
    ];
    let user_id = user.id;

    let uc = SellCardUseCase {
        users: MockUserRepo::new(vec![user]),
        catalog: catalog(),
        activity: MockActivityLog::default(),
        rules: MarketRules::default(),
    };
    let err = uc
        .execute(
            user_id,
            SellCardInput {
                card: "c1".to_owned(),
                variant: "standard".to_owned(),
                quantity: 2,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, GameServiceError::NotEnoughCards));
}

#[tokio::test]
async fn should_sell_duplicates_above_the_keep_threshold() {
    let mut user = test_user();
    user.cards = vec![
        owned_card("c1", "standard", 5),
        owned_card("c2", "standard", 9),
    ];
    let user_id = user.id;
    let users = MockUserRepo::new(vec![user]);
    let users_handle = users.users_handle();
    let activity = MockActivityLog::default();
    let entries = activity.entries_handle();

    let uc = SellDuplicatesUseCase {
        users,
        catalog: catalog(),
        activity,
        rules: MarketRules::default(),
    };
    let outcome = uc
        .execute(
            user_id,
            SellDuplicatesInput {
                rarity: None,
                variant: None,
                keep: 1,
            },
        )
        .await
        .unwrap();

    // 4 excess copies of c1 at round(100 * 1.0 * 0.8) = 80 each; c2 is not
    // tradeable and stays untouched.
    assert_eq!(
        outcome,
        SellDuplicatesOutcome {
            entries_sold: 1,
            coins_gained: 320,
        }
    );
    let users = users_handle.lock().unwrap();
    assert_eq!(users[0].coins, 5320);
    assert_eq!(
        users[0].cards,
        vec![owned_card("c1", "standard", 1), owned_card("c2", "standard", 9)]
    );
    assert_eq!(entries.lock().unwrap()[0].0, "user_sell_cards_duplicate");
}

#[tokio::test]
async fn should_skip_mutation_and_log_when_nothing_is_duplicated() {
    let mut user = test_user();
    user.cards = vec![owned_card("c1", "standard", 1)];
    let user_id = user.id;
    let users = MockUserRepo::new(vec![user]);
    let users_handle = users.users_handle();
    let activity = MockActivityLog::default();
    let entries = activity.entries_handle();

    let uc = SellDuplicatesUseCase {
        users,
        catalog: catalog(),
        activity,
        rules: MarketRules::default(),
    };
    let outcome = uc
        .execute(
            user_id,
            SellDuplicatesInput {
                rarity: None,
                variant: None,
                keep: 1,
            },
        )
        .await
        .unwrap();

    assert_eq!(outcome, SellDuplicatesOutcome::default());
    assert_eq!(users_handle.lock().unwrap()[0].coins, 5000);
    assert!(entries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_filter_duplicate_sales_by_variant() {
    let mut user = test_user();
    user.cards = vec![
        owned_card("c1", "standard", 5),
        owned_card("c1", "foil", 5),
    ];
    let user_id = user.id;
    let users = MockUserRepo::new(vec![user]);
    let users_handle = users.users_handle();

    let uc = SellDuplicatesUseCase {
        users,
        catalog: catalog(),
        activity: MockActivityLog::default(),
        rules: MarketRules::default(),
    };
    let outcome = uc
        .execute(
            user_id,
            SellDuplicatesInput {
                rarity: None,
                variant: Some("foil".to_owned()),
                keep: 1,
            },
        )
        .await
        .unwrap();

    // 4 excess foils at round(100 * 3.0 * 0.8) = 240 each.
    assert_eq!(outcome.coins_gained, 960);
    let users = users_handle.lock().unwrap();
    assert_eq!(
        users[0].cards,
        vec![owned_card("c1", "standard", 5), owned_card("c1", "foil", 1)]
    );
}

#[tokio::test]
async fn should_surface_activity_failure_after_the_mutation_persisted() {
    let user = test_user();
    let user_id = user.id;
    let users = MockUserRepo::new(vec![user]);
    let users_handle = users.users_handle();

    let uc = BuyCardUseCase {
        users,
        catalog: catalog(),
        activity: MockActivityLog::failing(),
    };
    let err = uc
        .execute(
            user_id,
            BuyCardInput {
                card: "c1".to_owned(),
                variant: "standard".to_owned(),
                quantity: 1,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "ACTIVITY_LOG_FAILED");
    // The purchase itself went through before the append failed.
    let users = users_handle.lock().unwrap();
    assert_eq!(users[0].coins, 4900);
    assert_eq!(users[0].cards, vec![owned_card("c1", "standard", 1)]);
}
