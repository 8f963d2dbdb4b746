use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use treasure_backend::GameStore;

#[test]
fn starts_with_three_turns_and_nothing_checked() {
    let store = GameStore::new();
    assert_eq!(store.turns_remaining(), 3);
    assert_eq!(store.hiding_spots().len(), 9);
    assert!(store.hiding_spots().iter().all(|s| !s.has_been_checked));
    assert!(!store.treasure_found());
}

#[test]
fn exactly_one_spot_has_treasure() {
    let store = GameStore::new();
    let treasures = store
        .hiding_spots()
        .iter()
        .filter(|s| s.has_treasure)
        .count();
    assert_eq!(treasures, 1);
}

#[test]
fn lookup_by_id_and_unknown_id() {
    let store = GameStore::with_treasure_at(4, 9, 3);
    assert_eq!(store.hiding_spot("4").unwrap().id, "4");
    assert!(store.hiding_spot("9").is_none());
    assert!(store.hiding_spot("bogus").is_none());
}

#[test]
fn checking_a_fresh_spot_consumes_a_turn() {
    let mut store = GameStore::with_treasure_at(8, 9, 3);
    store.check_hiding_spot("0");
    assert_eq!(store.turns_remaining(), 2);
    assert!(store.hiding_spot("0").unwrap().has_been_checked);
}

#[test]
fn rechecking_a_checked_spot_is_a_no_op() {
    let mut store = GameStore::with_treasure_at(8, 9, 3);
    store.check_hiding_spot("0");
    store.check_hiding_spot("0");
    assert_eq!(store.turns_remaining(), 2);
}

#[test]
fn unknown_id_is_a_no_op() {
    let mut store = GameStore::with_treasure_at(8, 9, 3);
    store.check_hiding_spot("17");
    store.check_hiding_spot("bogus");
    assert_eq!(store.turns_remaining(), 3);
    assert!(store.hiding_spots().iter().all(|s| !s.has_been_checked));
}

#[test]
fn post_win_checks_are_no_ops() {
    let mut store = GameStore::with_treasure_at(4, 9, 3);
    store.check_hiding_spot("4");
    assert!(store.treasure_found());
    assert_eq!(store.turns_remaining(), 2);

    store.check_hiding_spot("0");
    assert_eq!(store.turns_remaining(), 2);
    assert!(!store.hiding_spot("0").unwrap().has_been_checked);
}

#[test]
fn turns_are_not_floored_at_zero() {
    let mut store = GameStore::with_treasure_at(8, 9, 3);
    for id in ["0", "1", "2", "3"] {
        store.check_hiding_spot(id);
    }
    assert_eq!(store.turns_remaining(), -1);
}

proptest! {
    #[test]
    fn treasure_is_placed_exactly_once(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let store = GameStore::with_rng(&mut rng, 9, 3);

        prop_assert_eq!(store.hiding_spots().len(), 9);
        prop_assert_eq!(
            store.hiding_spots().iter().filter(|s| s.has_treasure).count(),
            1
        );
        prop_assert!(store.hiding_spots().iter().all(|s| !s.has_been_checked));
        prop_assert_eq!(store.turns_remaining(), 3);
    }
}
