//! Hint discovery and hint marking tests.

use set_game::{
    find_all_sets, find_first_set, GameConfig, ManualClock, SelectionState, SetGame,
};

fn game(seed: u64) -> SetGame<ManualClock> {
    let mut game = SetGame::with_clock(seed, ManualClock::new());
    game.start_game();
    game
}

fn game_with_set() -> SetGame<ManualClock> {
    (0..)
        .map(game)
        .find(|g| g.is_set_available())
        .expect("some seed shows a set")
}

/// Test that the first set is the first of all sets, and every listed set is valid.
#[test]
fn test_first_and_all_sets_agree() {
    for seed in 0..30 {
        let game = game(seed);
        let all = game.all_sets();

        assert_eq!(game.first_set(), all.first().copied());
        assert_eq!(game.is_set_available(), !all.is_empty());
        for triple in &all {
            assert!(triple[0] < triple[1] && triple[1] < triple[2]);
            assert!(game.is_valid_set(triple));
        }
        assert_eq!(find_all_sets(game.tableau()), all);
        assert_eq!(find_first_set(game.tableau()), game.first_set());
    }
}

/// Test that the validity of a triple does not depend on index order.
#[test]
fn test_valid_set_is_order_independent() {
    let game = game(4);
    let n = game.tableau().len();

    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                let expected = game.is_valid_set(&[i, j, k]);
                for perm in [[i, k, j], [j, i, k], [j, k, i], [k, i, j], [k, j, i]] {
                    assert_eq!(game.is_valid_set(&perm), expected);
                }
            }
        }
    }
}

/// Test marking a known set as a hint.
#[test]
fn test_mark_hint_on_known_set() {
    let mut game = game_with_set();
    let found = game.first_set().unwrap();

    game.mark_hint(&found);

    assert_eq!(game.score(), -30);
    assert_eq!(game.hint_count(), 1);
    for (i, card) in game.tableau().iter().enumerate() {
        let expected = if found.contains(&i) {
            SelectionState::Hinted
        } else {
            SelectionState::None
        };
        assert_eq!(card.selection, expected);
    }
}

/// Test that marking a hint clears existing selections.
#[test]
fn test_mark_hint_clears_selection() {
    let mut game = game(6);
    let id = game.tableau()[0].id;
    game.choose(id);

    game.mark_hint(&[5]);

    assert_eq!(game.card(id).unwrap().selection, SelectionState::None);
    assert!(game.tableau()[5].is(SelectionState::Hinted));
    assert_eq!(game.score(), -10);
}

/// Test malformed hint requests.
#[test]
fn test_mark_hint_ignores_bad_indices() {
    let mut game = game(6);

    game.mark_hint(&[]);
    game.mark_hint(&[40, 99]);
    assert_eq!(game.hint_count(), 0);
    assert_eq!(game.score(), 0);

    game.mark_hint(&[2, 2, 50]);
    assert_eq!(game.hint_count(), 1);
    assert_eq!(game.score(), -10);
    assert!(game.tableau()[2].is(SelectionState::Hinted));
}

/// Test the hint command reveals one card of the first set.
#[test]
fn test_hint_reveals_one_card() {
    let mut game = game_with_set();
    let expected = game.first_set();

    let found = game.hint();

    assert_eq!(found, expected);
    let hinted: Vec<usize> = game
        .tableau()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is(SelectionState::Hinted))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(hinted, vec![found.unwrap()[0]]);
    assert_eq!(game.score(), -10);
    assert_eq!(game.hint_count(), 1);
}

/// Test configuring the hint to reveal the whole set.
#[test]
fn test_hint_reveal_count() {
    let config = GameConfig::default().with_hint_reveal_count(3);
    let mut game = (0..)
        .map(|seed| {
            let mut g = SetGame::with_config(config.clone(), seed, ManualClock::new()).unwrap();
            g.start_game();
            g
        })
        .find(|g| g.is_set_available())
        .unwrap();

    let found = game.hint().unwrap();

    for i in found {
        assert!(game.tableau()[i].is(SelectionState::Hinted));
    }
    assert_eq!(game.score(), -30);
}

/// Test that marking a hint replaces a completed set still showing.
#[test]
fn test_mark_hint_replaces_completed_set() {
    let mut game = game_with_set();
    let found = game.first_set().unwrap();
    let ids: Vec<_> = found.iter().map(|&i| game.tableau()[i].id).collect();
    for &id in &ids {
        game.choose(id);
    }
    assert_eq!(game.set_count(), 1);
    let other = (0..12).find(|i| !found.contains(i)).unwrap();

    game.mark_hint(&[other]);

    assert!(ids.iter().all(|id| game.card(*id).is_none()));
    assert!(game.tableau().iter().all(|c| !c.is(SelectionState::Matched)));
    assert_eq!(game.draw_pile_count(), 66);
    assert_eq!(game.tableau().len(), 12);
    assert!(game.tableau()[other].is(SelectionState::Hinted));

    // the old cards are gone, so choosing them again scores nothing
    for &id in &ids {
        game.choose(id);
    }
    assert_eq!(game.set_count(), 1);
}

/// Test that hinting while a completed set is showing acknowledges it first.
#[test]
fn test_hint_acknowledges_completed_set() {
    let mut game = game_with_set();
    let found = game.first_set().unwrap();
    let ids: Vec<_> = found.iter().map(|&i| game.tableau()[i].id).collect();
    for &id in &ids {
        game.choose(id);
    }
    let score = game.score();

    game.hint();

    assert!(ids.iter().all(|id| game.card(*id).is_none()));
    assert!(game.tableau().iter().all(|c| !c.is(SelectionState::Matched)));
    assert_eq!(game.tableau().len(), 12);
    if game.is_set_available() {
        assert_eq!(game.score(), score - 10);
    } else {
        assert_eq!(game.score(), score);
    }
}

/// Test hinting when no set is available.
#[test]
fn test_hint_without_set() {
    let mut game = SetGame::with_clock(0, ManualClock::new());
    game.deal_cards(2);

    assert_eq!(game.hint(), None);
    assert_eq!(game.hint_count(), 0);
    assert_eq!(game.score(), 0);
}
