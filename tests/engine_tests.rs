//! Command tests through the public engine API.
//!
//! Hands come from a shuffled deck, so tests that need particular colors
//! either shrink the palette or search a few seeds for a suitable deal.

use merchants::core::{GamePhase, MerchantsConfig, PlayerId};
use merchants::rules::{GameEngine, ScriptedChooser};
use merchants::{Color, MerchantsError, SpecialCardType};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

/// Two players drafting: player 0 gets `p0`, player 1 gets `p1`.
fn drafted(config: MerchantsConfig, seed: u64, p0: [Color; 2], p1: [Color; 2]) -> GameEngine {
    let chooser = ScriptedChooser::new([p1[0], p0[0], p0[1], p1[1]]);
    GameEngine::with_chooser(config, seed, chooser).unwrap()
}

/// Indices of cards of `color` in the current player's hand.
fn indices_of(engine: &GameEngine, color: Color) -> Vec<usize> {
    engine
        .state()
        .current()
        .hand
        .iter()
        .enumerate()
        .filter(|(_, c)| c.color == color)
        .map(|(i, _)| i)
        .collect()
}

/// Red/blue game where player 0 holds at least three red cards.
fn red_blue_game(starting_coins: u32) -> GameEngine {
    let config = MerchantsConfig::new(2)
        .with_palette(&[Color::Red, Color::Blue])
        .with_starting_hand_size(6)
        .with_starting_coins(starting_coins);

    (0..100)
        .map(|seed| {
            drafted(
                config.clone(),
                seed,
                [Color::Red, Color::Red],
                [Color::Red, Color::Blue],
            )
        })
        .find(|engine| {
            indices_of(engine, Color::Red).len() >= 3 && !indices_of(engine, Color::Blue).is_empty()
        })
        .expect("some seed deals three reds and a blue")
}

#[test]
fn test_delivery_payout_for_all_players() {
    let mut engine = red_blue_game(0);
    let reds: Vec<usize> = indices_of(&engine, Color::Red).into_iter().take(3).collect();
    let market_before = engine.state().marketplace().len();

    let delivery = engine.make_delivery(&reds).unwrap();

    assert_eq!(delivery.color, Color::Red);
    assert_eq!(delivery.cards, 3);
    // Two red ships: 2 x 3. One red ship: 1 x 3.
    assert_eq!(engine.state().player(P0).coins, 6);
    assert_eq!(engine.state().player(P1).coins, 3);
    assert_eq!(delivery.payouts[P0], 6);
    assert_eq!(delivery.payouts[P1], 3);
    assert_eq!(engine.state().player(P0).hand.len(), 3);
    assert_eq!(engine.state().marketplace().len(), market_before + 3);
    assert!(engine
        .state()
        .marketplace()
        .iter()
        .skip(market_before)
        .all(|c| c.color == Color::Red));
}

#[test]
fn test_delivery_with_office() {
    let mut engine = red_blue_game(10);
    engine.buy_special_card(SpecialCardType::Office).unwrap();
    assert_eq!(engine.state().player(P0).coins, 0);
    let reds: Vec<usize> = indices_of(&engine, Color::Red).into_iter().take(3).collect();

    engine.make_delivery(&reds).unwrap();

    assert_eq!(engine.state().player(P0).coins, 12);
    assert_eq!(engine.state().player(P1).coins, 13);
}

#[test]
fn test_mixed_color_delivery_changes_nothing() {
    let mut engine = red_blue_game(0);
    let red = indices_of(&engine, Color::Red)[0];
    let blue = indices_of(&engine, Color::Blue)[0];
    let before = engine.snapshot();

    assert_eq!(
        engine.make_delivery(&[red, blue]),
        Err(MerchantsError::InvalidSelection)
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_delivery_rejects_empty_and_out_of_range() {
    let mut engine = red_blue_game(0);
    let before = engine.snapshot();

    assert_eq!(engine.make_delivery(&[]), Err(MerchantsError::InvalidSelection));
    assert_eq!(engine.make_delivery(&[6]), Err(MerchantsError::InvalidSelection));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_draw_stops_at_hand_limit() {
    let config = MerchantsConfig::new(2).with_starting_hand_size(5);
    let mut engine = GameEngine::new_game(config, 11).unwrap();
    assert_eq!(engine.state().current().hand_limit, 6);
    let deck_before = engine.state().deck_len();

    assert_eq!(engine.draw_cards(2), Ok(1));
    assert_eq!(engine.state().current().hand.len(), 6);
    assert_eq!(engine.state().deck_len(), deck_before - 1);
}

#[test]
fn test_draw_turn_cards_uses_configured_count() {
    let config = MerchantsConfig::new(2).with_draws_per_turn(3);
    let mut engine = GameEngine::new_game(config, 11).unwrap();

    assert_eq!(engine.draw_turn_cards(), Ok(3));
    assert_eq!(engine.state().current().hand.len(), 6);
}

#[test]
fn test_exchange_on_empty_slot_fails() {
    let config = MerchantsConfig::new(2).with_starting_ships(3);
    let mut engine = GameEngine::new_game(config, 5).unwrap();
    assert!(engine.state().current().ships[2].is_empty());
    let supply = engine.state().cube_supply().clone();

    assert_eq!(
        engine.exchange_cube(2, Color::Red),
        Err(MerchantsError::SlotUnavailable)
    );
    assert_eq!(engine.state().cube_supply(), &supply);
}

#[test]
fn test_exchange_moves_one_cube_each_way() {
    let mut engine = drafted(
        MerchantsConfig::new(2),
        5,
        [Color::Green, Color::Blue],
        [Color::Red, Color::Red],
    );

    engine.exchange_cube(1, Color::Red).unwrap();

    let supply = engine.state().cube_supply();
    assert_eq!(engine.state().player(P0).ships[1].cube, Some(Color::Red));
    assert_eq!(supply.count(Color::Blue), 5);
    assert_eq!(supply.count(Color::Red), 2);
}

#[test]
fn test_exchange_for_sold_out_color_fails() {
    let config = MerchantsConfig::new(2)
        .with_palette(&[Color::Red, Color::Blue])
        .with_cubes_per_color(2);
    let mut engine = drafted(config, 5, [Color::Red, Color::Blue], [Color::Red, Color::Blue]);
    let before = engine.snapshot();

    assert_eq!(
        engine.exchange_cube(0, Color::Blue),
        Err(MerchantsError::SupplyExhausted)
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_warehouse_purchase() {
    let config = MerchantsConfig::new(2).with_starting_coins(30);
    let mut engine = GameEngine::new_game(config, 1).unwrap();

    engine.buy_special_card(SpecialCardType::Warehouse).unwrap();
    assert_eq!(engine.state().current().hand_limit, 8);
    assert_eq!(engine.state().catalog().remaining(SpecialCardType::Warehouse), 1);

    engine.buy_special_card(SpecialCardType::Warehouse).unwrap();
    assert_eq!(engine.state().catalog().remaining(SpecialCardType::Warehouse), 0);

    let before = engine.snapshot();
    assert_eq!(
        engine.buy_special_card(SpecialCardType::Warehouse),
        Err(MerchantsError::SupplyExhausted)
    );
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.state().current().coins, 10);
}

#[test]
fn test_purchase_without_coins_fails() {
    let mut engine = GameEngine::new_game(MerchantsConfig::new(2), 1).unwrap();

    assert_eq!(
        engine.buy_special_card(SpecialCardType::Forklift),
        Err(MerchantsError::InsufficientFunds { needed: 10, available: 0 })
    );
    assert!(engine.state().current().special_cards.is_empty());
}

#[test]
fn test_ship_purchase_keeps_cubes_conserved() {
    let config = MerchantsConfig::new(2).with_starting_coins(20);
    let mut engine = GameEngine::new_game(config, 8).unwrap();

    engine.buy_special_card(SpecialCardType::Ship).unwrap();
    engine.buy_special_card(SpecialCardType::Ship).unwrap();

    let state = engine.state();
    assert_eq!(state.current().ships.len(), 4);
    assert_eq!(state.catalog().remaining(SpecialCardType::Ship), 12);
    for color in Color::ALL {
        assert_eq!(
            state.cube_supply().count(color) + state.placed_cubes(color),
            5,
            "{color} cubes"
        );
    }
}

#[test]
fn test_phase_and_turn_progression() {
    let mut engine = GameEngine::new_game(MerchantsConfig::new(3), 2).unwrap();
    let mut seen = Vec::new();

    for _ in 0..6 {
        seen.push((engine.state().current_player().0, engine.state().phase()));
        engine.next_phase();
    }

    assert_eq!(
        seen,
        vec![
            (0, GamePhase::Purchase),
            (0, GamePhase::Deliver),
            (1, GamePhase::Purchase),
            (1, GamePhase::Deliver),
            (2, GamePhase::Purchase),
            (2, GamePhase::Deliver),
        ]
    );
    assert_eq!(engine.state().current_player(), P0);
    assert_eq!(engine.state().turn_number(), 4);
}

#[test]
fn test_check_game_end_is_sticky() {
    let config = MerchantsConfig::new(2)
        .with_cards_per_color(3)
        .with_base_hand_limit(30);
    let mut engine = GameEngine::new_game(config, 4).unwrap();
    // 18 cards, 6 dealt, 6 to market.
    assert_eq!(engine.state().deck_len(), 6);
    assert!(!engine.check_game_end());

    assert_eq!(engine.draw_cards(4), Ok(4));
    assert!(!engine.check_game_end());
    assert_eq!(engine.draw_cards(4), Ok(2));

    assert!(engine.check_game_end());
    assert!(engine.check_game_end());
    assert!(engine.state().is_ended());
    assert_eq!(engine.make_delivery(&[0]), Err(MerchantsError::GameOver));
    assert!(engine.legal_actions().is_empty());
}

#[test]
fn test_draw_card_on_empty_deck() {
    let config = MerchantsConfig::new(2).with_cards_per_color(2);
    let mut engine = GameEngine::new_game(config, 4).unwrap();
    assert_eq!(engine.state().deck_len(), 0);

    assert_eq!(engine.draw_card(), Err(MerchantsError::DeckExhausted));
    assert!(engine.state().is_ended());
}

#[test]
fn test_winner_is_richest() {
    let mut engine = red_blue_game(0);
    let reds: Vec<usize> = indices_of(&engine, Color::Red).into_iter().take(1).collect();
    engine.make_delivery(&reds).unwrap();

    // Player 0 earns 2, player 1 earns 1.
    assert_eq!(engine.get_winner(), P0);
    assert_eq!(engine.standings(), vec![P0, P1]);
}
