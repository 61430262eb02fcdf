//! Opening cube draft through an injected chooser.

use std::cell::RefCell;
use std::rc::Rc;

use merchants::core::{MerchantsConfig, Player, PlayerId};
use merchants::rules::{snake_order, CubeChooser, GameEngine, ScriptedChooser};
use merchants::{Color, SpecialCardType};

/// Records who was asked, and always takes the last available color.
#[derive(Debug, Default)]
struct RecordingChooser {
    asked: Rc<RefCell<Vec<PlayerId>>>,
}

impl CubeChooser for RecordingChooser {
    fn choose_cube(&mut self, player: &Player, available: &[Color]) -> Option<Color> {
        self.asked.borrow_mut().push(player.id);
        available.last().copied()
    }
}

/// Never picks anything.
#[derive(Debug)]
struct Abstain;

impl CubeChooser for Abstain {
    fn choose_cube(&mut self, _player: &Player, _available: &[Color]) -> Option<Color> {
        None
    }
}

#[test]
fn test_snake_order_four_players() {
    let order: Vec<u8> = snake_order(4).into_iter().map(|p| p.0).collect();
    assert_eq!(order, vec![3, 2, 1, 0, 0, 1, 2, 3]);
}

#[test]
fn test_draft_asks_players_in_snake_order() {
    let asked = Rc::new(RefCell::new(Vec::new()));
    let chooser = RecordingChooser { asked: Rc::clone(&asked) };

    let engine = GameEngine::with_chooser(MerchantsConfig::new(3), 1, chooser).unwrap();

    assert_eq!(*asked.borrow(), snake_order(3));
    // Last available color is Brown until its five cubes run out.
    let state = engine.state();
    assert_eq!(state.cube_supply().count(Color::Brown), 0);
    assert_eq!(state.cube_supply().count(Color::Yellow), 4);
    assert_eq!(state.player(PlayerId::new(0)).ships[0].cube, Some(Color::Brown));
    assert_eq!(state.player(PlayerId::new(2)).ships[1].cube, Some(Color::Yellow));
}

#[test]
fn test_scripted_draft() {
    let chooser = ScriptedChooser::new([
        Color::White,
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Brown,
    ]);
    let engine = GameEngine::with_chooser(MerchantsConfig::new(3), 1, chooser).unwrap();
    let state = engine.state();

    let cubes = |p: u8| -> Vec<Color> { state.player(PlayerId::new(p)).cubes().collect() };
    // Order: 2, 1, 0, 0, 1, 2.
    assert_eq!(cubes(2), vec![Color::White, Color::Brown]);
    assert_eq!(cubes(1), vec![Color::Blue, Color::Yellow]);
    assert_eq!(cubes(0), vec![Color::Red, Color::Green]);
    for color in Color::ALL {
        assert_eq!(state.cube_supply().count(color), 4);
    }
}

#[test]
fn test_abstaining_chooser_places_nothing() {
    let config = MerchantsConfig::new(2).with_starting_coins(10);
    let mut engine = GameEngine::with_chooser(config, 1, Abstain).unwrap();

    assert_eq!(engine.state().cube_supply().total(), 30);
    assert!(engine
        .state()
        .players()
        .values()
        .all(|p| p.ships.iter().all(|s| s.is_empty())));

    // A bought ship also starts empty when the chooser passes.
    engine.buy_special_card(SpecialCardType::Ship).unwrap();
    assert_eq!(engine.state().current().ships.len(), 3);
    assert!(engine.state().current().ships[2].is_empty());
}

#[test]
fn test_small_supply_skips_late_picks() {
    let config = MerchantsConfig::new(4)
        .with_palette(&[Color::Red, Color::Blue])
        .with_cubes_per_color(3);
    let engine = GameEngine::with_chooser(config, 1, ScriptedChooser::default()).unwrap();
    let state = engine.state();

    assert_eq!(state.cube_supply().total(), 0);
    assert_eq!(state.placed_cubes(Color::Red), 3);
    assert_eq!(state.placed_cubes(Color::Blue), 3);
    // Seats 3, 2, 1, 0 pick first; then 0 and 1 get the last two cubes.
    let counts: Vec<usize> = state.players().values().map(|p| p.cubes().count()).collect();
    assert_eq!(counts, vec![2, 2, 1, 1]);
}
