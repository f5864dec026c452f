use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use twenty48::{Direction, GameEngine, GameState, GameStatus, MoveOutcome};

fn played_engine(seed: u64, moves: usize) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    engine.start(&mut rng);
    for i in 0..moves {
        engine.handle_move(Direction::ALL[i % 4], &mut rng);
    }
    engine
}

proptest! {
    #[test]
    fn game_state_roundtrip(seed in any::<u64>(), moves in 0..60usize) {
        let engine = played_engine(seed, moves);
        let state = engine.state();
        let bytes = bincode::serialize(&state).unwrap();
        let decoded: GameState = bincode::deserialize(&bytes).unwrap();
        let restored = GameEngine::from_state(decoded).unwrap();
        prop_assert_eq!(engine.state(), restored.state());
    }
}

#[test]
fn test_game_state_json_shape() {
    let state = GameState {
        cells: [[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 8]],
        moves: 3,
    };
    let value = serde_json::to_value(state).unwrap();
    assert_eq!(value["moves"], 3);
    assert_eq!(value["cells"][1][1], 4);
    assert_eq!(value["cells"][3][3], 8);
}

#[test]
fn test_outcome_and_status_serialize() {
    let outcome = MoveOutcome {
        moved: true,
        status: GameStatus::Won,
        progress: 100.0,
    };
    let text = serde_json::to_string(&outcome).unwrap();
    assert_eq!(text, r#"{"moved":true,"status":"Won","progress":100.0}"#);
    let back: MoveOutcome = serde_json::from_str(&text).unwrap();
    assert_eq!(back, outcome);
}

#[test]
fn test_invalid_snapshot_is_rejected() {
    let json = r#"{"cells":[[3,0,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]],"moves":0}"#;
    let state: GameState = serde_json::from_str(json).unwrap();
    assert!(GameEngine::from_state(state).is_err());
}
