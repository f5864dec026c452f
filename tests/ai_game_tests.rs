use rand::rngs::SmallRng;
use rand::SeedableRng;
use twenty48::{
    AiPlayer, Direction, GameEngine, GameStatus, Grid, MoveOutcome, Player, PlayerAction, Session,
};

#[test]
fn test_ai_plays_to_the_end() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut player = AiPlayer::new();
    let mut engine = GameEngine::new();
    engine.start(&mut rng);

    let mut turns = 0;
    while !engine.status().is_terminal() {
        turns += 1;
        let action = player.select_move(&mut rng, &engine).unwrap();
        let PlayerAction::Move(dir) = action else {
            panic!("AI gave up on a live game: {:?}", action);
        };
        let outcome = engine.handle_move(dir, &mut rng);
        assert!(outcome.moved, "AI picked a move that does nothing");
        if turns > 20_000 {
            panic!("game took too many turns");
        }
    }
    assert!(matches!(engine.status(), GameStatus::Won | GameStatus::Lost));
    assert!(engine.highest_tile() >= 64);
}

#[test]
fn test_best_move_skips_dead_directions() {
    let grid = Grid::from_rows([
        [2, 4, 0, 0],
        [8, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ])
    .unwrap();
    let dir = AiPlayer::best_move(&grid).unwrap();
    assert!(grid.can_shift(dir));
    assert!(dir != Direction::Left && dir != Direction::Up);

    let locked = Grid::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ])
    .unwrap();
    assert_eq!(AiPlayer::best_move(&locked), None);
}

#[test]
fn test_best_move_prefers_merging() {
    let grid = Grid::from_rows([
        [4, 4, 2, 8],
        [2, 8, 16, 32],
        [8, 16, 32, 64],
        [16, 32, 64, 128],
    ])
    .unwrap();
    let dir = AiPlayer::best_move(&grid).unwrap();
    assert!(dir.is_horizontal());
}

#[test]
fn test_session_runs_ai_to_completion() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut session = Session::new(Box::new(AiPlayer::new()), GameEngine::new());
    let summary = session.run(&mut rng).unwrap();
    assert_eq!(summary.games, 1);
    assert!(summary.last_status.is_terminal());
    assert_eq!(summary.moves, session.engine().moves());
    assert_eq!(summary.highest_tile, session.engine().highest_tile());
}

#[test]
fn test_session_restarts_and_move_limit() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut session = Session::new(Box::new(AiPlayer::with_restarts(2)), GameEngine::new());
    let summary = session.run(&mut rng).unwrap();
    assert_eq!(summary.games, 3);
    assert!(summary.moves > session.engine().moves());

    let mut session =
        Session::new(Box::new(AiPlayer::new()), GameEngine::new()).with_max_moves(10);
    let summary = session.run(&mut rng).unwrap();
    assert_eq!(summary.moves, 10);
    assert_eq!(summary.last_status, GameStatus::InProgress);
    assert_eq!(session.engine().moves(), 10);
}

/// Replays a fixed list of actions and records what it was told.
struct Scripted {
    actions: Vec<PlayerAction>,
    seen: std::rc::Rc<std::cell::RefCell<Vec<(Direction, bool)>>>,
}

impl Player for Scripted {
    fn select_move(
        &mut self,
        _rng: &mut SmallRng,
        _engine: &GameEngine,
    ) -> anyhow::Result<PlayerAction> {
        Ok(if self.actions.is_empty() {
            PlayerAction::Quit
        } else {
            self.actions.remove(0)
        })
    }

    fn handle_outcome(&mut self, direction: Direction, outcome: &MoveOutcome) {
        self.seen.borrow_mut().push((direction, outcome.moved));
    }
}

#[test]
fn test_session_ignores_unrecognized_input() {
    let mut rng = SmallRng::seed_from_u64(1);
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let player = Scripted {
        actions: vec![PlayerAction::Ignore, PlayerAction::Ignore, PlayerAction::Quit],
        seen: seen.clone(),
    };
    let mut session = Session::new(Box::new(player), GameEngine::new());
    let summary = session.run(&mut rng).unwrap();
    assert_eq!(summary.moves, 0);
    assert_eq!(summary.last_status, GameStatus::InProgress);
    assert_eq!(session.engine().grid().count_empty(), 14);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_session_reports_unmoved_directions() {
    let mut rng = SmallRng::seed_from_u64(1);
    let grid = Grid::from_rows([
        [2, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ])
    .unwrap();
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let player = Scripted {
        actions: vec![
            PlayerAction::Move(Direction::Left),
            PlayerAction::Move(Direction::Up),
        ],
        seen: seen.clone(),
    };
    let mut session = Session::new(Box::new(player), GameEngine::with_grid(grid));
    let summary = session.run(&mut rng).unwrap();
    assert_eq!(summary.moves, 0);
    assert_eq!(
        *seen.borrow(),
        vec![(Direction::Left, false), (Direction::Up, false)]
    );
    // a started grid is kept as is
    assert_eq!(*session.engine().grid(), grid);
}
