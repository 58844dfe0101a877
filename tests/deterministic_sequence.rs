use snake_arcade::config::GameConfig;
use snake_arcade::game::{GameEngine, TickEvent};
use snake_arcade::input::Direction;
use snake_arcade::leaderboard::Leaderboard;
use snake_arcade::random::ScriptedRandom;
use snake_arcade::snake::Position;
use snake_arcade::snapshot::{EndReason, GameStatus};

/// Centre of cell `index` on a 20-cell axis, as a unit value.
fn unit(index: i32) -> f64 {
    (f64::from(index) + 0.5) / 20.0
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    // After the first meal, food goes to (3,0): on the row the snake turns into.
    let rng = ScriptedRandom::new(vec![unit(3), unit(0), unit(15), unit(15)]);
    let mut engine = GameEngine::with_parts(GameConfig::default(), rng, Leaderboard::new())
        .expect("default config should be valid");

    engine.start().expect("start should succeed");
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.snake().len(), 2);

    for _ in 0..3 {
        assert_eq!(engine.tick(), Ok(TickEvent::Moved));
    }
    assert_eq!(engine.tick(), Ok(TickEvent::Ate));
    assert_eq!(engine.snake().head(), Position { x: 8, y: 3 });
    assert_eq!(engine.score(), 1);
    assert_eq!(engine.snake().len(), 3);
    assert_eq!(engine.food(), Position { x: 3, y: 0 });

    // Reversal is dropped while moving up.
    engine.request(Direction::Down);
    for _ in 0..3 {
        assert_eq!(engine.tick(), Ok(TickEvent::Moved));
    }
    assert_eq!(engine.snake().head(), Position { x: 8, y: 0 });

    engine.request(Direction::Left);
    for _ in 0..4 {
        assert_eq!(engine.tick(), Ok(TickEvent::Moved));
    }
    assert_eq!(engine.tick(), Ok(TickEvent::Ate));
    assert_eq!(engine.snake().head(), Position { x: 3, y: 0 });
    assert_eq!(engine.score(), 2);
    assert_eq!(engine.food(), Position { x: 15, y: 15 });

    for _ in 0..3 {
        assert_eq!(engine.tick(), Ok(TickEvent::Moved));
    }
    assert_eq!(engine.snake().head(), Position { x: 0, y: 0 });
    assert_eq!(engine.tick(), Ok(TickEvent::Ended(EndReason::Collision)));

    let report = engine.end_report().expect("game should have ended");
    assert_eq!(report.snapshot.score, 2);
    assert_eq!(report.standings.best_score, 2);
    assert_eq!(report.standings.history, vec![2]);
}
