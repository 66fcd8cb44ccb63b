//! Bot delay and cancellation tests on a paused tokio clock.

use game_xo::{GameEvent, Session};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{Instant, timeout};
use xo_core::{Cell, Mark, Outcome, RandomBot};

const DELAY: Duration = Duration::from_millis(500);

fn session(seed: u64) -> (Session<rand::rngs::StdRng>, UnboundedReceiver<GameEvent>) {
    Session::new(DELAY, RandomBot::seeded(seed))
}

#[tokio::test(start_paused = true)]
async fn test_bot_replies_after_delay() {
    let (mut session, mut rx) = session(1);
    session.handle(GameEvent::CellClicked(4)).unwrap();

    let started = Instant::now();
    let event = rx.recv().await.expect("bot move delivered");
    assert!(started.elapsed() >= DELAY);

    let GameEvent::BotMove(bot_move) = event else {
        panic!("expected a bot move, got {:?}", event);
    };
    assert_ne!(bot_move.position.to_index(), 4);
    // Sent but not yet applied.
    assert!(session.bot_pending());

    assert_eq!(session.handle(event), Ok(true));
    assert_eq!(session.game().step(), 2);
    assert_eq!(
        session.game().board().get(bot_move.position),
        Cell::Marked(Mark::O)
    );
    assert!(!session.bot_pending());
}

#[tokio::test(start_paused = true)]
async fn test_bot_silent_before_delay() {
    let (mut session, mut rx) = session(2);
    session.handle(GameEvent::CellClicked(0)).unwrap();

    let early = timeout(DELAY - Duration::from_millis(1), rx.recv()).await;
    assert!(early.is_err());
    assert!(session.bot_pending());
}

#[tokio::test(start_paused = true)]
async fn test_jump_cancels_pending_bot_move() {
    let (mut session, mut rx) = session(3);
    session.handle(GameEvent::CellClicked(0)).unwrap();
    session.handle(GameEvent::JumpTo(0)).unwrap();
    assert!(!session.bot_pending());

    let delivered = timeout(DELAY * 4, rx.recv()).await;
    assert!(delivered.is_err());
    assert_eq!(session.game().history().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_click_during_delay_leaves_bot_move_intact() {
    let (mut session, mut rx) = session(7);
    let started = Instant::now();
    session.handle(GameEvent::CellClicked(0)).unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(session.handle(GameEvent::CellClicked(4)), Ok(false));
    assert_eq!(session.game().history().len(), 2);
    assert!(session.bot_pending());

    // The ignored click does not restart the delay.
    let event = rx.recv().await.expect("bot move delivered");
    assert!(started.elapsed() >= DELAY);
    assert!(started.elapsed() < DELAY + Duration::from_millis(200));

    let GameEvent::BotMove(bot_move) = event else {
        panic!("expected a bot move, got {:?}", event);
    };
    assert_eq!(session.handle(event), Ok(true));
    assert_eq!(session.game().step(), 2);
    assert_eq!(
        session.game().board().get(bot_move.position),
        Cell::Marked(Mark::O)
    );
    assert_eq!(session.game().turn(), Mark::X);
    assert!(!session.bot_pending());
}

#[tokio::test(start_paused = true)]
async fn test_restart_cancels_pending_bot_move() {
    let (mut session, mut rx) = session(4);
    session.handle(GameEvent::CellClicked(8)).unwrap();
    session.handle(GameEvent::Restart).unwrap();

    assert!(timeout(DELAY * 4, rx.recv()).await.is_err());
    assert_eq!(session.game().history().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_queued_move_for_old_state_is_dropped() {
    let (mut session, mut rx) = session(5);
    session.handle(GameEvent::CellClicked(0)).unwrap();

    // Delivered, but the user jumps before the session reads it.
    let stale = rx.recv().await.expect("bot move delivered");
    session.handle(GameEvent::JumpTo(1)).unwrap();
    let board_before = *session.game().board();

    assert_eq!(session.handle(stale), Ok(false));
    assert_eq!(session.game().board(), &board_before);

    // The jump landed on O's turn, so a fresh move was planned.
    let fresh = rx.recv().await.expect("fresh bot move delivered");
    assert_eq!(session.handle(fresh), Ok(true));
    assert_eq!(session.game().step(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_full_game_against_bot_terminates() {
    let (mut session, mut rx) = session(6);

    while !session.game().outcome().is_over() {
        let human = xo_core::Position::empty_positions(session.game().board())[0];
        assert_eq!(session.handle(GameEvent::CellClicked(human.to_index())), Ok(true));
        if session.game().outcome().is_over() {
            break;
        }
        let event = rx.recv().await.expect("bot move delivered");
        assert_eq!(session.handle(event), Ok(true));
    }

    assert!(!session.bot_pending());
    assert_ne!(session.game().outcome(), Outcome::InProgress);
    assert!(timeout(DELAY * 4, rx.recv()).await.is_err());
}
