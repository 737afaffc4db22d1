//! Integration tests for the scripted terminal player

use std::time::Instant;

use gitmaster::player::timer::{TimerKind, TimerQueue};
use gitmaster::player::{Phase, PlaybackState};
use gitmaster::{PlayMode, Script, TerminalPlayer, Timing, Turn};

use crate::helpers::{autoplay, interactive, ms, script};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn single_turn_git_status_interactive() {
    let t0 = Instant::now();
    let turn = Turn::new("git status", "On branch main")
        .with_explanation("Shows the state of the working directory");
    let mut player = interactive(Script::new(vec![turn]), t0);

    assert_eq!(player.current_index(), 0);
    assert!(!player.output_revealed());
    assert!(player.can_run());
    assert!(!player.can_advance());

    assert!(player.run(t0));

    let mut prefixes = Vec::new();
    for step in 1..=10 {
        player.tick(t0 + ms(50 * step));
        prefixes.push(player.typed_prefix().to_string());
    }
    assert_eq!(prefixes.first().map(String::as_str), Some("g"));
    assert_eq!(prefixes.last().map(String::as_str), Some("git status"));
    assert_eq!(player.phase(), Phase::Revealing);

    player.tick(t0 + ms(999));
    assert!(!player.output_revealed());

    player.tick(t0 + ms(1000));
    assert!(player.output_revealed());
    let shown = player.current_turn().unwrap();
    assert_eq!(shown.output, "On branch main");
    assert!(shown.explanation.is_some());
    assert!(!player.can_advance());
    assert!(player.is_finished());
    assert!(!player.run(t0 + ms(1000)));
}

#[test]
fn three_turn_autoplay_reveals_in_order() {
    let t0 = Instant::now();
    let mut player = autoplay(script(&["git init", "git add .", "git commit"]), t0);

    // "git init" types by 400ms and reveals at 900ms
    player.tick(t0 + ms(899));
    assert_eq!(player.current_index(), 0);
    assert!(!player.output_revealed());

    player.tick(t0 + ms(900));
    assert_eq!(player.current_index(), 0);
    assert!(player.output_revealed());
    assert_eq!(player.revealed_count(), 1);

    // Output stays up for the 2s pause, turn 1 starts at 2900ms
    player.tick(t0 + ms(2899));
    assert!(player.output_revealed());
    player.tick(t0 + ms(2900));
    assert_eq!(player.current_index(), 1);
    assert_eq!(player.phase(), Phase::Typing);

    // "git add ." types by 3350ms, reveals at 3850ms, turn 2 at 5850ms
    player.tick(t0 + ms(5849));
    assert_eq!(player.current_index(), 1);
    assert_eq!(player.typed_prefix(), "git add .");
    assert!(player.output_revealed());

    player.tick(t0 + ms(5850));
    assert_eq!(player.current_index(), 2);

    // "git commit" types by 6350ms and reveals at 6850ms
    player.tick(t0 + ms(6850));
    assert_eq!(player.current_index(), 2);
    assert!(player.output_revealed());
    assert!(player.is_finished());
    assert_eq!(player.revealed_count(), 3);
    assert!(player.next_deadline().is_none());
}

#[test]
fn autoplay_never_reveals_before_input_is_typed() {
    let t0 = Instant::now();
    let inputs = ["git init", "git status", "git log --oneline"];
    let mut player = autoplay(script(&inputs), t0);
    let end = t0 + ms(60_000);

    let mut revealed_order = Vec::new();
    let mut was_revealed = false;
    while player.step(end) {
        let idx = player.current_index();
        if player.output_revealed() {
            assert_eq!(player.typed_prefix(), inputs[idx]);
            if !was_revealed {
                revealed_order.push(idx);
            }
        }
        was_revealed = player.output_revealed();
    }

    assert_eq!(revealed_order, vec![0, 1, 2]);
    assert!(player.is_finished());
}

#[test]
fn autoplay_pause_delays_next_turn() {
    let t0 = Instant::now();
    let timing = Timing {
        autoplay_pause: ms(300),
        ..Timing::default()
    };
    let mut player = TerminalPlayer::new(script(&["ab", "cd"]), PlayMode::Autoplay, timing, t0);

    // "ab" types by 100ms, reveals at 600ms, next turn starts at 900ms
    player.tick(t0 + ms(899));
    assert_eq!(player.current_index(), 0);
    assert!(player.output_revealed());

    player.tick(t0 + ms(900));
    assert_eq!(player.current_index(), 1);
    assert_eq!(player.typed_prefix(), "");

    player.tick(t0 + ms(950));
    assert_eq!(player.typed_prefix(), "c");
}

#[test]
fn interactive_walkthrough_with_advance() {
    let t0 = Instant::now();
    let mut player = interactive(script(&["git add .", "git commit"]), t0);

    player.run(t0);
    player.tick(t0 + ms(5_000));
    assert!(player.can_advance());

    assert!(player.advance());
    assert_eq!(player.current_index(), 1);
    assert_eq!(player.phase(), Phase::Idle);
    assert!(player.next_deadline().is_none());

    let t1 = t0 + ms(10_000);
    player.run(t1);
    player.tick(t1 + ms(5_000));
    assert!(player.is_finished());
    assert!(!player.advance());
    assert_eq!(player.current_index(), 1);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn typing_yields_one_strictly_growing_prefix_per_char() {
    for input in ["a", "git", "git commit -m \"first\"", "echo héllo → wörld"] {
        let t0 = Instant::now();
        let mut player = interactive(Script::new(vec![Turn::new(input, "")]), t0);
        player.run(t0);

        let len = input.chars().count();
        let mut prefixes: Vec<String> = Vec::new();
        for step in 1..=len as u64 {
            player.tick(t0 + ms(50 * step));
            prefixes.push(player.typed_prefix().to_string());
        }

        assert_eq!(prefixes.len(), len);
        for pair in prefixes.windows(2) {
            assert!(pair[1].starts_with(&pair[0]));
            assert_eq!(pair[1].chars().count(), pair[0].chars().count() + 1);
        }
        assert!(!prefixes[0].is_empty());
        assert_eq!(prefixes[len - 1], input);
    }
}

#[test]
fn advance_before_reveal_changes_nothing() {
    let t0 = Instant::now();
    for checkpoint in [0, 50, 200, 399, 899] {
        let mut player = interactive(script(&["git init", "git status"]), t0);
        player.run(t0);
        player.tick(t0 + ms(checkpoint));
        let before = player.state().clone();

        assert!(!player.advance());
        assert_eq!(player.state(), &before);
    }
}

#[test]
fn index_never_passes_last_turn() {
    let t0 = Instant::now();
    let mut player = interactive(script(&["a", "b", "c"]), t0);

    let mut now = t0;
    for _ in 0..10 {
        player.run(now);
        now += ms(5_000);
        player.tick(now);
        player.advance();
        assert!(player.current_index() <= 2);
    }
    assert_eq!(player.current_index(), 2);
    assert!(player.is_finished());
}

#[test]
fn reset_from_any_state_is_initial_state() {
    let t0 = Instant::now();
    for checkpoint in [0, 50, 300, 800, 1_000, 2_500, 10_000] {
        let mut player = interactive(script(&["git init", "git status"]), t0);
        player.run(t0);
        player.tick(t0 + ms(checkpoint));
        player.advance();

        player.reset(t0 + ms(checkpoint));

        assert_eq!(player.state(), &PlaybackState::new());
        assert!(player.next_deadline().is_none());
    }
}

#[test]
fn reset_restarts_autoplay_from_first_turn() {
    let t0 = Instant::now();
    let mut player = autoplay(script(&["ab", "cd"]), t0);
    // "ab" reveals at 600ms, "cd" starts at 2600ms
    player.tick(t0 + ms(2700));
    assert_eq!(player.current_index(), 1);

    let t1 = t0 + ms(2700);
    player.reset(t1);

    assert_eq!(player.current_index(), 0);
    assert_eq!(player.phase(), Phase::Typing);
    assert_eq!(player.next_deadline(), Some(t1 + ms(50)));
}

#[test]
fn pending_reveal_is_dropped_by_reset() {
    let t0 = Instant::now();
    let mut player = interactive(script(&["git status"]), t0);
    player.run(t0);
    player.tick(t0 + ms(500));
    assert_eq!(player.phase(), Phase::Revealing);

    player.reset(t0 + ms(600));
    player.tick(t0 + ms(60_000));

    assert!(!player.output_revealed());
    assert_eq!(player.phase(), Phase::Idle);
}

#[test]
fn teardown_mid_animation_freezes_state() {
    let t0 = Instant::now();
    let mut player = autoplay(script(&["git status", "git log"]), t0);
    player.tick(t0 + ms(150));
    let before = player.state().clone();

    player.teardown();
    player.tick(t0 + ms(60_000));
    player.reset(t0 + ms(60_000));

    assert!(player.is_torn_down());
    assert_eq!(player.state(), &before);
    assert!(player.next_deadline().is_none());
}

#[test]
fn late_tick_catches_up_exactly() {
    let t0 = Instant::now();
    let mut stepped = autoplay(script(&["git init", "git add ."]), t0);
    let mut jumped = autoplay(script(&["git init", "git add ."]), t0);

    for n in 1..=30 {
        stepped.tick(t0 + ms(50 * n));
    }
    jumped.tick(t0 + ms(1_500));

    assert_eq!(stepped.state(), jumped.state());
    assert_eq!(stepped.next_deadline(), jumped.next_deadline());
}

#[test]
fn timer_queue_discards_previous_epoch() {
    let t0 = Instant::now();
    let mut queue = TimerQueue::new();
    queue.schedule(t0 + ms(500), TimerKind::Reveal);
    let first_epoch = queue.epoch();

    queue.cancel_all();
    queue.schedule(t0 + ms(50), TimerKind::TypeChar);

    assert_ne!(queue.epoch(), first_epoch);
    let fired = queue.pop_due(t0 + ms(1_000)).unwrap();
    assert_eq!(fired.kind, TimerKind::TypeChar);
    assert!(queue.pop_due(t0 + ms(1_000)).is_none());
}
