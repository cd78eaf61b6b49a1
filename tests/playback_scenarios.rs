use quickread::app::render_state::{status_label, STATUS_COMPLETE, STATUS_PAUSED};
use quickread::engine::{PlaybackEngine, PlaybackPhase, TickOutcome, TimingConfig};
use quickread::reading::{
    calculate_anchor_position, calculate_word_delay, split_at_anchor, Token, TokenStream,
};

fn engine_with(words: &[&str], wpm: u32) -> PlaybackEngine {
    PlaybackEngine::new(
        TokenStream::from_words(words.iter().copied()),
        wpm,
        TimingConfig::default(),
    )
}

/// Fire the pending timer exactly at its deadline.
fn fire_next(engine: &mut PlaybackEngine) -> Option<(u64, TickOutcome)> {
    let deadline = engine.next_deadline()?;
    Some((deadline, engine.poll(deadline)))
}

#[test]
fn test_orp_breakpoints() {
    let cases = [
        ("a", 0),
        ("ab", 1),
        ("abc", 1),
        ("abcde", 1),
        ("abcdef", 2),
        ("abcdefghi", 2),
        ("abcdefghij", 3),
        ("abcdefghijklm", 3),
        ("abcdefghijklmn", 4),
    ];
    for (word, expected) in cases {
        assert_eq!(calculate_anchor_position(word), expected, "{}", word);
    }
}

#[test]
fn test_orp_ignores_punctuation_for_length() {
    assert_eq!(calculate_anchor_position("cat,"), 1);
    assert_eq!(calculate_anchor_position("\"hello\""), 1);
}

#[test]
fn test_extraordinary_segments() {
    let segments = split_at_anchor("extraordinary", calculate_anchor_position("extraordinary"));
    assert_eq!(segments.before, "ext");
    assert_eq!(segments.anchor, "r");
    assert_eq!(segments.after, "aordinary");
}

#[test]
fn test_short_word_delay_has_no_penalty() {
    let delay = calculate_word_delay(&Token::new("cat"), 300, &TimingConfig::default());
    assert_eq!(delay, 200);
}

#[test]
fn test_long_word_delay_adds_pause() {
    let delay = calculate_word_delay(&Token::new("extraordinary"), 300, &TimingConfig::default());
    assert_eq!(delay, 500);
}

#[test]
fn test_long_word_pause_applies_when_displayed() {
    let mut engine = engine_with(&["the", "extraordinary", "end"], 300);
    engine.set_speed_locked(true);
    engine.start(0);

    let (at, outcome) = fire_next(&mut engine).unwrap();
    assert_eq!((at, outcome), (200, TickOutcome::Advanced(1)));
    // "extraordinary" stays up for 200 + 300 ms
    assert_eq!(engine.next_deadline(), Some(700));
}

#[test]
fn test_last_word_tick_finishes() {
    let mut engine = engine_with(&["one", "two"], 300);
    engine.start(0);

    assert_eq!(fire_next(&mut engine).unwrap().1, TickOutcome::Advanced(1));
    assert_eq!(fire_next(&mut engine).unwrap().1, TickOutcome::Finished);

    assert!(engine.is_finished());
    assert_eq!(engine.phase(), PlaybackPhase::Finished);
    assert_eq!(engine.next_deadline(), None);
    assert_eq!(status_label(&engine), STATUS_COMPLETE);
}

#[test]
fn test_auto_acceleration_after_interval() {
    let words: Vec<&str> = std::iter::repeat("cat").take(40).collect();
    let mut engine = engine_with(&words, 300);
    engine.start(0);

    loop {
        let (at, _) = fire_next(&mut engine).unwrap();
        if at < 2000 {
            assert_eq!(engine.state().speed, 300, "no bump before 2000ms (tick at {})", at);
        } else {
            assert_eq!(at, 2000);
            assert_eq!(engine.state().speed, 303);
            break;
        }
    }
}

#[test]
fn test_acceleration_stops_at_ceiling() {
    let words: Vec<&str> = std::iter::repeat("cat").take(200).collect();
    let mut engine = engine_with(&words, 395);
    engine.start(0);

    while let Some((at, _)) = fire_next(&mut engine) {
        assert!(engine.state().speed <= 400);
        if at > 10_000 {
            break;
        }
    }
    assert_eq!(engine.state().speed, 400);
}

#[test]
fn test_locked_speed_never_accelerates() {
    let words: Vec<&str> = std::iter::repeat("cat").take(100).collect();
    let mut engine = engine_with(&words, 300);
    engine.set_speed_locked(true);
    engine.start(0);

    while let Some((at, _)) = fire_next(&mut engine) {
        if at > 8_000 {
            break;
        }
    }
    assert_eq!(engine.state().speed, 300);
}

#[test]
fn test_speed_above_ceiling_is_left_alone() {
    let words: Vec<&str> = std::iter::repeat("cat").take(50).collect();
    let mut engine = engine_with(&words, 600);
    engine.start(0);

    while let Some((at, _)) = fire_next(&mut engine) {
        if at > 5_000 {
            break;
        }
    }
    assert_eq!(engine.state().speed, 600);
}

#[test]
fn test_seek_law() {
    let words = ["alpha", "beta", "gamma", "delta", "epsilon"];
    let mut engine = engine_with(&words, 300);
    engine.start(0);

    for p in 0..words.len() {
        assert!(engine.seek(p + 1));
        assert_eq!(engine.state().position, p);
    }

    engine.seek(3);
    assert!(!engine.seek(0));
    assert!(!engine.seek(words.len() + 1));
    assert_eq!(engine.state().position, 2);
}

#[test]
fn test_speed_stays_in_bounds() {
    let mut engine = engine_with(&["a", "b"], 300);
    engine.start(0);

    for _ in 0..100 {
        engine.adjust_speed(-25);
    }
    assert_eq!(engine.state().speed, 25);

    for _ in 0..100 {
        engine.adjust_speed(50);
    }
    assert_eq!(engine.state().speed, 1500);

    engine.set_speed(10);
    assert_eq!(engine.state().speed, 50);
    assert!(engine.state().speed_locked);
}

#[test]
fn test_paused_engine_polls_without_advancing() {
    let mut engine = engine_with(&["one", "two", "three"], 300);
    engine.start(0);
    engine.pause();
    assert_eq!(status_label(&engine), STATUS_PAUSED);

    for _ in 0..10 {
        let (_, outcome) = fire_next(&mut engine).unwrap();
        assert_eq!(outcome, TickOutcome::PausePoll);
    }
    assert_eq!(engine.state().position, 0);

    // the outstanding pause poll picks up the resume
    engine.resume();
    let (_, outcome) = fire_next(&mut engine).unwrap();
    assert_eq!(outcome, TickOutcome::Advanced(1));
}

#[test]
fn test_restart_replaces_pending_timer() {
    let mut engine = engine_with(&["one", "two", "three"], 300);
    engine.start(0);
    let stale = engine.pending_timer().unwrap();

    engine.restart(150);
    assert_eq!(engine.fire(stale, 200), TickOutcome::Stale);
    assert_eq!(engine.state().position, 0);
    assert_eq!(engine.next_deadline(), Some(350));
}
