//! End-to-end session scenarios driven through the public API.

use focusquest_core::{
    EventKind, ScriptedRandom, Session, SessionConfig, SessionPhase, TreasureItem,
    ValidationError, MAX_HEALTH,
};

fn scripted(values: impl IntoIterator<Item = u32>) -> Session<ScriptedRandom> {
    Session::with_rng(SessionConfig::default(), ScriptedRandom::new(values))
}

#[test]
fn one_minute_session_completes_after_sixty_ticks() {
    let mut session = Session::new(SessionConfig {
        seed: Some(99),
        ..SessionConfig::default()
    });
    session.set_duration(1).unwrap();
    assert_eq!(session.remaining_display(), "01:00");
    session.toggle();

    let mut completed = None;
    for i in 1..=60 {
        let outcome = session.advance();
        if i < 60 {
            assert!(outcome.completed.is_none(), "completed early at tick {i}");
        }
        completed = outcome.completed;
    }

    let summary = completed.expect("session completes on the 60th tick");
    assert_eq!(session.phase(), SessionPhase::Completed);
    assert_eq!(session.remaining_secs(), 0);
    assert_eq!(session.player().focus_points(), 60);
    assert_eq!(summary.focus_points, 60);
    assert_eq!(summary.final_health, session.player().health());
    assert_eq!(summary.experience, session.player().experience());
    assert_eq!(summary.gold, session.player().gold());

    let latest = session.log().latest().unwrap();
    assert!(latest.is_summary());
    assert_eq!(latest.icon, "🏁");
    assert_eq!(latest.description, "Adventure completed!");
}

#[test]
fn n_ticks_from_n_seconds_complete_exactly() {
    for minutes in [1, 2, 5] {
        let mut session = scripted([]);
        session.set_duration(minutes).unwrap();
        session.toggle();
        let n = session.remaining_secs();
        let before = session.player().focus_points();

        let completions = (0..n).filter(|_| session.tick().is_some()).count();

        assert_eq!(completions, 1);
        assert_eq!(session.remaining_secs(), 0);
        assert_eq!(session.phase(), SessionPhase::Completed);
        assert_eq!(session.player().focus_points() - before, n);
    }
}

#[test]
fn ticks_while_idle_or_completed_change_nothing() {
    let mut session = scripted([]);
    let before = session.snapshot();
    for _ in 0..10 {
        assert!(session.tick().is_none());
    }
    let after = session.snapshot();
    assert_eq!(before.remaining_secs, after.remaining_secs);
    assert_eq!(before.focus_points, after.focus_points);
    assert_eq!(before.health, after.health);

    session.set_duration(1).unwrap();
    session.toggle();
    while session.tick().is_none() {}
    let done = session.snapshot();
    for _ in 0..10 {
        session.tick();
        session.maybe_generate();
    }
    let still = session.snapshot();
    assert_eq!(done.remaining_secs, still.remaining_secs);
    assert_eq!(done.focus_points, still.focus_points);
    assert_eq!(done.event_count, still.event_count);
}

#[test]
fn generated_events_stack_newest_first() {
    // Treasure rolls with item index then gold.
    let mut session = scripted([0, 0, 21, 0, 1, 22, 0, 2, 23]);
    session.toggle();
    for _ in 0..3 {
        assert!(session.maybe_generate().is_some());
    }

    let kinds: Vec<_> = session.log().iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::Treasure { item: TreasureItem::Weapon, gold: 23 },
            EventKind::Treasure { item: TreasureItem::Armor, gold: 22 },
            EventKind::Treasure { item: TreasureItem::Potion, gold: 21 },
        ]
    );
    assert_eq!(session.player().gold(), 66);
}

#[test]
fn draw_of_seventy_rests_and_twenty_finds_treasure() {
    let mut session = scripted([70, 15, 20, 1, 40]);
    session.toggle();

    let rest = session.maybe_generate().cloned().unwrap();
    assert_eq!(rest.kind, EventKind::Rest { healed: 15 });
    assert_eq!(rest.title, "Rest");

    let treasure = session.maybe_generate().cloned().unwrap();
    assert_eq!(
        treasure.kind,
        EventKind::Treasure { item: TreasureItem::Armor, gold: 40 }
    );
    assert_eq!(treasure.title, "Treasure");
}

#[test]
fn repeated_battles_never_take_health_below_zero() {
    // Eleven max-damage battles against a 100 HP player.
    let script: Vec<u32> = (0..11).flat_map(|_| [99, 3, 10, 10, 5]).collect();
    let mut session = scripted(script);
    session.toggle();
    for _ in 0..11 {
        session.maybe_generate();
    }
    assert_eq!(session.player().health(), 0);
    assert_eq!(session.player().experience(), 110);
    assert_eq!(session.player().gold(), 55);
}

#[test]
fn healing_never_exceeds_max_health() {
    let mut session = scripted([99, 0, 5, 10, 5, 50, 20]);
    session.toggle();
    session.maybe_generate();
    assert_eq!(session.player().health(), 95);
    session.maybe_generate();
    assert_eq!(session.player().health(), MAX_HEALTH);
}

#[test]
fn reset_from_every_phase_yields_default_session() {
    let fresh = scripted([]).snapshot();

    let mut idle = scripted([]);
    idle.reset();

    let mut active = scripted([99, 0, 10, 10, 5]);
    active.toggle();
    active.tick();
    active.maybe_generate();
    active.reset();

    let mut completed = scripted([]);
    completed.set_duration(1).unwrap();
    completed.toggle();
    while completed.tick().is_none() {}
    completed.reset();
    completed.reset();

    for session in [idle, active, completed] {
        let snap = session.snapshot();
        assert_eq!(snap.phase, SessionPhase::Idle);
        assert_eq!(snap.remaining_secs, fresh.remaining_secs);
        assert_eq!(snap.remaining_secs, 1800);
        assert_eq!(snap.health, fresh.health);
        assert_eq!(snap.experience, 0);
        assert_eq!(snap.gold, 0);
        assert_eq!(snap.focus_points, 0);
        assert_eq!(snap.event_count, 0);
        assert!(snap.summary.is_none());
        assert!(session.log().is_empty());
    }
}

#[test]
fn dismiss_keeps_history_while_reset_clears_it() {
    let mut session = scripted([]);
    session.set_duration(1).unwrap();
    session.toggle();
    while !session.advance().is_complete() {}
    let logged = session.log().len();
    assert!(logged > 1);

    session.dismiss_summary();
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.log().len(), logged);

    session.reset();
    assert!(session.log().is_empty());
}

#[test]
fn out_of_range_duration_is_rejected_without_side_effects() {
    let mut session = scripted([]);
    session.toggle();
    session.tick();
    let before = session.snapshot();

    assert_eq!(
        session.set_duration(0),
        Err(ValidationError::DurationOutOfRange { minutes: 0, min: 1, max: 120 })
    );
    assert!(session.set_duration(121).is_err());

    let after = session.snapshot();
    assert_eq!(before.remaining_secs, after.remaining_secs);
    assert_eq!(after.phase, SessionPhase::Active);
}

#[test]
fn snapshot_serializes_for_presentation() {
    let mut session = scripted([50, 8]);
    session.toggle();
    session.maybe_generate();
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["phase"], "active");
    assert_eq!(json["remaining_display"], "30:00");
    assert_eq!(json["event_count"], 1);
    assert_eq!(json["latest_event"]["kind"]["type"], "rest");
    assert!(json["summary"].is_null());
}
