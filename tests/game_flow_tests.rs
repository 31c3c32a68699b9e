//! End-to-end flows through `GameService` with scripted provider data.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use chrono::Duration as ChronoDuration;
use matchday::adapter::store::in_memory;
use matchday::application::{Game, GameService};
use matchday::domain::{
    AwardKind, Bonus, GameId, MatchStatus, Odds, PlayerId, Score, ScoreFragment, ScorePhase,
    ScoreSource, Side, StandardScorer,
};
use matchday::error::{Error, FetchError};
use matchday::port::Repositories;
use matchday::testkit::clock::ManualClock;
use matchday::testkit::domain::{
    finished_update, kickoff, live_update, player, scheduled_update, scheduled_with_odds,
    season_key,
};
use matchday::testkit::source::ScriptedSource;
use rust_decimal_macros::dec;

struct Harness {
    service: GameService,
    clock: Arc<ManualClock>,
    repos: Repositories,
}

fn harness(source: ScriptedSource) -> Harness {
    harness_with(source, in_memory(256, 256))
}

fn harness_with(source: ScriptedSource, repos: Repositories) -> Harness {
    let mut game = Game::new(
        GameId::new("office"),
        "FL1",
        "2016",
        Arc::new(StandardScorer::default()),
    );
    game.add_player(player("p1", "Player1"));
    game.add_player(player("p2", "Player2"));

    let clock = Arc::new(ManualClock::at(kickoff() - ChronoDuration::days(1)));
    let service = GameService::new(
        game,
        repos.clone(),
        Arc::new(source),
        clock.clone(),
        Duration::from_millis(100),
    );
    service.bootstrap().expect("bootstrap");
    Harness {
        service,
        clock,
        repos,
    }
}

fn p1() -> PlayerId {
    PlayerId::new("p1")
}

fn p2() -> PlayerId {
    PlayerId::new("p2")
}

#[tokio::test]
async fn bastia_liverpool_exact_and_missing_bet() {
    let source = ScriptedSource::new().with_results(vec![
        Ok(vec![scheduled_update("Bastia", "Liverpool", 1)]),
        Ok(vec![finished_update("Bastia", "Liverpool", 1, 4, 0)]),
    ]);
    let h = harness(source);
    let key = season_key("Bastia", "Liverpool", 1);

    h.service.poll_once().await.expect("first cycle");
    h.service.place_bet(&p1(), &key, 4, 0).expect("bet before kickoff");

    let report = h.service.poll_once().await.expect("second cycle");
    assert_eq!(report.finished, 1);
    assert_eq!(report.awarded, 2);

    let p1_entries = h.service.entries_for_player(&p1());
    assert_eq!(p1_entries.len(), 1);
    assert_eq!(p1_entries[0].kind, AwardKind::Exact);
    assert_eq!(p1_entries[0].points, 3);

    let p2_entries = h.service.entries_for_player(&p2());
    assert_eq!(p2_entries[0].kind, AwardKind::NoBet);
    assert_eq!(p2_entries[0].points, -1);

    let board = h.service.leaderboard();
    assert_eq!(board.leader().map(|s| s.player_id.clone()), Some(p1()));
    assert_eq!(board.get(&p2()).map(|s| s.missed), Some(1));

    let persisted = h
        .repos
        .scores
        .for_game(&GameId::new("office"))
        .expect("scores");
    assert_eq!(persisted.len(), 2);
}

#[tokio::test]
async fn bets_close_exactly_at_kickoff() {
    let source =
        ScriptedSource::new().with_results(vec![Ok(vec![scheduled_update("Lyon", "Nantes", 1)])]);
    let h = harness(source);
    let key = season_key("Lyon", "Nantes", 1);
    h.service.poll_once().await.expect("cycle");

    h.clock.set(kickoff() - ChronoDuration::seconds(1));
    h.service.place_bet(&p1(), &key, 1, 1).expect("one second early");

    h.clock.set(kickoff());
    let late = h.service.place_bet(&p1(), &key, 3, 0);
    match late {
        Err(Error::NotModifiable {
            status: MatchStatus::Scheduled,
            ..
        }) => {}
        other => panic!("Expected NotModifiable, got {other:?}"),
    }

    let bets = h.service.bets_for_player(&p1()).expect("bets");
    assert_eq!(bets.len(), 1);
    assert_eq!(bets[0].predicted(), Score::new(1, 1));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn bet_racing_the_finishing_cycle_is_scored_or_refused() {
    let key = season_key("Bastia", "Liverpool", 1);
    for round in 0..25 {
        let source = ScriptedSource::new().with_results(vec![
            Ok(vec![scheduled_update("Bastia", "Liverpool", 1)]),
            Ok(vec![finished_update("Bastia", "Liverpool", 1, 2, 1)]),
        ]);
        let h = Arc::new(harness(source));
        h.service.poll_once().await.expect("first cycle");
        h.clock.set(kickoff() - ChronoDuration::seconds(1));

        let poller = {
            let h = Arc::clone(&h);
            tokio::spawn(async move {
                h.clock.set(kickoff());
                h.service.poll_once().await
            })
        };
        let bettor = {
            let h = Arc::clone(&h);
            let key = key.clone();
            tokio::task::spawn_blocking(move || h.service.place_bet(&p1(), &key, 2, 1))
        };
        let (polled, placed) = tokio::join!(poller, bettor);
        polled.expect("poll task").expect("finishing cycle");
        let placed = placed.expect("bet task");

        let stored = h
            .repos
            .bets
            .get(&GameId::new("office"), &p1(), &key)
            .expect("bet lookup");
        let entries = h.service.entries_for_player(&p1());
        assert_eq!(entries.len(), 1, "round {round}");

        match placed {
            Ok(_) => {
                assert!(stored.is_some(), "round {round}");
                assert_eq!(entries[0].kind, AwardKind::Exact, "round {round}");
            }
            Err(Error::NotModifiable { .. }) => {
                assert!(stored.is_none(), "round {round}");
                assert_eq!(entries[0].kind, AwardKind::NoBet, "round {round}");
            }
            Err(other) => panic!("round {round}: unexpected error {other}"),
        }
    }
}

#[tokio::test]
async fn finished_without_score_fragments_scores_nil_nil() {
    let mut silent = finished_update("Bastia", "Liverpool", 1, 0, 0);
    silent.scores.clear();
    let source = ScriptedSource::new().with_results(vec![
        Ok(vec![scheduled_update("Bastia", "Liverpool", 1)]),
        Ok(vec![silent]),
    ]);
    let h = harness(source);
    let key = season_key("Bastia", "Liverpool", 1);

    h.service.poll_once().await.expect("first cycle");
    h.service.place_bet(&p1(), &key, 0, 0).expect("bet before kickoff");
    let report = h.service.poll_once().await.expect("second cycle");
    assert_eq!((report.finished, report.awarded), (1, 2));

    let fixture = h.service.get_match(&key).expect("fixture");
    assert_eq!(fixture.goals(), Some(Score::new(0, 0)));
    assert_eq!(fixture.score_source(), Some(ScoreSource::Defaulted));

    let board = h.service.leaderboard();
    assert_eq!(board.get(&p1()).map(|s| s.points), Some(3));
    assert_eq!(board.get(&p2()).map(|s| s.points), Some(-1));
}

#[tokio::test]
async fn started_match_refuses_bets_even_before_kickoff_time() {
    let source = ScriptedSource::new().with_results(vec![
        Ok(vec![scheduled_update("Lyon", "Nantes", 1)]),
        Ok(vec![live_update("Lyon", "Nantes", 1, (1, 0))]),
    ]);
    let h = harness(source);
    let key = season_key("Lyon", "Nantes", 1);
    h.service.poll_once().await.expect("cycle");
    h.service.poll_once().await.expect("cycle");

    let result = h.service.place_bet(&p1(), &key, 2, 0);
    assert!(matches!(
        result,
        Err(Error::NotModifiable {
            status: MatchStatus::Started,
            ..
        })
    ));
    let fixture = h.service.get_match(&key).expect("known fixture");
    assert_eq!(fixture.goals(), Some(Score::new(1, 0)));
    assert_eq!(fixture.phase_label(), Some("2H"));
}

#[tokio::test]
async fn repeated_cycles_do_not_rescore() {
    let finished = finished_update("Bastia", "Liverpool", 1, 4, 0);
    let source = ScriptedSource::new().with_results(vec![
        Ok(vec![finished.clone()]),
        Ok(vec![finished.clone()]),
        Ok(vec![finished]),
    ]);
    let h = harness(source);

    let first = h.service.poll_once().await.expect("cycle");
    let second = h.service.poll_once().await.expect("cycle");
    let third = h.service.poll_once().await.expect("cycle");

    assert_eq!(first.awarded, 2);
    assert_eq!((second.awarded, third.awarded), (0, 0));
    assert_eq!(h.service.leaderboard().get(&p1()).map(|s| s.points), Some(-1));
}

#[tokio::test]
async fn outsider_bonus_from_provider_odds() {
    let odds = Odds::new(dec!(1.5), dec!(4.0), dec!(6.0));
    let source = ScriptedSource::new().with_results(vec![
        Ok(vec![scheduled_with_odds("Monaco", "Guingamp", 2, odds)]),
        Ok(vec![finished_update("Monaco", "Guingamp", 2, 1, 2)]),
    ]);
    let h = harness(source);
    let key = season_key("Monaco", "Guingamp", 2);

    h.service.poll_once().await.expect("cycle");
    h.service.place_bet(&p1(), &key, 1, 2).expect("exact upset");
    h.service.place_bet(&p2(), &key, 0, 1).expect("outcome upset");
    h.service.poll_once().await.expect("cycle");

    let p1_entry = &h.service.entries_for_player(&p1())[0];
    assert_eq!((p1_entry.bonus, p1_entry.points), (Bonus::Outsider, 6));
    let p2_entry = &h.service.entries_for_player(&p2())[0];
    assert_eq!((p2_entry.kind, p2_entry.points), (AwardKind::Outcome, 2));
}

#[tokio::test]
async fn penalties_decide_the_score() {
    let mut update = finished_update("Nice", "Lille", 3, 0, 0);
    update.status = "PEN".into();
    update.scores = vec![
        ScoreFragment::new(ScorePhase::FirstHalf, Side::Home, 1),
        ScoreFragment::new(ScorePhase::FirstHalf, Side::Away, 1),
        ScoreFragment::new(ScorePhase::Penalties, Side::Home, 5),
        ScoreFragment::new(ScorePhase::Penalties, Side::Away, 4),
    ];
    let source = ScriptedSource::new().with_results(vec![Ok(vec![update])]);
    let h = harness(source);

    h.service.poll_once().await.expect("cycle");
    let fixture = h
        .service
        .get_match(&season_key("Nice", "Lille", 3))
        .expect("fixture");
    assert_eq!(fixture.goals(), Some(Score::new(5, 4)));
    assert_eq!(
        fixture.score_source(),
        Some(ScoreSource::Phase(ScorePhase::Penalties))
    );
}

#[tokio::test]
async fn failed_fetch_keeps_previous_state() {
    let source = ScriptedSource::new().with_results(vec![
        Ok(vec![scheduled_update("Bastia", "Liverpool", 1)]),
        Err(FetchError::Status { status: 502 }),
    ]);
    let h = harness(source);

    h.service.poll_once().await.expect("cycle");
    let before = h.service.matches();
    let result = h.service.poll_once().await;

    assert!(matches!(
        result,
        Err(Error::Fetch(FetchError::Status { status: 502 }))
    ));
    let after = h.service.matches();
    assert_eq!(before.len(), after.len());
    assert_eq!(after[0].status(), MatchStatus::Scheduled);
}

#[tokio::test]
async fn slow_provider_times_out() {
    let source = ScriptedSource::new()
        .with_results(vec![Ok(vec![scheduled_update("Bastia", "Liverpool", 1)])])
        .with_delay(Duration::from_millis(500));
    let calls = source.calls();
    let h = harness(source);

    let result = h.service.poll_once().await;
    match result {
        Err(Error::Fetch(err @ FetchError::Timeout { after_ms: 100 })) => {
            assert!(err.is_transient());
        }
        other => panic!("Expected timeout, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(h.service.matches().is_empty());
}

#[tokio::test]
async fn invalid_updates_are_rejected_individually() {
    let mut unknown = scheduled_update("Metz", "Dijon", 4);
    unknown.status = "XYZ".into();
    let mut foreign = scheduled_update("Arsenal", "Chelsea", 1);
    foreign.competition = "PL".into();
    let source = ScriptedSource::new().with_results(vec![Ok(vec![
        unknown,
        foreign,
        scheduled_update("Bastia", "Liverpool", 1),
    ])]);
    let h = harness(source);

    let report = h.service.poll_once().await.expect("cycle");
    assert_eq!((report.fetched, report.created, report.rejected), (3, 1, 2));
    assert_eq!(h.service.matches().len(), 1);
}

#[tokio::test]
async fn bootstrap_restores_scored_state() {
    let repos = in_memory(256, 256);
    let finished = finished_update("Bastia", "Liverpool", 1, 4, 0);

    let first = harness_with(
        ScriptedSource::new().with_results(vec![Ok(vec![finished.clone()])]),
        repos.clone(),
    );
    first.service.poll_once().await.expect("cycle");
    assert_eq!(first.service.entries_for_player(&p2()).len(), 1);

    let restarted = harness_with(
        ScriptedSource::new().with_results(vec![Ok(vec![finished])]),
        repos,
    );
    assert_eq!(restarted.service.matches().len(), 1);
    let report = restarted.service.poll_once().await.expect("cycle");
    assert_eq!(report.awarded, 0);
    assert_eq!(
        restarted.service.leaderboard().get(&p2()).map(|s| s.points),
        Some(-1)
    );
}
