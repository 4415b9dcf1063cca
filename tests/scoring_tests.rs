//! Headless tests for the scoring pipeline:
//! Rapier `CollisionEvent` → contact bridge → scoring queue → `ScoreBoard`.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no physics
//! step — and feed collision events by hand, so they run fast and
//! deterministically in CI.
//!
//! Covered scenarios:
//! 1. Above-then-under and under-then-above both score.
//! 2. A new throw forfeits the previous throw's partial progress.
//! 3. Contacts before any throw, contact *starts*, uncategorised and
//!    despawned colliders never touch the counters.
//! 4. A launch and a contact end written in the same frame are applied in order.
//! 5. The three-throw end-to-end scenario.
//! 6. The score HUD text follows the board.

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
use hoopshot::category::CollisionCategory;
use hoopshot::hud::{hud_score_display_system, HudScoreDisplay};
use hoopshot::score::ScoreBoard;
use hoopshot::scoring::{ScoreKeeper, ScoringInput, ScoringPlugin, ScoringState, ThrowOutcome, ThrowResolved};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Every `ThrowResolved` message seen so far.
#[derive(Resource, Default)]
struct ResolvedLog(Vec<ThrowResolved>);

fn collect_resolved(mut reader: MessageReader<ThrowResolved>, mut log: ResMut<ResolvedLog>) {
    log.0.extend(reader.read().copied());
}

/// Entities of one court: a ball plus every hoop body.
struct Court {
    ball: Entity,
    hoop: Entity,
    board: Entity,
    above: Entity,
    under: Entity,
}

fn scoring_app() -> (App, Court) {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, ScoringPlugin));
    app.init_resource::<ResolvedLog>();
    app.add_systems(Last, collect_resolved);

    let world = app.world_mut();
    let court = Court {
        ball: world.spawn(CollisionCategory::Ball).id(),
        hoop: world.spawn(CollisionCategory::Hoop).id(),
        board: world.spawn(CollisionCategory::Board).id(),
        above: world.spawn(CollisionCategory::AboveHoop).id(),
        under: world.spawn(CollisionCategory::UnderHoop).id(),
    };
    (app, court)
}

fn stopped(e1: Entity, e2: Entity) -> CollisionEvent {
    CollisionEvent::Stopped(e1, e2, CollisionEventFlags::SENSOR)
}

fn launch(app: &mut App) {
    app.world_mut().write_message(ScoringInput::ThrowLaunched);
    app.update();
}

fn end_contact(app: &mut App, e1: Entity, e2: Entity) {
    app.world_mut().write_message(stopped(e1, e2));
    app.update();
}

fn score(app: &App) -> (u32, u32) {
    app.world().resource::<ScoreBoard>().snapshot().as_pair()
}

fn resolved(app: &App) -> Vec<ThrowResolved> {
    app.world().resource::<ResolvedLog>().0.clone()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn above_then_under_scores_a_goal() {
    let (mut app, court) = scoring_app();

    launch(&mut app);
    end_contact(&mut app, court.ball, court.above);
    assert_eq!(score(&app), (1, 0));
    end_contact(&mut app, court.under, court.ball);

    assert_eq!(score(&app), (1, 1));
    assert_eq!(
        resolved(&app),
        vec![ThrowResolved {
            throw_number: 1,
            outcome: ThrowOutcome::Goal,
        }]
    );
    assert_eq!(app.world().resource::<ScoreKeeper>().state(), ScoringState::Idle);
}

#[test]
fn under_then_above_scores_a_goal() {
    let (mut app, court) = scoring_app();

    launch(&mut app);
    end_contact(&mut app, court.ball, court.under);
    end_contact(&mut app, court.above, court.ball);

    assert_eq!(score(&app), (1, 1));
}

#[test]
fn new_throw_abandons_the_previous_one() {
    let (mut app, court) = scoring_app();

    launch(&mut app);
    end_contact(&mut app, court.ball, court.above);
    launch(&mut app);
    end_contact(&mut app, court.ball, court.under);

    assert_eq!(score(&app), (2, 0));
    assert_eq!(
        resolved(&app),
        vec![ThrowResolved {
            throw_number: 1,
            outcome: ThrowOutcome::Missed,
        }]
    );
}

#[test]
fn contacts_without_a_throw_are_ignored() {
    let (mut app, court) = scoring_app();

    end_contact(&mut app, court.ball, court.above);
    end_contact(&mut app, court.ball, court.under);

    assert_eq!(score(&app), (0, 0));
    assert!(resolved(&app).is_empty());
}

#[test]
fn rim_and_board_contacts_are_noise() {
    let (mut app, court) = scoring_app();

    launch(&mut app);
    end_contact(&mut app, court.hoop, court.board);
    end_contact(&mut app, court.ball, court.hoop);
    end_contact(&mut app, court.board, court.ball);

    assert_eq!(score(&app), (1, 0));
    let keeper = app.world().resource::<ScoreKeeper>();
    assert!(!keeper.session().above_hoop_touched);
    assert!(!keeper.session().under_hoop_touched);
}

#[test]
fn contact_starts_do_not_count() {
    let (mut app, court) = scoring_app();

    launch(&mut app);
    for trigger in [court.above, court.under] {
        app.world_mut().write_message(CollisionEvent::Started(
            court.ball,
            trigger,
            CollisionEventFlags::SENSOR,
        ));
        app.update();
    }

    assert_eq!(score(&app), (1, 0));
}

#[test]
fn uncategorised_and_despawned_colliders_are_dropped() {
    let (mut app, court) = scoring_app();
    let floor = app.world_mut().spawn_empty().id();

    launch(&mut app);
    end_contact(&mut app, court.ball, floor);
    end_contact(&mut app, court.ball, court.above);

    app.world_mut().despawn(court.ball);
    end_contact(&mut app, court.ball, court.under);

    assert_eq!(score(&app), (1, 0));
    let keeper = app.world().resource::<ScoreKeeper>();
    assert!(keeper.session().above_hoop_touched);
    assert!(!keeper.session().under_hoop_touched);
}

#[test]
fn launch_and_contact_in_one_frame_apply_in_order() {
    let (mut app, court) = scoring_app();

    launch(&mut app);
    end_contact(&mut app, court.ball, court.above);

    // The launch is queued first; the contact then belongs to throw 2.
    app.world_mut().write_message(ScoringInput::ThrowLaunched);
    app.world_mut().write_message(stopped(court.ball, court.under));
    app.update();

    assert_eq!(score(&app), (2, 0));
    let keeper = app.world().resource::<ScoreKeeper>();
    assert_eq!(keeper.throw_number(), 2);
    assert!(keeper.session().under_hoop_touched);
    assert!(!keeper.session().above_hoop_touched);
}

#[test]
fn three_throw_scenario_scores_two_of_three() {
    let (mut app, court) = scoring_app();

    // Throw 1: clips the upper trigger only.
    launch(&mut app);
    end_contact(&mut app, court.ball, court.above);

    // Throw 2: clean swish from above.
    launch(&mut app);
    end_contact(&mut app, court.ball, court.above);
    end_contact(&mut app, court.ball, court.under);

    // Throw 3: under first, then above.
    launch(&mut app);
    end_contact(&mut app, court.under, court.ball);
    end_contact(&mut app, court.above, court.ball);

    assert_eq!(score(&app), (3, 2));
    let outcomes: Vec<_> = resolved(&app).iter().map(|r| (r.throw_number, r.outcome)).collect();
    assert_eq!(
        outcomes,
        vec![
            (1, ThrowOutcome::Missed),
            (2, ThrowOutcome::Goal),
            (3, ThrowOutcome::Goal),
        ]
    );
}

#[test]
fn repeated_trigger_contacts_score_once() {
    let (mut app, court) = scoring_app();

    launch(&mut app);
    for _ in 0..3 {
        end_contact(&mut app, court.ball, court.above);
    }
    for _ in 0..3 {
        end_contact(&mut app, court.ball, court.under);
    }

    assert_eq!(score(&app), (1, 1));
}

#[test]
fn hud_text_tracks_the_board() {
    let (mut app, court) = scoring_app();
    app.add_systems(Update, hud_score_display_system);
    let label = app
        .world_mut()
        .spawn((HudScoreDisplay, Text::new("")))
        .id();

    launch(&mut app);
    end_contact(&mut app, court.ball, court.above);
    end_contact(&mut app, court.ball, court.under);
    // The HUD runs in Update, before this frame's scoring pass.
    app.update();

    let text = app.world().get::<Text>(label).expect("label has text");
    assert_eq!(text.0, "Scored 1 goals out of 1 shots");
}
