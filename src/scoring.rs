//! Throw-scoring state machine and the systems that feed it.
//!
//! ## States
//!
//! | State      | Meaning                                                   |
//! |------------|-----------------------------------------------------------|
//! | `Idle`     | No throw in flight; contact events are noise              |
//! | `Tracking` | Throw in flight, zero or one trigger crossed              |
//! | `Scored`   | Both triggers crossed; resolved within the same event     |
//!
//! A goal is "both triggers touched by the ball during one throw", in either
//! order.  A new throw silently supersedes the previous one; the superseded
//! throw is reported as [`ThrowOutcome::Missed`] but never touches the
//! [`ScoreBoard`].
//!
//! ## Data flow
//!
//! ```text
//! throw_launch_system ──ThrowLaunched──┐
//!                                      ├──► ScoringInput queue ──► scoring_system ──► ScoreBoard
//! Rapier CollisionEvent::Stopped ──────┘        (ordered)             │
//!        (contact_bridge_system)                                      └──► ThrowResolved
//! ```
//!
//! Both throw launches and contact ends go through the single
//! [`ScoringInput`] message queue, drained in order by one system.  That system
//! is the only writer of [`ScoreBoard`] and [`ScoreKeeper`].

use crate::category::{CollisionCategory, ContactEvent};
use crate::score::ScoreBoard;
use crate::session::ThrowSession;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

// ── Messages ──────────────────────────────────────────────────────────────────

/// One entry of the ordered scoring queue.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringInput {
    /// A new ball left the launcher.
    ThrowLaunched,
    /// Two categorised bodies stopped touching.
    ContactEnded(ContactEvent),
}

/// How a throw ended for scoring purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowOutcome {
    Goal,
    /// Superseded by the next throw before both triggers were crossed.
    Missed,
}

/// Emitted once per throw when its scoring fate is known.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowResolved {
    /// 1-based index of the throw since startup.
    pub throw_number: u32,
    pub outcome: ThrowOutcome,
}

// ── State machine ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringState {
    Idle,
    Tracking,
    Scored,
}

/// Result of feeding one contact-end event to the [`ScoreKeeper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// No session, or a pair that plays no part in scoring.
    Ignored,
    /// A trigger pair was recorded; the throw is still open.
    Tracking,
    Goal(ThrowResolved),
}

/// Owns the single outstanding [`ThrowSession`].
#[derive(Resource, Debug, Clone, Default)]
pub struct ScoreKeeper {
    session: ThrowSession,
    throw_number: u32,
}

impl ScoreKeeper {
    #[inline]
    pub fn session(&self) -> &ThrowSession {
        &self.session
    }

    /// Index of the most recent throw (0 before the first one).
    #[inline]
    pub fn throw_number(&self) -> u32 {
        self.throw_number
    }

    pub fn state(&self) -> ScoringState {
        if !self.session.is_active {
            ScoringState::Idle
        } else if self.session.is_goal() {
            ScoringState::Scored
        } else {
            ScoringState::Tracking
        }
    }

    /// Count a new throw and open a fresh session for it.
    ///
    /// Returns the miss of the superseded throw when it was still open.
    pub fn start_new_throw(&mut self, board: &mut ScoreBoard) -> Option<ThrowResolved> {
        let superseded = self.session.is_active.then_some(ThrowResolved {
            throw_number: self.throw_number,
            outcome: ThrowOutcome::Missed,
        });

        board.record_throw_started();
        self.throw_number += 1;
        self.session.start_new_throw();
        superseded
    }

    /// Apply one contact-end event.
    ///
    /// The goal check runs after every flag update, so the triggers may be
    /// crossed in either order.
    pub fn on_contact_ended(
        &mut self,
        event: &ContactEvent,
        board: &mut ScoreBoard,
    ) -> ContactOutcome {
        if !self.session.is_active {
            return ContactOutcome::Ignored;
        }

        if event.matches(CollisionCategory::Ball, CollisionCategory::AboveHoop) {
            self.session.mark_above_hoop_touched();
        } else if event.matches(CollisionCategory::Ball, CollisionCategory::UnderHoop) {
            self.session.mark_under_hoop_touched();
        } else {
            return ContactOutcome::Ignored;
        }

        if self.session.is_goal() {
            board.record_goal();
            self.session.close_session();
            return ContactOutcome::Goal(ThrowResolved {
                throw_number: self.throw_number,
                outcome: ThrowOutcome::Goal,
            });
        }

        ContactOutcome::Tracking
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the score resources, the scoring messages, and the two systems
/// that translate physics contacts into score updates.
pub struct ScoringPlugin;

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScoreBoard>()
            .init_resource::<ScoreKeeper>()
            .add_message::<CollisionEvent>()
            .add_message::<ScoringInput>()
            .add_message::<ThrowResolved>()
            .add_systems(
                // Rapier writes this frame's collision events during Writeback.
                PostUpdate,
                (contact_bridge_system, scoring_system)
                    .chain()
                    .after(PhysicsSet::Writeback),
            );
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Turn Rapier contact-end events between categorised colliders into
/// [`ScoringInput::ContactEnded`] entries.
///
/// Colliders without a [`CollisionCategory`] (already despawned balls, for
/// instance) are dropped.
pub fn contact_bridge_system(
    mut collision_events: MessageReader<CollisionEvent>,
    q_category: Query<&CollisionCategory>,
    mut inputs: MessageWriter<ScoringInput>,
) {
    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Stopped(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Started(..) => continue,
        };

        let (Ok(category_a), Ok(category_b)) = (q_category.get(e1), q_category.get(e2)) else {
            debug!("Dropping contact end between uncategorised entities {e1} and {e2}");
            continue;
        };

        inputs.write(ScoringInput::ContactEnded(ContactEvent::new(
            *category_a,
            *category_b,
        )));
    }
}

/// Drain the scoring queue in order.  Sole writer of [`ScoreBoard`].
pub fn scoring_system(
    mut inputs: MessageReader<ScoringInput>,
    mut keeper: ResMut<ScoreKeeper>,
    mut board: ResMut<ScoreBoard>,
    mut resolved: MessageWriter<ThrowResolved>,
) {
    for input in inputs.read() {
        match input {
            ScoringInput::ThrowLaunched => {
                if let Some(missed) = keeper.start_new_throw(&mut board) {
                    info!("Throw {} missed", missed.throw_number);
                    resolved.write(missed);
                }
                debug!("Tracking throw {}", keeper.throw_number());
            }
            ScoringInput::ContactEnded(event) => {
                match keeper.on_contact_ended(event, &mut board) {
                    ContactOutcome::Goal(goal) => {
                        info!("Throw {} scored: {}", goal.throw_number, board.snapshot());
                        resolved.write(goal);
                    }
                    ContactOutcome::Tracking => {
                        debug!("Throw {} crossed a trigger: {:?}", keeper.throw_number(), event);
                    }
                    ContactOutcome::Ignored => {}
                }
            }
        }
    }
}
