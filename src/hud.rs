//! Score HUD and on-screen hints.
//!
//! | System                       | Schedule | Purpose                                |
//! |------------------------------|----------|----------------------------------------|
//! | `setup_hud`                  | Startup  | Spawn score, hint, and result nodes    |
//! | `hud_score_display_system`   | Update   | Refresh score text on `ScoreBoard` change |
//! | `hud_hint_display_system`    | Update   | Swap the hint once the hoop is hung    |
//! | `hud_last_throw_system`      | Update   | Show how the latest throw ended        |

use crate::config::GameConfig;
use crate::court::HoopPlacement;
use crate::score::ScoreBoard;
use crate::scoring::{ThrowOutcome, ThrowResolved};
use bevy::prelude::*;

const PLACE_HINT: &str = "Click the green wall to hang the hoop";
const THROW_HINT: &str = "Click to throw toward the cursor";

// ── Component markers ─────────────────────────────────────────────────────────

/// Score text node.
#[derive(Component)]
pub struct HudScoreDisplay;

/// Instruction line under the score.
#[derive(Component)]
pub struct HudHint;

/// Result of the most recently resolved throw.
#[derive(Component)]
pub struct HudLastThrow;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_hud).add_systems(
            Update,
            (
                hud_score_display_system,
                hud_hint_display_system,
                hud_last_throw_system,
            ),
        );
    }
}

/// Text for the last-throw line.
pub fn last_throw_text(resolved: &ThrowResolved) -> String {
    match resolved.outcome {
        ThrowOutcome::Goal => format!("Throw {}: goal!", resolved.throw_number),
        ThrowOutcome::Missed => format!("Throw {}: missed", resolved.throw_number),
    }
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// Spawn the top-left HUD column.
pub fn setup_hud(mut commands: Commands, config: Res<GameConfig>, board: Res<ScoreBoard>) {
    let font = TextFont {
        font_size: config.hud_font_size,
        ..default()
    };
    let small = TextFont {
        font_size: config.hud_font_size * 0.7,
        ..default()
    };

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                HudScoreDisplay,
                Text::new(board.snapshot().to_string()),
                font,
                TextColor(Color::srgb(0.95, 0.88, 0.45)),
            ));
            parent.spawn((
                HudHint,
                Text::new(PLACE_HINT),
                small.clone(),
                TextColor(Color::srgb(0.55, 0.55, 0.65)),
            ));
            parent.spawn((
                HudLastThrow,
                Text::new(""),
                small,
                TextColor(Color::srgb(0.75, 1.0, 0.80)),
            ));
        });
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Refresh the score line when the board changes.
pub fn hud_score_display_system(
    board: Res<ScoreBoard>,
    mut query: Query<&mut Text, With<HudScoreDisplay>>,
) {
    if !board.is_changed() {
        return;
    }
    for mut text in query.iter_mut() {
        *text = Text::new(board.snapshot().to_string());
    }
}

pub fn hud_hint_display_system(
    placement: Res<HoopPlacement>,
    mut query: Query<&mut Text, With<HudHint>>,
) {
    if !placement.is_changed() {
        return;
    }
    let hint = if placement.is_placed() {
        THROW_HINT
    } else {
        PLACE_HINT
    };
    for mut text in query.iter_mut() {
        *text = Text::new(hint);
    }
}

pub fn hud_last_throw_system(
    mut resolved: MessageReader<ThrowResolved>,
    mut query: Query<&mut Text, With<HudLastThrow>>,
) {
    let Some(last) = resolved.read().last() else {
        return;
    };
    for mut text in query.iter_mut() {
        *text = Text::new(last_throw_text(last));
    }
}
