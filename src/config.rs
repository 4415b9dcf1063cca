//! Runtime game configuration loaded from `assets/hoop.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  In `PreStartup`, [`load_game_config`] reads
//! `assets/hoop.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! A file that parses but fails [`GameConfig::validate`] is rejected as a
//! whole; the defaults stay in place.
//!
//! The Rapier length scale is not tunable here: the physics plugin is built
//! before startup systems run, so it stays [`crate::constants::PIXELS_PER_METER`].

use crate::constants::*;
use crate::error::{validate_positive, validate_unit_interval, HoopError, HoopResult};
use bevy::prelude::*;
use serde::Deserialize;

pub const CONFIG_PATH: &str = "assets/hoop.toml";

/// Runtime-tunable court and ball configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Physics ──────────────────────────────────────────────────────────────
    pub gravity: f32,

    // ── Ball ─────────────────────────────────────────────────────────────────
    pub ball_radius: f32,
    pub throw_speed: f32,
    pub ball_spin_range: f32,
    pub ball_restitution: f32,
    pub ball_lifetime_secs: f32,
    pub launch_x: f32,
    pub launch_y: f32,

    // ── Court ────────────────────────────────────────────────────────────────
    pub wall_x: f32,
    pub wall_zone_width: f32,
    pub floor_y: f32,
    pub hoop_min_y: f32,
    pub hoop_max_y: f32,

    // ── Hoop geometry ────────────────────────────────────────────────────────
    pub rim_opening: f32,
    pub rim_knob_radius: f32,
    pub trigger_half_height: f32,
    pub trigger_offset: f32,

    // ── HUD ──────────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            ball_radius: BALL_RADIUS,
            throw_speed: THROW_SPEED,
            ball_spin_range: BALL_SPIN_RANGE,
            ball_restitution: BALL_RESTITUTION,
            ball_lifetime_secs: BALL_LIFETIME_SECS,
            launch_x: LAUNCH_X,
            launch_y: LAUNCH_Y,
            wall_x: WALL_X,
            wall_zone_width: WALL_ZONE_WIDTH,
            floor_y: FLOOR_Y,
            hoop_min_y: HOOP_MIN_Y,
            hoop_max_y: HOOP_MAX_Y,
            rim_opening: RIM_OPENING,
            rim_knob_radius: RIM_KNOB_RADIUS,
            trigger_half_height: TRIGGER_HALF_HEIGHT,
            trigger_offset: TRIGGER_OFFSET,
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        let config: GameConfig = toml::from_str(contents).map_err(|err| err.to_string())?;
        config.validate().map_err(|err| err.to_string())?;
        Ok(config)
    }

    /// Reject values that would make the court unplayable.
    pub fn validate(&self) -> HoopResult<()> {
        validate_positive("ball_radius", self.ball_radius)?;
        validate_positive("throw_speed", self.throw_speed)?;
        validate_positive("ball_lifetime_secs", self.ball_lifetime_secs)?;
        validate_positive("wall_zone_width", self.wall_zone_width)?;
        validate_positive("rim_knob_radius", self.rim_knob_radius)?;
        validate_positive("trigger_half_height", self.trigger_half_height)?;
        validate_positive("hud_font_size", self.hud_font_size)?;
        validate_unit_interval("ball_restitution", self.ball_restitution)?;

        for (name, value) in [("gravity", self.gravity), ("ball_spin_range", self.ball_spin_range)] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(HoopError::UnsafeConstant {
                    name,
                    value,
                    safe_range: "[0.0, ∞)",
                });
            }
        }
        // Triggers overlapping the rim line would fire while the ball sits on a knob.
        if self.trigger_offset <= self.trigger_half_height {
            return Err(HoopError::UnsafeConstant {
                name: "trigger_offset",
                value: self.trigger_offset,
                safe_range: "(trigger_half_height, ∞)",
            });
        }

        let ball_diameter = self.ball_radius * 2.0;
        if self.rim_opening <= ball_diameter {
            return Err(HoopError::RimTooNarrow {
                opening: self.rim_opening,
                ball_diameter,
            });
        }
        if self.hoop_min_y > self.hoop_max_y {
            return Err(HoopError::EmptyPlacementRange {
                min_y: self.hoop_min_y,
                max_y: self.hoop_max_y,
            });
        }
        Ok(())
    }
}

/// Inserts the default [`GameConfig`] and loads `assets/hoop.toml` in
/// `PreStartup`, so every `Startup` system sees the final values.
pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .add_systems(PreStartup, load_game_config);
    }
}

/// Startup system: attempt to load `assets/hoop.toml` and overwrite the
/// `GameConfig` resource with it.
///
/// Parse and validation errors are printed to stderr but do not abort the
/// game.  A missing file is not an error.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match GameConfig::from_toml_str(&contents) {
            Ok(loaded) => {
                *config = loaded;
                println!("✓ Loaded game config from {CONFIG_PATH}");
            }
            Err(e) => {
                eprintln!("⚠ Rejected {CONFIG_PATH}: {e}; using defaults");
            }
        },
        Err(_) => {
            println!("ℹ No {CONFIG_PATH} found; using compiled defaults");
        }
    }
}
