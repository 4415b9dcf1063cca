//! Centralised court, ball, and physics constants.
//!
//! These are the compiled defaults behind [`crate::config::GameConfig`].
//! World units are pixels; [`PIXELS_PER_METER`] converts the real-world sizes
//! of a basketball court into screen space.

// ── Window ────────────────────────────────────────────────────────────────────

pub const WINDOW_WIDTH: u32 = 1200;
pub const WINDOW_HEIGHT: u32 = 680;

// ── Physics ───────────────────────────────────────────────────────────────────

/// Rapier length scale.  A 0.125 m ball radius becomes 12.5 px.
pub const PIXELS_PER_METER: f32 = 100.0;

/// Downward gravity (px/s²).  9.81 m/s² at the default scale.
pub const GRAVITY: f32 = 981.0;

// ── Ball ──────────────────────────────────────────────────────────────────────

/// Ball radius (px).  Matches a 0.125 m sphere.
pub const BALL_RADIUS: f32 = 12.5;

/// Launch speed along the aim direction (px/s).
///
/// Around 900 px/s reaches a hoop on the far wall with a comfortable arc;
/// above ~1400 px/s most throws slam the board flat.
pub const THROW_SPEED: f32 = 900.0;

/// Random spin applied at launch is drawn from `±BALL_SPIN_RANGE` (rad/s).
pub const BALL_SPIN_RANGE: f32 = 3.0;

pub const BALL_RESTITUTION: f32 = 0.65;

/// Seconds a ball stays on the court before being removed.
pub const BALL_LIFETIME_SECS: f32 = 12.0;

/// Ball launch point (px, world space).
pub const LAUNCH_X: f32 = -480.0;
pub const LAUNCH_Y: f32 = -220.0;

// ── Court ─────────────────────────────────────────────────────────────────────

/// X coordinate of the wall surface the hoop is mounted on.
pub const WALL_X: f32 = 520.0;

/// Width of the clickable wall zone to the left of the wall surface (px).
pub const WALL_ZONE_WIDTH: f32 = 80.0;

/// Floor height (px).  The floor is a plain collider without a category.
pub const FLOOR_Y: f32 = -300.0;

/// Lowest and highest rim height the hoop may be placed at (px).
pub const HOOP_MIN_Y: f32 = -150.0;
pub const HOOP_MAX_Y: f32 = 250.0;

// ── Hoop geometry ─────────────────────────────────────────────────────────────

/// Backboard half-extents (px).
pub const BOARD_HALF_WIDTH: f32 = 4.0;
pub const BOARD_HALF_HEIGHT: f32 = 45.0;

/// Rim centre height above the bottom of the board (px).
pub const RIM_OFFSET_BELOW_BOARD_CENTER: f32 = 30.0;

/// Inner opening of the rim, knob to knob (px).  Must exceed the ball diameter.
pub const RIM_OPENING: f32 = 46.0;

/// Radius of each rim knob (px).
pub const RIM_KNOB_RADIUS: f32 = 2.5;

/// Half-height of each trigger sensor (px).
pub const TRIGGER_HALF_HEIGHT: f32 = 5.0;

/// Vertical distance from the rim line to each trigger centre (px).
pub const TRIGGER_OFFSET: f32 = 12.0;

/// Depth of the decorative net below the rim (px).
pub const NET_DEPTH: f32 = 36.0;

// ── HUD ───────────────────────────────────────────────────────────────────────

pub const HUD_FONT_SIZE: f32 = 22.0;
