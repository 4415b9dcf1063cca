use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;

use hoopshot::config::{ConfigPlugin, GameConfig};
use hoopshot::constants::{PIXELS_PER_METER, WINDOW_HEIGHT, WINDOW_WIDTH};
use hoopshot::court::CourtPlugin;
use hoopshot::graphics;
use hoopshot::hud::HudPlugin;
use hoopshot::scoring::ScoringPlugin;
use hoopshot::throw::ThrowPlugin;

/// Configure Rapier gravity from the loaded game config.
fn setup_physics_config(
    mut rapier: Query<&mut RapierConfiguration>,
    config: Res<GameConfig>,
) {
    for mut cfg in rapier.iter_mut() {
        cfg.gravity = Vec2::new(0.0, -config.gravity);
    }
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hoopshot".into(),
            resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.12)))
    // GameConfig starts from compiled defaults and is overwritten from
    // assets/hoop.toml (if present) in PreStartup.
    .add_plugins(ConfigPlugin)
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
        PIXELS_PER_METER,
    ))
    .add_plugins((ScoringPlugin, CourtPlugin, ThrowPlugin, HudPlugin))
    .add_systems(Startup, (graphics::setup_camera, setup_physics_config));

    app.run();
}
