//! Ball launching and lifetime.
//!
//! ## Flow
//!
//! 1. Once the hoop is hung, each left click spawns a [`Ball`] at the launch
//!    point, moving at `throw_speed` toward the cursor with a little random spin.
//! 2. The same click writes [`ScoringInput::ThrowLaunched`], which opens a new
//!    throw session and forfeits any pending credit of the previous ball.
//! 3. Balls older than `ball_lifetime_secs` are despawned.
//!
//! Balls are tagged [`CollisionCategory::Ball`] and collide with every other
//! category, including other balls.

use crate::category::CollisionCategory;
use crate::config::GameConfig;
use crate::court::{hoop_placed, hoop_placement_system};
use crate::graphics::cursor_world_position;
use crate::scoring::ScoringInput;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_rapier2d::prelude::*;
use rand::Rng;

// ── Components & Resources ────────────────────────────────────────────────────

/// A thrown ball.
#[derive(Component, Default, Debug)]
pub struct Ball {
    /// Seconds since launch.
    pub age: f32,
}

/// Shared mesh and material for every ball visual (created once at startup).
#[derive(Resource)]
struct BallVisuals {
    mesh: Handle<Mesh>,
    material: Handle<ColorMaterial>,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct ThrowPlugin;

impl Plugin for ThrowPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ball_visuals).add_systems(
            Update,
            (
                // Before placement, so the click that hangs the hoop is not also a throw.
                throw_launch_system
                    .run_if(hoop_placed)
                    .before(hoop_placement_system),
                attach_ball_mesh_system,
                ball_lifetime_system,
            ),
        );
    }
}

// ── Startup ───────────────────────────────────────────────────────────────────

fn setup_ball_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<GameConfig>,
) {
    commands.insert_resource(BallVisuals {
        mesh: meshes.add(Circle::new(config.ball_radius)),
        material: materials.add(ColorMaterial::from_color(Color::srgb(0.90, 0.45, 0.10))),
    });
}

// ── Launch helpers ────────────────────────────────────────────────────────────

/// Launch velocity from `from` toward `target`, or `None` when they coincide.
pub fn launch_velocity(config: &GameConfig, from: Vec2, target: Vec2) -> Option<Vec2> {
    let dir = (target - from).try_normalize()?;
    Some(dir * config.throw_speed)
}

/// Spawn a ball at the launch point and return its entity.
pub fn spawn_ball(commands: &mut Commands, config: &GameConfig, linvel: Vec2, angvel: f32) -> Entity {
    let launch = Vec2::new(config.launch_x, config.launch_y);
    commands
        .spawn((
            Ball::default(),
            CollisionCategory::Ball,
            RigidBody::Dynamic,
            Collider::ball(config.ball_radius),
            Restitution::coefficient(config.ball_restitution),
            Velocity { linvel, angvel },
            // Thin trigger volumes must not be tunnelled through at full speed.
            Ccd::enabled(),
            CollisionCategory::Ball.collision_groups(),
            ActiveEvents::COLLISION_EVENTS,
            Transform::from_translation(launch.extend(0.2)),
            Visibility::default(),
        ))
        .id()
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Throw a ball toward the cursor on left click.
pub fn throw_launch_system(
    mut commands: Commands,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut inputs: MessageWriter<ScoringInput>,
    config: Res<GameConfig>,
) {
    if !mouse_buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(target) = cursor_world_position(&windows, &cameras) else {
        return;
    };
    let launch = Vec2::new(config.launch_x, config.launch_y);
    let Some(linvel) = launch_velocity(&config, launch, target) else {
        return;
    };

    let spin = rand::thread_rng().gen_range(-config.ball_spin_range..=config.ball_spin_range);
    let ball = spawn_ball(&mut commands, &config, linvel, spin);
    inputs.write(ScoringInput::ThrowLaunched);
    debug!("Launched ball {ball} with velocity {linvel}");
}

/// Attach the shared circle mesh to every freshly launched ball.
fn attach_ball_mesh_system(
    mut commands: Commands,
    query: Query<Entity, Added<Ball>>,
    visuals: Res<BallVisuals>,
) {
    for entity in query.iter() {
        commands.entity(entity).insert((
            Mesh2d(visuals.mesh.clone()),
            MeshMaterial2d(visuals.material.clone()),
        ));
    }
}

/// Tick ball age and despawn balls that have exceeded their lifetime.
pub fn ball_lifetime_system(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Ball)>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    let dt = time.delta_secs();
    for (entity, mut ball) in query.iter_mut() {
        ball.age += dt;
        if ball.age >= config.ball_lifetime_secs {
            commands.entity(entity).despawn();
        }
    }
}
