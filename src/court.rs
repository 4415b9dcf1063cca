//! Court layout and hoop placement.
//!
//! The wall on the right side of the court stands in for a detected vertical
//! surface: it is drawn as a translucent green panel until the hoop is hung.
//! The first left click inside the wall zone hangs the hoop at the clicked
//! height; every later click throws a ball (see [`crate::throw`]).
//!
//! ## Hoop bodies
//!
//! | Body          | Collider            | Category     | Sensor |
//! |---------------|---------------------|--------------|--------|
//! | Backboard     | cuboid              | `Board`      | no     |
//! | Rim knobs ×2  | ball                | `Hoop`       | no     |
//! | Upper trigger | cuboid in opening   | `AboveHoop`  | yes    |
//! | Lower trigger | cuboid in opening   | `UnderHoop`  | yes    |
//! | Net           | none (mesh only)    | —            | —      |
//!
//! Floor and wall colliders carry no category; their contacts with the ball
//! are dropped by the contact bridge.

use crate::category::CollisionCategory;
use crate::config::GameConfig;
use crate::constants::{
    BOARD_HALF_HEIGHT, BOARD_HALF_WIDTH, NET_DEPTH, RIM_OFFSET_BELOW_BOARD_CENTER,
};
use crate::graphics::cursor_world_position;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};
use bevy_rapier2d::prelude::*;

// ── Resources & components ────────────────────────────────────────────────────

/// Whether, and at which rim height, the hoop has been hung.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct HoopPlacement {
    pub rim_y: Option<f32>,
}

impl HoopPlacement {
    #[inline]
    pub fn is_placed(&self) -> bool {
        self.rim_y.is_some()
    }
}

/// Marker for the translucent wall panel shown while the hoop is unplaced.
#[derive(Component)]
pub struct WallPanel;

/// Marker for every entity that makes up the hoop.
#[derive(Component)]
pub struct HoopPart;

/// Positions and extents of every hoop body for a given rim height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoopLayout {
    pub board_center: Vec2,
    pub board_half_extents: Vec2,
    pub rim_front: Vec2,
    pub rim_back: Vec2,
    pub rim_knob_radius: f32,
    pub above_center: Vec2,
    pub under_center: Vec2,
    pub trigger_half_extents: Vec2,
}

impl HoopLayout {
    pub fn new(config: &GameConfig, rim_y: f32) -> Self {
        let board_center = Vec2::new(
            config.wall_x - BOARD_HALF_WIDTH,
            rim_y + RIM_OFFSET_BELOW_BOARD_CENTER,
        );
        let knob = config.rim_knob_radius;
        let rim_back = Vec2::new(config.wall_x - 2.0 * BOARD_HALF_WIDTH - knob, rim_y);
        let rim_front = Vec2::new(rim_back.x - config.rim_opening - 2.0 * knob, rim_y);
        let rim_center_x = (rim_front.x + rim_back.x) * 0.5;

        Self {
            board_center,
            board_half_extents: Vec2::new(BOARD_HALF_WIDTH, BOARD_HALF_HEIGHT),
            rim_front,
            rim_back,
            rim_knob_radius: knob,
            above_center: Vec2::new(rim_center_x, rim_y + config.trigger_offset),
            under_center: Vec2::new(rim_center_x, rim_y - config.trigger_offset),
            trigger_half_extents: Vec2::new(
                config.rim_opening * 0.5 - knob,
                config.trigger_half_height,
            ),
        }
    }
}

/// Rim height for a click at `click`, or `None` when the click misses the
/// wall zone or lands outside the allowed height range.
pub fn placement_height(config: &GameConfig, click: Vec2) -> Option<f32> {
    let in_zone = click.x >= config.wall_x - config.wall_zone_width && click.x <= config.wall_x;
    let in_range = (config.hoop_min_y..=config.hoop_max_y).contains(&click.y);
    (in_zone && in_range).then_some(click.y)
}

// ── Run conditions ────────────────────────────────────────────────────────────

pub fn hoop_placed(placement: Res<HoopPlacement>) -> bool {
    placement.is_placed()
}

pub fn hoop_not_placed(placement: Res<HoopPlacement>) -> bool {
    !placement.is_placed()
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct CourtPlugin;

impl Plugin for CourtPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoopPlacement>()
            .add_systems(Startup, setup_court)
            .add_systems(Update, hoop_placement_system.run_if(hoop_not_placed));
    }
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// Spawn the floor, the wall collider, and the translucent wall panel.
pub fn setup_court(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<GameConfig>,
) {
    let floor_half = Vec2::new(2000.0, 20.0);
    commands.spawn((
        RigidBody::Fixed,
        Collider::cuboid(floor_half.x, floor_half.y),
        Friction::coefficient(0.8),
        Transform::from_xyz(0.0, config.floor_y - floor_half.y, 0.0),
        Mesh2d(meshes.add(Rectangle::new(floor_half.x * 2.0, floor_half.y * 2.0))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(Color::srgb(0.35, 0.22, 0.12)))),
    ));

    let wall_half = Vec2::new(20.0, 1000.0);
    commands.spawn((
        RigidBody::Fixed,
        Collider::cuboid(wall_half.x, wall_half.y),
        Transform::from_xyz(config.wall_x + wall_half.x, 0.0, 0.0),
        Mesh2d(meshes.add(Rectangle::new(wall_half.x * 2.0, wall_half.y * 2.0))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(Color::srgb(0.55, 0.55, 0.6)))),
    ));

    // 25% transparent "detected surface" highlight.
    let zone_height = config.hoop_max_y - config.hoop_min_y;
    commands.spawn((
        WallPanel,
        Transform::from_xyz(
            config.wall_x - config.wall_zone_width * 0.5,
            (config.hoop_max_y + config.hoop_min_y) * 0.5,
            -0.1,
        ),
        Mesh2d(meshes.add(Rectangle::new(config.wall_zone_width, zone_height))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(Color::srgba(0.0, 1.0, 0.0, 0.25)))),
    ));
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Hang the hoop on the first click inside the wall zone.
#[allow(clippy::too_many_arguments)]
pub fn hoop_placement_system(
    mut commands: Commands,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    q_panel: Query<Entity, With<WallPanel>>,
    mut placement: ResMut<HoopPlacement>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<GameConfig>,
) {
    if !mouse_buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(click) = cursor_world_position(&windows, &cameras) else {
        return;
    };
    let Some(rim_y) = placement_height(&config, click) else {
        debug!("Click at {click} missed the wall zone");
        return;
    };

    let layout = HoopLayout::new(&config, rim_y);
    spawn_hoop(&mut commands, &layout, &mut meshes, &mut materials);
    placement.rim_y = Some(rim_y);

    // Surface detection stops once the hoop is up.
    for panel in q_panel.iter() {
        commands.entity(panel).despawn();
    }
    info!("Hoop placed with rim at y = {rim_y:.1}");
}

/// Spawn every hoop body described by `layout`.
pub fn spawn_hoop(
    commands: &mut Commands,
    layout: &HoopLayout,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
) {
    let board_size = layout.board_half_extents * 2.0;
    commands.spawn((
        HoopPart,
        CollisionCategory::Board,
        RigidBody::Fixed,
        Collider::cuboid(layout.board_half_extents.x, layout.board_half_extents.y),
        Restitution::coefficient(0.5),
        CollisionCategory::Board.collision_groups(),
        ActiveEvents::COLLISION_EVENTS,
        Transform::from_translation(layout.board_center.extend(0.0)),
        Mesh2d(meshes.add(Rectangle::new(board_size.x, board_size.y))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(Color::WHITE))),
    ));

    let knob_radius = layout.rim_knob_radius;
    let rim_material = materials.add(ColorMaterial::from_color(Color::srgb(0.95, 0.35, 0.05)));
    let knob_mesh = meshes.add(Circle::new(knob_radius));
    for knob in [layout.rim_front, layout.rim_back] {
        commands.spawn((
            HoopPart,
            CollisionCategory::Hoop,
            RigidBody::Fixed,
            Collider::ball(knob_radius),
            Restitution::coefficient(0.4),
            CollisionCategory::Hoop.collision_groups(),
            ActiveEvents::COLLISION_EVENTS,
            Transform::from_translation(knob.extend(0.1)),
            Mesh2d(knob_mesh.clone()),
            MeshMaterial2d(rim_material.clone()),
        ));
    }

    for (category, center) in [
        (CollisionCategory::AboveHoop, layout.above_center),
        (CollisionCategory::UnderHoop, layout.under_center),
    ] {
        commands.spawn((
            HoopPart,
            category,
            RigidBody::Fixed,
            Collider::cuboid(layout.trigger_half_extents.x, layout.trigger_half_extents.y),
            Sensor,
            category.collision_groups(),
            ActiveEvents::COLLISION_EVENTS,
            Transform::from_translation(center.extend(0.0)),
        ));
    }

    let net_top = layout.rim_back.x - layout.rim_front.x;
    commands.spawn((
        HoopPart,
        Transform::from_translation(
            Vec2::new((layout.rim_front.x + layout.rim_back.x) * 0.5, layout.rim_front.y)
                .extend(0.05),
        ),
        Mesh2d(meshes.add(net_mesh(net_top * 0.5, net_top * 0.3, NET_DEPTH))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(Color::srgba(1.0, 1.0, 1.0, 0.6)))),
    ));
}

// ── Mesh helper ───────────────────────────────────────────────────────────────

/// Build a filled trapezoid hanging below the origin: `top_half` wide at the
/// rim line, `bottom_half` wide at `depth` below it.
fn net_mesh(top_half: f32, bottom_half: f32, depth: f32) -> Mesh {
    // 4 vertices: top-left, top-right, bottom-right, bottom-left
    let positions: Vec<[f32; 3]> = vec![
        [-top_half, 0.0, 0.0],
        [top_half, 0.0, 0.0],
        [bottom_half, -depth, 0.0],
        [-bottom_half, -depth, 0.0],
    ];
    // Two CCW triangles: [tl,bl,tr] [tr,bl,br]
    let indices = Indices::U32(vec![0, 3, 1, 1, 3, 2]);
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_indices(indices);
    mesh
}
