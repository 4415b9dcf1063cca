use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    // Default Camera2d at the origin; the court is laid out around it.
    commands.spawn(Camera2d);
    eprintln!("[SETUP] Camera spawned");
}

/// World-space position under the mouse cursor, if the cursor is inside the
/// primary window and a single camera exists.
pub fn cursor_world_position(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let window = windows.single().ok()?;
    let (camera, camera_transform) = cameras.single().ok()?;
    let cursor = window.cursor_position()?;
    camera.viewport_to_world_2d(camera_transform, cursor).ok()
}
