use {
    bevy::prelude::*,
    station_components::StationProgress,
    std::f32::consts::FRAC_PI_2,
    system_schedule::GameSchedule,
};

// ============================================================================
// Plugin
// ============================================================================

pub struct ProgressBarsPlugin;

impl Plugin for ProgressBarsPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(on_progress_added)
            .add_systems(Update, update_progress_bars.in_set(GameSchedule::FrameEnd));
    }
}

// ============================================================================
// Components
// ============================================================================

/// Bar hovering over a station, driven by that station's [`StationProgress`]
#[derive(Component)]
pub struct ProgressBar {
    pub station: Entity,
    fill: Entity,
}

/// The fill portion of a progress bar
#[derive(Component)]
struct ProgressBarFill;

// ============================================================================
// Constants
// ============================================================================

const BAR_WIDTH: f32 = 0.7;
const BAR_HEIGHT: f32 = 0.08;
/// Above the station top, nudged towards the bottom of the screen
const BAR_OFFSET: Vec3 = Vec3::new(0.0, 0.6, 0.5);
const BAR_BG_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.8);
const BAR_FILL_COLOR: Color = Color::srgba(0.3, 0.85, 0.3, 1.0);

// ============================================================================
// Systems
// ============================================================================

/// Observer: every station that reports progress gets a hidden bar
fn on_progress_added(trigger: On<Add, StationProgress>, mut commands: Commands) {
    let station = trigger.event().entity;
    let flat = Quat::from_rotation_x(-FRAC_PI_2);

    let fill = commands
        .spawn((
            ProgressBarFill,
            Sprite::from_color(BAR_FILL_COLOR, Vec2::new(BAR_WIDTH, BAR_HEIGHT * 0.75)),
            Transform::from_xyz(-BAR_WIDTH / 2.0, 0.0, 0.001)
                .with_scale(Vec3::new(0.0, 1.0, 1.0)),
        ))
        .id();

    let background = commands
        .spawn(Sprite::from_color(
            BAR_BG_COLOR,
            Vec2::new(BAR_WIDTH, BAR_HEIGHT),
        ))
        .id();

    commands
        .spawn((
            ProgressBar { station, fill },
            Name::new("Progress Bar"),
            Transform::from_translation(BAR_OFFSET).with_rotation(flat),
            Visibility::Hidden,
            ChildOf(station),
        ))
        .add_children(&[background, fill]);
}

fn update_progress_bars(
    progress: Query<&StationProgress>,
    mut bars: Query<(&ProgressBar, &mut Visibility)>,
    mut fills: Query<&mut Transform, With<ProgressBarFill>>,
) {
    for (bar, mut visibility) in bars.iter_mut() {
        let Ok(progress) = progress.get(bar.station) else {
            continue;
        };
        visibility.set_if_neq(if progress.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });

        if let Ok(mut transform) = fills.get_mut(bar.fill) {
            // Keep the fill left-aligned while it grows
            transform.scale.x = progress.fraction;
            transform.translation.x = (progress.fraction - 1.0) * BAR_WIDTH / 2.0;
        }
    }
}
