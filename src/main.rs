use {
    bevy::{log::LogPlugin, prelude::*},
    core::CorePlugin,
};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "error,loading=trace,\
                        core=debug,\
                        stations=debug,\
                        player=debug,\
                        plates=info,\
                        interaction=debug,\
                        interactables=info"
                        .into(),
                    level: bevy::log::Level::TRACE,
                    ..Default::default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Kitchen Rush".into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(CorePlugin)
        .run();
}
