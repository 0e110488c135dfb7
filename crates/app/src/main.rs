use bevy::prelude::*;
use bevy::window::PresentMode;

use scene::events::OpenLink;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Skyline".to_string(),
                resolution: (1280.0, 720.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins((scene::ScenePlugin, viewer::ViewerPlugin))
        .add_systems(Update, open_links)
        .run();
}

/// Hand each requested link to the system browser. Failures are logged and
/// swallowed; the scene keeps running either way.
fn open_links(mut requests: EventReader<OpenLink>) {
    for OpenLink { url } in requests.read() {
        info!("opening {}", url);
        if let Err(err) = webbrowser::open(url) {
            warn!("failed to open {}: {}", url, err);
        }
    }
}
