use bevy::asset::AssetMetaCheck;
use bevy::log::LogPlugin;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::settings_loader::{
    PageSettings, SettingsLoader, resolve_settings_system, start_loading,
};
use crate::engine::scene::ProductScenePlugin;
use crate::page::PagePlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MeshPickingPlugin)
        // Registers PageSettings as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<PageSettings>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<SettingsLoader>()
        .init_resource::<ModelLoader>();

    app.add_plugins(ProductScenePlugin).add_plugins(PagePlugin);

    app.add_systems(Startup, start_loading).add_systems(
        Update,
        (resolve_settings_system, transition_to_running)
            .chain()
            .run_if(in_state(AppState::Loading)),
    );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: "info,wgpu=error,naga=warn,landing_page=debug".to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
