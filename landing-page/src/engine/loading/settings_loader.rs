use std::fmt;

use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::path::{DEFAULT_MODEL_PATH, PAGE_SETTINGS_PATH};
use constants::scene_presets::{ModelSource, PresetKind, ScenePreset};
use serde::Deserialize;

use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::LoadingProgress;

/// Optional runtime settings. Mirrors `page_settings.json`.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Deserialize)]
pub struct PageSettings {
    #[serde(default = "default_preset_name")]
    pub preset: String,
    #[serde(default)]
    pub model_path: Option<String>,
}

fn default_preset_name() -> String {
    PresetKind::default().name().to_string()
}

/// Reasons the page fell back to a default. Logged, never shown.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    Unavailable(String),
    UnknownPreset(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Unavailable(reason) => {
                write!(f, "settings file unavailable ({reason}), using defaults")
            }
            SettingsError::UnknownPreset(name) => {
                write!(f, "unknown preset '{name}', using '{}'", PresetKind::default().name())
            }
        }
    }
}

impl std::error::Error for SettingsError {}

/// The revision this page instance renders.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ActivePreset {
    pub kind: PresetKind,
    pub model_path: String,
}

impl Default for ActivePreset {
    fn default() -> Self {
        Self {
            kind: PresetKind::default(),
            model_path: DEFAULT_MODEL_PATH.to_string(),
        }
    }
}

impl ActivePreset {
    pub fn preset(&self) -> &'static ScenePreset {
        self.kind.preset()
    }

    /// Combines the settings file (if it loaded) with an optional override.
    /// The override wins; unknown names fall through to the next source.
    pub fn resolve(
        settings: Option<&PageSettings>,
        query_override: Option<&str>,
    ) -> (Self, Vec<SettingsError>) {
        let mut errors = Vec::new();
        let mut active = ActivePreset::default();

        if let Some(settings) = settings {
            match PresetKind::lookup(&settings.preset) {
                Some(kind) => active.kind = kind,
                None => errors.push(SettingsError::UnknownPreset(settings.preset.clone())),
            }
            if let Some(path) = settings.model_path.as_deref().filter(|p| !p.trim().is_empty()) {
                active.model_path = path.to_string();
            }
        }

        if let Some(name) = query_override {
            match PresetKind::lookup(name) {
                Some(kind) => active.kind = kind,
                None => errors.push(SettingsError::UnknownPreset(name.to_string())),
            }
        }

        (active, errors)
    }
}

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<PageSettings>>,
}

pub fn start_loading(mut settings_loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    settings_loader.handle = Some(asset_server.load(PAGE_SETTINGS_PATH));
}

/// Waits for the settings file to load or fail, then fixes the revision and
/// preloads the model it needs.
pub fn resolve_settings_system(
    mut loading_progress: ResMut<LoadingProgress>,
    settings_loader: Res<SettingsLoader>,
    asset_server: Res<AssetServer>,
    settings_assets: Res<Assets<PageSettings>>,
    mut model_loader: ResMut<ModelLoader>,
    mut commands: Commands,
) {
    if loading_progress.settings_resolved {
        return;
    }

    let mut errors = Vec::new();
    let settings = match &settings_loader.handle {
        Some(handle) => match asset_server.get_load_state(handle.id()) {
            Some(LoadState::Loaded) => {
                let Some(settings) = settings_assets.get(handle) else {
                    return;
                };
                Some(settings)
            }
            Some(LoadState::Failed(err)) => {
                errors.push(SettingsError::Unavailable(err.to_string()));
                None
            }
            _ => return,
        },
        None => {
            errors.push(SettingsError::Unavailable("never requested".to_string()));
            None
        }
    };

    let query_override = query_preset_override();
    let (active, resolve_errors) = ActivePreset::resolve(settings, query_override.as_deref());
    errors.extend(resolve_errors);

    for error in &errors {
        warn!("{}", error);
    }
    println!("✓ Page revision: {}", active.kind.name());

    if active.preset().model == ModelSource::Gltf {
        info!("Preloading product model from {}", active.model_path);
        model_loader.request(&asset_server, &active.model_path);
        loading_progress.model_requested = true;
    }

    commands.insert_resource(active);
    loading_progress.settings_resolved = true;
}

/// Reads `preset` from a URL query string such as `?preset=studio&x=1`.
pub fn parse_query_preset(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "preset")
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn query_preset_override() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    parse_query_preset(&search)
}

#[cfg(not(target_arch = "wasm32"))]
fn query_preset_override() -> Option<String> {
    None
}
