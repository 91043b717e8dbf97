use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub settings_resolved: bool,
    pub model_requested: bool,
}
