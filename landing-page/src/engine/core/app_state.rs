use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for the settings file to load or fail.
    #[default]
    Loading,
    /// Page and scene are live. The model itself may still be loading.
    Running,
}

pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.settings_resolved {
        if loading_progress.model_requested {
            println!("→ Settings resolved, model still streaming in, transitioning to Running state");
        } else {
            println!("→ Settings resolved, transitioning to Running state");
        }
        next_state.set(AppState::Running);
    }
}
