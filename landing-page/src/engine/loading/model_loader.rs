use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

/// Lifecycle of the product model. Leaves `Pending` exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModelPhase {
    /// Nothing requested; procedural revisions stay here.
    #[default]
    Idle,
    Pending,
    Ready,
    /// The load failed and the viewport stays empty.
    Omitted,
}

/// Asset server load state reduced to what the scene cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Waiting,
    Loaded,
    Failed,
}

impl From<&LoadState> for LoadOutcome {
    fn from(state: &LoadState) -> Self {
        match state {
            LoadState::Loaded => LoadOutcome::Loaded,
            LoadState::Failed(_) => LoadOutcome::Failed,
            _ => LoadOutcome::Waiting,
        }
    }
}

#[derive(Resource, Default)]
pub struct ModelLoader {
    handle: Option<Handle<Gltf>>,
    phase: ModelPhase,
}

impl ModelLoader {
    pub fn phase(&self) -> ModelPhase {
        self.phase
    }

    pub fn handle(&self) -> Option<&Handle<Gltf>> {
        self.handle.as_ref()
    }

    /// Starts loading `path`. Repeated requests reuse the in-flight handle.
    pub fn request(&mut self, asset_server: &AssetServer, path: &str) -> Handle<Gltf> {
        self.request_with(|| asset_server.load(path.to_string()))
    }

    pub fn request_with(&mut self, load: impl FnOnce() -> Handle<Gltf>) -> Handle<Gltf> {
        if let Some(handle) = &self.handle {
            return handle.clone();
        }

        let handle = load();
        self.handle = Some(handle.clone());
        self.phase = ModelPhase::Pending;
        handle
    }

    /// Applies a load outcome. Returns the new phase only on the single
    /// transition out of `Pending`.
    pub fn settle(&mut self, outcome: LoadOutcome) -> Option<ModelPhase> {
        if self.phase != ModelPhase::Pending {
            return None;
        }

        let next = match outcome {
            LoadOutcome::Waiting => return None,
            LoadOutcome::Loaded => ModelPhase::Ready,
            LoadOutcome::Failed => ModelPhase::Omitted,
        };
        self.phase = next;
        Some(next)
    }

    /// Marks a loaded file that turned out to hold no scene.
    pub fn omit(&mut self) {
        self.phase = ModelPhase::Omitted;
    }
}

/// Polls the asset server while the model is pending.
pub fn poll_model_load(mut loader: ResMut<ModelLoader>, asset_server: Res<AssetServer>) {
    if loader.phase() != ModelPhase::Pending {
        return;
    }
    let Some(handle) = loader.handle() else {
        return;
    };
    let Some(state) = asset_server.get_load_state(handle.id()) else {
        return;
    };

    settle_model_load(&mut loader, &state);
}

/// Settles a pending load from the asset server's state and reports the result.
pub fn settle_model_load(loader: &mut ModelLoader, state: &LoadState) -> Option<ModelPhase> {
    let settled = loader.settle(LoadOutcome::from(state));
    match settled {
        Some(ModelPhase::Ready) => println!("✓ Product model loaded"),
        Some(ModelPhase::Omitted) => {
            if let LoadState::Failed(err) = state {
                warn!("Product model failed to load, showing an empty viewport: {}", err);
            }
        }
        _ => {}
    }
    settled
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use bevy::asset::AssetLoadError;
    use bevy::asset::io::AssetReaderError;

    use super::*;

    #[test]
    fn repeated_requests_reuse_the_pending_load() {
        let mut loader = ModelLoader::default();
        let mut loads = 0;

        loader.request_with(|| {
            loads += 1;
            Handle::default()
        });
        loader.request_with(|| {
            loads += 1;
            Handle::default()
        });

        assert_eq!(loads, 1);
        assert_eq!(loader.phase(), ModelPhase::Pending);
    }

    #[test]
    fn waiting_keeps_the_model_pending() {
        let mut loader = ModelLoader::default();
        loader.request_with(Handle::default);

        assert_eq!(loader.settle(LoadOutcome::Waiting), None);
        assert_eq!(loader.phase(), ModelPhase::Pending);
    }

    #[test]
    fn failure_omits_the_model_once() {
        let mut loader = ModelLoader::default();
        loader.request_with(Handle::default);

        assert_eq!(loader.settle(LoadOutcome::Failed), Some(ModelPhase::Omitted));
        // A late success cannot resurrect a settled load.
        assert_eq!(loader.settle(LoadOutcome::Loaded), None);
        assert_eq!(loader.phase(), ModelPhase::Omitted);
    }

    #[test]
    fn success_resolves_exactly_once() {
        let mut loader = ModelLoader::default();
        loader.request_with(Handle::default);

        assert_eq!(loader.settle(LoadOutcome::Loaded), Some(ModelPhase::Ready));
        assert_eq!(loader.settle(LoadOutcome::Loaded), None);
        assert_eq!(loader.phase(), ModelPhase::Ready);
    }

    #[test]
    fn missing_file_settles_as_omitted() {
        let mut loader = ModelLoader::default();
        loader.request_with(Handle::default);

        assert_eq!(settle_model_load(&mut loader, &LoadState::Loading), None);
        let missing = LoadState::Failed(Arc::new(AssetLoadError::AssetReaderError(
            AssetReaderError::NotFound(PathBuf::from("models/airpods_pro.glb")),
        )));
        assert_eq!(settle_model_load(&mut loader, &missing), Some(ModelPhase::Omitted));
        assert_eq!(settle_model_load(&mut loader, &LoadState::Loaded), None);
        assert_eq!(loader.phase(), ModelPhase::Omitted);
    }

    #[test]
    fn idle_loader_ignores_outcomes() {
        let mut loader = ModelLoader::default();
        assert_eq!(loader.settle(LoadOutcome::Loaded), None);
        assert_eq!(loader.phase(), ModelPhase::Idle);
    }

    #[test]
    fn load_states_map_to_outcomes() {
        assert_eq!(LoadOutcome::from(&LoadState::NotLoaded), LoadOutcome::Waiting);
        assert_eq!(LoadOutcome::from(&LoadState::Loading), LoadOutcome::Waiting);
        assert_eq!(LoadOutcome::from(&LoadState::Loaded), LoadOutcome::Loaded);
    }
}
