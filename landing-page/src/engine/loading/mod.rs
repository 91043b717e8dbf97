//! Settings resolution and product model loading.
//!
//! The settings file picks the page revision; the asset revision then
//! preloads its glTF model before the page starts running.

/// Product model preload and one-shot load state tracking.
///
/// Starts the glTF load as soon as the revision is known and settles it once.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;

/// Page settings asset, revision selection and fallbacks.
///
/// Reads the optional JSON settings file and the WASM query override.
pub mod settings_loader;
