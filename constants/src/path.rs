/// Optional runtime settings file, relative to the asset root.
pub const PAGE_SETTINGS_PATH: &str = "page_settings.json";

/// Product model used by the asset-backed revision when the settings file names none.
pub const DEFAULT_MODEL_PATH: &str = "models/airpods_pro.glb";
