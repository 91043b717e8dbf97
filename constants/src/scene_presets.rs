use std::f32::consts::PI;

/// The three published revisions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresetKind {
    #[default]
    Classic,
    Studio,
    Asset,
}

impl PresetKind {
    pub const ALL: [PresetKind; 3] = [PresetKind::Classic, PresetKind::Studio, PresetKind::Asset];

    pub fn name(self) -> &'static str {
        self.preset().name
    }

    pub fn preset(self) -> &'static ScenePreset {
        match self {
            PresetKind::Classic => &CLASSIC_PRESET,
            PresetKind::Studio => &STUDIO_PRESET,
            PresetKind::Asset => &ASSET_PRESET,
        }
    }

    /// Looks a preset up by name or revision number ("classic", "2", ...).
    pub fn lookup(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        PresetKind::ALL
            .into_iter()
            .enumerate()
            .find(|(index, kind)| kind.name() == value || (index + 1).to_string() == value)
            .map(|(_, kind)| kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelSource {
    /// Spheres and cylinders arranged as two earbuds.
    Procedural,
    /// A single glTF scene loaded from the asset folder.
    Gltf,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRange {
    pub min_distance: f32,
    pub max_distance: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub min_polar: f32,
    pub max_polar: f32,
    /// `None` disables wheel zoom.
    pub zoom: Option<ZoomRange>,
    /// Camera orbit speed in the OrbitControls convention (2.0 = one turn per 30 s).
    pub auto_rotate_speed: Option<f32>,
    pub damping_factor: f32,
    pub rotate_speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellFinish {
    pub metallic: f32,
    pub roughness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub transmission: f32,
    pub thickness: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePreset {
    pub name: &'static str,
    pub model: ModelSource,
    /// Model spin in radians per second.
    pub spin_speed: f32,
    pub pause_spin_on_hover: bool,
    pub orbit: OrbitLimits,
    pub shell: ShellFinish,
}

const GLOSSY_SHELL: ShellFinish = ShellFinish {
    metallic: 0.05,
    roughness: 0.1,
    clearcoat: 0.0,
    clearcoat_roughness: 0.0,
    transmission: 0.02,
    thickness: 0.1,
};

pub const CLASSIC_PRESET: ScenePreset = ScenePreset {
    name: "classic",
    model: ModelSource::Procedural,
    spin_speed: 0.2,
    pause_spin_on_hover: false,
    orbit: OrbitLimits {
        min_polar: PI / 3.0,
        max_polar: PI / 1.5,
        zoom: None,
        auto_rotate_speed: None,
        damping_factor: 0.05,
        rotate_speed: 1.0,
    },
    shell: GLOSSY_SHELL,
};

pub const STUDIO_PRESET: ScenePreset = ScenePreset {
    name: "studio",
    model: ModelSource::Procedural,
    spin_speed: 0.5,
    pause_spin_on_hover: true,
    orbit: OrbitLimits {
        min_polar: PI / 4.0,
        max_polar: 3.0 * PI / 4.0,
        zoom: Some(ZoomRange {
            min_distance: 4.0,
            max_distance: 10.0,
        }),
        auto_rotate_speed: None,
        damping_factor: 0.05,
        rotate_speed: 1.0,
    },
    shell: GLOSSY_SHELL,
};

pub const ASSET_PRESET: ScenePreset = ScenePreset {
    name: "asset",
    model: ModelSource::Gltf,
    spin_speed: 0.0,
    pause_spin_on_hover: false,
    orbit: OrbitLimits {
        min_polar: PI / 4.0,
        max_polar: 3.0 * PI / 4.0,
        zoom: Some(ZoomRange {
            min_distance: 3.0,
            max_distance: 8.0,
        }),
        auto_rotate_speed: Some(1.0),
        damping_factor: 0.05,
        rotate_speed: 1.0,
    },
    shell: ShellFinish {
        metallic: 0.05,
        roughness: 0.1,
        clearcoat: 1.0,
        clearcoat_roughness: 0.1,
        transmission: 0.0,
        thickness: 0.0,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accepts_names_and_revision_numbers() {
        assert_eq!(PresetKind::lookup("classic"), Some(PresetKind::Classic));
        assert_eq!(PresetKind::lookup(" Studio "), Some(PresetKind::Studio));
        assert_eq!(PresetKind::lookup("3"), Some(PresetKind::Asset));
        assert_eq!(PresetKind::lookup("4"), None);
        assert_eq!(PresetKind::lookup("holographic"), None);
    }

    #[test]
    fn every_preset_has_a_usable_polar_range() {
        for kind in PresetKind::ALL {
            let orbit = kind.preset().orbit;
            assert!(orbit.min_polar > 0.0 && orbit.max_polar < PI);
            assert!(orbit.min_polar < orbit.max_polar, "{}", kind.name());
            if let Some(zoom) = orbit.zoom {
                assert!(zoom.min_distance < zoom.max_distance);
            }
        }
    }

    #[test]
    fn only_the_asset_revision_loads_a_model_file() {
        assert_eq!(PresetKind::Classic.preset().model, ModelSource::Procedural);
        assert_eq!(PresetKind::Studio.preset().model, ModelSource::Procedural);
        assert_eq!(PresetKind::Asset.preset().model, ModelSource::Gltf);
    }
}
