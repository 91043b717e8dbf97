use bevy::picking::events::{Out, Over, Pointer};
use bevy::prelude::*;
use constants::palette::{
    SHELL_COLOUR, SHELL_HOVER_COLOUR, SHELL_HOVER_GLOW, SHELL_HOVER_GLOW_INTENSITY,
};
use constants::scene_presets::ShellFinish;

use crate::engine::scene::product::ProductModel;

/// Pointer presence over the product. Lives on the `ProductModel` root.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoverState {
    pub hovered: bool,
}

/// Meshes whose pointer enter/leave drives the product's `HoverState`.
#[derive(Component)]
pub struct HoverTarget;

/// Shared shell material; every hover change rewrites it in place.
#[derive(Resource)]
pub struct ProductMaterials {
    pub shell: Handle<StandardMaterial>,
}

/// The part of the shell material that hover toggles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellAppearance {
    pub base_color: Color,
    pub emissive: LinearRgba,
}

impl ShellAppearance {
    pub fn for_hover(hovered: bool) -> Self {
        if hovered {
            let glow = SHELL_HOVER_GLOW.to_linear();
            Self {
                base_color: SHELL_HOVER_COLOUR,
                emissive: LinearRgba::rgb(
                    glow.red * SHELL_HOVER_GLOW_INTENSITY,
                    glow.green * SHELL_HOVER_GLOW_INTENSITY,
                    glow.blue * SHELL_HOVER_GLOW_INTENSITY,
                ),
            }
        } else {
            Self {
                base_color: SHELL_COLOUR,
                emissive: LinearRgba::BLACK,
            }
        }
    }

    pub fn of(material: &StandardMaterial) -> Self {
        Self {
            base_color: material.base_color,
            emissive: material.emissive,
        }
    }

    pub fn apply_to(self, material: &mut StandardMaterial) {
        material.base_color = self.base_color;
        material.emissive = self.emissive;
    }
}

/// Shell material for a preset in its resting (not hovered) state.
pub fn shell_material(finish: &ShellFinish) -> StandardMaterial {
    let mut material = StandardMaterial {
        metallic: finish.metallic,
        perceptual_roughness: finish.roughness,
        clearcoat: finish.clearcoat,
        clearcoat_perceptual_roughness: finish.clearcoat_roughness,
        specular_transmission: finish.transmission,
        thickness: finish.thickness,
        ..default()
    };
    ShellAppearance::for_hover(false).apply_to(&mut material);
    material
}

pub fn on_hover_enter(
    trigger: Trigger<Pointer<Over>>,
    targets: Query<(), With<HoverTarget>>,
    mut models: Query<&mut HoverState, With<ProductModel>>,
) {
    if targets.contains(trigger.target()) {
        set_hovered(&mut models, true);
    }
}

pub fn on_hover_leave(
    trigger: Trigger<Pointer<Out>>,
    targets: Query<(), With<HoverTarget>>,
    mut models: Query<&mut HoverState, With<ProductModel>>,
) {
    if targets.contains(trigger.target()) {
        set_hovered(&mut models, false);
    }
}

fn set_hovered(models: &mut Query<&mut HoverState, With<ProductModel>>, hovered: bool) {
    for mut state in models.iter_mut() {
        state.set_if_neq(HoverState { hovered });
    }
}

/// Rewrites the shared shell material whenever the hover state changes.
pub fn apply_hover_appearance(
    models: Query<&HoverState, Changed<HoverState>>,
    product_materials: Option<Res<ProductMaterials>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(product_materials) = product_materials else {
        return;
    };

    for state in &models {
        if let Some(material) = materials.get_mut(&product_materials.shell) {
            ShellAppearance::for_hover(state.hovered).apply_to(material);
        }
    }
}
