use std::f32::consts::{FRAC_PI_2, PI};

use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;
use constants::palette::{GRILLE_COLOUR, MICROPHONE_COLOUR};
use constants::render_settings::*;
use constants::scene_presets::{ModelSource, ScenePreset};

use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::loading::model_loader::{ModelLoader, ModelPhase};
use crate::engine::loading::settings_loader::ActivePreset;
use crate::engine::scene::float_motion::FloatMotion;
use crate::engine::scene::hover::{HoverState, HoverTarget, ProductMaterials, shell_material};
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::spin::ModelSpin;
use crate::engine::scene::viewport::ModelCamera;

/// Root of the product. Carries spin and hover state.
#[derive(Component)]
pub struct ProductModel;

/// Parent of the product that applies the float motion.
#[derive(Component)]
pub struct FloatRig;

/// Builds lights, the model camera and the product for the active revision.
/// Asset revisions start empty and gain the model once it loads.
pub fn setup_product_scene(
    mut commands: Commands,
    active: Res<ActivePreset>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let preset = active.preset();

    spawn_lighting(&mut commands);
    spawn_model_camera(&mut commands, preset);

    let shell = materials.add(shell_material(&preset.shell));
    commands.insert_resource(ProductMaterials {
        shell: shell.clone(),
    });

    let rig = commands
        .spawn((
            Name::new("FloatRig"),
            FloatRig,
            FloatMotion::from_settings(&FLOAT_SETTINGS),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    let product = commands
        .spawn((
            Name::new("Product"),
            ProductModel,
            HoverState::default(),
            ModelSpin::new(preset.spin_speed, preset.pause_spin_on_hover),
            Transform::default(),
            Visibility::default(),
            ChildOf(rig),
        ))
        .id();

    match preset.model {
        ModelSource::Procedural => {
            spawn_earbuds(&mut commands, product, &mut meshes, &mut materials, &shell);
        }
        ModelSource::Gltf => {
            info!("Product viewport waiting for {}", active.model_path);
        }
    }

    println!("✓ Product scene ready ({})", preset.name);
}

fn spawn_model_camera(commands: &mut Commands, preset: &ScenePreset) {
    commands.spawn((
        Name::new("ModelCamera"),
        ModelCamera,
        Camera3d::default(),
        Camera {
            order: MODEL_CAMERA_ORDER,
            clear_color: ClearColorConfig::None,
            // Activated once the hero slot has a laid-out rect.
            is_active: false,
            ..default()
        },
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        OrbitCamera::new(CAMERA_POSITION, Vec3::ZERO, preset.orbit),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Two mirrored earbuds: shell, stem, speaker grille and microphone ports.
fn spawn_earbuds(
    commands: &mut Commands,
    product: Entity,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    shell: &Handle<StandardMaterial>,
) {
    let shell_mesh = meshes.add(Sphere::new(SHELL_RADIUS).mesh().uv(SHELL_SEGMENTS, SHELL_SEGMENTS));
    let stem_mesh = meshes.add(
        ConicalFrustum {
            radius_top: STEM_TOP_RADIUS,
            radius_bottom: STEM_BOTTOM_RADIUS,
            height: STEM_HEIGHT,
        }
        .mesh()
        .resolution(SHELL_SEGMENTS),
    );
    let grille_mesh = meshes.add(
        Cylinder::new(GRILLE_RADIUS, GRILLE_DEPTH)
            .mesh()
            .resolution(SHELL_SEGMENTS),
    );
    let microphone_mesh = meshes.add(
        Cylinder::new(MICROPHONE_RADIUS, MICROPHONE_DEPTH)
            .mesh()
            .resolution(MICROPHONE_SEGMENTS),
    );

    let grille_material = materials.add(StandardMaterial {
        base_color: GRILLE_COLOUR,
        metallic: 0.9,
        perceptual_roughness: 0.1,
        ..default()
    });
    let microphone_material = materials.add(StandardMaterial {
        base_color: MICROPHONE_COLOUR,
        metallic: 0.8,
        perceptual_roughness: 0.2,
        ..default()
    });

    // The right bud is the left one turned half a revolution.
    for (name, offset_x, yaw) in [
        ("LeftEarbud", -EARBUD_OFFSET_X, 0.0),
        ("RightEarbud", EARBUD_OFFSET_X, PI),
    ] {
        let bud = commands
            .spawn((
                Name::new(name),
                Transform::from_xyz(offset_x, 0.0, 0.0).with_rotation(Quat::from_rotation_y(yaw)),
                Visibility::default(),
                ChildOf(product),
            ))
            .id();

        commands.spawn((
            Name::new("Shell"),
            HoverTarget,
            Mesh3d(shell_mesh.clone()),
            MeshMaterial3d(shell.clone()),
            Transform::default(),
            ChildOf(bud),
        ));
        commands.spawn((
            Name::new("Stem"),
            Mesh3d(stem_mesh.clone()),
            MeshMaterial3d(shell.clone()),
            Transform::from_translation(STEM_OFFSET),
            ChildOf(bud),
        ));
        commands.spawn((
            Name::new("SpeakerGrille"),
            Mesh3d(grille_mesh.clone()),
            MeshMaterial3d(grille_material.clone()),
            Transform::from_translation(GRILLE_OFFSET).with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
            ChildOf(bud),
        ));
        for offset in MICROPHONE_OFFSETS {
            commands.spawn((
                Name::new("MicrophonePort"),
                Mesh3d(microphone_mesh.clone()),
                MeshMaterial3d(microphone_material.clone()),
                Transform::from_translation(offset).with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
                ChildOf(bud),
            ));
        }
    }
}

/// Parents the loaded glTF scene under the product once, after the load
/// settles as ready. A file without scenes is treated like a failed load.
pub fn attach_loaded_model(
    mut model_loader: ResMut<ModelLoader>,
    gltfs: Res<Assets<Gltf>>,
    products: Query<Entity, With<ProductModel>>,
    mut commands: Commands,
    mut attached: Local<bool>,
) {
    if *attached || model_loader.phase() != ModelPhase::Ready {
        return;
    }
    let Ok(product) = products.single() else {
        return;
    };
    let Some(gltf) = model_loader.handle().and_then(|handle| gltfs.get(handle)) else {
        return;
    };

    let Some(scene) = gltf
        .default_scene
        .clone()
        .or_else(|| gltf.scenes.first().cloned())
    else {
        warn!("Product model has no scenes, showing an empty viewport");
        model_loader.omit();
        *attached = true;
        return;
    };

    commands
        .spawn((Name::new("ProductAsset"), SceneRoot(scene), ChildOf(product)))
        .observe(override_asset_materials);
    *attached = true;
}

/// Swaps the file's own materials for the shared shell material and makes
/// every mesh a hover target.
fn override_asset_materials(
    trigger: Trigger<SceneInstanceReady>,
    children: Query<&Children>,
    meshes: Query<(), With<Mesh3d>>,
    product_materials: Res<ProductMaterials>,
    mut commands: Commands,
) {
    let overridden = apply_product_finish(
        trigger.target(),
        &children,
        &meshes,
        &product_materials.shell,
        &mut commands,
    );
    info!("Applied product finish to {} mesh(es)", overridden);
}

/// Gives every mesh below `root` the shell material and a hover target.
/// Returns how many meshes were touched.
pub fn apply_product_finish(
    root: Entity,
    children: &Query<&Children>,
    meshes: &Query<(), With<Mesh3d>>,
    shell: &Handle<StandardMaterial>,
    commands: &mut Commands,
) -> usize {
    let mut overridden = 0;
    for entity in children.iter_descendants(root) {
        if meshes.contains(entity) {
            commands
                .entity(entity)
                .insert((MeshMaterial3d(shell.clone()), HoverTarget));
            overridden += 1;
        }
    }
    overridden
}
