//! Landing page UI drawn with `bevy_ui`.
//!
//! The page is one scrollable column: hero, feature grid, footer. It spawns
//! at startup and does not depend on the product model, so the copy and
//! buttons render even when the model never arrives.

pub mod features;
pub mod footer;
pub mod hero;
pub mod interactions;

/// Viewport observers and their intersection checks.
pub mod observer;

/// Delayed one-way card reveals and the fade they drive.
pub mod reveal;

pub mod scroll;
pub mod styles;

use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use constants::palette::PAGE_BACKGROUND;

use crate::engine::camera::orbit_camera::orbit_camera_controller;
use features::spawn_features;
use footer::spawn_footer;
use hero::spawn_hero;
use interactions::{card_hover_interaction, hero_button_interaction};
use observer::{ObserverRegistry, observe_card_intersections};
use reveal::{CardRevealed, apply_card_fade, log_card_reveals, tick_card_reveals};
use scroll::{PageRoot, scroll_page};

/// Page UI camera, layout and page interactions.
pub struct PagePlugin;

impl Plugin for PagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ObserverRegistry>()
            .add_event::<CardRevealed>()
            .add_systems(Startup, (spawn_ui_camera, spawn_page))
            .add_systems(
                Update,
                (
                    (observe_card_intersections, tick_card_reveals, apply_card_fade).chain(),
                    log_card_reveals.after(tick_card_reveals),
                    scroll_page.after(orbit_camera_controller),
                    hero_button_interaction,
                    card_hover_interaction,
                ),
            );
    }
}

/// Draws the page first; the model camera renders over the hero slot after it.
fn spawn_ui_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("PageCamera"),
        Camera2d,
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(PAGE_BACKGROUND),
            ..default()
        },
        IsDefaultUiCamera,
    ));
}

pub fn spawn_page(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Page"),
            PageRoot,
            ScrollPosition::default(),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                overflow: Overflow::scroll_y(),
                ..default()
            },
        ))
        .with_children(|page| {
            spawn_hero(page);
            spawn_features(page);
            spawn_footer(page);
        });

    println!("✓ Page layout spawned");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use constants::content::{FEATURES, HERO_TAGLINE, HERO_TITLE, HERO_TITLE_ACCENT};
    use hero::HeroButton;
    use reveal::{CardReveal, FeatureCard};

    use crate::engine::scene::viewport::ModelSlot;

    fn page_world() -> World {
        let mut world = World::new();
        world.init_resource::<ObserverRegistry>();
        world.run_system_once(spawn_page).unwrap();
        world
    }

    fn texts(world: &mut World) -> Vec<String> {
        let mut query = world.query::<&Text>();
        query.iter(world).map(|text| text.0.clone()).collect()
    }

    #[test]
    fn hero_copy_and_buttons_render_without_a_model() {
        let mut world = page_world();

        let texts = texts(&mut world);
        assert!(texts.iter().any(|text| text.starts_with(HERO_TITLE)));
        assert!(texts.iter().any(|text| text == HERO_TAGLINE));

        let mut spans = world.query::<&TextSpan>();
        assert!(spans.iter(&world).any(|span| span.0 == HERO_TITLE_ACCENT));

        let mut buttons = world.query_filtered::<&HeroButton, With<Button>>();
        let mut found: Vec<HeroButton> = buttons.iter(&world).copied().collect();
        found.sort_by_key(|button| *button != HeroButton::Primary);
        assert_eq!(found, vec![HeroButton::Primary, HeroButton::Secondary]);

        let mut slots = world.query_filtered::<(), With<ModelSlot>>();
        assert_eq!(slots.iter(&world).count(), 1);
    }

    #[test]
    fn cards_start_hidden_in_content_order() {
        let mut world = page_world();

        let mut cards = world.query::<(&FeatureCard, &CardReveal, &Name)>();
        let mut found: Vec<(usize, bool, String)> = cards
            .iter(&world)
            .map(|(card, reveal, name)| (card.index, reveal.is_visible(), name.to_string()))
            .collect();
        found.sort_by_key(|(index, _, _)| *index);

        assert_eq!(found.len(), FEATURES.len());
        for (position, ((index, visible, name), record)) in found.iter().zip(FEATURES).enumerate() {
            assert_eq!(*index, position);
            assert!(!visible);
            assert_eq!(name.as_str(), record.title);
        }
        assert_eq!(world.resource::<ObserverRegistry>().active(), FEATURES.len());
    }

    #[test]
    fn despawning_the_page_deregisters_every_observer() {
        let mut world = page_world();
        let root = world
            .query_filtered::<Entity, With<PageRoot>>()
            .single(&world)
            .unwrap();

        world.despawn(root);
        assert_eq!(world.resource::<ObserverRegistry>().active(), 0);
    }
}
