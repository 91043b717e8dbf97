use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::picking::Pickable;
use bevy::prelude::*;
use constants::content::*;
use constants::palette::*;
use constants::render_settings::MODEL_SLOT_HEIGHT;

use crate::engine::scene::viewport::ModelSlot;
use crate::page::styles::*;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroButton {
    Primary,
    Secondary,
}

impl HeroButton {
    pub fn label(self) -> &'static str {
        match self {
            HeroButton::Primary => PRIMARY_ACTION,
            HeroButton::Secondary => SECONDARY_ACTION,
        }
    }

    pub fn resting_colours(self) -> (BackgroundColor, BorderColor) {
        match self {
            HeroButton::Primary => (BackgroundColor(PRIMARY_BUTTON), BorderColor(PRIMARY_BUTTON)),
            HeroButton::Secondary => (
                BackgroundColor(Color::NONE),
                BorderColor(OUTLINE_BUTTON_BORDER),
            ),
        }
    }
}

/// Title, tagline and calls to action on the left; the model slot on the right.
/// The slot is an empty node; the model camera renders into its rectangle.
pub fn spawn_hero(page: &mut ChildSpawnerCommands) {
    page.spawn((
        Name::new("Hero"),
        Node {
            width: Val::Percent(100.0),
            max_width: Val::Px(CONTENT_MAX_WIDTH),
            min_height: Val::Vh(100.0),
            padding: UiRect::axes(Val::Px(PAGE_GUTTER), Val::Px(SECTION_PADDING)),
            align_self: AlignSelf::Center,
            align_items: AlignItems::Center,
            flex_wrap: FlexWrap::Wrap,
            column_gap: Val::Px(48.0),
            row_gap: Val::Px(48.0),
            ..default()
        },
    ))
    .with_children(|hero| {
        hero.spawn((
            Name::new("HeroCopy"),
            Node {
                flex_grow: 1.0,
                flex_basis: Val::Px(420.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(24.0),
                ..default()
            },
        ))
        .with_children(|copy| {
            copy.spawn(text(
                format!("{HERO_TITLE} "),
                HERO_TITLE_SIZE,
                HEADING_TEXT,
            ))
            .with_child(span(HERO_TITLE_ACCENT, HERO_TITLE_SIZE, ACCENT_TEXT));

            copy.spawn((
                text(HERO_TAGLINE, LEAD_SIZE, BODY_TEXT),
                Node {
                    max_width: Val::Px(520.0),
                    ..default()
                },
            ));

            copy.spawn(Node {
                column_gap: Val::Px(16.0),
                row_gap: Val::Px(16.0),
                flex_wrap: FlexWrap::Wrap,
                ..default()
            })
            .with_children(|actions| {
                for button in [HeroButton::Primary, HeroButton::Secondary] {
                    spawn_hero_button(actions, button);
                }
            });
        });

        hero.spawn((
            Name::new("ModelColumn"),
            Node {
                flex_grow: 1.0,
                flex_basis: Val::Px(420.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
        ))
        .with_children(|column| {
            column.spawn((
                Name::new("ModelSlot"),
                ModelSlot,
                // Pointer hits go through to the product meshes behind the slot.
                Pickable::IGNORE,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(MODEL_SLOT_HEIGHT),
                    ..default()
                },
            ));
            column.spawn(text(DRAG_HINT, CAPTION_SIZE, FAINT_TEXT));
        });
    });
}

fn spawn_hero_button(actions: &mut ChildSpawnerCommands, button: HeroButton) {
    let (background, border) = button.resting_colours();
    let label_colour = match button {
        HeroButton::Primary => HEADING_TEXT,
        HeroButton::Secondary => BODY_TEXT,
    };

    actions
        .spawn((
            Name::new(button.label()),
            button,
            Button,
            background,
            border,
            BorderRadius::MAX,
            pill_button_node(),
        ))
        .with_children(|parent| {
            parent.spawn(text(button.label(), BODY_SIZE, label_colour));
        });
}
