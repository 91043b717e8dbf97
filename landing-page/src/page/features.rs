use std::time::Duration;

use bevy::color::Alpha;
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;
use constants::content::*;
use constants::palette::*;

use crate::page::observer::ViewportObserver;
use crate::page::reveal::{CardReveal, FadeTint, FeatureCard, card_border};
use crate::page::styles::*;

const CARD_TITLE_SIZE: f32 = 22.0;
const BADGE_SIZE: f32 = 64.0;

pub fn spawn_features(page: &mut ChildSpawnerCommands) {
    page.spawn((
        Name::new("Features"),
        BorderColor(SECTION_DIVIDER),
        Node {
            width: Val::Percent(100.0),
            border: UiRect::top(Val::Px(1.0)),
            justify_content: JustifyContent::Center,
            ..default()
        },
    ))
    .with_children(|band| {
        band.spawn(section_node()).with_children(|section| {
            section
                .spawn((
                    text(format!("{FEATURES_HEADING} "), SECTION_HEADING_SIZE, HEADING_TEXT),
                    Node {
                        align_self: AlignSelf::Center,
                        margin: UiRect::bottom(Val::Px(16.0)),
                        ..default()
                    },
                ))
                .with_child(span(FEATURES_HEADING_ACCENT, SECTION_HEADING_SIZE, ACCENT_TEXT));

            section.spawn((
                text(FEATURES_SUBHEADING, LEAD_SIZE, MUTED_TEXT),
                TextLayout::new_with_justify(JustifyText::Center),
                Node {
                    align_self: AlignSelf::Center,
                    max_width: Val::Px(640.0),
                    margin: UiRect::bottom(Val::Px(64.0)),
                    ..default()
                },
            ));

            section
                .spawn((
                    Name::new("FeatureGrid"),
                    Node {
                        display: Display::Grid,
                        grid_template_columns: RepeatedGridTrack::flex(FEATURES.len() as u16, 1.0),
                        column_gap: Val::Px(32.0),
                        row_gap: Val::Px(32.0),
                        ..default()
                    },
                ))
                .with_children(|grid| {
                    for (index, record) in FEATURES.iter().enumerate() {
                        spawn_card(grid, index, record);
                    }
                });
        });
    });
}

/// Colour pair for a fading part: starts transparent, remembers its resting colour.
fn faded(colour: Color) -> (FadeTint, Color) {
    (FadeTint(colour), colour.with_alpha(0.0))
}

fn spawn_card(grid: &mut ChildSpawnerCommands, index: usize, record: &FeatureRecord) {
    let (card_tint, card_background) = faded(CARD_BACKGROUND);

    grid.spawn((
        Name::new(record.title),
        FeatureCard { index },
        CardReveal::new(Duration::from_millis(record.reveal_delay_ms)),
        ViewportObserver,
        Interaction::default(),
        card_tint,
        BackgroundColor(card_background),
        card_border(false, 0.0),
        BorderRadius::all(Val::Px(16.0)),
        Node {
            top: Val::Px(constants::reveal::HIDDEN_SLIDE_OFFSET),
            padding: UiRect::all(Val::Px(32.0)),
            border: UiRect::all(Val::Px(1.0)),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(16.0),
            ..default()
        },
    ))
    .with_children(|card| {
        let (badge_tint, badge_background) = faded(ICON_BADGE);
        card.spawn((
            badge_tint,
            BackgroundColor(badge_background),
            BorderRadius::all(Val::Px(12.0)),
            Node {
                width: Val::Px(BADGE_SIZE),
                height: Val::Px(BADGE_SIZE),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|badge| {
            let (tint, colour) = faded(HEADING_TEXT);
            badge.spawn((text(record.icon.glyph(), LEAD_SIZE, colour), tint));
        });

        let (tint, colour) = faded(HEADING_TEXT);
        card.spawn((text(record.title, CARD_TITLE_SIZE, colour), tint));

        let (tint, colour) = faded(MUTED_TEXT);
        card.spawn((text(record.description, BODY_SIZE, colour), tint));
    });
}
