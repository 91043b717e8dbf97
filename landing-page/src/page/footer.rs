use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;
use constants::content::FOOTER_TEXT;
use constants::palette::{FAINT_TEXT, SECTION_DIVIDER};

use crate::page::styles::{CAPTION_SIZE, PAGE_GUTTER, text};

pub fn spawn_footer(page: &mut ChildSpawnerCommands) {
    page.spawn((
        Name::new("Footer"),
        BorderColor(SECTION_DIVIDER),
        Node {
            width: Val::Percent(100.0),
            padding: UiRect::axes(Val::Px(PAGE_GUTTER), Val::Px(48.0)),
            border: UiRect::top(Val::Px(1.0)),
            justify_content: JustifyContent::Center,
            ..default()
        },
    ))
    .with_children(|footer| {
        footer.spawn(text(FOOTER_TEXT, CAPTION_SIZE, FAINT_TEXT));
    });
}
