use bevy::prelude::*;

pub const HERO_TITLE_SIZE: f32 = 72.0;
pub const SECTION_HEADING_SIZE: f32 = 44.0;
pub const LEAD_SIZE: f32 = 20.0;
pub const BODY_SIZE: f32 = 16.0;
pub const CAPTION_SIZE: f32 = 14.0;

pub const PAGE_GUTTER: f32 = 48.0;
pub const SECTION_PADDING: f32 = 96.0;
pub const CONTENT_MAX_WIDTH: f32 = 1200.0;

/// Text node with font size and colour.
pub fn text(content: impl Into<String>, size: f32, color: Color) -> (Text, TextFont, TextColor) {
    (
        Text::new(content),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

/// Coloured run appended to a `Text` parent.
pub fn span(content: impl Into<String>, size: f32, color: Color) -> (TextSpan, TextFont, TextColor) {
    (
        TextSpan::new(content),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

/// Full-width band with a centred column capped at the content width.
pub fn section_node() -> Node {
    Node {
        width: Val::Percent(100.0),
        max_width: Val::Px(CONTENT_MAX_WIDTH),
        padding: UiRect::axes(Val::Px(PAGE_GUTTER), Val::Px(SECTION_PADDING)),
        align_self: AlignSelf::Center,
        flex_direction: FlexDirection::Column,
        ..default()
    }
}

pub fn pill_button_node() -> Node {
    Node {
        padding: UiRect::axes(Val::Px(32.0), Val::Px(14.0)),
        display: Display::Flex,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        border: UiRect::all(Val::Px(2.0)),
        ..default()
    }
}
