use bevy::prelude::*;
use constants::palette::*;
use constants::reveal::CARD_HOVER_SCALE;

use crate::page::hero::HeroButton;
use crate::page::reveal::{CardReveal, FeatureCard, card_border};

// Hero call-to-action buttons: filled button tints, outline button lights its border
pub fn hero_button_interaction(
    mut q: Query<
        (&Interaction, &HeroButton, &mut BackgroundColor, &mut BorderColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, button, mut bg, mut border) in &mut q {
        match (*interaction, *button) {
            (Interaction::Pressed, _) => {
                info!("{} pressed", button.label());
                if *button == HeroButton::Primary {
                    *bg = BackgroundColor(PRIMARY_BUTTON_PRESSED);
                }
            }
            (Interaction::Hovered, HeroButton::Primary) => {
                *bg = BackgroundColor(PRIMARY_BUTTON_HOVER);
                *border = BorderColor(PRIMARY_BUTTON_HOVER);
            }
            (Interaction::Hovered, HeroButton::Secondary) => {
                *border = BorderColor(OUTLINE_BUTTON_BORDER_HOVER);
            }
            (Interaction::None, _) => {
                let (resting_bg, resting_border) = button.resting_colours();
                *bg = resting_bg;
                *border = resting_border;
            }
        }
    }
}

// Feature cards grow slightly and highlight their border while hovered
pub fn card_hover_interaction(
    mut q: Query<
        (&Interaction, &CardReveal, &mut Transform, &mut BorderColor),
        (Changed<Interaction>, With<FeatureCard>),
    >,
) {
    for (interaction, reveal, mut transform, mut border) in &mut q {
        let hovered = *interaction != Interaction::None;
        transform.scale = if hovered {
            Vec3::splat(CARD_HOVER_SCALE)
        } else {
            Vec3::ONE
        };
        *border = card_border(hovered, reveal.fade_progress());
    }
}
