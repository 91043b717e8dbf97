use std::time::Duration;

use bevy::color::Alpha;
use bevy::prelude::*;
use constants::palette::{CARD_BORDER, CARD_BORDER_HOVER};
use constants::reveal::{FADE_IN_SECONDS, HIDDEN_SLIDE_OFFSET, INTERSECTION_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealPhase {
    Hidden,
    /// Crossed the threshold at `crossed_at` (time since startup); waiting
    /// out the card's delay.
    Pending { crossed_at: Duration },
    Visible,
}

/// One-way reveal of a feature card. Once visible it never hides again.
#[derive(Component, Debug, Clone)]
pub struct CardReveal {
    delay: Duration,
    phase: RevealPhase,
    fade_elapsed: f32,
}

impl CardReveal {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            phase: RevealPhase::Hidden,
            fade_elapsed: 0.0,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Visible
    }

    /// Hidden cards start their countdown on the first ratio at or above the
    /// threshold, measured from `now`. Returns whether this call started it.
    pub fn observe_intersection(&mut self, ratio: f32, now: Duration) -> bool {
        if self.phase == RevealPhase::Hidden && ratio >= INTERSECTION_THRESHOLD {
            self.phase = RevealPhase::Pending { crossed_at: now };
            return true;
        }
        false
    }

    /// True while the countdown or the fade still has work to do.
    pub fn is_animating(&self) -> bool {
        match self.phase {
            RevealPhase::Hidden => false,
            RevealPhase::Pending { .. } => true,
            RevealPhase::Visible => self.fade_elapsed < FADE_IN_SECONDS,
        }
    }

    /// Advances the countdown to `now` and the fade by `delta`. Time before
    /// the crossing never counts towards the delay. Returns true on the tick
    /// the card becomes visible.
    pub fn tick(&mut self, now: Duration, delta: Duration) -> bool {
        match self.phase {
            RevealPhase::Hidden => false,
            RevealPhase::Pending { crossed_at } => {
                if now.saturating_sub(crossed_at) >= self.delay {
                    self.phase = RevealPhase::Visible;
                    true
                } else {
                    false
                }
            }
            RevealPhase::Visible => {
                self.fade_elapsed = (self.fade_elapsed + delta.as_secs_f32()).min(FADE_IN_SECONDS);
                false
            }
        }
    }

    /// Eased fade-in in `[0, 1]`. Zero until visible.
    pub fn fade_progress(&self) -> f32 {
        if !self.is_visible() {
            return 0.0;
        }
        let t = (self.fade_elapsed / FADE_IN_SECONDS).clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(3)
    }

    /// Downward offset of the card while it fades in, in logical pixels.
    pub fn slide_offset(&self) -> f32 {
        HIDDEN_SLIDE_OFFSET * (1.0 - self.fade_progress())
    }
}

#[derive(Component)]
pub struct FeatureCard {
    pub index: usize,
}

/// Resting colour of a card part. Its alpha is scaled by the card's fade.
#[derive(Component, Debug, Clone, Copy)]
pub struct FadeTint(pub Color);

impl FadeTint {
    pub fn at(self, fade: f32) -> Color {
        self.0.with_alpha(self.0.alpha() * fade)
    }
}

#[derive(Event, Debug, Clone, Copy)]
pub struct CardRevealed {
    pub card: Entity,
    pub index: usize,
}

pub fn card_border(hovered: bool, fade: f32) -> BorderColor {
    let tint = FadeTint(if hovered { CARD_BORDER_HOVER } else { CARD_BORDER });
    BorderColor(tint.at(fade))
}

/// Advances every pending or fading card with the frame delta.
pub fn tick_card_reveals(
    time: Res<Time>,
    mut cards: Query<(Entity, &FeatureCard, &mut CardReveal)>,
    mut revealed: EventWriter<CardRevealed>,
) {
    for (card, feature, mut reveal) in &mut cards {
        if !reveal.is_animating() {
            continue;
        }
        if reveal.tick(time.elapsed(), time.delta()) {
            revealed.write(CardRevealed {
                card,
                index: feature.index,
            });
        }
    }
}

pub fn log_card_reveals(mut revealed: EventReader<CardRevealed>) {
    for event in revealed.read() {
        debug!("Feature card {} revealed", event.index);
    }
}

/// Pushes fade and slide onto the card node and every tinted descendant.
pub fn apply_card_fade(
    mut cards: Query<
        (Entity, &CardReveal, &Interaction, &mut Node, &mut BorderColor),
        Changed<CardReveal>,
    >,
    children: Query<&Children>,
    mut tinted: Query<(&FadeTint, Option<&mut BackgroundColor>, Option<&mut TextColor>)>,
) {
    for (card, reveal, interaction, mut node, mut border) in &mut cards {
        let fade = reveal.fade_progress();
        node.top = Val::Px(reveal.slide_offset());
        *border = card_border(*interaction != Interaction::None, fade);

        for entity in std::iter::once(card).chain(children.iter_descendants(card)) {
            let Ok((tint, background, text_colour)) = tinted.get_mut(entity) else {
                continue;
            };
            if let Some(mut background) = background {
                background.0 = tint.at(fade);
            }
            if let Some(mut text_colour) = text_colour {
                text_colour.0 = tint.at(fade);
            }
        }
    }
}
