/// Fraction of a card's area that must be inside the viewport before it reveals.
pub const INTERSECTION_THRESHOLD: f32 = 0.1;

/// Length of the fade-in once a card commits to visible, in seconds.
pub const FADE_IN_SECONDS: f32 = 0.8;

/// Vertical slide distance of a hidden card, in logical pixels.
pub const HIDDEN_SLIDE_OFFSET: f32 = 40.0;

/// Scale applied to a hovered card.
pub const CARD_HOVER_SCALE: f32 = 1.05;
