/// Icons shown in the feature card badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Headphones,
    Volume,
    Wifi,
}

impl FeatureIcon {
    /// Glyph drawn inside the badge. Kept to ASCII so the embedded UI font covers it.
    pub fn glyph(self) -> &'static str {
        match self {
            FeatureIcon::Headphones => "(o)",
            FeatureIcon::Volume => "<))",
            FeatureIcon::Wifi => ")))",
        }
    }
}

pub struct FeatureRecord {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub reveal_delay_ms: u64,
}

/// Feature cards in display order. Delays stagger the reveal left to right.
pub const FEATURES: &[FeatureRecord] = &[
    FeatureRecord {
        icon: FeatureIcon::Headphones,
        title: "Immersive Design",
        description: "Ergonomically crafted for all-day comfort with premium materials that feel as good as they sound.",
        reveal_delay_ms: 0,
    },
    FeatureRecord {
        icon: FeatureIcon::Volume,
        title: "Studio Quality",
        description: "Pro-level audio processing with adaptive EQ that automatically tunes music to your ears.",
        reveal_delay_ms: 200,
    },
    FeatureRecord {
        icon: FeatureIcon::Wifi,
        title: "Seamless Connection",
        description: "Effortless pairing and switching between all your Apple devices with the H2 chip.",
        reveal_delay_ms: 400,
    },
];

pub const HERO_TITLE: &str = "AirPods";
pub const HERO_TITLE_ACCENT: &str = "Pro";
pub const HERO_TAGLINE: &str =
    "Magic like you've never heard. Experience spatial audio that places sound all around you.";
pub const PRIMARY_ACTION: &str = "Buy Now";
pub const SECONDARY_ACTION: &str = "Learn More";
pub const DRAG_HINT: &str = "Drag to rotate";

pub const FEATURES_HEADING: &str = "Engineered for";
pub const FEATURES_HEADING_ACCENT: &str = "Excellence";
pub const FEATURES_SUBHEADING: &str =
    "Every detail has been carefully crafted to deliver an unparalleled audio experience.";

pub const FOOTER_TEXT: &str = "© 2024 AirPods Pro. Experience the future of audio.";
