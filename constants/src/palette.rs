use bevy::color::Color;

// Page
pub const PAGE_BACKGROUND: Color = Color::srgb(0.067, 0.094, 0.153);
pub const SECTION_DIVIDER: Color = Color::srgb(0.122, 0.161, 0.216);
pub const HEADING_TEXT: Color = Color::WHITE;
pub const ACCENT_TEXT: Color = Color::srgb(0.376, 0.647, 0.980);
pub const BODY_TEXT: Color = Color::srgb(0.820, 0.835, 0.859);
pub const MUTED_TEXT: Color = Color::srgb(0.612, 0.639, 0.686);
pub const FAINT_TEXT: Color = Color::srgb(0.420, 0.447, 0.502);

// Buttons
pub const PRIMARY_BUTTON: Color = Color::srgb(0.231, 0.510, 0.965);
pub const PRIMARY_BUTTON_HOVER: Color = Color::srgb(0.145, 0.388, 0.922);
pub const PRIMARY_BUTTON_PRESSED: Color = Color::srgb(0.114, 0.306, 0.847);
pub const OUTLINE_BUTTON_BORDER: Color = Color::srgb(0.294, 0.333, 0.388);
pub const OUTLINE_BUTTON_BORDER_HOVER: Color = Color::srgb(0.231, 0.510, 0.965);

// Feature cards
pub const CARD_BACKGROUND: Color = Color::srgba(0.067, 0.094, 0.153, 0.5);
pub const CARD_BORDER: Color = Color::srgba(0.216, 0.255, 0.318, 0.5);
pub const CARD_BORDER_HOVER: Color = Color::srgba(0.231, 0.510, 0.965, 0.5);
pub const ICON_BADGE: Color = Color::srgb(0.231, 0.510, 0.965);

// Product materials
pub const SHELL_COLOUR: Color = Color::WHITE;
pub const SHELL_HOVER_COLOUR: Color = Color::srgb(0.973, 0.973, 0.973);
pub const SHELL_HOVER_GLOW: Color = Color::srgb(0.231, 0.510, 0.965);
pub const SHELL_HOVER_GLOW_INTENSITY: f32 = 0.1;
pub const GRILLE_COLOUR: Color = Color::srgb(0.102, 0.102, 0.102);
pub const MICROPHONE_COLOUR: Color = Color::srgb(0.165, 0.165, 0.165);

// Lights
pub const FILL_LIGHT_BLUE: Color = Color::srgb(0.231, 0.510, 0.965);
pub const FILL_LIGHT_VIOLET: Color = Color::srgb(0.545, 0.361, 0.965);
