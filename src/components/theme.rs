use ratatui::style::Color;

pub const BG_BASE: Color = Color::Rgb(24, 16, 18);
pub const BG_HEADER: Color = Color::Rgb(170, 62, 62);
pub const BG_CARD: Color = Color::Rgb(44, 28, 32);
pub const BG_CARD_SELECTED: Color = Color::Rgb(72, 38, 44);
pub const BG_BADGE: Color = Color::Rgb(69, 10, 10);
pub const BG_INPUT: Color = Color::Rgb(250, 240, 240);
pub const BG_MODAL: Color = Color::Rgb(36, 24, 28);
pub const TEXT_MAIN: Color = Color::Rgb(246, 238, 238);
pub const TEXT_DIM: Color = Color::Rgb(190, 168, 170);
pub const TEXT_INPUT: Color = Color::Rgb(20, 12, 12);
pub const ACCENT_RED: Color = Color::Rgb(248, 113, 113);
pub const ACCENT_GOLD: Color = Color::Rgb(236, 190, 92);
pub const ERROR: Color = Color::Rgb(255, 96, 96);
