use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const FOCUS_BORDER: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DANGER: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ROW_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
