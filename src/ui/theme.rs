use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Colors that change with the dark-theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub popup_border: Color,
    pub highlight: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x12, 0x12, 0x12),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0x40, 0x40, 0x40),
    popup_border: Color::Rgb(0xe5, 0xe5, 0xe5),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xfa, 0xfa, 0xfa),
    text: Color::Rgb(0x1f, 0x1f, 0x1f),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0xc8, 0xc8, 0xc8),
    popup_border: Color::Rgb(0x40, 0x40, 0x40),
    highlight: Color::Rgb(0xe4, 0xe4, 0xe4),
};

pub fn palette(dark: bool) -> &'static Palette {
    if dark {
        &DARK
    } else {
        &LIGHT
    }
}
