use ratatui::style::Color;

/// Runtime theme for the page viewer
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    // Semantic colors
    pub accent: Color,
    pub title: Color,
    pub card: Color,
    /// Unrevealed animatable blocks
    pub hidden: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey: Color::Rgb(0x7c, 0x6f, 0x64),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            title: Color::Rgb(0xd8, 0xa6, 0x57),
            card: Color::Rgb(0x7d, 0xae, 0xa3),
            hidden: Color::Rgb(0x45, 0x40, 0x3d),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }
}
