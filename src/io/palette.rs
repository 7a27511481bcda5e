//! Colors shared by the vector and raster renderers

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Raw RGBA components
    pub const fn rgba(self) -> [u8; 4] {
        self.0
    }

    /// `#rrggbb` form for SVG attributes
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Map colors by role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Area outside the dungeon
    pub background: Color,
    /// Room and corridor floor
    pub floor: Color,
    /// Outline between floor and rock
    pub wall: Color,
    /// Door glyphs
    pub door: Color,
    /// Room numbers
    pub label: Color,
    /// Stair glyphs
    pub stair: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x34, 0x34, 0x34),
            floor: Color::rgb(0xff, 0xff, 0xff),
            wall: Color::rgb(0x00, 0x00, 0x00),
            door: Color::rgb(0x8b, 0x45, 0x13),
            label: Color::rgb(0x40, 0x40, 0x40),
            stair: Color::rgb(0x50, 0x50, 0xa0),
        }
    }
}
