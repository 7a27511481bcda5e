//! Tests for renderer colors

#[cfg(test)]
mod tests {
    use dunjon::io::palette::{Color, Palette};

    // Tests hex formatting ignores alpha and pads components
    // Verified by formatting without zero padding
    #[test]
    fn test_color_hex() {
        assert_eq!(Color::rgb(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Color::rgb(0x8b, 0x45, 0x13).to_hex(), "#8b4513");
        assert_eq!(Color([1, 2, 3, 4]).to_hex(), "#010203");
        assert_eq!(Color::rgb(1, 2, 3).rgba(), [1, 2, 3, 255]);
    }

    // Tests the default palette keeps floor and walls distinguishable
    // Verified by setting the wall color to the floor color
    #[test]
    fn test_default_palette_contrast() {
        let palette = Palette::default();
        assert_ne!(palette.floor, palette.wall);
        assert_ne!(palette.floor, palette.background);
        assert_eq!(palette.floor.to_hex(), "#ffffff");
    }
}
