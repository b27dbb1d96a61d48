use crate::LumpError;

/// Number of colors in a palette.
pub const PALETTE_NUM_COLORS: usize = 256;

/// Size of a raw palette lump: 256 RGB triples, one byte per channel.
pub const PALETTE_LUMP_SIZE: usize = PALETTE_NUM_COLORS * 3;

/// A 256-color palette as stored in a raw palette lump, e.g. Quake's
/// `gfx/palette.lmp` or a single page of Doom's PLAYPAL.
///
/// Entries are (r, g, b) in index order. The last 32 entries (224..=255) are
/// the "fullbright" colors, which lighting never dims.
pub type Palette = [(u8, u8, u8); PALETTE_NUM_COLORS];

pub fn parse_palette(bytes: &[u8]) -> Result<Palette, LumpError> {
    if bytes.len() != PALETTE_LUMP_SIZE {
        return Err(LumpError::BadPaletteSize(bytes.len()));
    }

    let mut palette: Palette = [(0, 0, 0); PALETTE_NUM_COLORS];
    for i in 0..PALETTE_NUM_COLORS {
        let color_offset = i * 3;
        palette[i] = (
            bytes[color_offset],
            bytes[color_offset + 1],
            bytes[color_offset + 2],
        );
    }

    Ok(palette)
}

pub fn palette_to_bytes(palette: &Palette) -> [u8; PALETTE_LUMP_SIZE] {
    let mut bytes = [0u8; PALETTE_LUMP_SIZE];
    for i in 0..PALETTE_NUM_COLORS {
        let color_offset = i * 3;
        let (r, g, b) = palette[i];
        bytes[color_offset] = r;
        bytes[color_offset + 1] = g;
        bytes[color_offset + 2] = b;
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triples_in_index_order() {
        let mut bytes = Vec::new();
        for i in 0..256u32 {
            bytes.push(i as u8);
            bytes.push(255 - i as u8);
            bytes.push(7);
        }

        let palette = parse_palette(&bytes).unwrap();
        assert_eq!(palette[0], (0, 255, 7));
        assert_eq!(palette[100], (100, 155, 7));
        assert_eq!(palette[255], (255, 0, 7));
    }

    #[test]
    fn rejects_wrong_sizes() {
        assert!(matches!(
            parse_palette(&[]),
            Err(LumpError::BadPaletteSize(0))
        ));
        assert!(matches!(
            parse_palette(&[0u8; PALETTE_LUMP_SIZE - 1]),
            Err(LumpError::BadPaletteSize(767))
        ));
        assert!(matches!(
            parse_palette(&[0u8; PALETTE_LUMP_SIZE + 1]),
            Err(LumpError::BadPaletteSize(769))
        ));
    }

    #[test]
    fn round_trips_through_bytes() {
        let mut bytes = vec![0u8; PALETTE_LUMP_SIZE];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (i * 31 % 256) as u8;
        }

        let palette = parse_palette(&bytes).unwrap();
        assert_eq!(palette_to_bytes(&palette).to_vec(), bytes);
    }
}
