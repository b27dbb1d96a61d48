use crate::{LumpError, PALETTE_NUM_COLORS};

/// Number of light levels in a colormap. Level 0 is full brightness, 63 is
/// near darkness.
pub const COLORMAP_NUM_LEVELS: usize = 64;

/// Size of a raw colormap lump: 64 rows of 256 palette indices.
pub const COLORMAP_LUMP_SIZE: usize = COLORMAP_NUM_LEVELS * PALETTE_NUM_COLORS;

/// LUT for converting colors to their closest darker color, based on
/// lighting. Each cell holds an index into the palette.
///
/// Rows are light levels, columns are original palette indices. The raw lump
/// is the same table flattened row-major, so the byte at `light * 256 + index`
/// is cell `[light][index]`.
///
/// How to use:
/// `new_index = colormap[light][index]`
pub type Colormap = [[u8; PALETTE_NUM_COLORS]; COLORMAP_NUM_LEVELS];

pub fn parse_colormap(bytes: &[u8]) -> Result<Colormap, LumpError> {
    if bytes.len() != COLORMAP_LUMP_SIZE {
        return Err(LumpError::BadColormapSize(bytes.len()));
    }

    let mut colormap: Colormap = [[0; PALETTE_NUM_COLORS]; COLORMAP_NUM_LEVELS];
    for y in 0..COLORMAP_NUM_LEVELS {
        let row_offset = y * PALETTE_NUM_COLORS;
        colormap[y].copy_from_slice(&bytes[row_offset..row_offset + PALETTE_NUM_COLORS]);
    }

    Ok(colormap)
}

pub fn colormap_to_bytes(colormap: &Colormap) -> [u8; COLORMAP_LUMP_SIZE] {
    let mut bytes = [0u8; COLORMAP_LUMP_SIZE];
    for y in 0..COLORMAP_NUM_LEVELS {
        let row_offset = y * PALETTE_NUM_COLORS;
        bytes[row_offset..row_offset + PALETTE_NUM_COLORS].copy_from_slice(&colormap[y]);
    }

    bytes
}
