use rayon::prelude::*;

use id_lump_format::{Colormap, Palette, COLORMAP_NUM_LEVELS, PALETTE_NUM_COLORS};

use crate::convert::closest_color;

/// Number of fullbright colors. The last 32 palette entries render at full
/// brightness regardless of light level, so the colormap passes them through
/// untouched.
pub const NUM_FULLBRIGHTS: usize = 32;

/// Generates the 64 levels of lighting for a 256-color palette.
///
/// Each cell dims an original palette color for its light level, then samples
/// the result back to the closest palette index. The output is a pure
/// function of the palette: the same input always produces the same table.
///
/// Light levels are independent of each other, so rows are filled in
/// parallel; each row is written by exactly one task and no cell is written
/// twice.
///
/// Reference:
/// https://quakewiki.org/wiki/Quake_palette
pub fn generate_colormap(palette: &Palette) -> Colormap {
    let mut colormap: Colormap = [[0; PALETTE_NUM_COLORS]; COLORMAP_NUM_LEVELS];

    colormap
        .par_iter_mut()
        .enumerate()
        .for_each(|(light, row)| {
            for x in 0..PALETTE_NUM_COLORS {
                // Fullbright colors are not dimmed.
                if x >= PALETTE_NUM_COLORS - NUM_FULLBRIGHTS {
                    row[x] = x as u8;
                    continue;
                }

                let (r, g, b) = palette[x];
                let dimmed = (_dim(r, light), _dim(g, light), _dim(b, light));
                row[x] = closest_color(palette, dimmed);
            }
        });

    colormap
}

/// Dims one channel of a palette color for a light level.
///
/// `(val * (63 - light) + 16) >> 5` is round-to-nearest `val * (63 - light)
/// / 32`, but faster. At light 0 the scale is 63/32, slightly over full
/// brightness, and the clamp brings hot channels back to 255. At light 63 the
/// scale is 0 and every channel goes black.
fn _dim(val: u8, light: usize) -> u8 {
    let scaled = (val as i32 * (63 - light as i32) + 16) >> 5;
    scaled.clamp(0, 255) as u8
}
