mod lumps;

use thiserror::Error;

pub use lumps::*;

/// Raw lump files carry no header or length field, so strict size checking
/// is the only validation possible. A lump of the wrong size is rejected
/// outright rather than truncated or padded.
#[derive(Debug, Error)]
pub enum LumpError {
    #[error("Palette lump must be {expected} bytes, got {0}.", expected = PALETTE_LUMP_SIZE)]
    BadPaletteSize(usize),
    #[error("Colormap lump must be {expected} bytes, got {0}.", expected = COLORMAP_LUMP_SIZE)]
    BadColormapSize(usize),
}
