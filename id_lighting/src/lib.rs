mod colormap;
mod convert;

pub use colormap::{generate_colormap, NUM_FULLBRIGHTS};
pub use convert::closest_color;
