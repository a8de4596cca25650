//! Unicode utilities for grapheme handling and display width.

mod grapheme;
mod width;

pub use grapheme::{
    floor_char_boundary, grapheme_boundaries, grapheme_indices, next_grapheme_boundary,
    prev_grapheme_boundary,
};
pub use width::{WidthMethod, display_width_with_method};
