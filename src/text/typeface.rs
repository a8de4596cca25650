//! Glyph measurement capability.
//!
//! The layout code never draws; it only asks a [`Typeface`] how wide a run
//! of text is and how tall a line is. Results must be deterministic for the
//! same text.

use crate::unicode::{WidthMethod, display_width_with_method, grapheme_indices};

/// Glyph metrics supplied by the rendering backend.
pub trait Typeface {
    /// Width of `text` laid out on a single line, in pixels.
    fn measure(&self, text: &str) -> f32;

    /// Height of one line, in pixels.
    fn line_height(&self) -> f32;
}

impl<T: Typeface + ?Sized> Typeface for &T {
    fn measure(&self, text: &str) -> f32 {
        (**self).measure(text)
    }

    fn line_height(&self) -> f32 {
        (**self).line_height()
    }
}

impl<T: Typeface + ?Sized> Typeface for Box<T> {
    fn measure(&self, text: &str) -> f32 {
        (**self).measure(text)
    }

    fn line_height(&self) -> f32 {
        (**self).line_height()
    }
}

/// Fixed-cell typeface: every grapheme is one or two cells wide.
///
/// Tabs advance to the next multiple of `tab_width` cells, counted from the
/// start of the measured text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceTypeface {
    pub cell_width: f32,
    pub line_height: f32,
    pub tab_width: u8,
    pub width_method: WidthMethod,
}

impl Default for MonospaceTypeface {
    fn default() -> Self {
        Self {
            cell_width: 1.0,
            line_height: 1.0,
            tab_width: 4,
            width_method: WidthMethod::WcWidth,
        }
    }
}

impl MonospaceTypeface {
    /// Create a typeface with the given cell size.
    #[must_use]
    pub fn new(cell_width: f32, line_height: f32) -> Self {
        Self {
            cell_width,
            line_height,
            ..Self::default()
        }
    }

    /// Set the tab width in cells.
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: u8) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Number of cells `text` occupies.
    #[must_use]
    pub fn cells(&self, text: &str) -> usize {
        let tab_width = usize::from(self.tab_width.max(1));
        let mut cells = 0usize;
        for (_, grapheme) in grapheme_indices(text) {
            if grapheme == "\t" {
                cells += tab_width - cells % tab_width;
            } else {
                cells += display_width_with_method(grapheme, self.width_method);
            }
        }
        cells
    }
}

impl Typeface for MonospaceTypeface {
    fn measure(&self, text: &str) -> f32 {
        self.cells(text) as f32 * self.cell_width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
