//! Display width calculation in monospace cells.

use unicode_width::UnicodeWidthStr;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Get the display width of a string in cells using a specific method.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(s),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width_with_method("hello", WidthMethod::WcWidth), 5);
        assert_eq!(display_width_with_method("", WidthMethod::Unicode), 0);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width_with_method("漢字", WidthMethod::WcWidth), 4);
        assert_eq!(display_width_with_method("a漢", WidthMethod::Unicode), 3);
    }

    #[test]
    fn test_width_methods() {
        // Circled digit one is ambiguous-width.
        assert_eq!(display_width_with_method("①", WidthMethod::WcWidth), 1);
        assert_eq!(display_width_with_method("①", WidthMethod::Unicode), 2);
    }
}
