//! Block-digit font and banner art drawn by the menu and the countdown.

use unicode_width::UnicodeWidthStr;

pub const HEADER: &str = r"
 ____  ____  _      ____  ____  ____  ____  ____
/  __\/  _ \/ \__/|/  _ \/  _ \/  _ \/  __\/  _ \
|  \/|| / \|| |\/||| / \|| | \|| / \||  \/|| / \|
|  __/| \_/|| |  ||| \_/|| |_/|| \_/||    /| \_/|
\_/   \____/\_/  \|\____/\____/\____/\_/\_\\____/
";

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 5;

const DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    [" ██████ ", "██  ████", "██ ██ ██", "████  ██", " ██████ "],
    ["   ██   ", "  ███   ", "   ██   ", "   ██   ", "   ██   "],
    ["██████  ", "     ██ ", " █████  ", "██      ", "███████ "],
    ["██████  ", "     ██ ", " █████  ", "     ██ ", "██████  "],
    ["██   ██ ", "██   ██ ", "███████ ", "     ██ ", "     ██ "],
    ["███████ ", "██      ", "███████ ", "     ██ ", "███████ "],
    [" ██████ ", "██      ", "███████ ", "██    ██", " ██████ "],
    ["███████ ", "     ██ ", "    ██  ", "   ██   ", "   ██   "],
    [" █████  ", "██   ██ ", " █████  ", "██   ██ ", " █████  "],
    [" █████  ", "██   ██ ", " ██████ ", "     ██ ", " █████  "],
];

/// Fixed ten-glyph font for the digits 0-9. Every row of every glyph is
/// padded to the same display width so two glyphs can sit side by side.
#[derive(Debug, Clone)]
pub struct BlockFont {
    glyphs: Vec<Vec<String>>,
    width: usize,
}

impl Default for BlockFont {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockFont {
    pub fn new() -> Self {
        let width = DIGITS
            .iter()
            .flat_map(|g| g.iter())
            .map(|row| row.width())
            .max()
            .unwrap_or(0);

        let glyphs = DIGITS
            .iter()
            .map(|g| {
                g.iter()
                    .map(|row| format!("{row}{}", " ".repeat(width - row.width())))
                    .collect()
            })
            .collect();

        Self { glyphs, width }
    }

    /// Display width of one glyph row.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        GLYPH_HEIGHT
    }

    /// Rows of the glyph for `digit`. Values above 9 are clamped.
    pub fn glyph(&self, digit: u8) -> &[String] {
        &self.glyphs[usize::from(digit.min(9))]
    }
}
