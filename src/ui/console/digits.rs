//! Block-letter digits for the large clock.

const GLYPH_ROWS: usize = 5;

const GLYPHS: [[&str; GLYPH_ROWS]; 10] = [
    ["###", "# #", "# #", "# #", "###"],
    ["  #", "  #", "  #", "  #", "  #"],
    ["###", "  #", "###", "#  ", "###"],
    ["###", "  #", "###", "  #", "###"],
    ["# #", "# #", "###", "  #", "  #"],
    ["###", "#  ", "###", "  #", "###"],
    ["###", "#  ", "###", "# #", "###"],
    ["###", "  #", "  #", "  #", "  #"],
    ["###", "# #", "###", "# #", "###"],
    ["###", "# #", "###", "  #", "###"],
];

/// Render `text` as block digits, one string per row.
///
/// Non-digit characters become blank columns.
pub fn big_text(text: &str) -> Vec<String> {
    (0..GLYPH_ROWS)
        .map(|row| {
            text.chars()
                .map(|ch| {
                    let pattern = ch
                        .to_digit(10)
                        .map(|digit| GLYPHS[digit as usize][row])
                        .unwrap_or("   ");
                    pattern
                        .chars()
                        .map(|cell| if cell == '#' { "██" } else { "  " })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}
