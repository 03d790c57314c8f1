use unicode_segmentation::UnicodeSegmentation;

/// Reverse `s` by grapheme cluster, so combining marks and emoji sequences
/// stay attached to their base character.
pub fn reverse(s: &str) -> String {
    s.graphemes(true).rev().collect()
}
