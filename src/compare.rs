use crate::locale::Locale;

/// Case-sensitive equality
pub fn compare(a: &str, b: &str) -> bool {
    a == b
}

/// Equality after lower-casing both sides
pub fn loose_compare(a: &str, b: &str) -> bool {
    loose_compare_in(a, b, Locale::Root)
}

pub fn loose_compare_in(a: &str, b: &str, locale: Locale) -> bool {
    locale.to_lowercase(a) == locale.to_lowercase(b)
}

/// A slice of a string, bounded by char indices.
///
/// Open bounds fall back to the explicit bounds given to [`region_match`],
/// then to the start or end of the text. Bounds past the end are clamped and
/// reversed bounds are swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringRegion<'a> {
    pub text: &'a str,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl<'a> StringRegion<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            start: None,
            end: None,
        }
    }

    pub fn between(text: &'a str, start: usize, end: usize) -> Self {
        Self {
            text,
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: usize) -> Self {
        self.end = Some(end);
        self
    }

    fn slice(&self, start: Option<usize>, end: Option<usize>) -> &'a str {
        let len = self.text.chars().count();
        let mut from = self.start.or(start).unwrap_or(0).min(len);
        let mut to = self.end.or(end).unwrap_or(len).min(len);
        if from > to {
            std::mem::swap(&mut from, &mut to);
        }
        &self.text[byte_offset(self.text, from)..byte_offset(self.text, to)]
    }
}

impl<'a> From<&'a str> for StringRegion<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl<'a> From<&'a String> for StringRegion<'a> {
    fn from(text: &'a String) -> Self {
        Self::new(text)
    }
}

fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Compare two regions for equality.
///
/// `start` and `end` bound any side that leaves its own bound open, so plain
/// strings can be compared over the same window:
/// `region_match("hello world", "hello there", Some(0), Some(5))` is true.
pub fn region_match<'a, 'b>(
    a: impl Into<StringRegion<'a>>,
    b: impl Into<StringRegion<'b>>,
    start: Option<usize>,
    end: Option<usize>,
) -> bool {
    let (a, b): (StringRegion, StringRegion) = (a.into(), b.into());
    a.slice(start, end) == b.slice(start, end)
}

/// [`region_match`] ignoring case
pub fn loose_region_match<'a, 'b>(
    a: impl Into<StringRegion<'a>>,
    b: impl Into<StringRegion<'b>>,
    start: Option<usize>,
    end: Option<usize>,
) -> bool {
    loose_region_match_in(a, b, start, end, Locale::Root)
}

pub fn loose_region_match_in<'a, 'b>(
    a: impl Into<StringRegion<'a>>,
    b: impl Into<StringRegion<'b>>,
    start: Option<usize>,
    end: Option<usize>,
    locale: Locale,
) -> bool {
    let (a, b): (StringRegion, StringRegion) = (a.into(), b.into());
    loose_compare_in(a.slice(start, end), b.slice(start, end), locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare() {
        assert!(compare("hello", "hello"));
        assert!(!compare("abc", "ABC"));
        assert!(compare("", ""));
    }

    #[test]
    fn test_loose_compare() {
        assert!(loose_compare("hello", "HELLO"));
        assert!(!loose_compare("abc", "123"));
        assert!(loose_compare("", ""));
    }

    #[test]
    fn test_loose_compare_turkish() {
        assert!(loose_compare_in("KIŞ", "kış", Locale::Turkish));
        assert!(!loose_compare_in("KIŞ", "kiş", Locale::Turkish));
        assert!(loose_compare("KIŞ", "kiş"));
    }

    #[test]
    fn test_region_match_strings() {
        assert!(region_match("hello", "hello", None, None));
        assert!(region_match("hello", "hello", Some(1), Some(4)));
        assert!(!region_match("hello", "world", None, Some(2)));
        assert!(region_match("hello world", "hello there", Some(0), Some(5)));
        assert!(!region_match("hello world", "hello there", Some(6), Some(11)));
    }

    #[test]
    fn test_region_match_regions() {
        let a = StringRegion::between("hello world", 0, 5);
        let b = StringRegion::between("hello there", 0, 5);
        assert!(region_match(a, b, None, None));

        let a = StringRegion::between("hello world", 6, 11);
        let b = StringRegion::between("hello there", 6, 11);
        assert!(!region_match(a, b, None, None));

        let a = StringRegion::between(" hello world", 1, 6);
        let b = StringRegion::between("hello there", 0, 5);
        assert!(region_match(a, b, None, None));
    }

    #[test]
    fn test_region_open_bounds() {
        let a = StringRegion::new("hello world").with_start(5);
        let b = StringRegion::new("world world").with_start(5);
        assert!(region_match(a, b, None, None));

        let a = StringRegion::new("hello world").with_end(5);
        let b = StringRegion::new("hello hello").with_end(5);
        assert!(region_match(a, b, None, None));
    }

    #[test]
    fn test_explicit_bounds_fill_open_region_bounds() {
        let a = StringRegion::new("hello world").with_start(0);
        let b = StringRegion::between("hello there", 0, 5);
        assert!(!region_match(a, b, None, None));
        assert!(region_match(a, b, None, Some(5)));

        // A region's own bounds win over the explicit ones
        let a = StringRegion::between("xxhello", 2, 7);
        assert!(region_match(a, "hello world", Some(0), Some(5)));

        let a = StringRegion::new("HELLO world").with_end(5);
        assert!(loose_region_match(a, "hello", Some(0), Some(11)));
    }

    #[test]
    fn test_region_bounds_clamp_and_swap() {
        assert!(region_match("hello", "hello", Some(2), Some(100)));
        assert!(region_match(
            StringRegion::between("abcdef", 4, 1),
            StringRegion::between("xbcd", 1, 4),
            None,
            None
        ));
        assert!(region_match("héllo", "xéllo", Some(1), None));
    }

    #[test]
    fn test_region_match_empty() {
        assert!(region_match("", "", None, None));
        assert!(!region_match("", "hello", None, None));
    }

    #[test]
    fn test_loose_region_match() {
        assert!(loose_region_match("Hello", "heLLo", None, None));

        let a = StringRegion::between("hellO world", 0, 5);
        let b = StringRegion::between("Hello there", 0, 5);
        assert!(loose_region_match(a, b, None, None));

        let a = StringRegion::between("hello worlD", 6, 11);
        let b = StringRegion::between("hello thERE", 6, 11);
        assert!(!loose_region_match(a, b, None, None));

        let a = StringRegion::between(" hellO world", 1, 6);
        let b = StringRegion::between("HelLo there", 0, 5);
        assert!(loose_region_match(a, b, None, None));

        assert!(loose_region_match("", "", None, None));
        assert!(!loose_region_match("", "heLLo", None, None));
    }
}
