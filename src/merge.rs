/// What goes between merged parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator<'a> {
    Text(&'a str),
    Space,
    Empty,
}

impl<'a> Separator<'a> {
    pub fn as_str(self) -> &'a str {
        match self {
            Separator::Text(text) => text,
            Separator::Space => " ",
            Separator::Empty => "",
        }
    }
}

impl<'a> From<&'a str> for Separator<'a> {
    fn from(text: &'a str) -> Self {
        Separator::Text(text)
    }
}

/// `true` separates with a single space, `false` with nothing
impl From<bool> for Separator<'_> {
    fn from(spaced: bool) -> Self {
        if spaced {
            Separator::Space
        } else {
            Separator::Empty
        }
    }
}

/// Join `parts` with `separator`.
///
/// Empty parts are kept, so `merge("-", ["", "second", ""])` is `"-second-"`.
/// With no parts at all the separator itself is returned.
pub fn merge<'a, I>(separator: impl Into<Separator<'a>>, parts: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let separator = separator.into().as_str();
    let mut parts = parts.into_iter().peekable();

    if parts.peek().is_none() {
        return separator.to_string();
    }

    let mut merged = String::new();
    for (idx, part) in parts.enumerate() {
        if idx > 0 {
            merged.push_str(separator);
        }
        merged.push_str(part.as_ref());
    }
    merged
}

/// Variadic form of [`merge`]: `merge!(", ", "apple", "orange")`
#[macro_export]
macro_rules! merge {
    ($separator:expr, $($part:expr),+ $(,)?) => {
        $crate::merge::merge($separator, [$(::std::convert::AsRef::<str>::as_ref(&$part)),+])
    };
    ($separator:expr $(,)?) => {
        $crate::merge::merge($separator, ::std::iter::empty::<&str>())
    };
}
