use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fill used by the `*_default` helpers
pub const DEFAULT_FILL: &str = " ";

/// Side that receives the extra fill char when bidirectional padding has to
/// split an odd amount of room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bias {
    Start,
    #[default]
    End,
}

impl TryFrom<u8> for Bias {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Bias::Start),
            1 => Ok(Bias::End),
            other => Err(Error::InvalidBias(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadOptions {
    /// How many times the fill is applied on each padded side
    pub repeat: usize,
    /// Upper bound on the result length, in chars
    pub max_len: Option<usize>,
    /// Only consulted by [`pad_bidirectional`] when `max_len` cuts the fill
    pub bias: Bias,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            repeat: 1,
            max_len: None,
            bias: Bias::End,
        }
    }
}

impl PadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_bias(mut self, bias: Bias) -> Self {
        self.bias = bias;
        self
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// How many fills fit before the padded length passes `max_len`. One fill may
// overshoot; the caller trims it.
fn fills_within(len: usize, fill_len: usize, repeat: usize, max_len: usize) -> usize {
    if fill_len == 0 {
        return 0;
    }
    let mut count = 0;
    let mut padded_len = len;
    while count < repeat && padded_len <= max_len {
        count += 1;
        padded_len += fill_len;
    }
    count
}

/// Prepend `fill` to `val`, `options.repeat` times.
///
/// With `max_len`, filling stops once the length passes it and the result is
/// cut back to `max_len` chars from the front. A `val` already at or past
/// `max_len` is returned as is.
pub fn pad_start(val: &str, fill: &str, options: &PadOptions) -> String {
    let len = char_len(val);
    match options.max_len {
        Some(max_len) if max_len <= len => val.to_string(),
        None => fill.repeat(options.repeat) + val,
        Some(max_len) => {
            let count = fills_within(len, char_len(fill), options.repeat, max_len);
            let padded = fill.repeat(count) + val;
            let overflow = char_len(&padded).saturating_sub(max_len);
            skip_chars(&padded, overflow).to_string()
        }
    }
}

/// Append `fill` to `val`, see [`pad_start`]
pub fn pad_end(val: &str, fill: &str, options: &PadOptions) -> String {
    let len = char_len(val);
    match options.max_len {
        Some(max_len) if max_len <= len => val.to_string(),
        None => val.to_string() + &fill.repeat(options.repeat),
        Some(max_len) => {
            let count = fills_within(len, char_len(fill), options.repeat, max_len);
            let padded = val.to_string() + &fill.repeat(count);
            take_chars(&padded, max_len).to_string()
        }
    }
}

/// Wrap `val` in `fill` on both sides, `options.repeat` times per side.
///
/// When `max_len` leaves less room than the full fill on both sides, the
/// room is split evenly: the start takes the tail of the repeated fill and
/// the end takes its head. An odd char goes to the side named by
/// `options.bias`.
pub fn pad_bidirectional(val: &str, fill: &str, options: &PadOptions) -> String {
    let len = char_len(val);

    if let Some(max_len) = options.max_len {
        if max_len <= len {
            return val.to_string();
        }

        let room = max_len - len;
        let fill_len = char_len(fill);
        let pad_len = fill_len.saturating_mul(options.repeat);
        if room < pad_len.saturating_mul(2) {
            let half = room / 2;
            let (front, back) = match (room % 2, options.bias) {
                (0, _) => (half, half),
                (_, Bias::Start) => (half + 1, half),
                (_, Bias::End) => (half, half + 1),
            };
            // The repeated fill ends on a whole fill, so its last `front`
            // chars start `front % fill_len` chars before a fill boundary.
            let offset = (fill_len - front % fill_len) % fill_len;
            let mut padded = String::new();
            padded.extend(fill.chars().cycle().skip(offset).take(front));
            padded.push_str(val);
            padded.extend(fill.chars().cycle().take(back));
            return padded;
        }
    }

    let pad = fill.repeat(options.repeat);
    format!("{}{}{}", pad, val, pad)
}

pub fn pad_start_default(val: &str) -> String {
    pad_start(val, DEFAULT_FILL, &PadOptions::default())
}

pub fn pad_end_default(val: &str) -> String {
    pad_end(val, DEFAULT_FILL, &PadOptions::default())
}

pub fn pad_bidirectional_default(val: &str) -> String {
    pad_bidirectional(val, DEFAULT_FILL, &PadOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_start() {
        let three = PadOptions::new().with_repeat(3);
        assert_eq!(pad_start("hello", "abc", &three), "abcabcabchello");
        assert_eq!(pad_start("example", "*", &three), "***example");
        assert_eq!(
            pad_start("", "---", &PadOptions::new().with_repeat(2)),
            "------"
        );
    }

    #[test]
    fn test_pad_start_with_max_len() {
        let padded = pad_start("world", DEFAULT_FILL, &PadOptions::new().with_max_len(10));
        assert_eq!(padded, " world");

        let options = PadOptions::new().with_repeat(2).with_max_len(4);
        assert_eq!(pad_start("test", "123", &options), "test");

        let options = PadOptions::new().with_max_len(10);
        assert_eq!(pad_start("abc", "*", &options), "*abc");

        let options = PadOptions::new().with_repeat(5).with_max_len(15);
        let padded = pad_start("overflow", "xyz", &options);
        assert_eq!(padded, "zxyzxyzoverflow");
        assert_eq!(padded.len(), 15);
    }

    #[test]
    fn test_pad_start_defaults() {
        assert_eq!(pad_start_default(""), " ");
        assert_eq!(pad_start_default("test"), " test");
    }

    #[test]
    fn test_pad_end() {
        let three = PadOptions::new().with_repeat(3);
        assert_eq!(pad_end("hello", "abc", &three), "helloabcabcabc");
        assert_eq!(pad_end("example", "*", &three), "example***");
        assert_eq!(pad_end("", "---", &PadOptions::new().with_repeat(2)), "------");
    }

    #[test]
    fn test_pad_end_with_max_len() {
        let padded = pad_end("world", DEFAULT_FILL, &PadOptions::new().with_max_len(10));
        assert_eq!(padded, "world ");

        let options = PadOptions::new().with_repeat(2).with_max_len(4);
        assert_eq!(pad_end("test", "123", &options), "test");

        let options = PadOptions::new().with_max_len(10);
        assert_eq!(pad_end("abc", "*", &options), "abc*");

        let options = PadOptions::new().with_repeat(5).with_max_len(15);
        let padded = pad_end("overflow", "xyz", &options);
        assert_eq!(padded, "overflowxyzxyzx");
        assert_eq!(padded.len(), 15);
    }

    #[test]
    fn test_pad_end_defaults() {
        assert_eq!(pad_end_default(""), " ");
        assert_eq!(pad_end_default("test"), "test ");
    }

    #[test]
    fn test_empty_fill_with_max_len() {
        let options = PadOptions::new().with_repeat(usize::MAX).with_max_len(10);
        assert_eq!(pad_start("abc", "", &options), "abc");
        assert_eq!(pad_end("abc", "", &options), "abc");
        assert_eq!(pad_bidirectional("abc", "", &options), "abc");
    }

    #[test]
    fn test_pad_bidirectional_unbounded_repeat_with_max_len() {
        let options = PadOptions::new().with_repeat(usize::MAX).with_max_len(7);
        assert_eq!(pad_start("abc", "*", &options), "****abc");
        assert_eq!(pad_bidirectional("abc", "*", &options), "**abc**");

        let options = options.with_max_len(8).with_bias(Bias::Start);
        assert_eq!(pad_bidirectional("abc", "*", &options), "***abc**");

        let options = options.with_max_len(12);
        assert_eq!(pad_bidirectional("test", "abc", &options), "cabctestabca");
    }

    #[test]
    fn test_pad_bidirectional() {
        assert_eq!(pad_bidirectional_default("hello"), " hello ");
        assert_eq!(
            pad_bidirectional("world", "*", &PadOptions::new().with_repeat(3)),
            "***world***"
        );
        assert_eq!(pad_bidirectional_default(""), "  ");
        assert_eq!(
            pad_bidirectional("", "-", &PadOptions::new().with_repeat(2)),
            "----"
        );
    }

    #[test]
    fn test_pad_bidirectional_bias() {
        let options = PadOptions::new().with_repeat(2).with_max_len(10);
        assert_eq!(
            pad_bidirectional("example", "*", &options.with_bias(Bias::Start)),
            "**example*"
        );
        assert_eq!(
            pad_bidirectional("example", "*", &options.with_bias(Bias::End)),
            "*example**"
        );
    }

    #[test]
    fn test_pad_bidirectional_with_max_len() {
        let options = PadOptions::new().with_repeat(2).with_max_len(10);
        assert_eq!(pad_bidirectional("test", "-", &options), "--test--");

        // Room for the full fill on both sides, bias is irrelevant
        let options = PadOptions::new().with_repeat(3).with_max_len(10);
        assert_eq!(
            pad_bidirectional("test", "*", &options.with_bias(Bias::Start)),
            "***test***"
        );
        assert_eq!(
            pad_bidirectional("test", "*", &options.with_bias(Bias::End)),
            "***test***"
        );

        let options = PadOptions::new().with_repeat(3).with_bias(Bias::Start);
        assert_eq!(
            pad_bidirectional("test", "abc", &options.with_max_len(11)),
            "cabctestabc"
        );
        assert_eq!(
            pad_bidirectional("test", "abc", &options.with_max_len(12)),
            "cabctestabca"
        );
        assert_eq!(
            pad_bidirectional("test", "abc", &options.with_max_len(4)),
            "test"
        );
    }

    #[test]
    fn test_bias_from_number() {
        assert_eq!(Bias::try_from(0).unwrap(), Bias::Start);
        assert_eq!(Bias::try_from(1).unwrap(), Bias::End);
        assert_eq!(Bias::try_from(2), Err(Error::InvalidBias(2)));
    }
}
