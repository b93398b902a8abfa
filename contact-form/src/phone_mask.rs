//! Fixed `+7 ___ ___-__-__` display mask for raw phone digits.
//!
//! The mask is a literal template, not a pattern engine: separators sit after
//! raw digit indices 2, 5 and 7, and unfilled slots keep their underscores.

pub const MASK: &str = "+7 ___ ___-__-__";
pub const PREFIX: &str = "+7 ";
pub const MAX_DIGITS: usize = 10;

const PREFIX_LEN: usize = 3;
const MASK_LEN: usize = 16;

fn separator_after(index: usize) -> Option<&'static str> {
    match index {
        2 => Some(" "),
        5 | 7 => Some("-"),
        _ => None,
    }
}

/// Render raw digits into the mask. Input longer than [`MAX_DIGITS`] is not
/// trimmed here; the editor is expected to cap it first.
pub fn format_mask(raw: &str) -> String {
    let mut masked = String::with_capacity(MASK.len());
    masked.push_str(PREFIX);

    for (index, digit) in raw.chars().enumerate() {
        masked.push(digit);
        if let Some(separator) = separator_after(index) {
            masked.push_str(separator);
        }
    }

    let filled = masked.chars().count();
    masked.extend(MASK.chars().skip(filled));
    masked
}

/// Cursor position in the masked text for a cursor at `offset` in the raw digits.
pub fn raw_offset_to_masked(offset: usize) -> usize {
    match offset {
        0 => PREFIX_LEN,
        1..=2 => offset + 3,
        3..=5 => offset + 4,
        6..=7 => offset + 5,
        8..=9 => offset + 6,
        _ => MASK_LEN,
    }
}

/// Cursor position in the raw digits for a cursor at `offset` in the masked
/// text: the number of digit slots before it. Anything past the filled
/// region lands at `raw_len`.
pub fn masked_offset_to_raw(offset: usize, raw_len: usize) -> usize {
    let raw = match offset {
        0..=3 => 0,
        4..=6 => offset - 3,
        7..=10 => offset - 4,
        11..=13 => offset - 5,
        14..=15 => offset - 6,
        _ => MAX_DIGITS,
    };
    raw.min(raw_len)
}

/// Masked view of what the user has typed so far, with offset translators
/// bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedPhone {
    pub text: String,
    pub raw_len: usize,
    /// Char index where the placeholder tail starts.
    pub placeholder_start: usize,
}

impl MaskedPhone {
    pub fn new(input: &str) -> Self {
        let trimmed: String = input.chars().take(MAX_DIGITS).collect();
        let raw_len = trimmed.chars().count();
        let text = format_mask(&trimmed);

        Self {
            text,
            raw_len,
            placeholder_start: filled_len(raw_len),
        }
    }

    pub fn raw_to_masked(&self, offset: usize) -> usize {
        raw_offset_to_masked(offset.min(self.raw_len))
    }

    pub fn masked_to_raw(&self, offset: usize) -> usize {
        masked_offset_to_raw(offset, self.raw_len)
    }

    pub fn placeholder(&self) -> &str {
        let start = self
            .text
            .char_indices()
            .nth(self.placeholder_start)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len());
        &self.text[start..]
    }
}

fn filled_len(raw_len: usize) -> usize {
    PREFIX_LEN + raw_len + (0..raw_len).filter(|i| separator_after(*i).is_some()).count()
}
