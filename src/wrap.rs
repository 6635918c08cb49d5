//! Line wrapping: turning a run of text into [WrappedText] at a fixed width.
//!
//! Both wrappers share the same greedy word-wrapping pass and only differ in
//! how they measure a character:
//!
//! - [MonospaceWrapper] measures characters in terminal-style cells
//! - [FontWrapper] measures characters with the horizontal advances of a [Font]
//!
//! Wrapping rules:
//!
//! 1. **Whitespace** is a break opportunity. Whitespace at the end of a line
//!    hangs past the width and belongs to the line it ends.
//! 2. **Long words** that do not fit on a line of their own are broken between
//!    characters, so every line holds at least one character.
//! 3. **`'\n'`** forces a break and belongs to the line it terminates.
//! 4. **Embedded objects** ([OBJECT_REPLACEMENT]) get a line of their own, as
//!    tall as the wrapper's object height, when one is configured.

use std::ops::Range;

use unicode_width::UnicodeWidthChar;

use crate::font::Font;
use crate::measure::WrappedText;
use crate::units::Px;

/// The object replacement character, standing in for an embedded object such
/// as an image
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

const TABSIZE: i32 = 4;

/// Wraps text into lines of a fixed pixel width
pub trait TextWrapper {
    /// Wrap the text between byte offsets `start` and `end`. Offsets in the
    /// returned measurement are relative to the whole of `text`. A range that is
    /// out of bounds or not on `char` boundaries wraps to no lines.
    fn wrap_range(&self, text: &str, start: usize, end: usize, width: Px) -> WrappedText;

    /// Wrap the whole of `text`
    fn wrap(&self, text: &str, width: Px) -> WrappedText {
        self.wrap_range(text, 0, text.len(), width)
    }
}

impl<T: TextWrapper + ?Sized> TextWrapper for &T {
    fn wrap_range(&self, text: &str, start: usize, end: usize, width: Px) -> WrappedText {
        (**self).wrap_range(text, start, end, width)
    }
}

/// Wraps text measured in character cells, where every cell is the same width.
/// Wide characters (such as CJK ideographs) take two cells, zero-width and
/// control characters take none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceWrapper {
    pub cell_width: Px,
    pub line_height: Px,
    /// Height of the line holding an embedded object, if objects get lines of
    /// their own
    pub object_height: Option<Px>,
}

impl Default for MonospaceWrapper {
    fn default() -> Self {
        MonospaceWrapper::new(Px(10), Px(20))
    }
}

impl MonospaceWrapper {
    pub fn new(cell_width: Px, line_height: Px) -> MonospaceWrapper {
        MonospaceWrapper {
            cell_width,
            line_height,
            object_height: None,
        }
    }

    /// Give every embedded object its own line of the given height
    pub fn with_object_height(mut self, height: Px) -> MonospaceWrapper {
        self.object_height = Some(height);
        self
    }

    fn advance(&self, ch: char) -> Px {
        if ch == '\t' {
            return self.cell_width * TABSIZE;
        }
        self.cell_width * ch.width().unwrap_or(0) as i32
    }
}

impl TextWrapper for MonospaceWrapper {
    fn wrap_range(&self, text: &str, start: usize, end: usize, width: Px) -> WrappedText {
        wrap_greedy(
            text,
            start..end,
            width,
            self.line_height,
            self.object_height,
            |ch| self.advance(ch),
        )
    }
}

/// Wraps text using the glyph advances of a font at a given size (in pixels per em)
#[derive(Debug)]
pub struct FontWrapper {
    pub font: Font,
    pub size: f32,
    pub object_height: Option<Px>,
}

impl FontWrapper {
    pub fn new(font: Font, size: f32) -> FontWrapper {
        FontWrapper {
            font,
            size,
            object_height: None,
        }
    }

    /// Give every embedded object its own line of the given height
    pub fn with_object_height(mut self, height: Px) -> FontWrapper {
        self.object_height = Some(height);
        self
    }

    /// The height of one line of text, rounded up to whole pixels
    pub fn line_height(&self) -> Px {
        Px::ceil(self.font.line_height(self.size))
    }

    fn advance(&self, ch: char) -> Px {
        if ch == '\t' {
            return Px::round(self.font.advance(' ', self.size) * TABSIZE as f32);
        }
        Px::round(self.font.advance(ch, self.size))
    }
}

impl TextWrapper for FontWrapper {
    fn wrap_range(&self, text: &str, start: usize, end: usize, width: Px) -> WrappedText {
        wrap_greedy(
            text,
            start..end,
            width,
            self.line_height(),
            self.object_height,
            |ch| self.advance(ch),
        )
    }
}

fn wrap_greedy(
    text: &str,
    range: Range<usize>,
    width: Px,
    line_height: Px,
    object_height: Option<Px>,
    advance: impl Fn(char) -> Px,
) -> WrappedText {
    let mut wrapped = WrappedText::default();
    let Some(slice) = text.get(range.clone()) else {
        log::debug!(
            "cannot wrap {range:?}: outside of the {} byte text or not on a char boundary",
            text.len()
        );
        return wrapped;
    };

    let mut line_start = range.start;
    let mut x = Px::ZERO;
    // offset just past the most recent whitespace on this line, and the pen
    // position at that point
    let mut last_break: Option<(usize, Px)> = None;

    for (i, ch) in slice.char_indices() {
        let at = range.start + i;
        let next = at + ch.len_utf8();

        if ch == '\n' {
            wrapped.push_line(line_start, next, line_height);
            line_start = next;
            x = Px::ZERO;
            last_break = None;
            continue;
        }

        if ch == OBJECT_REPLACEMENT {
            if let Some(height) = object_height {
                if at > line_start {
                    wrapped.push_line(line_start, at, line_height);
                }
                wrapped.push_line(at, next, height);
                line_start = next;
                x = Px::ZERO;
                last_break = None;
                continue;
            }
        }

        let hadv = advance(ch);
        if ch.is_whitespace() {
            x += hadv;
            last_break = Some((next, x));
            continue;
        }

        if x + hadv > width && at > line_start {
            // rewind to the last whitespace, keeping the word intact
            if let Some((offset, pen)) = last_break.take() {
                wrapped.push_line(line_start, offset, line_height);
                line_start = offset;
                x -= pen;
            }

            // the word alone is still too wide: split it here
            if x + hadv > width && at > line_start {
                wrapped.push_line(line_start, at, line_height);
                line_start = at;
                x = Px::ZERO;
            }
        }

        x += hadv;
    }

    if line_start < range.end {
        wrapped.push_line(line_start, range.end, line_height);
    }

    wrapped
}
