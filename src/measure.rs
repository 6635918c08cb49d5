//! Line measurements: the per-line geometry of text that has already been
//! wrapped at a fixed width.
//!
//! The column breaker only ever looks at text through [TextMeasurement], so any
//! text shaper can drive it. [WrappedText] is the concrete measurement produced
//! by the wrappers in [crate::wrap], and can also be built from metrics supplied
//! by an external shaper with [WrappedText::from_lines].

use std::ops::Range;

use crate::units::Px;

/// Per-line geometry of wrapped text.
///
/// Implementations must keep line tops and bottoms non-decreasing with the line
/// index, and line offsets non-decreasing and contiguous (the end of line `i`
/// is the start of line `i + 1`). Line indices passed in are always in
/// `0..line_count()`.
pub trait TextMeasurement {
    /// Number of wrapped lines
    fn line_count(&self) -> usize;

    /// The y-coordinate of the top of `line`
    fn line_top(&self, line: usize) -> Px;

    /// The y-coordinate of the bottom of `line`
    fn line_bottom(&self, line: usize) -> Px;

    /// Offset of the first character of `line` in the original text
    fn line_start(&self, line: usize) -> usize;

    /// Offset one past the last character of `line` in the original text
    fn line_end(&self, line: usize) -> usize;
}

impl<T: TextMeasurement + ?Sized> TextMeasurement for &T {
    fn line_count(&self) -> usize {
        (**self).line_count()
    }

    fn line_top(&self, line: usize) -> Px {
        (**self).line_top(line)
    }

    fn line_bottom(&self, line: usize) -> Px {
        (**self).line_bottom(line)
    }

    fn line_start(&self, line: usize) -> usize {
        (**self).line_start(line)
    }

    fn line_end(&self, line: usize) -> usize {
        (**self).line_end(line)
    }
}

/// The measured geometry of a single wrapped line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMetrics {
    pub top: Px,
    pub bottom: Px,
    /// Byte offset of the first character of the line
    pub start: usize,
    /// Byte offset one past the last character of the line, including any
    /// hanging whitespace or the terminating newline
    pub end: usize,
}

impl LineMetrics {
    pub fn height(&self) -> Px {
        self.bottom - self.top
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Text wrapped into lines at a fixed width
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WrappedText {
    lines: Vec<LineMetrics>,
}

impl WrappedText {
    /// Wrap pre-computed line metrics, such as those reported by an external
    /// text shaper. The metrics are trusted to uphold the [TextMeasurement]
    /// ordering rules.
    pub fn from_lines(lines: Vec<LineMetrics>) -> WrappedText {
        WrappedText { lines }
    }

    pub fn lines(&self) -> &[LineMetrics] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total height from the top of the first line to the bottom of the last
    pub fn height(&self) -> Px {
        match (self.lines.first(), self.lines.last()) {
            (Some(first), Some(last)) => last.bottom - first.top,
            _ => Px::ZERO,
        }
    }

    /// The span of the original text covered by these lines, if any
    pub fn text_range(&self) -> Option<Range<usize>> {
        let first = self.lines.first()?;
        let last = self.lines.last()?;
        Some(first.start..last.end)
    }

    pub(crate) fn push_line(&mut self, start: usize, end: usize, height: Px) {
        let top = self.lines.last().map(|l| l.bottom).unwrap_or_default();
        self.lines.push(LineMetrics {
            top,
            bottom: top + height,
            start,
            end,
        });
    }
}

impl TextMeasurement for WrappedText {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_top(&self, line: usize) -> Px {
        self.lines[line].top
    }

    fn line_bottom(&self, line: usize) -> Px {
        self.lines[line].bottom
    }

    fn line_start(&self, line: usize) -> usize {
        self.lines[line].start
    }

    fn line_end(&self, line: usize) -> usize {
        self.lines[line].end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_lines_stack_downward() {
        let mut text = WrappedText::default();
        text.push_line(0, 6, Px(20));
        text.push_line(6, 10, Px(150));
        text.push_line(10, 14, Px(20));

        assert_eq!(text.line_count(), 3);
        assert_eq!(text.line_top(1), Px(20));
        assert_eq!(text.line_bottom(1), Px(170));
        assert_eq!(text.lines()[1].height(), Px(150));
        assert_eq!(text.height(), Px(190));
        assert_eq!(text.text_range(), Some(0..14));
    }

    #[test]
    fn empty_measurement() {
        let text = WrappedText::default();
        assert!(text.is_empty());
        assert_eq!(text.height(), Px::ZERO);
        assert_eq!(text.text_range(), None);
    }

    #[test]
    fn measurement_through_reference_and_trait_object() {
        let text = WrappedText::from_lines(vec![LineMetrics {
            top: Px(5),
            bottom: Px(25),
            start: 0,
            end: 3,
        }]);
        fn count<M: TextMeasurement>(measurement: M) -> usize {
            measurement.line_count()
        }

        let dynamic: &dyn TextMeasurement = &text;
        assert_eq!(count(&text), 1);
        assert_eq!(count(dynamic), 1);
        assert_eq!(dynamic.line_end(0), 3);
        assert_eq!(text.height(), Px(20));
    }
}
