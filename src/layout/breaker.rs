use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::measure::TextMeasurement;
use crate::units::Px;
use crate::ColumnError;

/// The geometry that text is broken into columns against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnParams {
    /// Width of every column. Must be positive
    pub column_width: Px,
    /// Horizontal gap between neighbouring columns. Must not be negative
    pub spacing: Px,
    /// Width available for columns. Must not be negative
    pub viewport_width: Px,
    /// Height available for columns. Nothing fits when this is not positive
    pub viewport_height: Px,
}

impl Default for ColumnParams {
    fn default() -> Self {
        ColumnParams {
            column_width: Px(200),
            spacing: Px(20),
            viewport_width: Px::ZERO,
            viewport_height: Px::ZERO,
        }
    }
}

impl ColumnParams {
    pub fn new(column_width: Px, spacing: Px) -> ColumnParams {
        ColumnParams {
            column_width,
            spacing,
            ..Default::default()
        }
    }

    /// Set the size of the viewport the columns are laid out in
    pub fn with_viewport(mut self, width: Px, height: Px) -> ColumnParams {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn validate(&self) -> Result<(), ColumnError> {
        if !self.column_width.is_positive() {
            return Err(ColumnError::InvalidParameter {
                name: "column_width",
                value: self.column_width,
                reason: "must be positive",
            });
        }
        if self.spacing.is_negative() {
            return Err(ColumnError::InvalidParameter {
                name: "spacing",
                value: self.spacing,
                reason: "must not be negative",
            });
        }
        if self.viewport_width.is_negative() {
            return Err(ColumnError::InvalidParameter {
                name: "viewport_width",
                value: self.viewport_width,
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

/// The range of text shown in one column, as byte offsets into the full text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnSegment {
    pub start: usize,
    pub end: usize,
}

impl ColumnSegment {
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The columns a text was broken into
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakResult {
    /// Column ranges, left to right
    pub segments: Vec<ColumnSegment>,
    /// Offset of the first character that did not fit because the viewport ran
    /// out of columns. [None] when all the text was placed
    pub overflow_start: Option<usize>,
}

/// Breaks text that was wrapped at `params.column_width` into columns that fit the
/// viewport, filling columns top to bottom and left to right.
///
/// # Breaking Behavior
///
/// Each column starts at its start line and takes every following line whose
/// bottom lies less than the viewport height below the top of the start line.
/// The first column is always laid out; further columns are only added while
/// the width used so far is less than `viewport_width - spacing - column_width`.
///
/// The last line of a column is also the start line of the next column, so
/// neighbouring segments share that line's range.
///
/// When a column cannot grow past its start line, the start line is skipped and
/// the column restarts on the following line. A line taller than the viewport is
/// dropped this way and reported to `sink` as
/// [Diagnostic::OversizedLineSkipped]. Skipping a shared line that the previous
/// column already shows drops nothing and is not reported.
///
/// # Overflow
///
/// If the viewport runs out of columns before the last line is placed,
/// `overflow_start` is the end of the last segment.
///
/// # Errors
///
/// [ColumnError::InvalidParameter] if `column_width` is not positive, or
/// `spacing` or `viewport_width` are negative.
pub fn break_columns<M>(
    measurement: &M,
    params: &ColumnParams,
    sink: &mut dyn DiagnosticSink,
) -> Result<BreakResult, ColumnError>
where
    M: TextMeasurement + ?Sized,
{
    params.validate()?;

    let line_count = measurement.line_count();
    if line_count == 0 {
        return Ok(BreakResult::default());
    }
    if !params.viewport_height.is_positive() {
        log::debug!(
            "viewport height {} leaves no room for any line",
            params.viewport_height
        );
        return Ok(BreakResult {
            segments: Vec::new(),
            overflow_start: Some(0),
        });
    }

    let last_line = line_count - 1;
    let width_limit =
        params.viewport_width.wide() - params.spacing.wide() - params.column_width.wide();
    let height = params.viewport_height;

    let mut segments: Vec<ColumnSegment> = Vec::new();
    let mut overflow_start: Option<usize> = None;
    let mut used_width: i64 = 0;
    let mut start_line: usize = 0;
    // the line shared with the previous column, already placed there
    let mut carried: Option<usize> = None;

    'columns: loop {
        let mut start_top = measurement.line_top(start_line);
        let mut end_line = start_line;

        let mut i = start_line;
        while i < line_count {
            if measurement.line_bottom(i) - start_top < height {
                end_line = i;
            } else if end_line == start_line {
                if carried != Some(start_line) {
                    let diagnostic = Diagnostic::OversizedLineSkipped {
                        line: start_line,
                        start: measurement.line_start(start_line),
                        end: measurement.line_end(start_line),
                        height: measurement.line_bottom(start_line)
                            - measurement.line_top(start_line),
                    };
                    sink.report(&diagnostic);
                }

                start_line += 1;
                if start_line == line_count {
                    log::trace!("skipped past the last line, nothing left to place");
                    break 'columns;
                }
                start_top = measurement.line_top(start_line);
                end_line = start_line;
                // the new start line has not been measured yet
                i = start_line;
                continue;
            } else {
                break;
            }
            i += 1;
        }

        let segment = ColumnSegment {
            start: measurement.line_start(start_line),
            end: measurement.line_end(end_line),
        };
        log::trace!(
            "column {} holds lines {start_line}..={end_line} ({}..{})",
            segments.len(),
            segment.start,
            segment.end
        );
        segments.push(segment);

        if end_line == last_line {
            break;
        }

        used_width += params.column_width.wide();
        start_line = end_line;
        carried = Some(end_line);

        if used_width >= width_limit {
            overflow_start = Some(segment.end);
            break;
        }
    }

    log::debug!(
        "broke {line_count} lines into {} columns, overflow at {overflow_start:?}",
        segments.len()
    );

    Ok(BreakResult {
        segments,
        overflow_start,
    })
}
