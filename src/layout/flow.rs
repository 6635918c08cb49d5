use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::layout::{break_columns, BreakResult, ColumnParams, ColumnSegment, Padding};
use crate::measure::WrappedText;
use crate::rect::Rect;
use crate::units::Px;
use crate::wrap::TextWrapper;
use crate::ColumnError;

/// One laid out column, ready to be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The range of the text shown in this column
    pub segment: ColumnSegment,
    /// Where the column sits in the viewport
    pub bounds: Rect,
    /// The column's text, wrapped on its own so that the first line starts at
    /// the top of `bounds`
    pub lines: WrappedText,
}

/// The cached result of flowing a [ColumnFlow]'s text into columns
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlowLayout {
    pub result: BreakResult,
    pub columns: Vec<Column>,
}

/// A text flowed into side-by-side columns inside a padded viewport.
///
/// Changing the text or any parameter only marks the layout as stale; the
/// columns are recomputed the next time they are read through
/// [ColumnFlow::layout] (or [ColumnFlow::overflow]). A recompute either replaces
/// the whole cached layout or, on error, leaves it stale.
pub struct ColumnFlow<W> {
    wrapper: W,
    sink: Box<dyn DiagnosticSink>,
    text: String,
    column_width: Px,
    spacing: Px,
    padding: Padding,
    width: Px,
    height: Px,
    layout: Option<FlowLayout>,
}

impl<W: TextWrapper> ColumnFlow<W> {
    /// Create an empty flow with 200px columns spaced 20px apart. Diagnostics are
    /// logged until another sink is given with [ColumnFlow::with_diagnostics]
    pub fn new(wrapper: W) -> ColumnFlow<W> {
        let defaults = ColumnParams::default();
        ColumnFlow {
            wrapper,
            sink: Box::new(LogSink),
            text: String::new(),
            column_width: defaults.column_width,
            spacing: defaults.spacing,
            padding: Padding::empty(),
            width: Px::ZERO,
            height: Px::ZERO,
            layout: None,
        }
    }

    /// Send diagnostics raised while laying out columns to `sink`
    pub fn with_diagnostics<S: DiagnosticSink + 'static>(mut self, sink: S) -> ColumnFlow<W> {
        self.sink = Box::new(sink);
        self
    }

    pub fn wrapper(&self) -> &W {
        &self.wrapper
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        self.invalidate();
    }

    pub fn column_width(&self) -> Px {
        self.column_width
    }

    pub fn set_column_width(&mut self, width: Px) {
        self.column_width = width;
        self.invalidate();
    }

    /// The horizontal space between columns
    pub fn spacing(&self) -> Px {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: Px) {
        self.spacing = spacing;
        self.invalidate();
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
        self.invalidate();
    }

    /// The full size of the viewport, padding included
    pub fn size(&self) -> (Px, Px) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: Px, height: Px) {
        self.width = width;
        self.height = height;
        self.invalidate();
    }

    /// Mark the layout as stale, for changes the flow cannot see (such as a
    /// different font in the wrapper)
    pub fn invalidate(&mut self) {
        self.layout = None;
    }

    pub fn is_layout_needed(&self) -> bool {
        self.layout.is_none()
    }

    /// The column parameters for the current size and padding
    pub fn params(&self) -> ColumnParams {
        ColumnParams {
            column_width: self.column_width,
            spacing: self.spacing,
            viewport_width: (self.width - self.padding.horizontal()).max(Px::ZERO),
            viewport_height: self.height - self.padding.vertical(),
        }
    }

    /// The columns, recomputed first if anything changed since the last read
    pub fn layout(&mut self) -> Result<&FlowLayout, ColumnError> {
        let layout = match self.layout.take() {
            Some(layout) => layout,
            None => self.create_layout()?,
        };
        Ok(&*self.layout.insert(layout))
    }

    /// Offset of the first character that did not fit, if any
    pub fn overflow_begin(&mut self) -> Result<Option<usize>, ColumnError> {
        Ok(self.layout()?.result.overflow_start)
    }

    /// The text that did not fit in the viewport. A lone final character is not
    /// reported as overflow
    pub fn overflow(&mut self) -> Result<&str, ColumnError> {
        match self.overflow_begin()? {
            Some(start) if start + 1 < self.text.len() => {
                Ok(self.text.get(start..).unwrap_or_default())
            }
            _ => Ok(""),
        }
    }

    fn create_layout(&mut self) -> Result<FlowLayout, ColumnError> {
        let params = self.params();
        params.validate()?;

        log::debug!(
            "laying out {} bytes of text in {}x{} ({} columns, {} apart)",
            self.text.len(),
            params.viewport_width,
            params.viewport_height,
            params.column_width,
            params.spacing
        );

        let master = self.wrapper.wrap(&self.text, params.column_width);
        let result = break_columns(&master, &params, &mut *self.sink)?;

        let column_height = params.viewport_height.max(Px::ZERO);
        let columns = result
            .segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                let x = self.padding.left + (params.column_width + params.spacing) * i as i32;
                Column {
                    segment: *segment,
                    bounds: Rect::from_origin(
                        x,
                        self.padding.top,
                        params.column_width,
                        column_height,
                    ),
                    lines: self.wrapper.wrap_range(
                        &self.text,
                        segment.start,
                        segment.end,
                        params.column_width,
                    ),
                }
            })
            .collect();

        Ok(FlowLayout { result, columns })
    }
}
