//! Breaking wrapped text into columns.
//!
//! Text is wrapped once at the column width. Because every column has the same
//! width, the one wrapped measurement is then sliced vertically into
//! column-sized runs of lines, which are placed left to right until the
//! viewport runs out of width. Text that does not fit is reported as overflow,
//! to be continued elsewhere (on the next screen, page, or view).
//!
//! There are two ways in:
//!
//! - [`break_columns`](crate::layout::break_columns) - the stateless breaker,
//!   for callers that measure text themselves
//! - [`ColumnFlow`](crate::layout::ColumnFlow) - an owned text and set of
//!   parameters, with the column layout cached until something changes
//!
//! # Example
//!
//! ```
//! use column_flow::{MonospaceWrapper, NullSink, Px, TextWrapper};
//! use column_flow::layout::{break_columns, ColumnParams};
//!
//! let text = "one\ntwo\nthree\nfour\nfive\nsix";
//! let wrapped = MonospaceWrapper::new(Px(10), Px(20)).wrap(text, Px(100));
//!
//! let params = ColumnParams::new(Px(100), Px(20)).with_viewport(Px(240), Px(70));
//! let result = break_columns(&wrapped, &params, &mut NullSink).expect("valid parameters");
//!
//! assert_eq!(result.segments.len(), 2);
//! assert_eq!(&text[result.segments[0].range()], "one\ntwo\nthree\n");
//! assert_eq!(result.overflow_start, Some(24));
//! assert_eq!(&text[24..], "six");
//! ```

mod breaker;
mod flow;
mod padding;

pub use breaker::*;
pub use flow::*;
pub use padding::*;
