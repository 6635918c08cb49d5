mod diagnostics;
pub use diagnostics::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Breaking wrapped text into columns, and flowing an owned text through them
pub mod layout;

mod measure;
pub use measure::*;

mod rect;
pub use rect::*;

mod units;
pub use units::*;

mod wrap;
pub use wrap::*;

/// Re-export the font parser, for inspecting the faces behind a [Font]
pub use owned_ttf_parser;
