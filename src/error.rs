use crate::units::Px;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum ColumnError {
    #[error("invalid parameter `{name}`: {value} ({reason})")]
    /// A layout parameter was out of range. No partial result is produced
    InvalidParameter {
        name: &'static str,
        value: Px,
        reason: &'static str,
    },

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}
