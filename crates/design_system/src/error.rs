use thiserror::Error;

/// Errors raised when design-system values are parsed from untyped input.
///
/// Component props are closed enums, so none of these can occur on the typed rendering path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DesignSystemError {
    /// A style enum was parsed from a name outside its closed set.
    #[error("unknown {kind} `{value}` (expected one of: {expected})")]
    UnknownVariant {
        /// Enum being parsed, e.g. `button variant`.
        kind: &'static str,
        /// Rejected input.
        value: String,
        /// Comma-separated accepted names.
        expected: String,
    },
    /// A color shade outside the 50-950 scale.
    #[error("unknown color shade `{0}`")]
    UnknownShade(String),
    /// Class merge configuration could not be decoded.
    #[error("invalid class merge config: {0}")]
    InvalidMergeConfig(String),
}
