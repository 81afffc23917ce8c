//! Layered error types

use thiserror::Error;

/// Preset configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Preset TOML failed to parse
    #[error("preset for '{language}' failed to parse: {message}")]
    Parse {
        /// Language code of the offending preset
        language: String,
        /// Parser diagnostic
        message: String,
    },

    /// Preset violated an invariant
    #[error("preset for '{language}' is invalid: {message}")]
    Validation {
        /// Language code of the offending preset
        language: String,
        /// The violated invariant
        message: String,
    },
}

/// Metadata decode errors
///
/// Only the clipping-type stage can fail; page/location and timestamp
/// decoding degrade to sentinel values instead. A decode failure is fatal to
/// that single record only; callers skip it and continue with the stream.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// No highlight/note/bookmark marker of any configured language matched
    #[error("cannot determine clipping type from metadata line: {line:?}")]
    UnknownClippingType {
        /// The raw metadata line that failed to decode
        line: String,
    },
}

/// Result type for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;
