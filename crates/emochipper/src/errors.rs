//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from emochipper operations.
///
/// Every variant except [`EmoError::Segmentation`], [`EmoError::Io`], and
/// [`EmoError::Inference`] describes malformed or incomplete configuration;
/// see [`EmoError::is_config_error`].
#[derive(Debug, thiserror::Error)]
pub enum EmoError {
    /// A required special token is absent from the vocabulary.
    #[error("vocabulary is missing required special token {token:?}")]
    MissingSpecialToken {
        /// The missing token string.
        token: String,
    },

    /// Two vocabulary entries share an id.
    #[error("token id {id} is assigned to both {first:?} and {second:?}")]
    DuplicateTokenId {
        /// The shared id.
        id: u64,

        /// One entry holding the id.
        first: String,

        /// The other entry holding the id.
        second: String,
    },

    /// A token string is listed more than once.
    #[error("token {token:?} is listed more than once")]
    DuplicateToken {
        /// The repeated token string.
        token: String,
    },

    /// Token value out of range for the target type.
    #[error("token id {id} out of range for the token type")]
    TokenOutOfRange {
        /// The id that did not fit.
        id: u64,
    },

    /// A merge rule line was not a pair of tokens.
    #[error("malformed merge rule on line {line}: {text:?}")]
    MalformedMerge {
        /// The 1-based source line.
        line: usize,

        /// The offending text.
        text: String,
    },

    /// A merge pair was listed more than once.
    #[error("merge pair ({left:?}, {right:?}) listed more than once")]
    DuplicateMerge {
        /// Left side of the pair.
        left: String,

        /// Right side of the pair.
        right: String,
    },

    /// A label has no threshold.
    #[error("no threshold for label {label:?}")]
    MissingThreshold {
        /// The label lacking a threshold.
        label: String,
    },

    /// A threshold names a label that is not in the label set.
    #[error("threshold given for unknown label {label:?}")]
    UnexpectedThreshold {
        /// The unknown label.
        label: String,
    },

    /// A threshold is outside ``[0, 1]``.
    #[error("threshold {value} for label {label:?} is outside [0, 1]")]
    ThresholdOutOfRange {
        /// The label.
        label: String,

        /// The rejected value.
        value: f32,
    },

    /// A label name appears more than once.
    #[error("label {label:?} appears more than once")]
    DuplicateLabel {
        /// The repeated label.
        label: String,
    },

    /// The score vector does not line up with the label set.
    #[error("score count ({scores}) does not match label count ({labels})")]
    ScoreCountMismatch {
        /// Number of scores received.
        scores: usize,

        /// Number of labels configured.
        labels: usize,
    },

    /// An options struct holds an unusable value.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Other configuration data is inconsistent.
    #[error("{0}")]
    Config(String),

    /// JSON configuration could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A segmentation pattern failed to compile.
    #[error("regex error: {0}")]
    Regex(#[from] ErrorWrapper),

    /// Segmentation failed on a particular input,
    /// for instance by exceeding a regex backtrack limit.
    #[error("segmentation failed: {0}")]
    Segmentation(ErrorWrapper),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error from the external inference engine.
    #[error("inference failed: {0}")]
    Inference(String),
}

impl EmoError {
    /// Is this a configuration error?
    ///
    /// Configuration errors are deterministic given the same inputs;
    /// retrying without changing the configuration will fail the same way.
    pub fn is_config_error(&self) -> bool {
        !matches!(
            self,
            Self::Segmentation(_) | Self::Io(_) | Self::Inference(_)
        )
    }
}

/// Result type for emochipper operations.
pub type EmoResult<T> = core::result::Result<T, EmoError>;
